//! Canonical schema constants for structured logging

// Field keys
pub const FIELD_COMPONENT: &str = "component";
pub const FIELD_OP: &str = "op";
pub const FIELD_EVENT: &str = "event";
pub const FIELD_DURATION_MS: &str = "duration_ms";
pub const FIELD_REQUEST_ID: &str = "request_id";

// Entity identifiers
pub const FIELD_SNIPPET_ID: &str = "snippet_id";

// Collection sizes
pub const FIELD_SNIPPET_COUNT: &str = "snippet_count";

// Error fields
pub const FIELD_ERR_KIND: &str = "err_kind";
pub const FIELD_ERR_CODE: &str = "err_code";

// Event names
pub const EVENT_START: &str = "start";
pub const EVENT_END: &str = "end";
pub const EVENT_END_ERROR: &str = "end_error";

// Store operation names
pub const OP_SNIPPET_INSERT: &str = "snippet_insert";
pub const OP_SNIPPET_GET: &str = "snippet_get";
pub const OP_SNIPPET_LATEST: &str = "snippet_latest";
pub const OP_MIGRATE: &str = "migrate";

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_event_names_distinct() {
        assert_ne!(EVENT_START, EVENT_END);
        assert_ne!(EVENT_START, EVENT_END_ERROR);
        assert_ne!(EVENT_END, EVENT_END_ERROR);
    }

    #[test]
    fn test_op_names_distinct() {
        let ops = [OP_SNIPPET_INSERT, OP_SNIPPET_GET, OP_SNIPPET_LATEST, OP_MIGRATE];
        for (i, a) in ops.iter().enumerate() {
            for b in &ops[i + 1..] {
                assert_ne!(a, b);
            }
        }
    }
}
