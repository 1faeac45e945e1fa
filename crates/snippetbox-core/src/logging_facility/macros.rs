//! Operation logging macros
//!
//! Every store operation emits a `start` event, then exactly one of `end`
//! or `end_error`. All three share the `component` / `op` / `event` prefix
//! so a log query on `op` sees the whole lifecycle. Field names come from
//! [`schema`](crate::schema); call sites need `tracing` as a dependency.

#[doc(hidden)]
#[macro_export]
macro_rules! __op_event {
    ($level:expr, $op:expr, $event:expr $(, $($field:tt)*)?) => {
        tracing::event!(
            target: module_path!(),
            $level,
            {
                { $crate::schema::FIELD_COMPONENT } = module_path!(),
                { $crate::schema::FIELD_OP } = $op,
                { $crate::schema::FIELD_EVENT } = $event,
                $($($field)*)?
            }
        )
    };
}

/// `start` event at INFO
///
/// Extra fields may use literal names or `{ CONST }` names.
///
/// ```
/// # use snippetbox_core::log_op_start;
/// # use snippetbox_core::schema::FIELD_SNIPPET_ID;
/// log_op_start!("snippet_get");
/// log_op_start!("snippet_get", { FIELD_SNIPPET_ID } = 7);
/// ```
#[macro_export]
macro_rules! log_op_start {
    ($op:expr $(, $($field:tt)*)?) => {
        $crate::__op_event!(
            tracing::Level::INFO,
            $op,
            $crate::schema::EVENT_START
            $(, $($field)*)?
        )
    };
}

/// `end` event at INFO; `duration_ms` is required
///
/// ```
/// # use snippetbox_core::log_op_end;
/// # use snippetbox_core::schema::FIELD_SNIPPET_COUNT;
/// log_op_end!("snippet_latest", duration_ms = 3, { FIELD_SNIPPET_COUNT } = 10_u64);
/// ```
#[macro_export]
macro_rules! log_op_end {
    ($op:expr, duration_ms = $duration:expr $(, $($field:tt)*)?) => {
        $crate::__op_event!(
            tracing::Level::INFO,
            $op,
            $crate::schema::EVENT_END,
            { $crate::schema::FIELD_DURATION_MS } = $duration
            $(, $($field)*)?
        )
    };
}

/// `end_error` event at ERROR for a [`SnippetError`](crate::SnippetError)
///
/// Adds `err_kind`, `err_code` and the rendered error. The cause chain is
/// only ever written here, never shown to end users.
///
/// ```
/// # use snippetbox_core::{log_op_error, SnippetError};
/// let err = SnippetError::storage("snippet_insert", "database is locked");
/// log_op_error!("snippet_insert", err, duration_ms = 5000);
/// ```
#[macro_export]
macro_rules! log_op_error {
    ($op:expr, $err:expr, duration_ms = $duration:expr $(, $($field:tt)*)?) => {{
        let err: &$crate::errors::SnippetError = &$err;
        $crate::__op_event!(
            tracing::Level::ERROR,
            $op,
            $crate::schema::EVENT_END_ERROR,
            { $crate::schema::FIELD_DURATION_MS } = $duration,
            { $crate::schema::FIELD_ERR_KIND } = ?err.kind(),
            { $crate::schema::FIELD_ERR_CODE } = err.code(),
            error = %err
            $(, $($field)*)?
        )
    }};
}
