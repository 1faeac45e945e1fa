//! Request correlation
//!
//! Every inbound request (one CLI invocation, one form submission) gets a
//! `RequestId`, and every log line it produces is emitted inside the span
//! returned by [`RequestContext::span`].

use serde::{Deserialize, Serialize};
use std::fmt;
use uuid::Uuid;

/// Time-ordered (UUIDv7) identifier of one request
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct RequestId(Uuid);

impl RequestId {
    pub fn generate() -> Self {
        Self(Uuid::now_v7())
    }

    pub fn as_uuid(&self) -> &Uuid {
        &self.0
    }
}

impl Default for RequestId {
    fn default() -> Self {
        Self::generate()
    }
}

impl fmt::Display for RequestId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.0.as_hyphenated().fmt(f)
    }
}

/// Correlation data for one request
#[derive(Debug, Clone, Default)]
pub struct RequestContext {
    pub request_id: RequestId,
    /// Entry point handling the request (`create`, `view`, ...)
    pub route: Option<&'static str>,
}

impl RequestContext {
    /// Fresh context with a newly generated id
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_route(self, route: &'static str) -> Self {
        Self {
            route: Some(route),
            ..self
        }
    }

    pub fn span(&self) -> tracing::Span {
        tracing::info_span!(
            "request",
            { crate::schema::FIELD_REQUEST_ID } = %self.request_id,
            route = self.route.unwrap_or("-"),
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_ids_are_unique_v7() {
        let first = RequestId::generate();
        let second = RequestId::generate();

        assert_ne!(first, second);
        assert_eq!(first.as_uuid().get_version_num(), 7);
    }

    #[test]
    fn test_display_is_hyphenated() {
        let id = RequestId::generate();
        assert_eq!(id.to_string(), id.as_uuid().as_hyphenated().to_string());
    }

    #[test]
    fn test_context_route() {
        let ctx = RequestContext::new().with_route("latest");
        assert_eq!(ctx.route, Some("latest"));
        assert!(RequestContext::new().route.is_none());
    }

    #[test]
    fn test_serializes_as_plain_string() {
        let id = RequestId::generate();
        let json = serde_json::to_value(id).unwrap();
        assert_eq!(json, serde_json::Value::String(id.to_string()));
    }
}
