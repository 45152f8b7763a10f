//! HTTP-like response shapes produced by the lookup service.
//!
//! The crate does not run an HTTP server; the hosting environment routes
//! requests to [`LookupService::handle`](crate::service::LookupService::handle)
//! and writes the returned status/headers/body however it likes. Every
//! response carries the permissive CORS header set.

use serde_json::{Value, json};

/// Permissive cross-origin headers attached to every response.
pub const CORS_HEADERS: [(&str, &str); 3] = [
    ("Access-Control-Allow-Origin", "*"),
    ("Access-Control-Allow-Headers", "Content-Type"),
    ("Access-Control-Allow-Methods", "GET,OPTIONS"),
];

/// An HTTP-like response: status code, headers, JSON body.
#[derive(Debug, Clone, PartialEq)]
pub struct ApiResponse {
    pub status: u16,
    pub headers: Vec<(&'static str, &'static str)>,
    pub body: Value,
}

impl ApiResponse {
    /// 200 response for an item resolved from the cache or the store.
    pub fn found(item: Value) -> Self {
        Self::ok(true, item)
    }

    /// 200 response for a freshly generated and persisted item.
    pub fn generated(item: Value) -> Self {
        Self::ok(false, item)
    }

    fn ok(found: bool, item: Value) -> Self {
        Self {
            status: 200,
            headers: CORS_HEADERS.to_vec(),
            body: json!({ "found": found, "item": item }),
        }
    }

    /// Error response with an `{error}` body.
    pub fn error(status: u16, message: &str) -> Self {
        Self {
            status,
            headers: CORS_HEADERS.to_vec(),
            body: json!({ "error": message }),
        }
    }

    /// Look up a response header by name (case-sensitive).
    pub fn header(&self, name: &str) -> Option<&str> {
        self.headers
            .iter()
            .find(|(n, _)| *n == name)
            .map(|(_, v)| *v)
    }
}
