//! Route gate: first stop for every inbound path.

use axum::http::{header::HeaderName, HeaderValue, StatusCode};
use axum::response::{IntoResponse, Response};
use std::sync::Arc;

use crate::routing::ReservedPaths;

/// Header telling crawlers not to index a response.
pub const ROBOTS_TAG_HEADER: &str = "x-robots-tag";
pub const NOINDEX_NOFOLLOW: &str = "noindex, nofollow";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GateDecision {
    Blocked,
    NotBlocked,
}

/// Blocks reserved paths before any locale handling or rendering.
#[derive(Debug, Clone)]
pub struct RouteGate {
    reserved: Arc<ReservedPaths>,
}

impl RouteGate {
    pub fn new(reserved: Arc<ReservedPaths>) -> Self {
        Self { reserved }
    }

    /// Decide whether a request path is blocked. Only the path is examined;
    /// callers pass `uri.path()`, never the query string.
    pub fn check(&self, path: &str) -> GateDecision {
        if self.reserved.matches(path) {
            GateDecision::Blocked
        } else {
            GateDecision::NotBlocked
        }
    }

    pub fn reserved(&self) -> &ReservedPaths {
        &self.reserved
    }
}

/// The response for a blocked path: 404 with a crawler-exclusion header.
pub fn blocked_response() -> Response {
    (
        StatusCode::NOT_FOUND,
        [(
            HeaderName::from_static(ROBOTS_TAG_HEADER),
            HeaderValue::from_static(NOINDEX_NOFOLLOW),
        )],
        "Not Found",
    )
        .into_response()
}
