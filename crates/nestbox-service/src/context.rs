//! Request context carrying the caller's identity.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Context for the current request.
///
/// Extracted at the HTTP boundary and passed into service methods so
/// that every operation knows *who* is acting. The caller id is the
/// external identity subject; internal endpoints trust it as-is, with
/// no session verification beyond the login endpoint.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RequestContext {
    /// The caller's user ID.
    pub user_id: String,
    /// When the request was received.
    pub request_time: DateTime<Utc>,
}

impl RequestContext {
    /// Creates a new request context.
    pub fn new(user_id: impl Into<String>) -> Self {
        Self {
            user_id: user_id.into(),
            request_time: Utc::now(),
        }
    }
}
