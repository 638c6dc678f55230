//! Request identity types.
//!
//! Every project request handed to the orchestrator, and every JSON output
//! envelope, carries a request ID so logs and outputs can be correlated.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Request ID for a single CLI invocation.
///
/// Format: `req-<date>-<time>-<random>`
/// Example: `req-20260115-143022-abc123`
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct RequestId(pub String);

impl RequestId {
    /// Generate a new request ID.
    pub fn new() -> Self {
        let now = chrono::Utc::now();
        let random: String = uuid::Uuid::new_v4()
            .simple()
            .to_string()
            .chars()
            .take(6)
            .collect();
        RequestId(format!("req-{}-{}", now.format("%Y%m%d-%H%M%S"), random))
    }

    /// Parse an existing request ID string.
    pub fn parse(s: &str) -> Option<Self> {
        if s.starts_with("req-") && s.len() >= 26 {
            Some(RequestId(s.to_string()))
        } else {
            None
        }
    }
}

impl Default for RequestId {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Display for RequestId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}
