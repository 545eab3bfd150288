//! Status value object.

use serde::{Deserialize, Serialize};

/// Immutable snapshot of a setting's dynamic characteristics: the
/// human-readable summary and whether the setting is currently active.
///
/// A fresh value is produced by the provider on every request; the handler
/// owns it for the duration of one request and never caches it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Status {
    summary: String,
    enabled: bool,
}

impl Status {
    /// Create a status snapshot.
    pub fn new(summary: impl Into<String>, enabled: bool) -> Self {
        Self {
            summary: summary.into(),
            enabled,
        }
    }

    /// Human-readable description of the current state.
    pub fn summary(&self) -> &str {
        &self.summary
    }

    /// Whether the underlying setting is currently active.
    pub fn enabled(&self) -> bool {
        self.enabled
    }
}
