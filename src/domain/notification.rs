use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// How a notification should be presented
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Severity {
    Success,
    Info,
    Error,
}

impl std::fmt::Display for Severity {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Severity::Success => write!(f, "success"),
            Severity::Info => write!(f, "info"),
            Severity::Error => write!(f, "error"),
        }
    }
}

/// A transient, user-dismissible message about the outcome of an operation
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Notification {
    /// When this notification was raised
    pub timestamp: DateTime<Utc>,

    pub severity: Severity,

    /// Short summary (e.g., "Error")
    pub summary: String,

    /// Full message shown under the summary
    pub detail: String,
}

impl Notification {
    pub fn new(severity: Severity, summary: impl Into<String>, detail: impl Into<String>) -> Self {
        Self {
            timestamp: Utc::now(),
            severity,
            summary: summary.into(),
            detail: detail.into(),
        }
    }

    pub fn success(detail: impl Into<String>) -> Self {
        Self::new(Severity::Success, "Success", detail)
    }

    pub fn info(detail: impl Into<String>) -> Self {
        Self::new(Severity::Info, "Info", detail)
    }

    pub fn error(detail: impl Into<String>) -> Self {
        Self::new(Severity::Error, "Error", detail)
    }

    pub fn is_error(&self) -> bool {
        self.severity == Severity::Error
    }
}

impl std::fmt::Display for Notification {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "[{}] {}: {}", self.severity, self.summary, self.detail)
    }
}
