use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Severity {
    Warning,
    Critical,
}

/// Alert raised when a snapshot breaks a clinical threshold rule.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AlertRecord {
    pub severity: Severity,
    pub message: String,
    pub timestamp: DateTime<Utc>,
}

impl AlertRecord {
    pub fn new(severity: Severity, message: impl Into<String>, timestamp: DateTime<Utc>) -> Self {
        Self {
            severity,
            message: message.into(),
            timestamp,
        }
    }

    pub fn is_critical(&self) -> bool {
        self.severity == Severity::Critical
    }
}
