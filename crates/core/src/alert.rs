//! Health alert types surfaced on the patient record.

use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::types::Timestamp;

/// Severity of a health alert.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum AlertKind {
    /// Requires immediate clinical attention.
    Critical,
    /// Outside the normal band but not an emergency.
    Warning,
    /// Informational only.
    Info,
}

/// A single alert attached to a patient.
///
/// Alerts are prepended to the patient's list (newest first) and are never
/// removed, only acknowledged.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct HealthAlert {
    /// Unique alert id.
    pub id: String,
    /// Severity level.
    #[serde(rename = "type")]
    pub kind: AlertKind,
    /// Human-readable description.
    pub message: String,
    /// When the alert was raised (UTC).
    pub timestamp: Timestamp,
    /// Whether a clinician has acknowledged the alert.
    pub acknowledged: bool,
}

impl HealthAlert {
    /// Create a new, unacknowledged alert stamped with the current time.
    pub fn new(kind: AlertKind, message: impl Into<String>) -> Self {
        Self {
            id: Uuid::new_v4().to_string(),
            kind,
            message: message.into(),
            timestamp: chrono::Utc::now(),
            acknowledged: false,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn new_alert_is_unacknowledged_with_unique_id() {
        let a = HealthAlert::new(AlertKind::Warning, "slightly elevated");
        let b = HealthAlert::new(AlertKind::Warning, "slightly elevated");
        assert!(!a.acknowledged);
        assert_ne!(a.id, b.id);
    }

    #[test]
    fn kind_serializes_lowercase() {
        let a = HealthAlert::new(AlertKind::Critical, "m");
        let json = serde_json::to_value(&a).unwrap();
        assert_eq!(json["type"], "critical");
    }
}
