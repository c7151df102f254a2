//! Patient record and medication schedule types.

use serde::{Deserialize, Serialize};

use crate::alert::HealthAlert;
use crate::types::Timestamp;
use crate::vitals::VitalSigns;

/// A scheduled medication.
///
/// Static in the current scope — doses are not rescheduled automatically.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Medication {
    pub id: String,
    pub name: String,
    /// Free-text dosage, e.g. `"10mg"`.
    pub dosage: String,
    /// Free-text schedule, e.g. `"Once daily"`.
    pub frequency: String,
    /// When the next dose is due (UTC).
    pub next_dose: Timestamp,
}

/// The authoritative in-memory patient record.
///
/// Exactly one patient exists per store instance. That is a scope
/// simplification, not an architectural constraint: nothing here assumes a
/// particular patient id, so a keyed collection generalizes without touching
/// the simulator contract.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Patient {
    pub id: String,
    pub name: String,
    pub age: u32,
    pub gender: String,
    /// Free-text primary condition.
    pub condition: String,
    /// Current vitals snapshot, replaced wholesale on each update.
    pub vital_signs: VitalSigns,
    /// Alerts, newest first.
    pub alerts: Vec<HealthAlert>,
    /// Medications, insertion order preserved.
    pub medications: Vec<Medication>,
}

impl Patient {
    /// Prepend an alert, preserving the newest-first ordering.
    ///
    /// Every mutation path that adds alerts must go through here.
    pub fn push_alert(&mut self, alert: HealthAlert) {
        self.alerts.insert(0, alert);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::alert::AlertKind;
    use crate::vitals::{BloodPressure, ECG_SAMPLES};

    fn patient() -> Patient {
        Patient {
            id: "p-1".into(),
            name: "Test Patient".into(),
            age: 45,
            gender: "Male".into(),
            condition: "Hypertension".into(),
            vital_signs: VitalSigns {
                heart_rate: 72,
                blood_pressure: BloodPressure {
                    systolic: 120,
                    diastolic: 80,
                },
                spo2: 98,
                temperature: 36.8,
                ecg: vec![0.0; ECG_SAMPLES],
            },
            alerts: Vec::new(),
            medications: Vec::new(),
        }
    }

    #[test]
    fn push_alert_keeps_newest_first() {
        let mut p = patient();
        p.push_alert(HealthAlert::new(AlertKind::Info, "first"));
        p.push_alert(HealthAlert::new(AlertKind::Warning, "second"));

        assert_eq!(p.alerts.len(), 2);
        assert_eq!(p.alerts[0].message, "second");
        assert_eq!(p.alerts[1].message, "first");
    }
}
