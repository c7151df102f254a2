//! Vital-sign snapshot types and the canonical physiological bounds.
//!
//! The bounds live here (zero internal deps) so that both the simulator,
//! which guarantees them by construction, and any future device ingestion
//! path, which must validate against them, agree on a single source.

use std::ops::Range;

use serde::{Deserialize, Serialize};

// ---------------------------------------------------------------------------
// Canonical bounds
// ---------------------------------------------------------------------------

/// Number of samples in one ECG waveform window.
///
/// The window is fully replaced on every update; it never grows.
pub const ECG_SAMPLES: usize = 100;

/// Plausible resting heart rate in BPM (half-open).
pub const HEART_RATE_RANGE: Range<u32> = 60..100;

/// Plausible systolic blood pressure in mmHg (half-open).
pub const SYSTOLIC_RANGE: Range<u32> = 110..140;

/// Plausible diastolic blood pressure in mmHg (half-open).
pub const DIASTOLIC_RANGE: Range<u32> = 70..90;

/// Plausible blood oxygen saturation in percent (half-open).
pub const SPO2_RANGE: Range<u32> = 95..100;

/// Plausible body temperature in °C (half-open).
pub const TEMPERATURE_RANGE: Range<f64> = 36.5..37.5;

// ---------------------------------------------------------------------------
// Types
// ---------------------------------------------------------------------------

/// Blood pressure reading in mmHg.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct BloodPressure {
    pub systolic: u32,
    pub diastolic: u32,
}

/// One complete, immutable set of physiological readings at a point in time.
///
/// Snapshots are replaced wholesale on each update — never mutated in place.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct VitalSigns {
    /// Heart rate in BPM.
    pub heart_rate: u32,
    /// Blood pressure in mmHg.
    pub blood_pressure: BloodPressure,
    /// Blood oxygen saturation in percent.
    #[serde(rename = "spO2")]
    pub spo2: u32,
    /// Body temperature in °C.
    pub temperature: f64,
    /// One ECG waveform window, exactly [`ECG_SAMPLES`] samples.
    pub ecg: Vec<f64>,
}

/// A vitals field fell outside the canonical bounds.
///
/// The simulator never produces these; the error surface exists for device
/// ingestion paths that must reject out-of-range input instead of
/// propagating it silently.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum VitalsRangeError {
    #[error("heart rate {0} BPM outside plausible range [60, 100)")]
    HeartRate(u32),

    #[error("systolic pressure {0} mmHg outside plausible range [110, 140)")]
    Systolic(u32),

    #[error("diastolic pressure {0} mmHg outside plausible range [70, 90)")]
    Diastolic(u32),

    #[error("SpO2 {0}% outside plausible range [95, 100)")]
    SpO2(u32),

    #[error("temperature {0}°C outside plausible range [36.5, 37.5)")]
    Temperature(f64),

    #[error("ECG window has {0} samples, expected 100")]
    EcgLength(usize),
}

impl VitalSigns {
    /// Check every field against the canonical bounds.
    ///
    /// Returns the first violation found. Generated snapshots always pass.
    pub fn validate(&self) -> Result<(), VitalsRangeError> {
        if !HEART_RATE_RANGE.contains(&self.heart_rate) {
            return Err(VitalsRangeError::HeartRate(self.heart_rate));
        }
        if !SYSTOLIC_RANGE.contains(&self.blood_pressure.systolic) {
            return Err(VitalsRangeError::Systolic(self.blood_pressure.systolic));
        }
        if !DIASTOLIC_RANGE.contains(&self.blood_pressure.diastolic) {
            return Err(VitalsRangeError::Diastolic(self.blood_pressure.diastolic));
        }
        if !SPO2_RANGE.contains(&self.spo2) {
            return Err(VitalsRangeError::SpO2(self.spo2));
        }
        if !TEMPERATURE_RANGE.contains(&self.temperature) {
            return Err(VitalsRangeError::Temperature(self.temperature));
        }
        if self.ecg.len() != ECG_SAMPLES {
            return Err(VitalsRangeError::EcgLength(self.ecg.len()));
        }
        Ok(())
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use super::*;

    fn in_range_vitals() -> VitalSigns {
        VitalSigns {
            heart_rate: 72,
            blood_pressure: BloodPressure {
                systolic: 120,
                diastolic: 80,
            },
            spo2: 98,
            temperature: 36.8,
            ecg: vec![0.0; ECG_SAMPLES],
        }
    }

    #[test]
    fn in_range_snapshot_validates() {
        assert_eq!(in_range_vitals().validate(), Ok(()));
    }

    #[test]
    fn bounds_are_half_open() {
        let mut v = in_range_vitals();
        v.heart_rate = 100;
        assert_eq!(v.validate(), Err(VitalsRangeError::HeartRate(100)));

        v.heart_rate = 60;
        assert_eq!(v.validate(), Ok(()));
    }

    #[test]
    fn each_field_is_checked() {
        let mut v = in_range_vitals();
        v.blood_pressure.systolic = 150;
        assert_eq!(v.validate(), Err(VitalsRangeError::Systolic(150)));

        let mut v = in_range_vitals();
        v.blood_pressure.diastolic = 69;
        assert_eq!(v.validate(), Err(VitalsRangeError::Diastolic(69)));

        let mut v = in_range_vitals();
        v.spo2 = 90;
        assert_eq!(v.validate(), Err(VitalsRangeError::SpO2(90)));

        let mut v = in_range_vitals();
        v.temperature = 39.2;
        assert_eq!(v.validate(), Err(VitalsRangeError::Temperature(39.2)));
    }

    #[test]
    fn wrong_ecg_window_length_is_rejected() {
        let mut v = in_range_vitals();
        v.ecg = vec![0.0; 50];
        assert_eq!(v.validate(), Err(VitalsRangeError::EcgLength(50)));
    }

    #[test]
    fn serializes_with_dashboard_field_names() {
        let json = serde_json::to_value(in_range_vitals()).unwrap();
        assert_eq!(json["heartRate"], 72);
        assert_eq!(json["bloodPressure"]["systolic"], 120);
        assert_eq!(json["spO2"], 98);
        assert_eq!(json["ecg"].as_array().unwrap().len(), ECG_SAMPLES);
    }
}
