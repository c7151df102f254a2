//! Threshold evaluation over a vitals snapshot.
//!
//! Pure alert-producing logic: the store never evaluates thresholds itself,
//! it only records whatever alerts a caller feeds it. The monitor binary
//! wires this evaluator to the store's alert path.

use crate::alert::{AlertKind, HealthAlert};
use crate::vitals::VitalSigns;

/// Heart rate below this is bradycardia (BPM).
pub const BRADYCARDIA_BPM: u32 = 50;
/// Bradycardia below this is critical (BPM).
const BRADYCARDIA_CRITICAL_BPM: u32 = 40;
/// Heart rate above this is tachycardia (BPM).
pub const TACHYCARDIA_BPM: u32 = 120;
/// Tachycardia above this is critical (BPM).
const TACHYCARDIA_CRITICAL_BPM: u32 = 150;
/// SpO2 below this is hypoxic (percent).
pub const HYPOXIA_SPO2: u32 = 95;
/// Hypoxia below this is critical (percent).
const HYPOXIA_CRITICAL_SPO2: u32 = 90;
/// Temperature at or above this is febrile (°C).
pub const FEVER_CELSIUS: f64 = 38.0;
/// Fever at or above this is critical (°C).
const FEVER_CRITICAL_CELSIUS: f64 = 39.5;
/// Systolic pressure at or above this is hypertensive (mmHg).
pub const HYPERTENSION_SYSTOLIC: u32 = 140;
/// Diastolic pressure at or above this is hypertensive (mmHg).
pub const HYPERTENSION_DIASTOLIC: u32 = 90;
/// Systolic pressure at or above this is a hypertensive crisis (mmHg).
const HYPERTENSION_CRISIS_SYSTOLIC: u32 = 180;

/// Evaluate one vitals snapshot against the clinical thresholds.
///
/// Returns one alert per violated threshold, empty for in-band readings.
/// Simulator-generated snapshots stay within the plausible bounds and
/// therefore never trigger anything here.
pub fn evaluate(vitals: &VitalSigns) -> Vec<HealthAlert> {
    let mut alerts = Vec::new();

    let hr = vitals.heart_rate;
    if hr < BRADYCARDIA_BPM {
        let kind = if hr < BRADYCARDIA_CRITICAL_BPM {
            AlertKind::Critical
        } else {
            AlertKind::Warning
        };
        alerts.push(HealthAlert::new(
            kind,
            format!("Low heart rate: {hr} BPM"),
        ));
    } else if hr > TACHYCARDIA_BPM {
        let kind = if hr > TACHYCARDIA_CRITICAL_BPM {
            AlertKind::Critical
        } else {
            AlertKind::Warning
        };
        alerts.push(HealthAlert::new(
            kind,
            format!("High heart rate: {hr} BPM"),
        ));
    }

    let spo2 = vitals.spo2;
    if spo2 < HYPOXIA_SPO2 {
        let kind = if spo2 < HYPOXIA_CRITICAL_SPO2 {
            AlertKind::Critical
        } else {
            AlertKind::Warning
        };
        alerts.push(HealthAlert::new(
            kind,
            format!("Low blood oxygen: {spo2}%"),
        ));
    }

    let temp = vitals.temperature;
    if temp >= FEVER_CELSIUS {
        let kind = if temp >= FEVER_CRITICAL_CELSIUS {
            AlertKind::Critical
        } else {
            AlertKind::Warning
        };
        alerts.push(HealthAlert::new(
            kind,
            format!("Elevated temperature: {temp:.1}°C"),
        ));
    }

    let bp = vitals.blood_pressure;
    if bp.systolic >= HYPERTENSION_SYSTOLIC || bp.diastolic >= HYPERTENSION_DIASTOLIC {
        let kind = if bp.systolic >= HYPERTENSION_CRISIS_SYSTOLIC {
            AlertKind::Critical
        } else {
            AlertKind::Warning
        };
        alerts.push(HealthAlert::new(
            kind,
            format!("Elevated blood pressure: {}/{} mmHg", bp.systolic, bp.diastolic),
        ));
    }

    alerts
}
