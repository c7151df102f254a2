//! Core domain types for the vitalstream patient-monitoring feed.
//!
//! This crate has zero internal deps so it can be used by the simulator,
//! the state store, and any future tooling:
//!
//! - [`vitals`] — vitals snapshot types and the canonical physiological
//!   bounds shared by generation and validation.
//! - [`alert`] — health alert types.
//! - [`patient`] — the patient record and medication schedule.
//! - [`thresholds`] — pure threshold evaluation producing alerts.

pub mod alert;
pub mod patient;
pub mod thresholds;
pub mod types;
pub mod vitals;

pub use alert::{AlertKind, HealthAlert};
pub use patient::{Medication, Patient};
pub use types::Timestamp;
pub use vitals::{BloodPressure, VitalSigns, VitalsRangeError, ECG_SAMPLES};
