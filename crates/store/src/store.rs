//! The patient state store.
//!
//! Single source of truth for patient, connection, and sync state. The
//! store mediates between the simulator's push-based ticks and pull-based
//! observers: state lives inside a `tokio::sync::watch` channel, so every
//! observer sees the latest snapshot and is notified on change, and every
//! mutation is one atomic `(old state) -> new state` step.

use std::sync::Mutex;

use chrono::Utc;
use tokio::sync::watch;
use uuid::Uuid;
use vitalstream_core::{AlertKind, HealthAlert, Medication, Patient, VitalSigns};
use vitalstream_sim::VitalsSimulator;

use crate::state::MonitorState;

/// Observable patient state store.
///
/// Owns its [`VitalsSimulator`] (constructor-injected, never global), so
/// independent stores never share timer state. All mutation methods take
/// `&self` and complete synchronously; the store is designed to be shared
/// via `Arc`.
///
/// No operation fails for domain reasons: requesting a merge while the
/// patient is absent produces the unchanged state, never an error.
pub struct PatientStore {
    state: watch::Sender<MonitorState>,
    /// Start/stop need `&mut`; the lock keeps the store `&self`-shareable.
    simulator: Mutex<VitalsSimulator>,
}

impl PatientStore {
    /// Create a store around the given simulator, with no patient and no
    /// connection.
    pub fn new(simulator: VitalsSimulator) -> Self {
        let (state, _) = watch::channel(MonitorState::default());
        Self {
            state,
            simulator: Mutex::new(simulator),
        }
    }

    /// Subscribe to state changes.
    ///
    /// The receiver always observes the latest snapshot; intermediate
    /// states may be coalesced for a slow observer, never replayed.
    pub fn subscribe(&self) -> watch::Receiver<MonitorState> {
        self.state.subscribe()
    }

    /// Clone of the current snapshot.
    pub fn snapshot(&self) -> MonitorState {
        self.state.borrow().clone()
    }

    /// Whether the simulator's periodic timer is currently active.
    ///
    /// Holds `is_monitoring() == snapshot().is_connected` at all times.
    pub fn is_monitoring(&self) -> bool {
        self.lock_simulator().is_monitoring()
    }

    /// Construct a fresh patient record, unconditionally replacing any
    /// existing one (no merge with prior alerts or history).
    ///
    /// Initial vitals come from a one-shot simulator snapshot; the record
    /// is seeded with a single warning alert and two medications due 4 and
    /// 8 hours out.
    pub fn initialize_patient(&self) {
        let initial_vitals = self.lock_simulator().generate();
        let now = Utc::now();

        let patient = Patient {
            id: Uuid::new_v4().to_string(),
            name: "John Doe".into(),
            age: 45,
            gender: "Male".into(),
            condition: "Hypertension".into(),
            vital_signs: initial_vitals,
            alerts: vec![HealthAlert::new(
                AlertKind::Warning,
                "Blood pressure slightly elevated",
            )],
            medications: vec![
                Medication {
                    id: Uuid::new_v4().to_string(),
                    name: "Lisinopril".into(),
                    dosage: "10mg".into(),
                    frequency: "Once daily".into(),
                    next_dose: now + chrono::Duration::hours(4),
                },
                Medication {
                    id: Uuid::new_v4().to_string(),
                    name: "Aspirin".into(),
                    dosage: "81mg".into(),
                    frequency: "Once daily".into(),
                    next_dose: now + chrono::Duration::hours(8),
                },
            ],
        };

        tracing::info!(patient_id = %patient.id, "patient initialized");
        self.state.send_modify(|state| state.patient = Some(patient));
    }

    /// Start the monitoring cycle and mark the store connected.
    ///
    /// The connected flag and `last_sync` are set immediately, before the
    /// first tick fires. Each tick replaces the patient's vitals snapshot
    /// and stamps `last_sync`, preserving identity, alerts, and
    /// medications; ticks arriving while no patient exists are skipped.
    ///
    /// Calling this twice fully supersedes the first registration — no
    /// duplicate subscription, no double-rate ticking.
    pub fn connect(&self) {
        let tx = self.state.clone();
        self.lock_simulator().start_monitoring(move |vitals| {
            tx.send_if_modified(|state| {
                let Some(patient) = state.patient.as_mut() else {
                    tracing::debug!("vitals tick skipped: no patient initialized");
                    return false;
                };
                patient.vital_signs = vitals;
                state.last_sync = Some(Utc::now());
                true
            });
        });

        self.state.send_modify(|state| {
            state.is_connected = true;
            state.last_sync = Some(Utc::now());
        });
        tracing::info!("monitor connected");
    }

    /// Stop the monitoring cycle and mark the store disconnected.
    ///
    /// Last known vitals and `last_sync` are retained for last-known-good
    /// display.
    pub fn disconnect(&self) {
        self.lock_simulator().stop_monitoring();
        self.state.send_if_modified(|state| {
            let was_connected = state.is_connected;
            state.is_connected = false;
            was_connected
        });
        tracing::info!("monitor disconnected");
    }

    /// Overwrite the patient's vitals out-of-band from the timer and stamp
    /// `last_sync`. No-op when the patient is absent.
    pub fn update_vitals(&self, vitals: VitalSigns) {
        self.state.send_if_modified(|state| {
            let Some(patient) = state.patient.as_mut() else {
                return false;
            };
            patient.vital_signs = vitals;
            state.last_sync = Some(Utc::now());
            true
        });
    }

    /// Prepend an alert to the patient's list (newest first). No-op when
    /// the patient is absent.
    pub fn add_alert(&self, alert: HealthAlert) {
        self.state.send_if_modified(|state| {
            let Some(patient) = state.patient.as_mut() else {
                return false;
            };
            tracing::warn!(kind = ?alert.kind, message = %alert.message, "alert raised");
            patient.push_alert(alert);
            true
        });
    }

    fn lock_simulator(&self) -> std::sync::MutexGuard<'_, VitalsSimulator> {
        // Poisoning means a panic mid-mutation; nothing to recover.
        self.simulator.lock().expect("simulator lock poisoned")
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
