//! Headless monitor: the stand-in for the dashboard presentation layer.
//!
//! Composes a store around a simulator, subscribes to state changes, logs
//! each snapshot, and runs threshold evaluation over fresh vitals, feeding
//! any resulting alerts back into the store.

mod config;

use std::time::Duration;

use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};
use vitalstream_core::{thresholds, Timestamp};
use vitalstream_sim::VitalsSimulator;
use vitalstream_store::{MonitorState, PatientStore};

use crate::config::MonitorConfig;

#[tokio::main]
async fn main() {
    dotenvy::dotenv().ok();

    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "vitalstream_monitor=info,vitalstream_store=info".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    let config = MonitorConfig::from_env();
    tracing::info!(tick_ms = config.tick_interval_ms, "monitor starting");

    let simulator = VitalsSimulator::new(Duration::from_millis(config.tick_interval_ms));
    let store = PatientStore::new(simulator);
    let mut rx = store.subscribe();

    store.initialize_patient();
    store.connect();

    // Evaluate thresholds only when vitals actually changed; alert
    // mutations also notify and must not re-trigger evaluation.
    let mut evaluated_sync: Option<Timestamp> = None;

    loop {
        tokio::select! {
            _ = tokio::signal::ctrl_c() => {
                store.disconnect();
                tracing::info!("monitor shutting down");
                break;
            }
            changed = rx.changed() => {
                if changed.is_err() {
                    break;
                }
                let state = rx.borrow_and_update().clone();
                report(&state);

                if state.last_sync != evaluated_sync {
                    evaluated_sync = state.last_sync;
                    if let Some(patient) = &state.patient {
                        for alert in thresholds::evaluate(&patient.vital_signs) {
                            store.add_alert(alert);
                        }
                    }
                }
            }
        }
    }
}

/// Log one state snapshot at a dashboard-friendly granularity.
fn report(state: &MonitorState) {
    let Some(patient) = &state.patient else {
        tracing::info!(connected = state.is_connected, "no patient initialized");
        return;
    };

    let vitals = &patient.vital_signs;
    tracing::info!(
        patient = %patient.name,
        connected = state.is_connected,
        heart_rate = vitals.heart_rate,
        systolic = vitals.blood_pressure.systolic,
        diastolic = vitals.blood_pressure.diastolic,
        spo2 = vitals.spo2,
        temperature = vitals.temperature,
        alerts = patient.alerts.len(),
        last_sync = ?state.last_sync,
        "snapshot"
    );

    if tracing::enabled!(tracing::Level::DEBUG) {
        match serde_json::to_string(vitals) {
            Ok(json) => tracing::debug!(%json, "vitals detail"),
            Err(e) => tracing::debug!(error = %e, "vitals serialization failed"),
        }
    }
}
