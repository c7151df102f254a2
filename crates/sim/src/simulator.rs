//! Vital-signs snapshot generation and the periodic monitoring task.

use std::time::Duration;

use rand::Rng;
use tokio_util::sync::CancellationToken;
use vitalstream_core::vitals::{
    BloodPressure, VitalSigns, DIASTOLIC_RANGE, ECG_SAMPLES, HEART_RATE_RANGE, SPO2_RANGE,
    SYSTOLIC_RANGE, TEMPERATURE_RANGE,
};

/// Cadence of the periodic feed.
pub const DEFAULT_TICK_INTERVAL: Duration = Duration::from_millis(2000);

// ---------------------------------------------------------------------------
// VitalsSimulator
// ---------------------------------------------------------------------------

/// Simulated smart-watch feed.
///
/// An owned component instance — no global timer state. Each store (or test)
/// constructs its own, so independent simulators never share a timer.
///
/// State machine: `Idle ⇄ Monitoring`. [`start_monitoring`] while already
/// monitoring replaces the previous subscriber and timer without leaking
/// either (at most one timer is ever active).
///
/// [`start_monitoring`]: VitalsSimulator::start_monitoring
pub struct VitalsSimulator {
    tick_interval: Duration,
    /// Cancellation token for the active monitoring task, if any.
    monitor: Option<CancellationToken>,
}

impl VitalsSimulator {
    /// Create a simulator emitting at the given cadence.
    pub fn new(tick_interval: Duration) -> Self {
        Self {
            tick_interval,
            monitor: None,
        }
    }

    /// Produce one plausible vitals snapshot.
    ///
    /// All values are drawn uniformly from the canonical half-open bounds,
    /// so the result always passes [`VitalSigns::validate`]. The ECG window
    /// is a sine wave with additive noise, exactly [`ECG_SAMPLES`] samples.
    pub fn generate(&self) -> VitalSigns {
        generate_snapshot()
    }

    /// Register `on_tick` as the sole subscriber and begin emitting one
    /// snapshot per tick interval, starting one full interval from now
    /// (not immediately).
    ///
    /// Calling this while already monitoring cancels the previous timer
    /// first; there is never more than one active timer per simulator.
    ///
    /// Must be called from within a tokio runtime.
    pub fn start_monitoring<F>(&mut self, on_tick: F)
    where
        F: Fn(VitalSigns) + Send + 'static,
    {
        // Supersede any previous registration before spawning.
        self.stop_monitoring();

        let cancel = CancellationToken::new();
        let token = cancel.clone();
        let tick = self.tick_interval;
        // Anchor the first fire to the call time, not the task's first poll.
        let first_fire = tokio::time::Instant::now() + tick;

        tokio::spawn(async move {
            let mut interval = tokio::time::interval_at(first_fire, tick);

            loop {
                tokio::select! {
                    // A cancelled monitor must never fire again, even when a
                    // tick is already due.
                    biased;
                    _ = token.cancelled() => {
                        tracing::debug!("vitals monitoring cancelled");
                        break;
                    }
                    _ = interval.tick() => {
                        on_tick(generate_snapshot());
                    }
                }
            }
        });

        self.monitor = Some(cancel);
        tracing::debug!(tick_ms = tick.as_millis() as u64, "vitals monitoring started");
    }

    /// Cancel the active timer, if any, and clear the subscriber.
    ///
    /// Idempotent: calling while idle is a no-op.
    pub fn stop_monitoring(&mut self) {
        if let Some(cancel) = self.monitor.take() {
            cancel.cancel();
        }
    }

    /// Whether a monitoring cycle is currently active.
    pub fn is_monitoring(&self) -> bool {
        self.monitor.is_some()
    }
}

impl Default for VitalsSimulator {
    fn default() -> Self {
        Self::new(DEFAULT_TICK_INTERVAL)
    }
}

impl Drop for VitalsSimulator {
    fn drop(&mut self) {
        // A dropped simulator must not keep ticking in the background.
        self.stop_monitoring();
    }
}

/// Draw one snapshot from the canonical bounds.
fn generate_snapshot() -> VitalSigns {
    let mut rng = rand::rng();

    let ecg = (0..ECG_SAMPLES)
        .map(|i| (i as f64 * 0.2).sin() * 0.5 + rng.random_range(0.0..0.1))
        .collect();

    VitalSigns {
        heart_rate: rng.random_range(HEART_RATE_RANGE),
        blood_pressure: BloodPressure {
            systolic: rng.random_range(SYSTOLIC_RANGE),
            diastolic: rng.random_range(DIASTOLIC_RANGE),
        },
        spo2: rng.random_range(SPO2_RANGE),
        temperature: rng.random_range(TEMPERATURE_RANGE),
        ecg,
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
