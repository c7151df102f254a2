//! Synthetic vital-signs feed.
//!
//! [`VitalsSimulator`] produces plausible physiological snapshots on demand
//! and can emit them at a fixed cadence to a single registered subscriber.
//! It knows nothing about patients or stores — only the snapshot type and
//! the callback it was handed.

pub mod simulator;

pub use simulator::{VitalsSimulator, DEFAULT_TICK_INTERVAL};
