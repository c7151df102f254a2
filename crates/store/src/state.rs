//! The observable store snapshot.

use serde::{Deserialize, Serialize};
use vitalstream_core::{Patient, Timestamp};

/// Everything an observer of the store can see.
///
/// Snapshots are value types: each mutation produces a new one, published
/// wholesale on the store's watch channel.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MonitorState {
    /// The patient record, absent until initialized.
    pub patient: Option<Patient>,
    /// Whether a monitoring cycle is active. Reflects intent to monitor,
    /// not receipt of first data.
    pub is_connected: bool,
    /// When vitals were last merged or a connection established (UTC).
    /// Monotonically non-decreasing.
    pub last_sync: Option<Timestamp>,
}
