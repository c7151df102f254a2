//! Observable patient state store.
//!
//! [`PatientStore`] owns the authoritative in-memory patient record,
//! connection status, and last-sync timestamp. It subscribes to the
//! simulator's periodic feed and republishes merged state to observers
//! through a watch channel:
//!
//! - [`MonitorState`] — the snapshot observers see.
//! - [`PatientStore`] — the single mutation entry point
//!   (`initialize_patient`, `connect`, `disconnect`, `update_vitals`,
//!   `add_alert`).

pub mod state;
pub mod store;

pub use state::MonitorState;
pub use store::PatientStore;
