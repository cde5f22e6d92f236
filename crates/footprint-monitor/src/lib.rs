//! Periodic per-component memory usage snapshots for a plugin-style host.
//!
//! [`UsageMonitor`] drives the [`footprint_graph::Estimator`] once per active
//! component on each permitted refresh, and publishes the ranked result as an
//! immutable [`UsageSnapshot`]. The host supplies the component list through
//! [`ComponentRegistry`] and timing/display settings through
//! [`ConfigProvider`]; the trigger itself (a timer tick, a manual refresh
//! button) stays outside this crate.
//!
//! Readers poll [`UsageMonitor::latest_snapshot`]; snapshots are replaced
//! wholesale, so a reader never observes a half-updated pass.

mod monitor;
mod registry;
mod snapshot;

pub mod report;

pub use monitor::{RefreshError, UsageMonitor};
pub use registry::{ComponentHandle, ComponentRegistry, ConfigProvider, RegistryError};
pub use snapshot::{UsageEntry, UsageSnapshot};
