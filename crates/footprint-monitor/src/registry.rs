use std::fmt;
use std::sync::Arc;
use std::time::Duration;

use footprint_graph::Inspect;
use thiserror::Error;

/// One live component as surfaced by the host's registry.
///
/// The monitor only reads the root object transiently during a pass; the
/// host owns its lifecycle. A component whose root is `None` still appears
/// in snapshots, with zero units.
#[derive(Clone)]
pub struct ComponentHandle {
    /// Display name used in snapshots and reports.
    pub name: String,
    /// Ownership domain of the component's code, e.g. `"acme::shadow_timer"`.
    /// Only values whose type domain falls under it are attributed to the
    /// component.
    pub domain: String,
    pub root: Option<Arc<dyn Inspect + Send + Sync>>,
}

impl fmt::Debug for ComponentHandle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ComponentHandle")
            .field("name", &self.name)
            .field("domain", &self.domain)
            .field("has_root", &self.root.is_some())
            .finish()
    }
}

/// Enumerates the currently active components, in a stable order.
///
/// The returned order is the tie-break order for equal unit counts in the
/// published snapshot.
pub trait ComponentRegistry: Send + Sync {
    fn active_components(&self) -> Result<Vec<ComponentHandle>, RegistryError>;
}

#[derive(Debug, Error)]
pub enum RegistryError {
    #[error("component registry unavailable: {0}")]
    Unavailable(String),
}

/// Host-provided settings. Values are clamped by the consumers, so a
/// misconfigured host cannot cause unbounded-rate recomputation or an empty
/// report.
pub trait ConfigProvider: Send + Sync {
    /// Minimum delay between estimation passes. Clamped to at least one
    /// second by the monitor.
    fn refresh_interval(&self) -> Duration {
        Duration::from_secs(10)
    }

    /// Maximum rows emitted by [`crate::report::render_lines`]. Clamped to at
    /// least one by the renderer.
    fn max_entries(&self) -> usize {
        10
    }
}
