use std::sync::Arc;
use std::time::{Duration, SystemTime};

use footprint_graph::{Estimator, Inspect};
use parking_lot::{Mutex, RwLock};
use thiserror::Error;
use tracing::{debug, trace};

use crate::registry::{ComponentRegistry, ConfigProvider, RegistryError};
use crate::snapshot::{UsageEntry, UsageSnapshot};

#[derive(Debug, Error)]
pub enum RefreshError {
    #[error(transparent)]
    Registry(#[from] RegistryError),
}

/// Coordinates estimation passes and publishes ranked usage snapshots.
///
/// `refresh` may be called at will (typically from a periodic tick); the
/// monitor enforces the configured minimum interval itself and returns the
/// previous snapshot for calls that arrive too early. A failed pass leaves
/// the previous snapshot published and does not advance the interval gate:
/// stale-but-available beats absent.
pub struct UsageMonitor {
    registry: Arc<dyn ComponentRegistry>,
    config: Arc<dyn ConfigProvider>,
    estimator: Estimator,
    next_refresh: Mutex<Option<SystemTime>>,
    snapshot: RwLock<Arc<UsageSnapshot>>,
}

impl UsageMonitor {
    pub fn new(registry: Arc<dyn ComponentRegistry>, config: Arc<dyn ConfigProvider>) -> Self {
        Self {
            registry,
            config,
            estimator: Estimator::new(),
            next_refresh: Mutex::new(None),
            snapshot: RwLock::new(Arc::new(UsageSnapshot::default())),
        }
    }

    /// The most recently published snapshot; the empty snapshot before the
    /// first completed pass. Never blocks on an in-flight pass.
    pub fn latest_snapshot(&self) -> Arc<UsageSnapshot> {
        self.snapshot.read().clone()
    }

    /// Run a pass if the interval since the last successful pass has
    /// elapsed; otherwise return the current snapshot unchanged.
    pub fn refresh(&self, now: SystemTime) -> Result<Arc<UsageSnapshot>, RefreshError> {
        if let Some(next_at) = *self.next_refresh.lock() {
            if now < next_at {
                trace!("refresh gated, returning previous snapshot");
                return Ok(self.latest_snapshot());
            }
        }
        self.run_pass(now)
    }

    /// Run a pass regardless of the interval gate (the start-up and manual
    /// "refresh now" path). Still advances the gate on success.
    pub fn force_refresh(&self, now: SystemTime) -> Result<Arc<UsageSnapshot>, RefreshError> {
        self.run_pass(now)
    }

    /// Render the latest snapshot with the configured row limit.
    pub fn render_latest(&self) -> Vec<String> {
        crate::report::render_lines(&self.latest_snapshot(), self.config.max_entries())
    }

    fn run_pass(&self, now: SystemTime) -> Result<Arc<UsageSnapshot>, RefreshError> {
        let components = self.registry.active_components()?;

        let mut entries = Vec::with_capacity(components.len());
        let mut total: i64 = 0;
        for component in &components {
            let root = component.root.as_deref().map(|root| root as &dyn Inspect);
            let units = self.estimator.estimate(root, &component.domain);
            total = total.saturating_add(units);
            entries.push(UsageEntry {
                name: component.name.clone(),
                units,
            });
        }

        // Stable sort: equal unit counts keep registry enumeration order.
        entries.sort_by(|a, b| b.units.cmp(&a.units));

        let snapshot = Arc::new(UsageSnapshot {
            entries,
            total_units: total,
        });
        *self.snapshot.write() = Arc::clone(&snapshot);

        let interval = self.config.refresh_interval().max(Duration::from_secs(1));
        *self.next_refresh.lock() = Some(now + interval);

        debug!(
            components = snapshot.entries.len(),
            total_units = snapshot.total_units,
            "estimation pass complete"
        );
        Ok(snapshot)
    }
}
