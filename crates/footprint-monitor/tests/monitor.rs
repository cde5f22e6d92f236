use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;
use std::time::{Duration, SystemTime};

use footprint_graph::{
    FieldAccess, FieldKind, FieldShape, Inspect, Shape, Structured, TypeShape,
};
use footprint_monitor::{
    report, ComponentHandle, ComponentRegistry, ConfigProvider, RefreshError, RegistryError,
    UsageMonitor,
};
use parking_lot::Mutex;

// ---------------------------------------------------------------------------
// Fixtures
// ---------------------------------------------------------------------------

static WIDGET_SHAPE: TypeShape = TypeShape {
    name: "Widget",
    domain: "acme::fixture",
    fields: &[FieldShape { name: "label", kind: FieldKind::Instance }],
};

/// Costs 32 + 2 * label_chars units: flat object plus one text field.
struct Widget {
    label: String,
}

impl Widget {
    /// A widget whose estimate is exactly `units`.
    fn costing(units: i64) -> Self {
        assert!(units >= 32 && units % 2 == 0, "unit target must be even and at least 32");
        Self {
            label: "x".repeat(((units - 32) / 2) as usize),
        }
    }
}

impl Inspect for Widget {
    fn shape(&self) -> Shape<'_> {
        Shape::Object(self)
    }
}

impl Structured for Widget {
    fn type_shape(&self) -> &'static TypeShape {
        &WIDGET_SHAPE
    }

    fn field(&self, index: usize) -> FieldAccess<'_> {
        match index {
            0 => FieldAccess::Value(&self.label),
            _ => FieldAccess::Denied,
        }
    }
}

fn component(name: &str, units: i64) -> ComponentHandle {
    ComponentHandle {
        name: name.to_string(),
        domain: "acme::fixture".to_string(),
        root: Some(Arc::new(Widget::costing(units))),
    }
}

fn rootless(name: &str) -> ComponentHandle {
    ComponentHandle {
        name: name.to_string(),
        domain: "acme::fixture".to_string(),
        root: None,
    }
}

#[derive(Default)]
struct FakeRegistry {
    // `None` simulates a registry that fails to enumerate.
    components: Mutex<Option<Vec<ComponentHandle>>>,
    calls: AtomicUsize,
}

impl FakeRegistry {
    fn with(components: Vec<ComponentHandle>) -> Arc<Self> {
        let registry = Arc::new(Self::default());
        registry.set(components);
        registry
    }

    fn set(&self, components: Vec<ComponentHandle>) {
        *self.components.lock() = Some(components);
    }

    fn fail(&self) {
        *self.components.lock() = None;
    }

    fn calls(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }
}

impl ComponentRegistry for FakeRegistry {
    fn active_components(&self) -> Result<Vec<ComponentHandle>, RegistryError> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        self.components
            .lock()
            .clone()
            .ok_or_else(|| RegistryError::Unavailable("enumeration failed".to_string()))
    }
}

struct FixedConfig {
    interval: Duration,
    max_entries: usize,
}

impl ConfigProvider for FixedConfig {
    fn refresh_interval(&self) -> Duration {
        self.interval
    }

    fn max_entries(&self) -> usize {
        self.max_entries
    }
}

fn monitor(registry: Arc<FakeRegistry>, interval: Duration) -> UsageMonitor {
    UsageMonitor::new(
        registry,
        Arc::new(FixedConfig {
            interval,
            max_entries: 10,
        }),
    )
}

fn at(secs: u64) -> SystemTime {
    SystemTime::UNIX_EPOCH + Duration::from_secs(secs)
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

#[test]
fn pass_ranks_components_and_totals_units() {
    let registry = FakeRegistry::with(vec![
        component("alpha", 100),
        component("gamma", 600),
        component("beta", 300),
    ]);
    let monitor = monitor(registry, Duration::from_secs(10));

    let snapshot = monitor.refresh(at(1_000)).unwrap();

    assert_eq!(snapshot.total_units, 1_000);
    let ranked: Vec<(&str, i64)> = snapshot
        .entries
        .iter()
        .map(|entry| (entry.name.as_str(), entry.units))
        .collect();
    assert_eq!(ranked, vec![("gamma", 600), ("beta", 300), ("alpha", 100)]);

    assert_eq!(snapshot.share_percent(600), 60.0);
    assert_eq!(snapshot.share_percent(300), 30.0);
    assert_eq!(snapshot.share_percent(100), 10.0);

    assert_eq!(
        report::render_lines(&snapshot, 10),
        vec![
            "gamma  60%  600 units".to_string(),
            "beta  30%  300 units".to_string(),
            "alpha  10%  100 units".to_string(),
        ]
    );
}

#[test]
fn refresh_within_the_interval_runs_no_pass() {
    let registry = FakeRegistry::with(vec![component("alpha", 100)]);
    let monitor = monitor(Arc::clone(&registry), Duration::from_secs(10));

    let first = monitor.refresh(at(1_000)).unwrap();
    assert_eq!(registry.calls(), 1);

    let second = monitor.refresh(at(1_005)).unwrap();
    assert_eq!(registry.calls(), 1);
    assert!(Arc::ptr_eq(&first, &second));

    monitor.refresh(at(1_010)).unwrap();
    assert_eq!(registry.calls(), 2);
}

#[test]
fn zero_interval_is_clamped_to_one_second() {
    let registry = FakeRegistry::with(vec![component("alpha", 100)]);
    let monitor = monitor(Arc::clone(&registry), Duration::ZERO);

    monitor.refresh(at(1_000)).unwrap();
    monitor
        .refresh(at(1_000) + Duration::from_millis(500))
        .unwrap();
    assert_eq!(registry.calls(), 1);

    monitor.refresh(at(1_001)).unwrap();
    assert_eq!(registry.calls(), 2);
}

#[test]
fn force_refresh_ignores_the_gate() {
    let registry = FakeRegistry::with(vec![component("alpha", 100)]);
    let monitor = monitor(Arc::clone(&registry), Duration::from_secs(10));

    monitor.refresh(at(1_000)).unwrap();
    monitor.force_refresh(at(1_001)).unwrap();
    assert_eq!(registry.calls(), 2);
}

#[test]
fn registry_failure_keeps_previous_snapshot_and_gate() {
    let registry = FakeRegistry::with(vec![component("alpha", 100)]);
    let monitor = monitor(Arc::clone(&registry), Duration::from_secs(10));

    let published = monitor.refresh(at(1_000)).unwrap();

    registry.fail();
    let error = monitor.refresh(at(1_020)).unwrap_err();
    assert!(matches!(error, RefreshError::Registry(_)));
    assert!(Arc::ptr_eq(&monitor.latest_snapshot(), &published));

    // The failed pass did not advance the gate: a retry is allowed
    // immediately once the registry recovers.
    registry.set(vec![component("alpha", 100), component("beta", 300)]);
    let recovered = monitor.refresh(at(1_020)).unwrap();
    assert_eq!(recovered.entries.len(), 2);
}

#[test]
fn rootless_component_is_listed_with_zero_units() {
    let registry = FakeRegistry::with(vec![component("alpha", 100), rootless("hollow")]);
    let monitor = monitor(registry, Duration::from_secs(10));

    let snapshot = monitor.refresh(at(1_000)).unwrap();

    assert_eq!(snapshot.total_units, 100);
    assert_eq!(snapshot.entries.len(), 2);
    assert_eq!(snapshot.entries[1].name, "hollow");
    assert_eq!(snapshot.entries[1].units, 0);
}

#[test]
fn equal_units_keep_registry_order() {
    let registry = FakeRegistry::with(vec![
        component("first", 100),
        component("second", 100),
        component("heavy", 300),
    ]);
    let monitor = monitor(registry, Duration::from_secs(10));

    let snapshot = monitor.refresh(at(1_000)).unwrap();
    let names: Vec<&str> = snapshot
        .entries
        .iter()
        .map(|entry| entry.name.as_str())
        .collect();
    assert_eq!(names, vec!["heavy", "first", "second"]);
}

#[test]
fn latest_snapshot_is_empty_before_the_first_pass() {
    let registry = FakeRegistry::with(vec![component("alpha", 100)]);
    let monitor = monitor(registry, Duration::from_secs(10));

    let initial = monitor.latest_snapshot();
    assert!(initial.is_empty());
    assert_eq!(initial.total_units, 0);
}

#[test]
fn render_latest_honors_configured_row_limit() {
    let registry = FakeRegistry::with(vec![
        component("alpha", 100),
        component("beta", 300),
        component("gamma", 600),
    ]);
    let monitor = UsageMonitor::new(
        registry,
        Arc::new(FixedConfig {
            interval: Duration::from_secs(10),
            max_entries: 2,
        }),
    );

    assert_eq!(monitor.render_latest(), vec!["Calculating...".to_string()]);

    monitor.refresh(at(1_000)).unwrap();
    let lines = monitor.render_latest();
    assert_eq!(lines.len(), 3);
    assert!(lines[0].starts_with("gamma"));
    assert_eq!(lines[2], "+1 more");
}

#[test]
fn snapshot_serializes_with_stable_field_names() {
    let registry = FakeRegistry::with(vec![component("alpha", 100)]);
    let monitor = monitor(registry, Duration::from_secs(10));

    let snapshot = monitor.refresh(at(1_000)).unwrap();
    let value = serde_json::to_value(&*snapshot).unwrap();
    assert_eq!(
        value,
        serde_json::json!({
            "entries": [{ "name": "alpha", "units": 100 }],
            "total_units": 100,
        })
    );
}
