use serde::{Deserialize, Serialize};

/// One component's estimate from the latest completed pass.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct UsageEntry {
    pub name: String,
    pub units: i64,
}

/// The ranked result of one estimation pass.
///
/// Entries are sorted descending by units; equal counts keep the registry's
/// enumeration order. Replaced wholesale on every completed pass.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct UsageSnapshot {
    pub entries: Vec<UsageEntry>,
    pub total_units: i64,
}

impl UsageSnapshot {
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Share of the grand total, in percent. Zero when the total is zero.
    pub fn share_percent(&self, units: i64) -> f64 {
        if self.total_units <= 0 {
            0.0
        } else {
            units as f64 * 100.0 / self.total_units as f64
        }
    }
}
