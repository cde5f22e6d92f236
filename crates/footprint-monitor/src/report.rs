//! Text rendering for usage snapshots.
//!
//! The only place floating point appears: percentages and the k/M unit
//! scaling are presentation, not estimation.

use crate::snapshot::UsageSnapshot;

pub fn format_units(units: i64) -> String {
    if units >= 1_000_000 {
        format!("{:.1}M units", units as f64 / 1_000_000.0)
    } else if units >= 1_000 {
        format!("{:.1}k units", units as f64 / 1_000.0)
    } else {
        format!("{units} units")
    }
}

/// Whole-percent share of `total`; `"0%"` when the total is zero.
pub fn format_percent(units: i64, total: i64) -> String {
    if total <= 0 {
        return "0%".to_string();
    }
    format!("{:.0}%", units as f64 * 100.0 / total as f64)
}

/// Ranked report rows, truncated to `max_entries` with a trailing `+N more`
/// marker. An empty snapshot renders a placeholder row.
pub fn render_lines(snapshot: &UsageSnapshot, max_entries: usize) -> Vec<String> {
    if snapshot.entries.is_empty() {
        return vec!["Calculating...".to_string()];
    }

    let shown = snapshot.entries.len().min(max_entries.max(1));
    let mut lines = Vec::with_capacity(shown + 1);
    for entry in &snapshot.entries[..shown] {
        lines.push(format!(
            "{}  {}  {}",
            entry.name,
            format_percent(entry.units, snapshot.total_units),
            format_units(entry.units)
        ));
    }

    let hidden = snapshot.entries.len() - shown;
    if hidden > 0 {
        lines.push(format!("+{hidden} more"));
    }
    lines
}
