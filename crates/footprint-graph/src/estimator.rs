use std::collections::HashSet;

use crate::cost;
use crate::plan::FieldPlanCache;
use crate::shape::{FieldAccess, Inspect, Shape, TypeShape};

/// Identity of a live value: its address, paired with what lives there.
///
/// Identity, not equality: two structurally equal values at different
/// addresses are costed separately, while the same value reached twice is
/// costed once. The address alone cannot serve as identity because a struct
/// and its first inline field share one; the kind half (the type descriptor
/// for objects, the shape discriminant otherwise) keeps such aliases
/// distinct.
#[derive(Clone, Copy, PartialEq, Eq, Hash)]
struct ObjectId {
    addr: usize,
    kind: IdKind,
}

#[derive(Clone, Copy, PartialEq, Eq, Hash)]
enum IdKind {
    Array,
    Cache,
    Map,
    Collection,
    Text,
    Object(usize),
    Opaque,
}

impl ObjectId {
    fn of(value: &dyn Inspect, shape: &Shape<'_>) -> Self {
        let addr = value as *const dyn Inspect as *const () as usize;
        let kind = match shape {
            Shape::Array { .. } => IdKind::Array,
            Shape::Cache { .. } => IdKind::Cache,
            Shape::Map { .. } => IdKind::Map,
            Shape::Collection { .. } => IdKind::Collection,
            Shape::Text { .. } => IdKind::Text,
            Shape::Object(object) => {
                IdKind::Object(object.type_shape() as *const TypeShape as usize)
            }
            Shape::Opaque => IdKind::Opaque,
        };
        Self { addr, kind }
    }
}

/// Recursive, best-effort object-graph estimator.
///
/// One instance is meant to live as long as its caller: the per-type field
/// plan cache it owns amortizes field enumeration across passes and across
/// sibling objects of the same type. The visited set, by contrast, is created
/// fresh for every [`estimate`](Estimator::estimate) call.
pub struct Estimator {
    plans: FieldPlanCache,
}

impl Default for Estimator {
    fn default() -> Self {
        Self::new()
    }
}

impl Estimator {
    pub fn new() -> Self {
        Self {
            plans: FieldPlanCache::new(),
        }
    }

    /// Estimate the relative footprint, in units, of the graph rooted at
    /// `root`, attributing only values owned by `owner_domain`.
    ///
    /// Total by contract: an absent root, a foreign subtree, a cycle, or a
    /// denied field read all degrade to a zero contribution rather than an
    /// error.
    pub fn estimate(&self, root: Option<&dyn Inspect>, owner_domain: &str) -> i64 {
        let Some(root) = root else {
            return 0;
        };
        let mut visited = HashSet::new();
        self.walk(root, &mut visited, 0, owner_domain)
    }

    fn walk(
        &self,
        value: &dyn Inspect,
        visited: &mut HashSet<ObjectId>,
        depth: u32,
        owner: &str,
    ) -> i64 {
        let shape = value.shape();

        // Every reachable value of any shape is costed at most once per
        // pass.
        if !visited.insert(ObjectId::of(value, &shape)) {
            return 0;
        }

        match shape {
            Shape::Array { len } => sized(cost::ARRAY_BASE_UNITS, len, cost::ARRAY_ENTRY_UNITS),
            Shape::Cache { entries } => {
                sized(cost::CACHE_BASE_UNITS, entries, cost::CACHE_ENTRY_UNITS)
            }
            Shape::Map { entries } => sized(cost::MAP_BASE_UNITS, entries, cost::MAP_ENTRY_UNITS),
            Shape::Collection { entries } => {
                sized(cost::COLLECTION_BASE_UNITS, entries, cost::COLLECTION_ENTRY_UNITS)
            }
            Shape::Text { chars } => sized(cost::TEXT_BASE_UNITS, chars, cost::TEXT_CHAR_UNITS),
            Shape::Object(object) => {
                let ty = object.type_shape();
                if !domain_owns(owner, ty.domain) {
                    return 0;
                }

                let mut total = cost::OBJECT_UNITS;
                if depth >= cost::MAX_DEPTH {
                    return total;
                }

                for &index in self.plans.plan(ty).iter() {
                    if let FieldAccess::Value(child) = object.field(index) {
                        total = total.saturating_add(self.walk(child, visited, depth + 1, owner));
                    }
                }
                total
            }
            Shape::Opaque => 0,
        }
    }
}

fn sized(base: i64, count: u64, per_entry: i64) -> i64 {
    let count = i64::try_from(count).unwrap_or(i64::MAX);
    base.saturating_add(count.saturating_mul(per_entry))
}

/// Whether `domain` is `owner` itself or one of its sub-namespaces.
///
/// Matching is `::`-segment-aware: `app::render` owns `app::render::cache`
/// but not `app::renderer`.
fn domain_owns(owner: &str, domain: &str) -> bool {
    match domain.strip_prefix(owner) {
        Some("") => true,
        Some(rest) => rest.starts_with("::"),
        None => false,
    }
}
