use std::collections::HashMap;
use std::sync::Arc;

use parking_lot::Mutex;

use crate::shape::{FieldKind, TypeShape};

/// Identity of a type descriptor: the address of the `'static` [`TypeShape`].
#[derive(Clone, Copy, PartialEq, Eq, Hash)]
struct TypeShapeId(usize);

impl TypeShapeId {
    fn of(ty: &'static TypeShape) -> Self {
        Self(ty as *const TypeShape as usize)
    }
}

/// Memoized per-type field plans.
///
/// A plan is the ordered list of [`FieldKind::Instance`] field indices for
/// one type. Entries are computed lazily, never recomputed, and never
/// evicted; the cache is bounded by the number of distinct structured types
/// the process ever inspects. Shared across estimation passes and components.
pub(crate) struct FieldPlanCache {
    plans: Mutex<HashMap<TypeShapeId, Arc<[usize]>>>,
}

impl FieldPlanCache {
    pub(crate) fn new() -> Self {
        Self {
            plans: Mutex::new(HashMap::new()),
        }
    }

    pub(crate) fn plan(&self, ty: &'static TypeShape) -> Arc<[usize]> {
        self.plans
            .lock()
            .entry(TypeShapeId::of(ty))
            .or_insert_with(|| {
                let plan: Arc<[usize]> = ty
                    .fields
                    .iter()
                    .enumerate()
                    .filter(|(_, field)| field.kind == FieldKind::Instance)
                    .map(|(index, _)| index)
                    .collect();
                tracing::trace!(type_name = ty.name, fields = plan.len(), "computed field plan");
                plan
            })
            .clone()
    }
}
