/// A live value the estimator can classify and size.
///
/// Implementations must be read-only: `shape` may count elements but must not
/// mutate the value. A type that structurally satisfies several shapes (for
/// example a sized cache that is also iterable as a collection) must report
/// the first matching one in the fixed priority order
/// array > cache > map > collection > text. The order is a compatibility
/// contract, not load-bearing semantics.
pub trait Inspect {
    fn shape(&self) -> Shape<'_>;
}

/// Structural classification of a value, used to pick its sizing rule.
///
/// The first five variants are terminal: their elements are only counted,
/// never individually recursed into. This bounds traversal cost by the number
/// of reachable structured objects, independent of how large any single
/// collection is.
pub enum Shape<'a> {
    /// Fixed-length contiguous storage, sized by element count.
    Array { len: u64 },
    /// A bounded key-value store that reports its size without enumerating
    /// entries.
    Cache { entries: u64 },
    /// A general key-to-value association.
    Map { entries: u64 },
    /// An ordered or unordered grouping that is not a map.
    Collection { entries: u64 },
    /// A character sequence, sized by character count.
    Text { chars: u64 },
    /// A plain structured object, walked field by field when owned.
    Object(&'a dyn Structured),
    /// A value the estimator has no sizing rule for; costs nothing.
    Opaque,
}

/// Field-level introspection for plain structured objects.
pub trait Structured: Inspect {
    /// Static description of this value's runtime type.
    fn type_shape(&self) -> &'static TypeShape;

    /// Read one field by its index in [`TypeShape::fields`].
    ///
    /// A read may be refused (or observe a concurrent mutation); return
    /// [`FieldAccess::Denied`] in that case and the field contributes zero.
    fn field(&self, index: usize) -> FieldAccess<'_>;
}

/// Static description of a structured type: its name, the domain that owns
/// it, and its ordered field table.
///
/// Declared as a `'static` so the estimator can key its per-type field plan
/// on the descriptor's address.
pub struct TypeShape {
    pub name: &'static str,
    /// `::`-separated module path of the code that owns this type, matched
    /// against the measured component's domain.
    pub domain: &'static str,
    pub fields: &'static [FieldShape],
}

/// One entry in a [`TypeShape`] field table.
pub struct FieldShape {
    pub name: &'static str,
    pub kind: FieldKind,
}

/// Eligibility of a field for per-instance estimation.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum FieldKind {
    /// Per-instance state; walked by the estimator.
    Instance,
    /// A view of process-global or host state; excluded so shared memory is
    /// not attributed to every instance that can reach it.
    Shared,
    /// Generated bookkeeping with no meaningful footprint of its own;
    /// excluded.
    Synthetic,
}

/// Outcome of reading one field.
pub enum FieldAccess<'a> {
    Value(&'a dyn Inspect),
    /// The reference is null/absent.
    Absent,
    /// The read was refused or raced with a concurrent writer.
    Denied,
}

impl<'a, T: Inspect> From<Option<&'a T>> for FieldAccess<'a> {
    fn from(value: Option<&'a T>) -> Self {
        match value {
            Some(value) => FieldAccess::Value(value),
            None => FieldAccess::Absent,
        }
    }
}
