//! Per-shape sizing constants, in abstract units.
//!
//! The absolute values are a compatibility contract with earlier releases;
//! only the ratios between them carry meaning. All accumulation in the
//! estimator is saturating `i64` arithmetic.

/// How many levels of structured-object fields are walked beyond the root.
/// Objects at the bound still cost [`OBJECT_UNITS`]; their fields do not.
pub const MAX_DEPTH: u32 = 2;

/// Flat cost of one owned structured object, before its fields.
pub const OBJECT_UNITS: i64 = 16;

pub const ARRAY_BASE_UNITS: i64 = 16;
pub const ARRAY_ENTRY_UNITS: i64 = 8;

pub const COLLECTION_BASE_UNITS: i64 = 24;
pub const COLLECTION_ENTRY_UNITS: i64 = 8;

pub const MAP_BASE_UNITS: i64 = 32;
pub const MAP_ENTRY_UNITS: i64 = 16;

pub const CACHE_BASE_UNITS: i64 = 48;
pub const CACHE_ENTRY_UNITS: i64 = 24;

pub const TEXT_BASE_UNITS: i64 = 16;
pub const TEXT_CHAR_UNITS: i64 = 2;
