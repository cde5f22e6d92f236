//! Best-effort relative memory estimation over live object graphs.
//!
//! This crate is intentionally approximate and "best-effort":
//! - Costs are abstract units, not bytes; only the relative ordering of
//!   component estimates is meaningful.
//! - Traversal is read-only and total: a misbehaving field contributes zero
//!   rather than failing the pass.
//! - The estimator never walks into values whose owning domain differs from
//!   the component being measured, so shared host state is never attributed
//!   to a component.
//!
//! Values opt in by implementing [`Inspect`], which classifies them into a
//! small closed set of [`Shape`]s. Counted shapes (arrays, caches, maps,
//! collections, text) are sized by their element count and never recursed
//! into; plain [`Structured`] objects are walked field by field up to a fixed
//! depth bound.

pub mod cost;

mod estimator;
mod impls;
mod plan;
mod shape;

pub use estimator::Estimator;
pub use shape::{FieldAccess, FieldKind, FieldShape, Inspect, Shape, Structured, TypeShape};
