//! View engine.
//!
//! Derives the displayed product list from a catalog snapshot plus the active
//! filter and sort criteria. Derivation is a pure function; the only state is
//! the criteria themselves.

pub mod criteria;
pub mod engine;

pub use criteria::{CategoryFilter, FilterCriteria, SortOrder};
pub use engine::{ViewEngine, compute_view};
