//! Catalog store.
//!
//! Holds the immutable product list last fetched from the external catalog
//! service, plus the explicit pending / loaded / failed state of that fetch.
//! The fetch itself lives in the application shell; this crate performs no IO.

pub mod product;
pub mod store;

pub use product::{Price, Product, Rating};
pub use store::{Catalog, CatalogError, CatalogState};
