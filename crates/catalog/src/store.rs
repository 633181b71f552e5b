use std::sync::Arc;

use chrono::{DateTime, Utc};
use thiserror::Error;

use storefront_core::{Entity, ProductId};

use crate::product::Product;

/// Failure surfaced by the external catalog fetch.
///
/// The core does not distinguish causes: any failure means "no catalog".
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum CatalogError {
    #[error("catalog fetch failed: {0}")]
    FetchFailed(String),
}

impl CatalogError {
    pub fn fetch_failed(msg: impl Into<String>) -> Self {
        Self::FetchFailed(msg.into())
    }
}

/// Immutable snapshot of the product list from one successful fetch.
///
/// Cloning is cheap (shared slice) and the snapshot is never mutated, so it
/// can be read from any number of threads.
#[derive(Debug, Clone, PartialEq)]
pub struct Catalog {
    products: Arc<[Product]>,
    fetched_at: DateTime<Utc>,
}

impl Catalog {
    pub fn new(products: Vec<Product>, fetched_at: DateTime<Utc>) -> Self {
        Self {
            products: products.into(),
            fetched_at,
        }
    }

    pub fn empty() -> Self {
        Self::new(Vec::new(), Utc::now())
    }

    pub fn products(&self) -> &[Product] {
        &self.products
    }

    pub fn fetched_at(&self) -> DateTime<Utc> {
        self.fetched_at
    }

    pub fn len(&self) -> usize {
        self.products.len()
    }

    pub fn is_empty(&self) -> bool {
        self.products.is_empty()
    }

    pub fn get(&self, id: ProductId) -> Option<&Product> {
        self.products.iter().find(|p| *p.id() == id)
    }

    /// Distinct categories in first-seen catalog order.
    pub fn categories(&self) -> Vec<&str> {
        let mut seen: Vec<&str> = Vec::new();
        for product in self.products.iter() {
            if !seen.contains(&product.category.as_str()) {
                seen.push(&product.category);
            }
        }
        seen
    }
}

/// Outcome of the one-shot catalog fetch.
#[derive(Debug, Clone, PartialEq, Default)]
pub enum CatalogState {
    #[default]
    Pending,
    Loaded(Catalog),
    Failed(CatalogError),
}

impl CatalogState {
    /// Record the result of a fetch.
    ///
    /// Any state may be replaced: a later successful fetch supersedes an
    /// earlier failure or snapshot.
    pub fn resolve(&mut self, result: Result<Vec<Product>, CatalogError>) {
        *self = match result {
            Ok(products) => {
                tracing::info!(products = products.len(), "catalog loaded");
                CatalogState::Loaded(Catalog::new(products, Utc::now()))
            }
            Err(err) => {
                tracing::warn!(error = %err, "catalog unavailable");
                CatalogState::Failed(err)
            }
        };
    }

    pub fn is_pending(&self) -> bool {
        matches!(self, CatalogState::Pending)
    }

    pub fn is_loaded(&self) -> bool {
        matches!(self, CatalogState::Loaded(_))
    }

    pub fn catalog(&self) -> Option<&Catalog> {
        match self {
            CatalogState::Loaded(catalog) => Some(catalog),
            _ => None,
        }
    }

    pub fn error(&self) -> Option<&CatalogError> {
        match self {
            CatalogState::Failed(err) => Some(err),
            _ => None,
        }
    }

    /// Product list visible to the engines; empty unless loaded.
    pub fn products(&self) -> &[Product] {
        match self {
            CatalogState::Loaded(catalog) => catalog.products(),
            CatalogState::Pending | CatalogState::Failed(_) => &[],
        }
    }
}
