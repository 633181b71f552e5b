//! Synchronous apply-then-rerender loop over the three engines.

use storefront_cart::{Cart, CartLine};
use storefront_catalog::{CatalogError, CatalogState, Price, Product};
use storefront_core::{Event, ProductId};
use storefront_view::{CategoryFilter, FilterCriteria, SortOrder, ViewEngine};

/// Discrete user interaction.
#[derive(Debug, Clone, PartialEq)]
pub enum UiEvent {
    SetNameQuery(String),
    SetMinPrice(Price),
    SetMaxPrice(Option<Price>),
    SetCategory(CategoryFilter),
    SetSort(SortOrder),
    AddToCart(ProductId),
    RemoveFromCart(ProductId),
}

impl Event for UiEvent {
    fn event_type(&self) -> &'static str {
        match self {
            UiEvent::SetNameQuery(_) => "ui.filter.name_query",
            UiEvent::SetMinPrice(_) => "ui.filter.min_price",
            UiEvent::SetMaxPrice(_) => "ui.filter.max_price",
            UiEvent::SetCategory(_) => "ui.filter.category",
            UiEvent::SetSort(_) => "ui.sort",
            UiEvent::AddToCart(_) => "ui.cart.add",
            UiEvent::RemoveFromCart(_) => "ui.cart.remove",
        }
    }
}

/// What a dispatched event changed.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Applied {
    /// Criteria changed; the view was recomputed.
    View,
    /// The cart changed.
    Cart,
    /// Nothing changed (absent cart line, or a product not in the catalog).
    Ignored,
}

/// One user's browsing session.
///
/// Owns the catalog state, the view criteria, the cart and the last derived
/// view. Every event is applied to completion before the next.
#[derive(Debug, Clone, Default)]
pub struct Session {
    catalog: CatalogState,
    view_engine: ViewEngine,
    cart: Cart,
    view: Vec<Product>,
}

impl Session {
    pub fn new() -> Self {
        Self::default()
    }

    /// Record the fetch outcome and derive the first view from it.
    pub fn resolve_catalog(&mut self, result: Result<Vec<Product>, CatalogError>) {
        self.catalog.resolve(result);
        self.recompute_view();
    }

    pub fn dispatch(&mut self, event: UiEvent) -> Applied {
        let event_type = event.event_type();

        let applied = match event {
            UiEvent::SetNameQuery(query) => {
                self.view_engine.set_name_query(query);
                Applied::View
            }
            UiEvent::SetMinPrice(price) => {
                self.view_engine.set_min_price(price);
                Applied::View
            }
            UiEvent::SetMaxPrice(price) => {
                self.view_engine.set_max_price(price);
                Applied::View
            }
            UiEvent::SetCategory(category) => {
                self.view_engine.set_category(category);
                Applied::View
            }
            UiEvent::SetSort(sort) => {
                self.view_engine.set_sort(sort);
                Applied::View
            }
            UiEvent::AddToCart(product_id) => self.add_to_cart(product_id),
            UiEvent::RemoveFromCart(product_id) => {
                if self.cart.remove_item(product_id) {
                    Applied::Cart
                } else {
                    Applied::Ignored
                }
            }
        };

        if applied == Applied::View {
            self.recompute_view();
        }

        tracing::debug!(
            event_type,
            ?applied,
            view_len = self.view.len(),
            cart_items = self.cart.total_item_count(),
            "ui event applied"
        );

        applied
    }

    fn add_to_cart(&mut self, product_id: ProductId) -> Applied {
        let Some(product) = self.catalog.catalog().and_then(|c| c.get(product_id)) else {
            tracing::warn!(%product_id, "add to cart ignored: product not in catalog");
            return Applied::Ignored;
        };
        self.cart.add_item(product.clone());
        Applied::Cart
    }

    fn recompute_view(&mut self) {
        self.view = self.view_engine.compute(self.catalog.products());
    }

    pub fn catalog(&self) -> &CatalogState {
        &self.catalog
    }

    pub fn view(&self) -> &[Product] {
        &self.view
    }

    pub fn filters(&self) -> &FilterCriteria {
        self.view_engine.filters()
    }

    pub fn sort(&self) -> SortOrder {
        self.view_engine.sort()
    }

    pub fn cart(&self) -> &Cart {
        &self.cart
    }

    pub fn cart_lines(&self) -> &[CartLine] {
        self.cart.lines()
    }

    pub fn total_item_count(&self) -> u64 {
        self.cart.total_item_count()
    }
}
