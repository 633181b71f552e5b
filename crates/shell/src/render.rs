//! Plain-text rendering of session state.

use std::fmt::Write;

use storefront_catalog::CatalogState;

use crate::session::Session;

pub fn status_line(session: &Session) -> String {
    let filters = session.filters();
    let max = filters
        .max_price
        .map(|p| p.to_string())
        .unwrap_or_else(|| "none".to_string());
    format!(
        "[{} shown | search '{}' | price {}..{} | category {} | sort {} | cart {}]",
        session.view().len(),
        filters.name_query,
        filters.min_price,
        max,
        filters.category,
        session.sort(),
        session.total_item_count(),
    )
}

pub fn catalog_status(state: &CatalogState) -> String {
    match state {
        CatalogState::Pending => "Loading catalog...".to_string(),
        CatalogState::Loaded(catalog) => format!("Loaded {} products.", catalog.len()),
        CatalogState::Failed(_) => "Something went wrong ...".to_string(),
    }
}

pub fn view(session: &Session) -> String {
    if session.view().is_empty() {
        return "No products match the current filters.".to_string();
    }
    let mut out = String::new();
    for product in session.view() {
        let _ = writeln!(
            out,
            "{:>4}  {:>9}  {:<18}  {}",
            product.id, product.price, product.category, product.title
        );
    }
    out.trim_end().to_string()
}

pub fn cart(session: &Session) -> String {
    let cart = session.cart();
    if cart.is_empty() {
        return "Your cart is empty.".to_string();
    }
    let mut out = String::new();
    for line in cart.lines() {
        let _ = writeln!(
            out,
            "{:>4}  x{:<3}  {:>9.2}  {}",
            line.product_id(),
            line.quantity(),
            line.subtotal(),
            line.product().title
        );
    }
    let _ = write!(
        out,
        "{} items, total {:.2}",
        cart.total_item_count(),
        cart.total_price()
    );
    out
}

pub fn categories(session: &Session) -> String {
    match session.catalog().catalog() {
        Some(catalog) if !catalog.is_empty() => {
            let mut names = vec!["all"];
            names.extend(catalog.categories());
            names.join(", ")
        }
        _ => "No categories available.".to_string(),
    }
}
