//! Cart engine.
//!
//! Owns the mutable cart: one line per product identity, each carrying the
//! product's attributes and a quantity of at least one. Lines keep insertion
//! order for stable display.

pub mod cart;
pub mod shared;

pub use cart::{
    Cart, CartCommand, CartEvent, CartLine, LineAdded, LineRemoved, QuantityDecremented,
    QuantityIncremented,
};
pub use shared::SharedCart;
