//! Value object trait: equality by value, not identity.

/// Marker trait for value objects.
///
/// Value objects have **no identity**: they are defined entirely by their
/// attribute values and are immutable. To "modify" one, build a new one.
///
/// - `Price(10.0)` is a value object
/// - `Product { id: ProductId(3), .. }` is an entity
///
/// ```ignore
/// #[derive(Debug, Clone, PartialEq)]
/// struct Price(f64);
///
/// impl ValueObject for Price {}
///
/// assert_eq!(Price(10.0), Price(10.0));
/// ```
pub trait ValueObject: Clone + PartialEq + core::fmt::Debug {}
