//! Discrete events applied to engine state.

/// A domain-agnostic event.
///
/// Events are facts: once emitted they are applied as-is, in order, with no
/// further validation.
pub trait Event: Clone + core::fmt::Debug {
    /// Stable event name/type identifier (e.g. "cart.line.added").
    fn event_type(&self) -> &'static str;
}
