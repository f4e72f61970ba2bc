//! Values compared by their contents.

/// Marker for immutable values with no identity of their own.
///
/// `Money` is the canonical example: `Money::from_cents(100)` equals any other
/// one-dollar amount. Enums such as filing status or account kind qualify too.
pub trait ValueObject: Copy + PartialEq + core::fmt::Debug {}
