/// Ordering and equality between values.
///
/// Implements the comparison rules used by conditions, `max`, `min`,
/// `sorted` and `contains`: numbers compare numerically across integer and
/// float, text lexicographically, lists element by element, and mismatched
/// shapes are a type error.
pub mod compare;

/// The runtime value domain.
///
/// Defines the `Value` enum, its conversions, truthiness, and the
/// stringification used by `output` and `str`.
pub mod core;
