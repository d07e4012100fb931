/// Aggregates over numeric lists: `sum`, `max`, `min` and `average`.
pub mod aggregate;

/// Type conversions and inspection: `str`, `int`, `float`, `bool`, `type` and
/// `is_bool`.
pub mod convert;

/// The `Builtin` enum, name lookup and dispatch.
pub mod core;

/// Operations on lists and text: `len`, `sorted`, `reversed`, `first`,
/// `last`, `all`, `any`, `empty` and `contains`.
pub mod sequence;
