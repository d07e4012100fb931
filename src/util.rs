/// Numeric conversion helpers.
///
/// This module provides safe functions for converting between integer and
/// floating-point types without silent data loss, the floor division the
/// `divide` operator uses on integers, and the translation of 1-based list
/// indices to offsets.
///
/// All fallible functions return a `Result` carrying a `RuntimeError` tagged
/// with the source line.
pub mod num;
