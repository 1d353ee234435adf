//! Domain-wide constants

/// Number of recommendations returned when the caller does not override it
pub const DEFAULT_TOP_N: usize = 10;

/// Separator placed between a course name and its description when deriving
/// the text that gets embedded
pub const EMBEDDING_TEXT_SEPARATOR: &str = " ";
