//! Error types for strip configuration and control commands.
//!
//! Pointer input itself never errors: a press that misses every divider or a
//! move while idle simply has no effect. Errors here come from the
//! configuration and policy-selection surface.

/// Errors from strip construction and control commands.
#[derive(Debug, Clone, PartialEq)]
pub enum StripError {
    /// A strip must contain at least one track.
    EmptyStrip,
    /// Total extent, cross extent, and minimum size must be positive.
    NonPositiveExtent,
    /// The per-track floor does not fit the total extent.
    FloorOverflow { required: f32, available: f32 },
    /// Binary split resizing needs a power-of-two track count.
    BspTrackCount { count: usize },
    /// Unrecognized resize-style name.
    UnknownStyle { name: String },
}

impl std::fmt::Display for StripError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            StripError::EmptyStrip => write!(f, "strip needs at least one track"),
            StripError::NonPositiveExtent => {
                write!(f, "extents and minimum track size must be positive")
            }
            StripError::FloorOverflow {
                required,
                available,
            } => write!(
                f,
                "minimum track sizes need {required} but only {available} is available"
            ),
            StripError::BspTrackCount { count } => write!(
                f,
                "binary split resizing needs a power-of-two track count, got {count}"
            ),
            StripError::UnknownStyle { name } => {
                write!(f, "unknown resize style {name:?}")
            }
        }
    }
}

impl std::error::Error for StripError {}

/// Result type for strip operations.
pub type StripResult<T> = Result<T, StripError>;
