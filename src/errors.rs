use std::sync::Arc;
use thiserror::Error;

/// Errors that can occur while building or rendering patterns
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum PatternError {
    /// A numeric parameter is zero or violates a shape constraint
    #[error("Invalid parameter: {field} - {message}")]
    InvalidParameter { field: Arc<String>, message: Arc<String> },

    /// An orientation or kind tag that no pattern understands
    #[error("Unsupported variant: {0}")]
    UnsupportedVariant(Arc<String>),

    /// A gallery file could not be located, read or parsed
    #[error("Configuration error: {0}")]
    Config(Arc<String>),
}

/// Type alias for Result with `PatternError`
pub type Result<T> = std::result::Result<T, PatternError>;

impl PatternError {
    /// Create a new invalid parameter error
    pub fn invalid_parameter(field: impl Into<String>, message: impl Into<String>) -> Self {
        Self::InvalidParameter {
            field: Arc::new(field.into()),
            message: Arc::new(message.into()),
        }
    }

    /// Create a new unsupported variant error
    pub fn unsupported_variant(tag: impl Into<String>) -> Self {
        Self::UnsupportedVariant(Arc::new(tag.into()))
    }

    /// Create a new configuration error
    pub fn config(message: impl Into<String>) -> Self {
        Self::Config(Arc::new(message.into()))
    }

    /// Whether the error comes from the parameters of a single pattern
    pub fn is_parameter_error(&self) -> bool {
        matches!(self, Self::InvalidParameter { .. } | Self::UnsupportedVariant(_))
    }
}

impl From<toml::de::Error> for PatternError {
    fn from(err: toml::de::Error) -> Self {
        Self::config(format!("Invalid TOML gallery: {err}"))
    }
}

impl From<serde_json::Error> for PatternError {
    fn from(err: serde_json::Error) -> Self {
        Self::config(format!("Invalid JSON gallery: {err}"))
    }
}

/// Reject a zero value for a parameter that must be positive
pub fn ensure_positive(field: &str, value: usize) -> Result<usize> {
    if value == 0 {
        return Err(PatternError::invalid_parameter(field, "must be a positive number"));
    }
    Ok(value)
}

/// Largest footprint, in cells, a single pattern may render
pub const MAX_CELLS: usize = 1 << 24;

/// Reject `value` when its `width x height` footprint exceeds [`MAX_CELLS`]
///
/// Callers compute the footprint with saturating arithmetic, so oversized
/// parameters land here instead of overflowing.
pub fn ensure_fits(field: &str, value: usize, width: usize, height: usize) -> Result<usize> {
    match width.checked_mul(height) {
        Some(cells) if cells <= MAX_CELLS => Ok(value),
        _ => Err(PatternError::invalid_parameter(
            field,
            format!("{value} is too large, the pattern would exceed {MAX_CELLS} cells"),
        )),
    }
}

/// Side of the square canvas around a circle of radius `size`
#[inline]
pub(crate) fn diameter(size: usize) -> usize {
    size.saturating_mul(2).saturating_add(1)
}

/// Reject values that are even or below `min`
pub fn ensure_odd_at_least(field: &str, value: usize, min: usize) -> Result<usize> {
    if value % 2 == 0 || value < min {
        return Err(PatternError::invalid_parameter(
            field,
            format!("must be an odd number and at least {min} for proper formation"),
        ));
    }
    Ok(value)
}
