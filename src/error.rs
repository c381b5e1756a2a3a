//! Error types returned by the layout and configuration entry points.
//!
//! Pointer misses are not errors: every hit-test returns `Option<Address>`
//! and a miss is the ordinary `None` result.

#[cfg(test)]
#[path = "error_test.rs"]
mod error_test;

/// Error returned by [`crate::affine::AffineTransform::set_matrix`] and the
/// layout policy when the requested geometry cannot be installed.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum LayoutError {
    /// Zero, negative or non-finite dimensions, or a degenerate scale.
    #[error("invalid layout: {reason}")]
    InvalidLayout { reason: String },
}

impl LayoutError {
    pub(crate) fn invalid(reason: impl Into<String>) -> Self {
        Self::InvalidLayout { reason: reason.into() }
    }
}

/// Error returned while building a [`crate::config::GlobalConfig`].
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ConfigError {
    /// An environment override could not be parsed.
    #[error("config parse failed: {key}={value}")]
    Parse { key: &'static str, value: String },
    /// The persisted hand layout integer is neither 1 nor 2.
    #[error("unknown hand layout version: {0}")]
    UnknownLayoutVersion(i32),
}
