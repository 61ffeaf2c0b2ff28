use crate::foundation::core::Axis;

/// Convenience result type used across ceilgrid.
pub type LayoutResult<T> = Result<T, LayoutError>;

/// Which end of the admissible border range a border cut violated.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum BorderBound {
    /// The border cut is a sliver below the minimum.
    BelowMinimum,
    /// The border cut is wider than the maximum.
    AboveMaximum,
}

impl BorderBound {
    fn advice(self) -> &'static str {
        match self {
            Self::BelowMinimum => "below the minimum",
            Self::AboveMaximum => "above the maximum",
        }
    }

    fn remedy(self) -> &'static str {
        match self {
            Self::BelowMinimum => "increase",
            Self::AboveMaximum => "decrease",
        }
    }
}

/// Coarse error classification for programmatic handling.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ErrorKind {
    /// A room or module dimension is not a positive finite number.
    InvalidInput,
    /// A border cut falls outside the admissible range.
    ConstraintViolation,
    /// The tile module has no tiling strategy.
    UnsupportedModule,
    /// Grid settings are inconsistent.
    Config,
    /// A job or settings document could not be parsed.
    Serde,
    /// Lower-level failure (IO).
    Other,
}

/// Top-level error taxonomy used by the solver and its input layer.
#[derive(thiserror::Error, Debug)]
pub enum LayoutError {
    /// Non-numeric, non-finite or non-positive dimension.
    #[error("invalid input: {0}")]
    InvalidInput(String),

    /// The symmetric border cut on `axis` is outside the admissible range.
    #[error(
        "constraint violation: border cut on the room {axis} axis is {border_mm:.1}mm, {} of {limit_mm:.0}mm; {} the room {axis} or change the tile module",
        .bound.advice(),
        .bound.remedy()
    )]
    ConstraintViolation {
        /// Offending axis.
        axis: Axis,
        /// Measured per-side border cut.
        border_mm: f64,
        /// Value of the crossed bound.
        limit_mm: f64,
        /// Which bound was crossed.
        bound: BorderBound,
    },

    /// No tiling strategy is defined for this module.
    #[error("unsupported tile module {width_mm}x{length_mm}mm")]
    UnsupportedModule {
        /// Module short side.
        width_mm: f64,
        /// Module long side.
        length_mm: f64,
    },

    /// Invalid grid settings.
    #[error("config error: {0}")]
    Config(String),

    /// Errors when serializing or deserializing job documents.
    #[error("serialization error: {0}")]
    Serde(String),

    /// Wrapped lower-level error from IO.
    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

impl LayoutError {
    /// Build a [`LayoutError::InvalidInput`] value.
    pub fn invalid_input(msg: impl Into<String>) -> Self {
        Self::InvalidInput(msg.into())
    }

    /// Build a [`LayoutError::Config`] value.
    pub fn config(msg: impl Into<String>) -> Self {
        Self::Config(msg.into())
    }

    /// Build a [`LayoutError::Serde`] value.
    pub fn serde(msg: impl Into<String>) -> Self {
        Self::Serde(msg.into())
    }

    /// Classify this error.
    pub fn kind(&self) -> ErrorKind {
        match self {
            Self::InvalidInput(_) => ErrorKind::InvalidInput,
            Self::ConstraintViolation { .. } => ErrorKind::ConstraintViolation,
            Self::UnsupportedModule { .. } => ErrorKind::UnsupportedModule,
            Self::Config(_) => ErrorKind::Config,
            Self::Serde(_) => ErrorKind::Serde,
            Self::Other(_) => ErrorKind::Other,
        }
    }
}

#[cfg(test)]
#[path = "../../tests/unit/foundation/error.rs"]
mod tests;
