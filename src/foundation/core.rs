use std::fmt;

pub use kurbo::{Line, Point, Rect};

/// Tolerance for every positional comparison, in millimeters.
pub const EPSILON: f64 = 1e-6;

/// One of the two room axes.
///
/// `Width` is the X axis (main runners are spaced along it), `Length` is the Y axis
/// (main runners span along it).
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Axis {
    /// Room width, X.
    Width,
    /// Room length, Y.
    Length,
}

impl fmt::Display for Axis {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Width => f.write_str("width"),
            Self::Length => f.write_str("length"),
        }
    }
}

/// Direction a segment runs in plan view.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Orientation {
    /// Runs along X, at constant Y.
    Horizontal,
    /// Runs along Y, at constant X.
    Vertical,
}

/// Ensure a dimension is a usable length in millimeters.
pub(crate) fn positive_mm(what: &str, v: f64) -> Result<f64, String> {
    if !v.is_finite() {
        return Err(format!("{what} must be a finite number, got {v}"));
    }
    if v <= 0.0 {
        return Err(format!("{what} must be > 0mm, got {v}"));
    }
    Ok(v)
}

#[cfg(test)]
#[path = "../../tests/unit/foundation/core.rs"]
mod tests;
