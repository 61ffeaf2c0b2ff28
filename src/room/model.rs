use std::{fmt, str::FromStr};

use crate::foundation::{
    core::{Axis, positive_mm},
    error::{LayoutError, LayoutResult},
};

#[derive(Clone, Copy, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(try_from = "RoomSpecDef")]
/// A validated rectangular room, dimensions in millimeters.
///
/// Fields are private so every `RoomSpec` in existence went through [`RoomSpec::new`]
/// (deserialization included).
pub struct RoomSpec {
    width: f64,
    length: f64,
}

#[derive(serde::Deserialize)]
struct RoomSpecDef {
    width: f64,
    length: f64,
}

impl TryFrom<RoomSpecDef> for RoomSpec {
    type Error = LayoutError;

    fn try_from(def: RoomSpecDef) -> LayoutResult<Self> {
        Self::new(def.width, def.length)
    }
}

impl RoomSpec {
    /// Validate and build a room. Both dimensions must be finite and `> 0`.
    pub fn new(width: f64, length: f64) -> LayoutResult<Self> {
        let width = positive_mm("room width", width).map_err(LayoutError::invalid_input)?;
        let length = positive_mm("room length", length).map_err(LayoutError::invalid_input)?;
        Ok(Self { width, length })
    }

    /// Room width (X extent).
    pub fn width(&self) -> f64 {
        self.width
    }

    /// Room length (Y extent).
    pub fn length(&self) -> f64 {
        self.length
    }

    /// Extent along `axis`.
    pub fn extent(&self, axis: Axis) -> f64 {
        match axis {
            Axis::Width => self.width,
            Axis::Length => self.length,
        }
    }

    /// Floor area in square meters.
    pub fn area_m2(&self) -> f64 {
        self.width * self.length / 1e6
    }

    /// Wall perimeter in millimeters.
    pub fn perimeter_mm(&self) -> f64 {
        2.0 * (self.width + self.length)
    }
}

#[derive(Clone, Copy, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(try_from = "TileModuleDef")]
/// Nominal tile size in millimeters, normalized so `width <= length`.
///
/// Any positive size can be represented; whether the solver knows how to tile it is decided at
/// solve time (see [`TileModule::supported`]).
pub struct TileModule {
    width: f64,
    length: f64,
}

#[derive(serde::Deserialize)]
struct TileModuleDef {
    width: f64,
    length: f64,
}

impl TryFrom<TileModuleDef> for TileModule {
    type Error = LayoutError;

    fn try_from(def: TileModuleDef) -> LayoutResult<Self> {
        Self::new(def.width, def.length)
    }
}

impl TileModule {
    /// 600x600 square module.
    pub const SQUARE_600: Self = Self {
        width: 600.0,
        length: 600.0,
    };

    /// 600x1200 elongated module.
    pub const RECT_600_1200: Self = Self {
        width: 600.0,
        length: 1200.0,
    };

    /// Validate and normalize a module; the shorter side becomes the width.
    pub fn new(a: f64, b: f64) -> LayoutResult<Self> {
        let a = positive_mm("module width", a).map_err(LayoutError::invalid_input)?;
        let b = positive_mm("module length", b).map_err(LayoutError::invalid_input)?;
        Ok(Self {
            width: a.min(b),
            length: a.max(b),
        })
    }

    /// Modules the solver has a tiling strategy for under the default grid settings.
    pub fn supported() -> [Self; 2] {
        [Self::SQUARE_600, Self::RECT_600_1200]
    }

    /// Short side.
    pub fn width(&self) -> f64 {
        self.width
    }

    /// Long side.
    pub fn length(&self) -> f64 {
        self.length
    }

    /// `true` when both sides are equal.
    pub fn is_square(&self) -> bool {
        self.width == self.length
    }
}

impl fmt::Display for TileModule {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}x{}", self.width, self.length)
    }
}

impl FromStr for TileModule {
    type Err = LayoutError;

    /// Parse `"600x1200"` (also accepts `X` or `*` as separator).
    fn from_str(s: &str) -> LayoutResult<Self> {
        let s = s.trim();
        let Some((a, b)) = s.split_once(['x', 'X', '*']) else {
            return Err(LayoutError::invalid_input(format!(
                "tile module '{s}' must look like 600x600"
            )));
        };
        let parse = |v: &str| {
            v.trim().parse::<f64>().map_err(|e| {
                LayoutError::invalid_input(format!("tile module '{s}': bad dimension '{v}': {e}"))
            })
        };
        Self::new(parse(a)?, parse(b)?)
    }
}

#[cfg(test)]
#[path = "../../tests/unit/room/model.rs"]
mod tests;
