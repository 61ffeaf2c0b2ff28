use std::{collections::BTreeMap, fmt};

use crate::{
    foundation::core::{Axis, Orientation},
    foundation::math::stock_units,
    layout::settings::ShortTeePolicy,
    layout::solver::GridLayout,
    layout::structure::{CrossTee, PerimeterEdge},
};

#[derive(
    Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, serde::Serialize, serde::Deserialize,
)]
#[serde(rename_all = "snake_case")]
/// A stock item the installer has to order.
pub enum MaterialKind {
    /// Ceiling tiles, cut border tiles counted whole.
    Tile,
    /// Main runner sticks.
    MainRunnerStick,
    /// Full-length cross tees.
    LongTee,
    /// Half-length cross tees.
    ShortTee,
    /// Hanger wires.
    SuspensionWire,
    /// Wall angle sticks.
    PerimeterTrimStick,
}

impl MaterialKind {
    /// Every kind, in report order.
    pub const ALL: [Self; 6] = [
        Self::Tile,
        Self::MainRunnerStick,
        Self::LongTee,
        Self::ShortTee,
        Self::SuspensionWire,
        Self::PerimeterTrimStick,
    ];

    /// Human-readable label.
    pub fn label(self) -> &'static str {
        match self {
            Self::Tile => "tiles",
            Self::MainRunnerStick => "main runners",
            Self::LongTee => "long cross tees",
            Self::ShortTee => "short cross tees",
            Self::SuspensionWire => "suspension wires",
            Self::PerimeterTrimStick => "perimeter trims",
        }
    }
}

impl fmt::Display for MaterialKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

#[derive(Clone, Debug, PartialEq, Eq, serde::Serialize)]
#[serde(transparent)]
/// Stock counts per material kind.
pub struct MaterialBreakdown {
    counts: BTreeMap<MaterialKind, u32>,
}

impl MaterialBreakdown {
    /// Count for `kind` (`0` when absent).
    pub fn get(&self, kind: MaterialKind) -> u32 {
        self.counts.get(&kind).copied().unwrap_or(0)
    }

    /// All `(kind, count)` pairs in [`MaterialKind`] order.
    pub fn iter(&self) -> impl Iterator<Item = (MaterialKind, u32)> + '_ {
        self.counts.iter().map(|(&k, &v)| (k, v))
    }
}

#[derive(Clone, Copy, Debug, PartialEq, serde::Serialize)]
/// Room-level figures shown next to the material list.
pub struct RoomSummary {
    /// Floor area.
    pub area_m2: f64,
    /// Wall perimeter.
    pub perimeter_m: f64,
    /// Per-side border cut across the width.
    pub border_cut_width_mm: f64,
    /// Per-side border cut across the length.
    pub border_cut_length_mm: f64,
}

/// Derive stock counts from a solved layout.
///
/// Total: a [`GridLayout`] is valid by construction. Stick lengths and the short tee counting
/// policy come from the settings the layout was solved under.
#[tracing::instrument(skip_all)]
pub fn estimate(layout: &GridLayout) -> MaterialBreakdown {
    let settings = layout.settings();
    let room = layout.room();

    let tiles =
        layout.partition(Axis::Width).cell_count() * layout.partition(Axis::Length).cell_count();

    let runners = layout.runners();
    let per_row = stock_units(runners.span_mm(), settings.main_runner_stick_mm);
    let runner_sticks = per_row * runners.len() as u32;

    let tees = layout.cross_tees();
    let short = tees
        .short
        .iter()
        .filter(|t| counts_as_short_tee(t, settings.short_tee_policy))
        .count();

    let trims = stock_units(room.perimeter_mm(), settings.perimeter_trim_stick_mm);

    let counts = BTreeMap::from([
        (MaterialKind::Tile, tiles as u32),
        (MaterialKind::MainRunnerStick, runner_sticks),
        (MaterialKind::LongTee, tees.long.len() as u32),
        (MaterialKind::ShortTee, short as u32),
        (
            MaterialKind::SuspensionWire,
            layout.suspension_points().len() as u32,
        ),
        (MaterialKind::PerimeterTrimStick, trims),
    ]);
    tracing::debug!(?counts, "estimated materials");
    MaterialBreakdown { counts }
}

fn counts_as_short_tee(tee: &CrossTee, policy: ShortTeePolicy) -> bool {
    match policy {
        ShortTeePolicy::CountAll => true,
        ShortTeePolicy::ExcludeTrailingPerimeter => !(tee.orientation == Orientation::Vertical
            && tee.perimeter == Some(PerimeterEdge::Trailing)),
    }
}

/// Area, perimeter and border cuts of a solved layout.
pub fn summarize(layout: &GridLayout) -> RoomSummary {
    let room = layout.room();
    RoomSummary {
        area_m2: room.area_m2(),
        perimeter_m: room.perimeter_mm() / 1000.0,
        border_cut_width_mm: layout.border_cut(Axis::Width).per_side_mm,
        border_cut_length_mm: layout.border_cut(Axis::Length).per_side_mm,
    }
}

#[cfg(test)]
#[path = "../../tests/unit/estimate/quantities.rs"]
mod tests;
