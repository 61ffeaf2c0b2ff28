use crate::{
    foundation::core::{EPSILON, Line, Orientation, Point},
    foundation::error::{LayoutError, LayoutResult},
    foundation::math::{approx_eq, strided_positions},
    layout::partition::AxisPartition,
    layout::settings::GridSettings,
    room::model::TileModule,
};

/// Where a hanger wire attaches to a main runner, in room coordinates.
pub type SuspensionPoint = Point;

#[derive(Clone, Copy, Debug, PartialEq, Eq, serde::Serialize)]
#[serde(rename_all = "snake_case")]
/// How a module is carried by the runner grid.
pub enum TilingStrategy {
    /// Square module of half the runner spacing: long tees across runners, short tees between
    /// them.
    Subdivided,
    /// Elongated module whose long side equals the runner spacing: long tees only.
    LongTeesOnly,
}

impl TilingStrategy {
    /// Pick the strategy for `module`, refusing anything unrecognized.
    pub fn for_module(module: &TileModule, settings: &GridSettings) -> LayoutResult<Self> {
        let half = settings.short_tee_mm();
        let (w, l) = (module.width(), module.length());
        if approx_eq(w, half) && approx_eq(l, half) {
            Ok(Self::Subdivided)
        } else if approx_eq(w, half) && approx_eq(l, settings.runner_spacing_mm) {
            Ok(Self::LongTeesOnly)
        } else {
            Err(LayoutError::UnsupportedModule {
                width_mm: w,
                length_mm: l,
            })
        }
    }

    /// Module extent laid along `(width axis, length axis)`.
    ///
    /// An elongated module spans between runners with its long side.
    pub fn module_extents(self, module: &TileModule) -> (f64, f64) {
        match self {
            Self::Subdivided => (module.width(), module.length()),
            Self::LongTeesOnly => (module.length(), module.width()),
        }
    }
}

#[derive(Clone, Debug, PartialEq, serde::Serialize)]
/// Main runner X offsets; each runner spans the full room length.
pub struct RunnerSet {
    spacing_mm: f64,
    span_mm: f64,
    offsets: Vec<f64>,
}

impl RunnerSet {
    /// X offsets, strictly increasing.
    pub fn offsets(&self) -> &[f64] {
        &self.offsets
    }

    /// Number of runner rows.
    pub fn len(&self) -> usize {
        self.offsets.len()
    }

    /// `true` when no runner was placed.
    pub fn is_empty(&self) -> bool {
        self.offsets.is_empty()
    }

    /// Nominal spacing between runners.
    pub fn spacing_mm(&self) -> f64 {
        self.spacing_mm
    }

    /// Length of each runner row (the room length).
    pub fn span_mm(&self) -> f64 {
        self.span_mm
    }

    /// `true` when a runner sits at `x`.
    pub fn contains(&self, x: f64) -> bool {
        self.offsets.iter().any(|&o| approx_eq(o, x))
    }

    /// Each runner as a wall-to-wall line.
    pub fn lines(&self) -> impl Iterator<Item = Line> + '_ {
        self.offsets
            .iter()
            .map(|&x| Line::new((x, 0.0), (x, self.span_mm)))
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, serde::Serialize)]
#[serde(rename_all = "snake_case")]
/// Stock length class of a cross tee.
pub enum TeeClass {
    /// Full length, bridging two adjacent runners.
    Long,
    /// Half length.
    Short,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, serde::Serialize)]
#[serde(rename_all = "snake_case")]
/// Which room wall a perimeter-fitted tee runs to.
pub enum PerimeterEdge {
    /// Towards coordinate `0`.
    Leading,
    /// Towards the room extent.
    Trailing,
}

#[derive(Clone, Copy, Debug, PartialEq, serde::Serialize)]
/// One positioned cross tee segment.
pub struct CrossTee {
    /// Length class.
    pub class: TeeClass,
    /// Direction of the segment.
    pub orientation: Orientation,
    /// Constant coordinate: Y for horizontal tees, X for vertical ones.
    pub at_mm: f64,
    /// Segment start along its running direction.
    pub start_mm: f64,
    /// Segment end along its running direction.
    pub end_mm: f64,
    /// Set for tees fitted into a border cell.
    pub perimeter: Option<PerimeterEdge>,
}

impl CrossTee {
    /// Installed length.
    pub fn length_mm(&self) -> f64 {
        self.end_mm - self.start_mm
    }

    /// Segment in room coordinates.
    pub fn line(&self) -> Line {
        match self.orientation {
            Orientation::Horizontal => {
                Line::new((self.start_mm, self.at_mm), (self.end_mm, self.at_mm))
            }
            Orientation::Vertical => {
                Line::new((self.at_mm, self.start_mm), (self.at_mm, self.end_mm))
            }
        }
    }
}

#[derive(Clone, Debug, Default, PartialEq, serde::Serialize)]
/// All cross tees of a layout, split by length class.
pub struct CrossTeeSet {
    /// Full-length tees.
    pub long: Vec<CrossTee>,
    /// Half-length and perimeter-fitted tees.
    pub short: Vec<CrossTee>,
}

pub(crate) fn place_runners(
    x: &AxisPartition,
    span_mm: f64,
    settings: &GridSettings,
) -> RunnerSet {
    let offsets = strided_positions(
        x.interior_start(),
        x.interior_end(),
        settings.runner_spacing_mm,
        settings.runner_end_clearance_mm,
    );
    RunnerSet {
        spacing_mm: settings.runner_spacing_mm,
        span_mm,
        offsets,
    }
}

pub(crate) fn derive_cross_tees(
    strategy: TilingStrategy,
    x: &AxisPartition,
    y: &AxisPartition,
    runners: &RunnerSet,
    settings: &GridSettings,
) -> CrossTeeSet {
    let long_len = settings.long_tee_mm();
    let short_len = settings.short_tee_mm();
    let subdivided = strategy == TilingStrategy::Subdivided;
    let mut tees = CrossTeeSet::default();

    // Tiles between the last runner and the far border are carried by the border line itself.
    let mut supports = runners.offsets().to_vec();
    let far = x.interior_end();
    if let Some(&last) = supports.last() {
        if last < far - EPSILON {
            supports.push(far);
        }
    }

    for &row in y.internal_lines() {
        for w in supports.windows(2) {
            let gap = w[1] - w[0];
            let class = if approx_eq(gap, long_len) {
                TeeClass::Long
            } else if subdivided && gap <= short_len + EPSILON {
                TeeClass::Short
            } else {
                continue;
            };
            let tee = CrossTee {
                class,
                orientation: Orientation::Horizontal,
                at_mm: row,
                start_mm: w[0],
                end_mm: w[1],
                perimeter: None,
            };
            match class {
                TeeClass::Long => tees.long.push(tee),
                TeeClass::Short => tees.short.push(tee),
            }
        }
        if subdivided {
            push_perimeter_pair(&mut tees.short, Orientation::Horizontal, row, x, short_len);
        }
    }

    if subdivided {
        for &col in x.internal_lines() {
            if runners.contains(col) {
                continue;
            }
            for (start, end) in y.cells() {
                if start < y.interior_start() - EPSILON || end > y.interior_end() + EPSILON {
                    continue;
                }
                tees.short.push(CrossTee {
                    class: TeeClass::Short,
                    orientation: Orientation::Vertical,
                    at_mm: col,
                    start_mm: start,
                    end_mm: end,
                    perimeter: None,
                });
            }
            push_perimeter_pair(&mut tees.short, Orientation::Vertical, col, y, short_len);
        }
    }

    tees
}

/// Border-fitted short tees at both ends of a line, when the border is short enough for one.
fn push_perimeter_pair(
    out: &mut Vec<CrossTee>,
    orientation: Orientation,
    at_mm: f64,
    across: &AxisPartition,
    short_len: f64,
) {
    let border = across.border();
    if !border.is_present() || border.per_side_mm > short_len + EPSILON {
        return;
    }
    let extent = across.extent_mm();
    for (start_mm, end_mm, edge) in [
        (0.0, border.per_side_mm, PerimeterEdge::Leading),
        (extent - border.per_side_mm, extent, PerimeterEdge::Trailing),
    ] {
        out.push(CrossTee {
            class: TeeClass::Short,
            orientation,
            at_mm,
            start_mm,
            end_mm,
            perimeter: Some(edge),
        });
    }
}

pub(crate) fn place_suspension_points(
    runners: &RunnerSet,
    y: &AxisPartition,
    settings: &GridSettings,
) -> Vec<SuspensionPoint> {
    let along = strided_positions(
        y.interior_start(),
        y.interior_end(),
        settings.suspension_spacing_mm,
        settings.runner_end_clearance_mm,
    );
    runners
        .offsets()
        .iter()
        .flat_map(|&x| along.iter().map(move |&y| Point::new(x, y)))
        .collect()
}

#[cfg(test)]
#[path = "../../tests/unit/layout/structure.rs"]
mod tests;
