use crate::{
    foundation::core::{Axis, EPSILON},
    foundation::error::{BorderBound, LayoutError, LayoutResult},
    layout::settings::GridSettings,
};

#[derive(Clone, Copy, Debug, PartialEq, serde::Serialize)]
/// Per-side leftover on one axis; both sides of the axis are cut to the same width.
pub struct BorderCut {
    /// Axis the cut belongs to.
    pub axis: Axis,
    /// Width of each border cell, `0` when the module tiles the axis exactly.
    pub per_side_mm: f64,
}

impl BorderCut {
    /// `true` when the axis has border cells.
    pub fn is_present(&self) -> bool {
        self.per_side_mm > EPSILON
    }
}

#[derive(Clone, Debug, PartialEq, serde::Serialize)]
/// Cut positions along one axis: `0`, the border, every module step, the far border, the extent.
///
/// Positions are strictly increasing; interior gaps equal the module extent within
/// [`EPSILON`].
pub struct AxisPartition {
    axis: Axis,
    extent_mm: f64,
    module_mm: f64,
    interior_cells: u32,
    border: BorderCut,
    positions: Vec<f64>,
}

impl AxisPartition {
    /// Axis this partition covers.
    pub fn axis(&self) -> Axis {
        self.axis
    }

    /// Room extent on this axis.
    pub fn extent_mm(&self) -> f64 {
        self.extent_mm
    }

    /// Module extent used as the interior step.
    pub fn module_mm(&self) -> f64 {
        self.module_mm
    }

    /// Number of full-module cells between the borders.
    pub fn interior_cells(&self) -> u32 {
        self.interior_cells
    }

    /// The symmetric border cut.
    pub fn border(&self) -> BorderCut {
        self.border
    }

    /// All cut positions, `0` and the extent included.
    pub fn positions(&self) -> &[f64] {
        &self.positions
    }

    /// Cut positions strictly inside the room (the internal grid lines).
    pub fn internal_lines(&self) -> &[f64] {
        let n = self.positions.len();
        &self.positions[1..n - 1]
    }

    /// Number of cells, border cells included.
    pub fn cell_count(&self) -> usize {
        self.positions.len() - 1
    }

    /// Every cell as `(start, end)`.
    pub fn cells(&self) -> impl Iterator<Item = (f64, f64)> + '_ {
        self.positions.windows(2).map(|w| (w[0], w[1]))
    }

    /// Start of the first interior cell.
    pub fn interior_start(&self) -> f64 {
        self.border.per_side_mm
    }

    /// End of the last interior cell, computed from the extent rather than accumulated.
    pub fn interior_end(&self) -> f64 {
        self.extent_mm - self.border.per_side_mm
    }
}

/// Partition one room axis into border and interior cells.
///
/// Picks the largest interior cell count whose symmetric border is at least the configured
/// minimum, corrects once if rounding left the border short, then checks the border against the
/// admissible range. At least one interior cell is always required.
pub(crate) fn partition_axis(
    axis: Axis,
    extent_mm: f64,
    module_mm: f64,
    settings: &GridSettings,
) -> LayoutResult<AxisPartition> {
    let (min_border, max_border) = settings.border_range(module_mm);

    let mut n = ((extent_mm - 2.0 * min_border) / module_mm).floor().max(1.0);
    let mut border = (extent_mm - n * module_mm) / 2.0;
    if border < min_border - EPSILON && n > 1.0 {
        n -= 1.0;
        border = (extent_mm - n * module_mm) / 2.0;
    }

    if border.abs() > EPSILON {
        let violated = if border < min_border - EPSILON {
            Some((BorderBound::BelowMinimum, min_border))
        } else if border > max_border + EPSILON {
            Some((BorderBound::AboveMaximum, max_border))
        } else {
            None
        };
        if let Some((bound, limit_mm)) = violated {
            tracing::warn!(%axis, extent_mm, module_mm, border_mm = border, ?bound, "border cut out of range");
            return Err(LayoutError::ConstraintViolation {
                axis,
                border_mm: border,
                limit_mm,
                bound,
            });
        }
    } else {
        border = 0.0;
    }

    let interior_cells = n as u32;
    let mut positions = Vec::with_capacity(interior_cells as usize + 3);
    positions.push(0.0);
    push_distinct(&mut positions, border);
    for k in 1..interior_cells {
        push_distinct(&mut positions, border + f64::from(k) * module_mm);
    }
    push_distinct(&mut positions, extent_mm - border);
    push_distinct(&mut positions, extent_mm);

    tracing::debug!(
        %axis,
        extent_mm,
        module_mm,
        interior_cells,
        border_mm = border,
        "partitioned axis"
    );

    Ok(AxisPartition {
        axis,
        extent_mm,
        module_mm,
        interior_cells,
        border: BorderCut {
            axis,
            per_side_mm: border,
        },
        positions,
    })
}

fn push_distinct(positions: &mut Vec<f64>, p: f64) {
    match positions.last() {
        Some(&last) if p <= last + EPSILON => {}
        _ => positions.push(p),
    }
}

#[cfg(test)]
#[path = "../../tests/unit/layout/partition.rs"]
mod tests;
