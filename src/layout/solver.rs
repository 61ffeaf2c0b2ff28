use crate::{
    foundation::core::{Axis, Line, Rect},
    foundation::error::LayoutResult,
    layout::partition::{AxisPartition, BorderCut, partition_axis},
    layout::settings::GridSettings,
    layout::structure::{
        CrossTeeSet, RunnerSet, SuspensionPoint, TilingStrategy, derive_cross_tees,
        place_runners, place_suspension_points,
    },
    room::model::{RoomSpec, TileModule},
};

#[derive(Clone, Debug, PartialEq, serde::Serialize)]
/// A solved ceiling grid.
///
/// Built in one piece by [`solve`] / [`solve_with`]; there is no way to obtain a partially
/// solved layout. Rendering and estimation read it, nothing mutates it.
pub struct GridLayout {
    room: RoomSpec,
    module: TileModule,
    strategy: TilingStrategy,
    settings: GridSettings,
    width_axis: AxisPartition,
    length_axis: AxisPartition,
    runners: RunnerSet,
    cross_tees: CrossTeeSet,
    suspension_points: Vec<SuspensionPoint>,
}

impl GridLayout {
    /// The room that was solved.
    pub fn room(&self) -> &RoomSpec {
        &self.room
    }

    /// The tile module that was laid.
    pub fn module(&self) -> &TileModule {
        &self.module
    }

    /// Strategy chosen for the module.
    pub fn strategy(&self) -> TilingStrategy {
        self.strategy
    }

    /// Settings the layout was solved under.
    pub fn settings(&self) -> &GridSettings {
        &self.settings
    }

    /// Partition of `axis`.
    pub fn partition(&self, axis: Axis) -> &AxisPartition {
        match axis {
            Axis::Width => &self.width_axis,
            Axis::Length => &self.length_axis,
        }
    }

    /// Border cut of `axis`.
    pub fn border_cut(&self, axis: Axis) -> BorderCut {
        self.partition(axis).border()
    }

    /// Main runners.
    pub fn runners(&self) -> &RunnerSet {
        &self.runners
    }

    /// Long and short cross tees.
    pub fn cross_tees(&self) -> &CrossTeeSet {
        &self.cross_tees
    }

    /// Hanger attachment points, runner by runner.
    pub fn suspension_points(&self) -> &[SuspensionPoint] {
        &self.suspension_points
    }

    /// Every tile cell, row by row, border cells included.
    pub fn tile_cells(&self) -> impl Iterator<Item = Rect> + '_ {
        self.length_axis.cells().flat_map(move |(y0, y1)| {
            self.width_axis
                .cells()
                .map(move |(x0, x1)| Rect::new(x0, y0, x1, y1))
        })
    }

    /// Each runner as a wall-to-wall line.
    pub fn runner_lines(&self) -> impl Iterator<Item = Line> + '_ {
        self.runners.lines()
    }
}

/// Solve a layout with default [`GridSettings`].
pub fn solve(room: RoomSpec, module: TileModule) -> LayoutResult<GridLayout> {
    solve_with(room, module, &GridSettings::default())
}

/// Solve a layout: partition both axes, place runners, derive cross tees, hang the grid.
///
/// Fails with `UnsupportedModule` before any geometry is computed, and with
/// `ConstraintViolation` for the first axis (width, then length) whose border cut is out of
/// range.
#[tracing::instrument(skip_all, fields(room_width = room.width(), room_length = room.length(), module = %module))]
pub fn solve_with(
    room: RoomSpec,
    module: TileModule,
    settings: &GridSettings,
) -> LayoutResult<GridLayout> {
    settings.validate()?;
    let strategy = TilingStrategy::for_module(&module, settings)?;
    let (module_x, module_y) = strategy.module_extents(&module);
    settings.check_border_range(Axis::Width, module_x)?;
    settings.check_border_range(Axis::Length, module_y)?;

    let width_axis = partition_axis(Axis::Width, room.width(), module_x, settings)?;
    let length_axis = partition_axis(Axis::Length, room.length(), module_y, settings)?;

    let runners = place_runners(&width_axis, room.length(), settings);
    let cross_tees = derive_cross_tees(strategy, &width_axis, &length_axis, &runners, settings);
    let suspension_points = place_suspension_points(&runners, &length_axis, settings);

    tracing::debug!(
        ?strategy,
        runners = runners.len(),
        long_tees = cross_tees.long.len(),
        short_tees = cross_tees.short.len(),
        suspension_points = suspension_points.len(),
        "solved grid"
    );

    Ok(GridLayout {
        room,
        module,
        strategy,
        settings: settings.clone(),
        width_axis,
        length_axis,
        runners,
        cross_tees,
        suspension_points,
    })
}

#[cfg(test)]
#[path = "../../tests/unit/layout/solver.rs"]
mod tests;
