use rayon::prelude::*;

use crate::{
    estimate::quantities::{MaterialBreakdown, estimate},
    foundation::error::LayoutResult,
    layout::settings::GridSettings,
    layout::solver::{GridLayout, solve_with},
    room::model::{RoomSpec, TileModule},
};

#[derive(Debug)]
/// Outcome of solving one candidate module.
pub struct ModuleOption {
    /// The candidate.
    pub module: TileModule,
    /// Layout and materials, or why the module does not fit the room.
    pub outcome: LayoutResult<(GridLayout, MaterialBreakdown)>,
}

/// Solve `room` once per supported module, in parallel.
///
/// Solves share nothing, so results are independent of scheduling and come back in
/// [`TileModule::supported`] order.
pub fn compare_modules(room: RoomSpec, settings: &GridSettings) -> Vec<ModuleOption> {
    TileModule::supported()
        .into_par_iter()
        .map(|module| {
            let outcome = solve_with(room, module, settings).map(|layout| {
                let materials = estimate(&layout);
                (layout, materials)
            });
            ModuleOption { module, outcome }
        })
        .collect()
}

#[cfg(test)]
#[path = "../../tests/unit/estimate/compare.rs"]
mod tests;
