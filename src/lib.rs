//! ceilgrid computes suspended-ceiling grid layouts and the materials they consume.
//!
//! Given a rectangular room and a tile module it places tiles with balanced border cuts, derives
//! the main runner and cross tee grid that carries them, positions the hanger wires, and turns
//! the result into a bill of quantities.
//!
//! # Pipeline overview
//!
//! 1. **Solve**: `RoomSpec + TileModule -> GridLayout` ([`solve`], [`solve_with`])
//! 2. **Estimate**: `GridLayout -> MaterialBreakdown` ([`estimate`])
//!
//! Both stages are pure: inputs are immutable, outputs are built in one piece, and independent
//! solves can run on any thread.
//!
//! See [`crate::guide`] for the layout rules in detail.
#![forbid(unsafe_code)]
#![warn(missing_docs)]

mod estimate;
mod foundation;
mod layout;
mod room;

/// Layout rules and architecture walkthrough.
pub mod guide;

pub use estimate::compare::{ModuleOption, compare_modules};
pub use estimate::quantities::{
    MaterialBreakdown, MaterialKind, RoomSummary, estimate, summarize,
};
pub use foundation::core::{Axis, EPSILON, Line, Orientation, Point, Rect};
pub use foundation::error::{BorderBound, ErrorKind, LayoutError, LayoutResult};
pub use layout::partition::{AxisPartition, BorderCut};
pub use layout::settings::{GridSettings, ShortTeePolicy};
pub use layout::solver::{GridLayout, solve, solve_with};
pub use layout::structure::{
    CrossTee, CrossTeeSet, PerimeterEdge, RunnerSet, SuspensionPoint, TeeClass, TilingStrategy,
};
pub use room::job::CeilingJob;
pub use room::model::{RoomSpec, TileModule};
