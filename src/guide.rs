//! # ceilgrid guide
//!
//! A walkthrough of how a suspended-ceiling layout is computed and what each stage hands to the
//! next. For command-line usage run `ceilgrid --help`.
//!
//! ---
//!
//! ## Core concepts
//!
//! - [`RoomSpec`](crate::RoomSpec): a validated rectangular room (width is X, length is Y, mm)
//! - [`TileModule`](crate::TileModule): the nominal tile, normalized so `width <= length`
//! - [`GridSettings`](crate::GridSettings): border range, runner spacing, stick lengths
//! - [`GridLayout`](crate::GridLayout): the solved grid, the only artifact renderers read
//! - [`MaterialBreakdown`](crate::MaterialBreakdown): stock counts derived from a layout
//!
//! The pipeline has two stages and no hidden state:
//!
//! 1. Solve: [`solve`](crate::solve) / [`solve_with`](crate::solve_with)
//! 2. Estimate: [`estimate`](crate::estimate)
//!
//! ---
//!
//! ## Axis partitioning
//!
//! Each axis is split independently into a border cell, `n` whole modules and a second border
//! cell of the same width. `n` is the largest count whose border stays at or above
//! `min_border_mm` (301mm by default), and never less than one. If rounding still leaves the
//! border short the count drops by exactly one; there is no wider search.
//!
//! A border outside `[min_border_mm, max_border]` fails the solve with
//! [`LayoutError::ConstraintViolation`](crate::LayoutError::ConstraintViolation), naming the
//! axis and the measured cut. `max_border` defaults to one whole module on that axis, since a
//! border cell is a cut tile.
//!
//! The last interior boundary is computed as `extent - border`, never by adding module steps,
//! and every comparison uses [`EPSILON`](crate::EPSILON).
//!
//! ---
//!
//! ## Structure
//!
//! - **Main runners** run along the room length. They start at the width border and repeat every
//!   `runner_spacing_mm`; a closing runner is added at the far border once the leftover gap
//!   reaches `runner_end_clearance_mm`.
//! - **Cross tees** depend on the [`TilingStrategy`](crate::TilingStrategy):
//!   - `Subdivided` (600x600): long tees between runners on every row line, short tees on the
//!     tile lines between runners, and border-fitted short tees into the perimeter cells.
//!   - `LongTeesOnly` (600x1200, long side between runners): long tees only.
//!   - anything else is [`LayoutError::UnsupportedModule`](crate::LayoutError::UnsupportedModule).
//! - **Suspension points** follow every runner at `suspension_spacing_mm` with the same closing
//!   rule as the runners.
//!
//! ---
//!
//! ## Estimation
//!
//! [`estimate`](crate::estimate) is total. Border tiles count as whole tiles, each runner row is
//! cut from its own sticks, and trailing perimeter short tees on the length axis are left out
//! unless [`ShortTeePolicy::CountAll`](crate::ShortTeePolicy::CountAll) is set.
//!
//! To pick a module, [`compare_modules`](crate::compare_modules) solves every supported module
//! for a room in parallel.
