use crate::foundation::{
    core::{Axis, positive_mm},
    error::{LayoutError, LayoutResult},
};

/// Smallest runner or suspension spacing accepted.
pub(crate) const MIN_SPACING_MM: f64 = 1.0;

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "snake_case")]
/// How the estimator counts perimeter-fitted short tees.
pub enum ShortTeePolicy {
    /// Drop subdivision short tees on the trailing (far) perimeter of the length axis; that
    /// border is already covered by the perimeter trim.
    #[default]
    ExcludeTrailingPerimeter,
    /// Count every short tee in the layout.
    CountAll,
}

#[derive(Clone, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(default)]
/// Tunable constants for the solver and estimator. All lengths in millimeters.
pub struct GridSettings {
    /// Smallest admissible per-side border cut.
    pub min_border_mm: f64,
    /// Largest admissible per-side border cut; `None` means one whole module on that axis.
    pub max_border_mm: Option<f64>,
    /// Distance between main runners, also the long cross tee length.
    pub runner_spacing_mm: f64,
    /// Remaining gap at which a closing runner (or suspension point) is added at the far border.
    pub runner_end_clearance_mm: f64,
    /// Distance between hanger wires along a runner.
    pub suspension_spacing_mm: f64,
    /// Stock length of one main runner.
    pub main_runner_stick_mm: f64,
    /// Stock length of one perimeter trim (wall angle).
    pub perimeter_trim_stick_mm: f64,
    /// Short tee stock-counting policy.
    pub short_tee_policy: ShortTeePolicy,
}

impl Default for GridSettings {
    fn default() -> Self {
        Self {
            min_border_mm: 301.0,
            max_border_mm: None,
            runner_spacing_mm: 1200.0,
            runner_end_clearance_mm: 600.0,
            suspension_spacing_mm: 1200.0,
            main_runner_stick_mm: 3600.0,
            perimeter_trim_stick_mm: 3000.0,
            short_tee_policy: ShortTeePolicy::default(),
        }
    }
}

impl GridSettings {
    /// Full-length cross tee, bridging two adjacent runners.
    pub fn long_tee_mm(&self) -> f64 {
        self.runner_spacing_mm
    }

    /// Half-length cross tee; also the longest border a perimeter-fitted short tee can cover.
    pub fn short_tee_mm(&self) -> f64 {
        self.runner_spacing_mm / 2.0
    }

    /// Admissible border range on an axis tiled with `module_extent`.
    pub fn border_range(&self, module_extent: f64) -> (f64, f64) {
        (
            self.min_border_mm,
            self.max_border_mm.unwrap_or(module_extent),
        )
    }

    /// Fail when the border range for `module_extent` on `axis` is empty.
    pub fn check_border_range(&self, axis: Axis, module_extent: f64) -> LayoutResult<()> {
        let (min, max) = self.border_range(module_extent);
        if min > max {
            return Err(LayoutError::config(format!(
                "min_border_mm ({min}) exceeds the largest {axis} border ({max}mm for a {module_extent}mm side)"
            )));
        }
        Ok(())
    }

    /// Check every value is usable.
    pub fn validate(&self) -> LayoutResult<()> {
        for (what, v) in [
            ("runner_spacing_mm", self.runner_spacing_mm),
            ("suspension_spacing_mm", self.suspension_spacing_mm),
            ("main_runner_stick_mm", self.main_runner_stick_mm),
            ("perimeter_trim_stick_mm", self.perimeter_trim_stick_mm),
        ] {
            positive_mm(what, v).map_err(LayoutError::config)?;
        }
        for (what, v) in [
            ("runner_spacing_mm", self.runner_spacing_mm),
            ("suspension_spacing_mm", self.suspension_spacing_mm),
        ] {
            if v < MIN_SPACING_MM {
                return Err(LayoutError::config(format!(
                    "{what} must be at least {MIN_SPACING_MM}mm, got {v}"
                )));
            }
        }

        if !self.min_border_mm.is_finite() || self.min_border_mm < 0.0 {
            return Err(LayoutError::config(format!(
                "min_border_mm must be a finite number >= 0, got {}",
                self.min_border_mm
            )));
        }
        if !self.runner_end_clearance_mm.is_finite() || self.runner_end_clearance_mm < 0.0 {
            return Err(LayoutError::config(format!(
                "runner_end_clearance_mm must be a finite number >= 0, got {}",
                self.runner_end_clearance_mm
            )));
        }
        if let Some(max) = self.max_border_mm {
            positive_mm("max_border_mm", max).map_err(LayoutError::config)?;
            if max < self.min_border_mm {
                return Err(LayoutError::config(format!(
                    "max_border_mm ({max}) must be >= min_border_mm ({})",
                    self.min_border_mm
                )));
            }
        }
        Ok(())
    }
}

#[cfg(test)]
#[path = "../../tests/unit/layout/settings.rs"]
mod tests;
