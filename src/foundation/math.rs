use crate::foundation::core::EPSILON;

pub(crate) fn approx_eq(a: f64, b: f64) -> bool {
    (a - b).abs() < EPSILON
}

/// Whole stock units needed to cover `total_mm` with sticks of `stick_mm`.
///
/// An exact multiple (within epsilon) does not round up to an extra stick.
pub(crate) fn stock_units(total_mm: f64, stick_mm: f64) -> u32 {
    if total_mm <= EPSILON {
        return 0;
    }
    ((total_mm - EPSILON) / stick_mm).ceil().max(1.0) as u32
}

/// Positions from `start` every `step` up to `end`, closed with `end` itself when the
/// remaining gap reaches `end_clearance`.
///
/// Each position is computed as `start + i * step` rather than accumulated, and the closing
/// position is `end` exactly.
pub(crate) fn strided_positions(start: f64, end: f64, step: f64, end_clearance: f64) -> Vec<f64> {
    let mut out = Vec::new();
    let mut i = 0u32;
    loop {
        let p = start + f64::from(i) * step;
        if p > end + EPSILON {
            break;
        }
        out.push(p);
        i += 1;
    }

    if let Some(last) = out.last().copied() {
        let gap = end - last;
        if gap > EPSILON && gap + EPSILON >= end_clearance {
            out.push(end);
        }
    }
    out
}

#[cfg(test)]
#[path = "../../tests/unit/foundation/math.rs"]
mod tests;
