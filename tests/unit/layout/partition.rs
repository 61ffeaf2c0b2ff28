use super::*;

fn part(extent: f64, module: f64) -> LayoutResult<AxisPartition> {
    partition_axis(Axis::Width, extent, module, &GridSettings::default())
}

#[test]
fn square_module_balances_borders() {
    let p = part(4000.0, 600.0).unwrap();
    assert_eq!(p.interior_cells(), 5);
    assert_eq!(p.border().per_side_mm, 500.0);
    assert_eq!(
        p.positions(),
        &[0.0, 500.0, 1100.0, 1700.0, 2300.0, 2900.0, 3500.0, 4000.0]
    );
    assert_eq!(
        p.internal_lines(),
        &[500.0, 1100.0, 1700.0, 2300.0, 2900.0, 3500.0]
    );
    assert_eq!(p.cell_count(), 7);
    assert_eq!(p.interior_start(), 500.0);
    assert_eq!(p.interior_end(), 3500.0);
}

#[test]
fn border_exactly_at_minimum_is_accepted() {
    let p = part(2402.0, 600.0).unwrap();
    assert_eq!(p.interior_cells(), 3);
    assert_eq!(p.border().per_side_mm, 301.0);
}

#[test]
fn border_exactly_one_module_is_accepted() {
    let p = partition_axis(Axis::Length, 3000.0, 600.0, &GridSettings::default()).unwrap();
    assert_eq!(p.interior_cells(), 3);
    assert_eq!(p.border().per_side_mm, 600.0);
    assert_eq!(p.axis(), Axis::Length);
}

#[test]
fn too_small_room_reports_below_minimum() {
    let err = part(700.0, 600.0).unwrap_err();
    match err {
        LayoutError::ConstraintViolation {
            axis,
            border_mm,
            limit_mm,
            bound,
        } => {
            assert_eq!(axis, Axis::Width);
            assert_eq!(border_mm, 50.0);
            assert_eq!(limit_mm, 301.0);
            assert_eq!(bound, BorderBound::BelowMinimum);
        }
        other => panic!("unexpected error: {other}"),
    }
}

#[test]
fn room_shorter_than_module_reports_below_minimum() {
    let err = part(500.0, 1200.0).unwrap_err();
    assert!(matches!(
        err,
        LayoutError::ConstraintViolation {
            bound: BorderBound::BelowMinimum,
            ..
        }
    ));
}

#[test]
fn oversized_border_reports_above_maximum() {
    let err = part(1801.5, 600.0).unwrap_err();
    match err {
        LayoutError::ConstraintViolation {
            border_mm, bound, ..
        } => {
            assert_eq!(bound, BorderBound::AboveMaximum);
            assert!((border_mm - 600.75).abs() < 1e-9);
        }
        other => panic!("unexpected error: {other}"),
    }
}

#[test]
fn explicit_maximum_overrides_module_extent() {
    let settings = GridSettings {
        max_border_mm: Some(600.0),
        ..GridSettings::default()
    };
    let err = partition_axis(Axis::Width, 4000.0, 1200.0, &settings).unwrap_err();
    assert!(matches!(
        err,
        LayoutError::ConstraintViolation {
            bound: BorderBound::AboveMaximum,
            ..
        }
    ));
    assert!(part(4000.0, 1200.0).is_ok());
}

#[test]
fn exact_fit_without_minimum_has_no_border_cells() {
    let settings = GridSettings {
        min_border_mm: 0.0,
        ..GridSettings::default()
    };
    let p = partition_axis(Axis::Width, 2400.0, 600.0, &settings).unwrap();
    assert_eq!(p.interior_cells(), 4);
    assert!(!p.border().is_present());
    assert_eq!(p.positions(), &[0.0, 600.0, 1200.0, 1800.0, 2400.0]);
    assert_eq!(p.cell_count(), 4);
}

#[test]
fn accepted_partitions_hold_their_invariants() {
    let settings = GridSettings::default();
    let mut accepted = 0;
    for module in [600.0, 1200.0] {
        let mut extent = 1000.0;
        while extent < 20000.0 {
            extent += 37.3;
            let Ok(p) = partition_axis(Axis::Width, extent, module, &settings) else {
                continue;
            };
            accepted += 1;

            let b = p.border().per_side_mm;
            let sum = f64::from(p.interior_cells()) * module + 2.0 * b;
            assert!((sum - extent).abs() < EPSILON, "extent {extent}");
            assert!(b == 0.0 || (301.0 - EPSILON..=module + EPSILON).contains(&b));

            let ps = p.positions();
            assert_eq!(ps[0], 0.0);
            assert_eq!(*ps.last().unwrap(), extent);
            assert!(ps.windows(2).all(|w| w[1] > w[0]));
            let interior = &ps[1..ps.len() - 1];
            assert!(
                interior
                    .windows(2)
                    .all(|w| (w[1] - w[0] - module).abs() < EPSILON)
            );
        }
    }
    assert!(accepted > 500);
}
