use super::*;
use crate::foundation::{
    core::{EPSILON, Point},
    error::{BorderBound, ErrorKind, LayoutError},
};

fn room(w: f64, l: f64) -> RoomSpec {
    RoomSpec::new(w, l).unwrap()
}

#[test]
fn square_module_layout_is_complete() {
    let layout = solve(room(4000.0, 3000.0), TileModule::SQUARE_600).unwrap();

    assert_eq!(layout.strategy(), TilingStrategy::Subdivided);
    assert_eq!(layout.border_cut(Axis::Width).per_side_mm, 500.0);
    assert_eq!(layout.border_cut(Axis::Length).per_side_mm, 600.0);
    assert_eq!(layout.partition(Axis::Width).interior_cells(), 5);
    assert_eq!(layout.partition(Axis::Length).interior_cells(), 3);
    assert_eq!(layout.runners().offsets(), &[500.0, 1700.0, 2900.0, 3500.0]);
    assert_eq!(layout.cross_tees().long.len(), 8);
    assert_eq!(layout.cross_tees().short.len(), 22);
    assert_eq!(layout.suspension_points().len(), 12);
    assert_eq!(layout.settings(), &GridSettings::default());
}

#[test]
fn elongated_module_layout_uses_long_tees_only() {
    let layout = solve(room(4000.0, 3000.0), TileModule::RECT_600_1200).unwrap();

    assert_eq!(layout.strategy(), TilingStrategy::LongTeesOnly);
    assert_eq!(layout.partition(Axis::Width).module_mm(), 1200.0);
    assert_eq!(layout.partition(Axis::Length).module_mm(), 600.0);
    assert_eq!(layout.border_cut(Axis::Width).per_side_mm, 800.0);
    assert_eq!(layout.runners().len(), 3);
    assert!(layout.cross_tees().short.is_empty());
    assert_eq!(layout.cross_tees().long.len(), 8);
    assert_eq!(layout.suspension_points().len(), 9);
}

#[test]
fn tile_cells_cover_the_room_row_by_row() {
    let layout = solve(room(4000.0, 3000.0), TileModule::SQUARE_600).unwrap();
    let cells: Vec<Rect> = layout.tile_cells().collect();
    assert_eq!(cells.len(), 35);
    assert_eq!(cells[0], Rect::new(0.0, 0.0, 500.0, 600.0));
    assert_eq!(cells[1], Rect::new(500.0, 0.0, 1100.0, 600.0));
    assert_eq!(cells[34], Rect::new(3500.0, 2400.0, 4000.0, 3000.0));

    let area: f64 = cells.iter().map(|r| r.area()).sum();
    assert!((area - 4000.0 * 3000.0).abs() < 1e-3);
}

#[test]
fn runner_lines_span_the_room_length() {
    let layout = solve(room(4000.0, 3000.0), TileModule::SQUARE_600).unwrap();
    let lines: Vec<Line> = layout.runner_lines().collect();
    assert_eq!(lines.len(), 4);
    assert!(lines.iter().all(|l| l.p0.y == 0.0 && l.p1.y == 3000.0));
}

#[test]
fn suspension_points_lie_on_runners() {
    let layout = solve(room(6100.0, 5300.0), TileModule::SQUARE_600).unwrap();
    let runners = layout.runners();
    let y = layout.partition(Axis::Length);
    for p in layout.suspension_points() {
        assert!(runners.contains(p.x));
        assert!(p.y >= y.interior_start() - EPSILON && p.y <= y.interior_end() + EPSILON);
    }
    assert!(
        layout
            .suspension_points()
            .contains(&Point::new(runners.offsets()[0], y.interior_end()))
    );
}

#[test]
fn unsupported_module_fails_before_geometry() {
    let err = solve(room(700.0, 700.0), TileModule::new(500.0, 500.0).unwrap()).unwrap_err();
    assert_eq!(err.kind(), ErrorKind::UnsupportedModule);
}

#[test]
fn width_is_checked_before_length() {
    let err = solve(room(700.0, 700.0), TileModule::SQUARE_600).unwrap_err();
    assert!(matches!(
        err,
        LayoutError::ConstraintViolation {
            axis: Axis::Width,
            bound: BorderBound::BelowMinimum,
            ..
        }
    ));

    let err = solve(room(4000.0, 1801.5), TileModule::SQUARE_600).unwrap_err();
    assert!(matches!(
        err,
        LayoutError::ConstraintViolation {
            axis: Axis::Length,
            bound: BorderBound::AboveMaximum,
            ..
        }
    ));
}

#[test]
fn invalid_settings_are_rejected() {
    let settings = GridSettings {
        perimeter_trim_stick_mm: 0.0,
        ..GridSettings::default()
    };
    let err = solve_with(room(4000.0, 3000.0), TileModule::SQUARE_600, &settings).unwrap_err();
    assert_eq!(err.kind(), ErrorKind::Config);
}

#[test]
fn layout_serializes_for_renderers() {
    let layout = solve(room(4000.0, 3000.0), TileModule::SQUARE_600).unwrap();
    let v = serde_json::to_value(&layout).unwrap();
    assert_eq!(v["strategy"], "subdivided");
    assert_eq!(v["room"]["width"], 4000.0);
    assert_eq!(v["width_axis"]["border"]["per_side_mm"], 500.0);
    assert_eq!(v["runners"]["offsets"].as_array().unwrap().len(), 4);
    assert_eq!(v["suspension_points"][0]["x"], 500.0);
    assert_eq!(v["cross_tees"]["short"][0]["orientation"], "horizontal");
}

#[test]
fn minimum_border_above_module_is_a_config_error() {
    let settings = GridSettings {
        min_border_mm: 700.0,
        ..GridSettings::default()
    };
    let err = solve_with(room(4000.0, 3000.0), TileModule::SQUARE_600, &settings).unwrap_err();
    assert_eq!(err.kind(), ErrorKind::Config);
    assert!(err.to_string().contains("min_border_mm"));

    // The long side of 600x1200 still admits 700mm borders; the 600 length axis does not.
    let err =
        solve_with(room(4000.0, 3000.0), TileModule::RECT_600_1200, &settings).unwrap_err();
    assert_eq!(err.kind(), ErrorKind::Config);
    assert!(err.to_string().contains("length"));
}
