use floorplan_designer::model::{Color, Layer, Shape, ShapeType};
use floorplan_designer::snapping::*;
use floorplan_designer::WorldPoint;
use proptest::prelude::*;

fn square() -> Shape {
    Shape::new(
        ShapeType::Rectangle,
        Layer::Boundary,
        0.25,
        Color::BOUNDARY,
        vec![
            WorldPoint::new(0.0, 0.0),
            WorldPoint::new(10.0, 0.0),
            WorldPoint::new(10.0, 10.0),
            WorldPoint::new(0.0, 10.0),
        ],
    )
    .unwrap()
}

#[test]
fn test_snap_to_grid_within_threshold() {
    assert_eq!(snap_to_grid(10.2, 1.0, 0.5), 10.0);
    assert_eq!(snap_to_grid(-3.9, 1.0, 0.5), -4.0);
    assert_eq!(snap_to_grid(7.4, 5.0, 2.5), 5.0);
}

#[test]
fn test_snap_to_grid_outside_threshold() {
    assert_eq!(snap_to_grid(10.4, 1.0, 0.25), 10.4);
    assert_eq!(snap_to_grid(12.0, 5.0, 1.0), 12.0);
}

#[test]
fn test_zero_threshold_only_keeps_exact_multiples() {
    assert_eq!(snap_to_grid(4.0, 1.0, 0.0), 4.0);
    assert_eq!(snap_to_grid(4.01, 1.0, 0.0), 4.01);
}

#[test]
fn test_vertex_wins_tie_with_edge() {
    let shapes = vec![square()];
    let result = snap_to_geometry(WorldPoint::new(0.0, -0.3), &shapes, 0.5, None);
    assert_eq!(result.point, WorldPoint::new(0.0, 0.0));
    assert_eq!(
        result.target,
        SnapTarget::Vertex {
            shape_id: shapes[0].id().clone(),
            index: 0,
        }
    );
}

#[test]
fn test_closer_edge_beats_vertex() {
    let shapes = vec![square()];
    let result = snap_to_geometry(WorldPoint::new(0.4, 0.1), &shapes, 0.5, None);
    assert!((result.point.x - 0.4).abs() < 1e-12);
    assert_eq!(result.point.y, 0.0);
    assert!(matches!(result.target, SnapTarget::Edge { edge_index: 0, .. }));
}

#[test]
fn test_edge_snap_projects_onto_edge() {
    let shapes = vec![square()];
    let result = snap_to_geometry(WorldPoint::new(10.3, 5.0), &shapes, 0.5, None);
    assert_eq!(result.point, WorldPoint::new(10.0, 5.0));
    assert!(matches!(result.target, SnapTarget::Edge { edge_index: 1, .. }));
    assert_eq!(result.raw, WorldPoint::new(10.3, 5.0));
}

#[test]
fn test_geometry_snap_out_of_range_and_excluded() {
    let shapes = vec![square()];
    let far = snap_to_geometry(WorldPoint::new(5.0, 5.0), &shapes, 0.5, None);
    assert!(!far.snapped());
    assert_eq!(far.point, WorldPoint::new(5.0, 5.0));

    let excluded =
        snap_to_geometry(WorldPoint::new(0.1, 0.1), &shapes, 0.5, Some(shapes[0].id()));
    assert!(!excluded.snapped());
}

#[test]
fn test_snap_dispatches_on_mode() {
    let shapes = vec![square()];
    let grid = GridSettings::default();
    let p = WorldPoint::new(10.2, 5.0);

    let grid_mode = snap(p, &SnapSettings::default(), &grid, &shapes, None);
    assert_eq!(grid_mode.point, WorldPoint::new(10.0, 5.0));
    assert_eq!(grid_mode.target, SnapTarget::Grid);

    let geometry = SnapSettings {
        mode: SnapMode::Geometry,
        ..SnapSettings::default()
    };
    let geometry_mode = snap(p, &geometry, &grid, &shapes, None);
    assert_eq!(geometry_mode.point, WorldPoint::new(10.0, 5.0));
    assert!(matches!(geometry_mode.target, SnapTarget::Edge { .. }));

    let off = SnapSettings {
        mode: SnapMode::None,
        ..SnapSettings::default()
    };
    assert_eq!(snap(p, &off, &grid, &shapes, None).point, p);
    assert!(!off.is_active());
}

#[test]
fn test_settings_validation() {
    assert!(GridSettings::default().validate().is_ok());
    let bad = GridSettings {
        spacing_ft: 0.0,
        ..GridSettings::default()
    };
    assert!(bad.validate().is_err());

    let bad = SnapSettings {
        threshold_ft: -1.0,
        ..SnapSettings::default()
    };
    assert!(bad.validate().is_err());
}

proptest! {
    #[test]
    fn prop_snap_to_grid_is_idempotent(
        value in -1000.0f64..1000.0,
        spacing in 0.1f64..10.0,
        ratio in 0.0f64..0.5,
    ) {
        let threshold = spacing * ratio;
        let once = snap_to_grid(value, spacing, threshold);
        prop_assert_eq!(snap_to_grid(once, spacing, threshold), once);
    }

    #[test]
    fn prop_snap_to_grid_moves_at_most_threshold(
        value in -1000.0f64..1000.0,
        spacing in 0.1f64..10.0,
        threshold in 0.0f64..5.0,
    ) {
        let snapped = snap_to_grid(value, spacing, threshold);
        prop_assert!((snapped - value).abs() <= threshold);
    }
}
