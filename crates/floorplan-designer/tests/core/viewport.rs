use floorplan_core::constants::{MAX_ZOOM, MIN_ZOOM};
use floorplan_designer::model::Bounds;
use floorplan_designer::viewport::{ViewUpdate, Viewport, WheelDirection};
use floorplan_designer::{CanvasPoint, WorldPoint};

fn approx(a: f64, b: f64) -> bool {
    (a - b).abs() < 1e-6
}

#[test]
fn test_default_viewport() {
    let viewport = Viewport::default();
    assert_eq!(viewport.canvas_width(), 1200.0);
    assert_eq!(viewport.canvas_height(), 800.0);
    assert_eq!(viewport.editing_dpi(), 96.0);
    assert_eq!(viewport.zoom(), 1.0);
}

#[test]
fn test_zoom_buttons_keep_translation() {
    let mut viewport = Viewport::default();
    viewport.pan_by(30.0, -20.0);
    viewport.zoom_in();
    assert!(approx(viewport.zoom(), 1.2));
    assert_eq!(viewport.transform().translate_x, 30.0);
    assert_eq!(viewport.transform().translate_y, -20.0);

    viewport.zoom_out();
    assert!(approx(viewport.zoom(), 1.0));
}

#[test]
fn test_wheel_zoom_keeps_pointer_fixed() {
    let mut viewport = Viewport::default();
    viewport.pan_by(-75.0, 40.0);
    let pointer = CanvasPoint::new(420.0, 310.0);
    let before = viewport.canvas_to_world(pointer);

    viewport.wheel_zoom(pointer, WheelDirection::In);
    assert!(approx(viewport.zoom(), 1.1));
    let after = viewport.canvas_to_world(pointer);
    assert!(approx(before.x, after.x));
    assert!(approx(before.y, after.y));

    viewport.wheel_zoom(pointer, WheelDirection::Out);
    viewport.wheel_zoom(pointer, WheelDirection::Out);
    let after = viewport.canvas_to_world(pointer);
    assert!(approx(before.x, after.x));
    assert!(approx(before.y, after.y));
}

#[test]
fn test_wheel_direction_from_delta() {
    assert_eq!(WheelDirection::from_delta(120.0), WheelDirection::Out);
    assert_eq!(WheelDirection::from_delta(-120.0), WheelDirection::In);
}

#[test]
fn test_zoom_is_clamped() {
    let mut viewport = Viewport::default();
    let pointer = CanvasPoint::new(600.0, 400.0);
    for _ in 0..100 {
        viewport.wheel_zoom(pointer, WheelDirection::In);
    }
    assert_eq!(viewport.zoom(), MAX_ZOOM);

    for _ in 0..100 {
        viewport.zoom_out();
    }
    assert_eq!(viewport.zoom(), MIN_ZOOM);

    viewport.set_view_transform(ViewUpdate {
        scale: Some(42.0),
        ..ViewUpdate::default()
    });
    assert_eq!(viewport.zoom(), MAX_ZOOM);
}

#[test]
fn test_set_view_transform_merges() {
    let mut viewport = Viewport::default();
    viewport.set_view_transform(ViewUpdate {
        translate_x: Some(12.0),
        ..ViewUpdate::default()
    });
    viewport.set_view_transform(ViewUpdate {
        scale: Some(2.0),
        ..ViewUpdate::default()
    });
    assert_eq!(viewport.zoom(), 2.0);
    assert_eq!(viewport.transform().translate_x, 12.0);
    assert_eq!(viewport.transform().translate_y, 0.0);
}

#[test]
fn test_world_canvas_round_trip() {
    let mut viewport = Viewport::default();
    viewport.set_view_transform(ViewUpdate {
        scale: Some(0.75),
        translate_x: Some(33.0),
        translate_y: Some(-14.0),
    });
    let world = WorldPoint::new(48.5, 12.25);
    let back = viewport.canvas_to_world(viewport.world_to_canvas(world));
    assert!(approx(back.x, world.x));
    assert!(approx(back.y, world.y));
}

#[test]
fn test_center_sheet() {
    let mut viewport = Viewport::default();
    viewport.set_view_transform(ViewUpdate {
        scale: Some(0.25),
        ..ViewUpdate::default()
    });
    viewport.center_sheet();
    // A2 at 96 DPI is 1587 × 2245 px.
    assert!(approx(viewport.transform().translate_x, (1200.0 - 1587.0 * 0.25) / 2.0));
    assert!(approx(viewport.transform().translate_y, (800.0 - 2245.0 * 0.25) / 2.0));
}

#[test]
fn test_fit_to_bounds_centers_content() {
    let mut viewport = Viewport::default();
    let bounds = Bounds::from_points(&[WorldPoint::new(10.0, 10.0), WorldPoint::new(40.0, 30.0)])
        .unwrap();
    viewport.fit_to_bounds(&bounds, 0.1);

    let center = viewport.world_to_canvas(bounds.center);
    assert!(approx(center.x, 600.0));
    assert!(approx(center.y, 400.0));

    let top_left = viewport.world_to_canvas(WorldPoint::new(10.0, 10.0));
    let bottom_right = viewport.world_to_canvas(WorldPoint::new(40.0, 30.0));
    assert!(top_left.x >= 120.0 - 1e-6 && top_left.y >= 80.0 - 1e-6);
    assert!(bottom_right.x <= 1080.0 + 1e-6 && bottom_right.y <= 720.0 + 1e-6);
}

#[test]
fn test_fit_ignores_degenerate_bounds() {
    let mut viewport = Viewport::default();
    let bounds = Bounds::from_points(&[WorldPoint::new(5.0, 5.0)]).unwrap();
    viewport.fit_to_view(&bounds);
    assert_eq!(viewport.zoom(), 1.0);
}

#[test]
fn test_display() {
    let mut viewport = Viewport::default();
    viewport.pan_by(10.0, 20.0);
    assert_eq!(viewport.to_string(), "Zoom: 1.00x | Pan: (10.0, 20.0)");
}
