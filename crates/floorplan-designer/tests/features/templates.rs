use floorplan_core::GeometryError;
use floorplan_designer::model::{Color, Layer, ShapeMetadata, ShapeType};
use floorplan_designer::templates::*;
use floorplan_designer::WorldPoint;

fn points(raw: &[(f64, f64)]) -> Vec<WorldPoint> {
    raw.iter().map(|&(x, y)| WorldPoint::new(x, y)).collect()
}

#[test]
fn test_rectangle_vertices_bounds_and_edges() {
    let shape = create_rectangle(
        WorldPoint::new(50.0, 50.0),
        Dimensions::new(30.0, 40.0),
        0.25,
        Color::BUILDING,
        Layer::Building,
        None,
    )
    .unwrap();

    assert_eq!(shape.shape_type, ShapeType::Rectangle);
    assert_eq!(
        shape.vertices_ft,
        points(&[(35.0, 30.0), (65.0, 30.0), (65.0, 70.0), (35.0, 70.0)])
    );
    let bounds = shape.bounds().unwrap();
    assert_eq!(
        (bounds.min_x, bounds.min_y, bounds.max_x, bounds.max_y),
        (35.0, 30.0, 65.0, 70.0)
    );
    assert_eq!((bounds.width, bounds.height), (30.0, 40.0));
    assert_eq!(bounds.center, WorldPoint::new(50.0, 50.0));
    assert_eq!(shape.edge_lengths(), vec![30.0, 40.0, 30.0, 40.0]);
    assert_eq!(shape.metadata.created_by.as_deref(), Some("wizard"));
}

#[test]
fn test_rectangle_keeps_supplied_creator() {
    let metadata = ShapeMetadata {
        created_by: Some("import".to_string()),
        ..ShapeMetadata::default()
    };
    let shape = create_rectangle(
        WorldPoint::new(0.0, 0.0),
        Dimensions::new(2.0, 2.0),
        0.25,
        Color::BLACK,
        Layer::Symbols,
        Some(metadata),
    )
    .unwrap();
    assert_eq!(shape.metadata.created_by.as_deref(), Some("import"));
}

#[test]
fn test_rectangle_rejects_non_positive_dimensions() {
    let result = create_rectangle(
        WorldPoint::new(0.0, 0.0),
        Dimensions::new(0.0, 10.0),
        0.25,
        Color::BLACK,
        Layer::Boundary,
        None,
    );
    assert!(matches!(result, Err(GeometryError::NonPositiveDimension { .. })));

    let result = create_rectangle(
        WorldPoint::new(0.0, 0.0),
        Dimensions::new(10.0, 10.0),
        -1.0,
        Color::BLACK,
        Layer::Boundary,
        None,
    );
    assert_eq!(result.unwrap_err(), GeometryError::NonPositiveStroke(-1.0));
}

#[test]
fn test_l_shape_vertices() {
    let vertices = create_l_shape(WorldPoint::new(50.0, 50.0), 40.0, 40.0, 15.0, 15.0, false)
        .unwrap();
    assert_eq!(
        vertices,
        points(&[
            (30.0, 30.0),
            (70.0, 30.0),
            (70.0, 70.0),
            (55.0, 70.0),
            (55.0, 45.0),
            (30.0, 45.0),
        ])
    );
}

#[test]
fn test_mirrored_l_shape_vertices() {
    let vertices =
        create_l_shape(WorldPoint::new(50.0, 50.0), 40.0, 40.0, 15.0, 15.0, true).unwrap();
    assert_eq!(
        vertices,
        points(&[
            (30.0, 30.0),
            (70.0, 30.0),
            (70.0, 45.0),
            (45.0, 45.0),
            (45.0, 70.0),
            (30.0, 70.0),
        ])
    );
}

#[test]
fn test_u_shape_vertices() {
    let vertices = create_u_shape(WorldPoint::new(50.0, 50.0), 50.0, 40.0, 20.0, 25.0).unwrap();
    assert_eq!(
        vertices,
        points(&[
            (25.0, 30.0),
            (75.0, 30.0),
            (75.0, 70.0),
            (60.0, 70.0),
            (60.0, 55.0),
            (40.0, 55.0),
            (40.0, 70.0),
            (25.0, 70.0),
        ])
    );
}

#[test]
fn test_notch_must_fit() {
    let center = WorldPoint::new(0.0, 0.0);
    assert!(matches!(
        create_l_shape(center, 10.0, 10.0, 10.0, 5.0, false),
        Err(GeometryError::NotchTooLarge { .. })
    ));
    assert!(matches!(
        create_l_shape(center, 10.0, 10.0, 5.0, 12.0, true),
        Err(GeometryError::NotchTooLarge { .. })
    ));
    assert!(matches!(
        create_u_shape(center, 10.0, 10.0, 10.0, 5.0),
        Err(GeometryError::NotchTooLarge { .. })
    ));
    assert!(matches!(
        create_u_shape(center, 10.0, 10.0, 4.0, 0.0),
        Err(GeometryError::NonPositiveDimension { .. })
    ));
}

#[test]
fn test_plot_presets() {
    let plot = PlotPreset::TenMarla.build().unwrap();
    assert_eq!(plot.layer, Layer::Boundary);
    assert_eq!(plot.stroke_color, Color::BOUNDARY);
    assert_eq!(
        plot.vertices_ft,
        points(&[(20.0, 20.0), (55.0, 20.0), (55.0, 85.0), (20.0, 85.0)])
    );
    assert_eq!(plot.label(), Some("10 Marla"));

    assert_eq!(PlotPreset::OneKanal.dimensions(), Dimensions::new(50.0, 90.0));
    assert_eq!(PlotPreset::FiveMarla.dimensions().area(), 1125.0);
}

#[test]
fn test_plot_preset_parsing() {
    assert_eq!("10-marla".parse::<PlotPreset>().unwrap(), PlotPreset::TenMarla);
    assert_eq!("1-Kanal".parse::<PlotPreset>().unwrap(), PlotPreset::OneKanal);
    assert_eq!(
        "40x60".parse::<PlotPreset>().unwrap(),
        PlotPreset::Custom(Dimensions::new(40.0, 60.0))
    );
    assert!("huge".parse::<PlotPreset>().is_err());
    assert!("40xabc".parse::<PlotPreset>().is_err());
    assert!(PlotPreset::Custom(Dimensions::new(-1.0, 5.0)).build().is_err());
}

#[test]
fn test_house_templates() {
    for template in HouseTemplate::ALL {
        let shape = template.build().unwrap();
        assert_eq!(shape.layer, Layer::Building);
        assert!(shape.is_closed());
        assert_eq!(shape.bounds().unwrap().center, HouseTemplate::CENTER);
    }

    let l = HouseTemplate::LShaped.build().unwrap();
    assert_eq!(l.shape_type, ShapeType::Polygon);
    assert_eq!(l.vertices_ft.len(), 6);
    assert_eq!(l.area(), 1600.0 - 225.0);

    let u = HouseTemplate::UShaped.build().unwrap();
    assert_eq!(u.vertices_ft.len(), 8);
    assert_eq!(u.area(), 2000.0 - 300.0);

    assert_eq!(HouseTemplate::Rectangular.build().unwrap().shape_type, ShapeType::Rectangle);
    assert_eq!("mirror-l".parse::<HouseTemplate>().unwrap(), HouseTemplate::MirrorL);
}
