use floorplan_core::ViewTransform;
use floorplan_designer::model::{Color, Layer, Shape, ShapeType};
use floorplan_designer::serialization::ProjectFile;
use floorplan_designer::{DesignerState, HouseTemplate, PlotPreset, WorldPoint};
use serde_json::Value;

#[test]
fn test_shape_json_field_names() {
    let shape = PlotPreset::TenMarla.build().unwrap();
    let json: Value = serde_json::to_value(&shape).unwrap();

    assert_eq!(json["id"], Value::String(shape.id().to_string()));
    assert_eq!(json["type"], "rectangle");
    assert_eq!(json["layer"], "boundary");
    assert_eq!(json["stroke_mm"], 0.25);
    assert_eq!(json["stroke_color"], "#0A2B5A");
    assert_eq!(json["fill"], Value::Null);
    assert_eq!(json["vertices_ft"][1]["x"], 55.0);
    assert_eq!(json["vertices_ft"][1]["y"], 20.0);
    assert_eq!(json["metadata"]["createdBy"], "wizard");
    assert_eq!(json["metadata"]["label"], "10 Marla");
}

#[test]
fn test_shape_deserializes_with_unknown_metadata() {
    let json = r##"{
        "id": "shape_1_abc",
        "type": "line",
        "layer": "paths",
        "stroke_mm": 0.5,
        "stroke_color": "#4B5563",
        "fill": null,
        "vertices_ft": [{"x": 0, "y": 0}, {"x": 12.5, "y": 0}],
        "metadata": {"createdBy": "tool", "note": "ignored"}
    }"##;
    let shape: Shape = serde_json::from_str(json).unwrap();
    assert_eq!(shape.id().as_str(), "shape_1_abc");
    assert_eq!(shape.shape_type, ShapeType::Line);
    assert_eq!(shape.layer, Layer::Paths);
    assert_eq!(shape.stroke_color, Color::PATHS);
    assert_eq!(shape.edge_lengths(), vec![12.5]);
}

#[test]
fn test_view_transform_json_is_camel_case() {
    let json = serde_json::to_value(ViewTransform::new(1.5, 10.0, -4.0)).unwrap();
    assert_eq!(json["scale"], 1.5);
    assert_eq!(json["translateX"], 10.0);
    assert_eq!(json["translateY"], -4.0);
}

#[test]
fn test_project_json_round_trip() {
    let shapes = vec![
        PlotPreset::OneKanal.build().unwrap(),
        HouseTemplate::MirrorL.build().unwrap(),
    ];
    let project = ProjectFile::new(shapes);
    let json = project.to_json().unwrap();

    let value: Value = serde_json::from_str(&json).unwrap();
    assert_eq!(value["metadata"]["version"], "1.0.0");
    assert!(value["metadata"]["created"].is_string());

    let loaded = ProjectFile::from_json(&json).unwrap();
    assert_eq!(loaded, project);
}

#[test]
fn test_invalid_shape_in_project_is_rejected() {
    let json = r##"{
        "shapes": [{
            "id": "bad",
            "type": "polygon",
            "layer": "building",
            "stroke_mm": 0.25,
            "stroke_color": "#B83A3A",
            "fill": null,
            "vertices_ft": [{"x": 0, "y": 0}, {"x": 1, "y": 1}]
        }],
        "metadata": {
            "created": "2024-01-01T00:00:00Z",
            "modified": "2024-01-01T00:00:00Z",
            "version": "1.0.0"
        }
    }"##;
    assert!(ProjectFile::from_json(json).is_err());
    assert!(ProjectFile::from_json("{ not json").is_err());
}

#[test]
fn test_repeated_shape_id_in_project_is_rejected() {
    let plot = PlotPreset::FiveMarla.build().unwrap();
    let mut project = ProjectFile::new(vec![plot.clone(), plot]);
    let json = project.to_json().unwrap();

    let err = ProjectFile::from_json(&json).unwrap_err();
    assert!(err.to_string().contains("Duplicate shape id"));

    project.shapes.pop();
    assert!(ProjectFile::from_json(&project.to_json().unwrap()).is_ok());
}

#[test]
fn test_default_file_name() {
    let at = chrono::DateTime::from_timestamp_millis(1_700_000_000_123).unwrap();
    assert_eq!(
        ProjectFile::default_file_name(at),
        "floorplan-project-1700000000123.json"
    );
}

#[test]
fn test_state_save_and_load() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("plan.json");

    let mut state = DesignerState::new();
    state.add_plot(PlotPreset::TenMarla).unwrap();
    let house = state.add_house(HouseTemplate::UShaped).unwrap();
    state.save_to_file(&path).unwrap();
    assert!(!state.is_modified);
    assert_eq!(state.display_name(), "plan.json");

    let mut loaded = DesignerState::new();
    loaded.add_shape(
        Shape::new(
            ShapeType::Line,
            Layer::Paths,
            0.25,
            Color::PATHS,
            vec![WorldPoint::new(0.0, 0.0), WorldPoint::new(1.0, 0.0)],
        )
        .unwrap(),
    )
    .unwrap();
    loaded.load_from_file(&path).unwrap();

    assert_eq!(loaded.shapes(), state.shapes());
    assert!(loaded.shape(&house).is_some());
    assert!(!loaded.can_undo());
    assert!(!loaded.is_modified);
}

#[test]
fn test_load_missing_file_fails() {
    let dir = tempfile::tempdir().unwrap();
    let mut state = DesignerState::new();
    assert!(state.load_from_file(dir.path().join("missing.json")).is_err());
    assert!(state.current_file_path.is_none());
}
