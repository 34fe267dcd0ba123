use floorplan_designer::annotations::{edge_labels, handles, HandleKind};
use floorplan_designer::model::{Color, Layer, Shape, ShapeType};
use floorplan_designer::{DesignerState, HouseTemplate, WorldPoint};

#[test]
fn test_edge_labels_for_rectangle() {
    let shape = HouseTemplate::Rectangular.build().unwrap();
    let labels = edge_labels(&shape);
    let texts: Vec<&str> = labels.iter().map(|l| l.text.as_str()).collect();
    assert_eq!(texts, vec!["30.00 ft", "40.00 ft", "30.00 ft", "40.00 ft"]);
    assert_eq!(labels[0].position, WorldPoint::new(50.0, 30.0));
    assert_eq!(labels[3].position, WorldPoint::new(35.0, 50.0));
}

#[test]
fn test_open_path_has_no_closing_label() {
    let path = Shape::new(
        ShapeType::Polyline,
        Layer::Paths,
        0.25,
        Color::PATHS,
        vec![
            WorldPoint::new(0.0, 0.0),
            WorldPoint::new(3.0, 4.0),
            WorldPoint::new(3.0, 10.0),
        ],
    )
    .unwrap();
    let labels = edge_labels(&path);
    assert_eq!(labels.len(), 2);
    assert_eq!(labels[0].text, "5.00 ft");
    assert_eq!(labels[1].length_ft, 6.0);
}

#[test]
fn test_handles() {
    let shape = HouseTemplate::LShaped.build().unwrap();
    let handles = handles(&shape);
    assert_eq!(handles.len(), 12);
    assert_eq!(handles[0].kind, HandleKind::Vertex(0));
    assert_eq!(handles[6].kind, HandleKind::Midpoint(0));
    assert_eq!(handles[6].position, WorldPoint::new(50.0, 30.0));
}

#[test]
fn test_selection_handles_follow_selection() {
    let mut state = DesignerState::new();
    let id = state.add_house(HouseTemplate::Rectangular).unwrap();
    assert!(state.selection_handles().is_empty());

    state.select_shape(&id, false);
    assert_eq!(state.selection_handles().len(), 8);
    assert_eq!(state.edge_labels().len(), 1);
}
