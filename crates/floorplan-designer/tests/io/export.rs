use floorplan_core::{Error, PixelDimensions};
use floorplan_designer::export::{ExportMetadata, Exporter};
use floorplan_designer::model::Color;
use floorplan_designer::renderer::{
    render_plan, PixmapSurface, RenderSurface, SurfaceProvider, MAX_SURFACE_PIXELS,
};
use floorplan_designer::{DesignerState, ExportPoint, HouseTemplate, PlotPreset};

struct NoBackend;

impl SurfaceProvider for NoBackend {
    fn acquire(&self, _size: PixelDimensions) -> floorplan_core::Result<Box<dyn RenderSurface>> {
        Err(Error::RenderUnavailable("no backend".to_string()))
    }
}

fn plan() -> DesignerState {
    let mut state = DesignerState::new();
    state.add_plot(PlotPreset::TenMarla).unwrap();
    state.add_house(HouseTemplate::LShaped).unwrap();
    state
}

#[test]
fn test_metadata_for_dpi() {
    let metadata = ExportMetadata::new(300, chrono::Utc::now());
    assert_eq!(metadata.image_width_px, 4961);
    assert_eq!(metadata.image_height_px, 7016);
    assert_eq!(metadata.plot_scale, 3.1);
    assert_eq!(metadata.export_origin, ExportPoint::ORIGIN);
}

#[test]
fn test_export_writes_all_files() {
    let dir = tempfile::tempdir().unwrap();
    let state = plan();
    let summary = state.export(96, dir.path()).unwrap();

    assert!(summary.is_complete());
    assert!(summary.render_error.is_none());

    let image = summary.image_path.unwrap();
    assert!(image
        .file_name()
        .unwrap()
        .to_string_lossy()
        .starts_with("floorplan-a2-96dpi-"));
    let png = std::fs::read(&image).unwrap();
    assert_eq!(&png[..8], b"\x89PNG\r\n\x1a\n");

    let metadata: serde_json::Value =
        serde_json::from_str(&std::fs::read_to_string(&summary.metadata_path).unwrap()).unwrap();
    assert_eq!(metadata["dpi"], 96);
    assert_eq!(metadata["image_width_px"], 1587);
    assert_eq!(metadata["image_height_px"], 2245);
    assert_eq!(metadata["plot_scale"], 3.1);
    assert_eq!(metadata["export_origin"]["x"], 0.0);
    assert!(metadata["timestamp"].is_string());

    let project = floorplan_designer::ProjectFile::load_from_file(&summary.project_path).unwrap();
    assert_eq!(project.shapes, state.shapes());
}

#[test]
fn test_export_without_renderer_still_writes_json() {
    let dir = tempfile::tempdir().unwrap();
    let out = dir.path().join("nested").join("out");
    let exporter = Exporter::with_provider(300, &out, Box::new(NoBackend));
    let summary = exporter.export(plan().shapes()).unwrap();

    assert!(!summary.is_complete());
    assert!(summary.render_error.unwrap().contains("no backend"));
    assert!(summary.metadata_path.exists());
    assert!(summary.project_path.exists());
    assert_eq!(summary.metadata.image_width_px, 4961);

    let pngs = std::fs::read_dir(&out)
        .unwrap()
        .filter(|e| {
            e.as_ref()
                .unwrap()
                .path()
                .extension()
                .is_some_and(|ext| ext == "png")
        })
        .count();
    assert_eq!(pngs, 0);
}

#[test]
fn test_zero_dpi_is_rejected() {
    let dir = tempfile::tempdir().unwrap();
    assert!(Exporter::new(0, dir.path()).export(&[]).is_err());
}

#[test]
fn test_oversized_surface_is_unavailable() {
    let side = (MAX_SURFACE_PIXELS as f64).sqrt() as u32 + 1;
    let result = PixmapSurface::new(PixelDimensions {
        width: side,
        height: side,
    });
    assert!(matches!(result, Err(Error::RenderUnavailable(_))));
}

#[test]
fn test_render_plan_draws_fill_and_stroke() {
    // 310 DPI gives exactly 100 px per foot.
    let mut surface = PixmapSurface::new(PixelDimensions {
        width: 400,
        height: 400,
    })
    .unwrap();
    let shape = floorplan_designer::templates::create_rectangle(
        floorplan_designer::WorldPoint::new(2.0, 2.0),
        floorplan_designer::templates::Dimensions::new(2.0, 2.0),
        0.25,
        Color::BOUNDARY,
        floorplan_designer::model::Layer::Boundary,
        None,
    )
    .unwrap()
    .with_fill(Some(Color::rgb(0xFF, 0, 0)));

    render_plan(&mut surface, &[shape], 310.0, ExportPoint::ORIGIN);

    let near = |x: u32, y: u32, expected: Color| {
        let c = surface.pixel(x, y).unwrap();
        let diff = |a: u8, b: u8| (a as i16 - b as i16).abs();
        diff(c.r, expected.r) <= 2 && diff(c.g, expected.g) <= 2 && diff(c.b, expected.b) <= 2
    };
    assert_eq!(surface.pixel(10, 10), Some(Color::WHITE));
    assert!(near(200, 200, Color::rgb(0xFF, 0, 0)));
    // Top edge at y = 100 px, stroke about 3 px wide.
    assert!(near(200, 100, Color::BOUNDARY));
    assert_eq!(surface.pixel(400, 0), None);
}
