use migramap::{
    ArcDirection, Datasets, FillClass, HoverController, LoadError, MemSource, MigrationFlowRenderer, PointerPosition,
    RenderConfig, HOVER_FILL,
};

fn square(name: &str, lon: f64, lat: f64) -> String {
    format!(
        r#"{{"type":"Feature","properties":{{"name":"{name}"}},"geometry":{{"type":"Polygon","coordinates":[[[{lon},{lat}],[{x},{lat}],[{x},{y}],[{lon},{y}],[{lon},{lat}]]]}}}}"#,
        x = lon + 2.0,
        y = lat + 2.0,
    )
}

fn boundaries() -> String {
    let features = [
        square("California", -121.0, 36.0),
        square("Texas", -100.0, 30.0),
        square("New York", -76.0, 42.0),
        square("Oregon", -122.0, 43.0),
    ];
    format!(r#"{{"type":"FeatureCollection","features":[{}]}}"#, features.join(","))
}

const MIGRATION: &str = r#"{
    "California": { "coming_from_california": 90000, "going_to_california": 10000 },
    "Texas":      { "coming_from_california": 50000, "going_to_california": 30000 },
    "New York":   { "coming_from_california": "10,000", "going_to_california": 20000 },
    "Puerto Rico": { "coming_from_california": 100, "going_to_california": 50 }
}"#;

#[test]
fn renders_choropleth_and_arcs_end_to_end() {
    let datasets = Datasets::from_slices(boundaries().as_bytes(), MIGRATION.as_bytes()).unwrap();
    let (features, summary) = datasets.into_joined();
    assert_eq!(summary.matched, 3);
    assert_eq!(summary.unmatched, ["Oregon"]);
    assert_eq!(summary.orphaned, ["Puerto Rico"]);

    let plan = MigrationFlowRenderer::new(RenderConfig::default()).unwrap().render(&features);

    assert_eq!(plan.regions.len(), 4);
    assert_eq!(plan.region("California").unwrap().fill, FillClass::Reference);
    assert_eq!(plan.region("Texas").unwrap().fill, FillClass::Inbound);
    // "10,000" is not a number, so the difference is NaN and New York falls in neither arc set.
    assert_eq!(plan.region("New York").unwrap().fill, FillClass::Outbound);
    assert!(plan.region("New York").unwrap().difference.unwrap().is_nan());

    assert_eq!(plan.outbound_arcs.len(), 1);
    assert_eq!(plan.outbound_arcs[0].name, "Texas");
    assert_eq!(plan.outbound_arcs[0].direction, ArcDirection::FromReference);
    assert!(plan.inbound_arcs.is_empty());
    assert!(plan.arcs().all(|arc| (1.0..=5.0).contains(&arc.stroke_width)));

    let svg = plan.to_svg_string().unwrap();
    assert!(svg.starts_with("<svg") || svg.starts_with("<?xml"));
    assert_eq!(svg.matches(r#"class="state""#).count(), 4);
    assert_eq!(svg.matches(r#"class="to""#).count(), 1);
    assert!(svg.contains(r#"id="arrowhead-yellow""#));
    assert!(svg.contains(r#"id="arrowhead-pink""#));
}

#[test]
fn hover_follows_the_pointer_and_restores_fill() {
    let datasets = Datasets::from_slices(boundaries().as_bytes(), MIGRATION.as_bytes()).unwrap();
    let (features, _) = datasets.into_joined();
    let plan = MigrationFlowRenderer::new(RenderConfig::default()).unwrap().render(&features);
    let texas = plan.region("Texas").unwrap();

    let mut hover = HoverController::new(plan.reference.clone());
    let entered = hover.on_hover(texas, PointerPosition::new(100.0, 100.0));
    assert_eq!(entered.fill, HOVER_FILL);
    assert!(entered.tooltip.visible);
    assert_eq!((entered.tooltip.left, entered.tooltip.top), (120.0, 80.0));
    assert!(entered.tooltip.html.contains("Coming from California: 50000"));

    let moved = hover.on_move(PointerPosition::new(10.0, 30.0)).unwrap();
    assert_eq!((moved.left, moved.top), (30.0, 10.0));

    assert_eq!(hover.tooltip(), &moved);

    let left = hover.on_leave(texas);
    assert_eq!(left.fill, FillClass::Inbound.color());
    assert!(!left.tooltip.visible);
    assert!(!hover.tooltip().visible);
    assert!(hover.on_move(PointerPosition::new(0.0, 0.0)).is_none());
}

#[test]
fn failed_load_reports_which_dataset() {
    let mut source = MemSource::default();
    source.insert("states.json", boundaries().into_bytes());

    let err = Datasets::load(&source, "states.json", "missing.json").unwrap_err();
    assert!(matches!(err, LoadError::Migration { ref location, .. } if location == "missing.json"));

    source.insert("broken.json", b"{ not json".to_vec());
    source.insert("migration.json", MIGRATION.as_bytes().to_vec());
    let err = Datasets::load(&source, "broken.json", "migration.json").unwrap_err();
    assert!(matches!(err, LoadError::Boundaries { .. }));
}

#[test]
fn loads_from_disk() {
    let dir = tempfile::tempdir().unwrap();
    let states = dir.path().join("states.geojson");
    let migration = dir.path().join("migration.json");
    std::fs::write(&states, boundaries()).unwrap();
    std::fs::write(&migration, MIGRATION).unwrap();

    let datasets = Datasets::load(
        &migramap::DiskSource,
        states.to_str().unwrap(),
        migration.to_str().unwrap(),
    ).unwrap();
    assert_eq!(datasets.features.len(), 4);
    assert_eq!(datasets.migration.len(), 4);

    let out = dir.path().join("map.svg");
    let (features, _) = datasets.into_joined();
    MigrationFlowRenderer::new(RenderConfig::default()).unwrap().render(&features).to_svg(&out).unwrap();
    assert!(std::fs::read_to_string(out).unwrap().contains("</svg>"));
}
