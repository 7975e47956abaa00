use chart_doc::api::{ChartFactory, GeneratorConfig};
use chart_doc::core::{ChartDefinitionNode, ChartDocument};
use chart_doc::css::StyleKey;
use chart_doc::data::ChartTableModel;
use chart_doc::generator::{CategoryChart, ChartType};
use chart_doc::render::NullRenderer;
use chart_doc::{ChartError, telemetry};

fn single_column() -> ChartTableModel {
    ChartTableModel::new(
        vec!["amount".to_owned()],
        vec!["start".to_owned(), "change".to_owned(), "end".to_owned()],
        vec![vec![10.0], vec![-3.0], vec![7.0]],
    )
    .expect("valid table")
}

#[test]
fn generator_config_json_roundtrip() {
    let config = GeneratorConfig::new()
        .with_default_chart_type(ChartType::Waterfall)
        .with_strict_styles(true);

    let json = config.to_json_pretty().expect("serialize");
    let restored = GeneratorConfig::from_json_str(&json).expect("deserialize");
    assert_eq!(restored, config);
}

#[test]
fn generator_config_fills_missing_fields_with_defaults() {
    let config = GeneratorConfig::from_json_str("{}").expect("empty config");
    assert_eq!(config, GeneratorConfig::default());
    assert!(config.resolve_inline_styles);
}

#[test]
fn factory_renders_through_renderer_contract() {
    let config = GeneratorConfig::new().with_default_chart_type(ChartType::Waterfall);
    let factory = ChartFactory::new(config);
    let context = factory
        .load_json(
            r#"{ "tag": "chart", "children": [
                { "tag": "plot" },
                { "tag": "series", "attributes": { "style": "border-top-style: double" } }
            ] }"#,
        )
        .expect("load");

    let mut renderer = NullRenderer::default();
    let chart = factory
        .render(&context, &single_column(), &mut renderer)
        .expect("render");

    assert_eq!(chart.chart_type, ChartType::Waterfall);
    assert_eq!(renderer.rendered_charts, 1);
    assert_eq!(renderer.last_series_count, 1);
    assert_eq!(renderer.last_category_count, 3);
    assert_eq!(renderer.last_outlined_series, 1);
}

#[test]
fn unknown_chart_type_is_reported() {
    let factory = ChartFactory::default();
    let context = factory
        .load_json(r#"{ "tag": "chart", "attributes": { "type": "pie" } }"#)
        .expect("load");
    let err = factory
        .generate(&context, &single_column())
        .expect_err("pie is not supported");
    assert!(matches!(err, ChartError::UnsupportedChartType(name) if name == "pie"));
}

#[test]
fn inline_style_resolution_can_be_disabled() {
    let factory = ChartFactory::new(GeneratorConfig::new().with_inline_styles(false));
    let context = factory
        .load_json(r#"{ "tag": "chart", "attributes": { "style": "orientation: horizontal" } }"#)
        .expect("load");
    assert!(context.chart_document().root().layout_style().is_empty());

    let styled = ChartFactory::default()
        .load_json(r#"{ "tag": "chart", "attributes": { "style": "orientation: horizontal" } }"#)
        .expect("load");
    assert_eq!(
        styled.chart_document().root().layout_style().keyword(StyleKey::Orientation),
        Some("horizontal")
    );
}

#[test]
fn strict_factory_rejects_invalid_styles() {
    let factory = ChartFactory::new(GeneratorConfig::new().with_strict_styles(true));
    let err = factory
        .load_json(
            r#"{ "tag": "chart", "children": [
                { "tag": "plot", "attributes": { "style": "first-bar-color: sparkly" } }
            ] }"#,
        )
        .expect_err("invalid color");
    assert!(matches!(err, ChartError::InvalidStyle { .. }));
}

#[test]
fn invalid_definition_json_is_reported() {
    let err = ChartDocument::from_json_str("{ \"children\": [] }").expect_err("tag is required");
    assert!(matches!(err, ChartError::InvalidDefinition(_)));
}

#[test]
fn definition_json_roundtrip_preserves_null_attributes_and_order() {
    let mut definition = ChartDefinitionNode::new("chart")
        .with_attribute("type", "bar")
        .with_child(ChartDefinitionNode::new("title").with_text("Sales"))
        .with_child(ChartDefinitionNode::new("series").with_attribute("column", "amount"));
    definition.children[1].attributes.insert("label".to_owned(), None);

    let document = ChartDocument::from_definition(&definition).expect("document");
    let json = document.to_json_pretty().expect("serialize");
    let restored = ChartDocument::from_json_str(&json).expect("reload");

    assert_eq!(restored.to_definition(), definition);
    let series = restored.series_elements();
    let series = restored.element(series[0]).expect("series");
    assert_eq!(series.attribute_entry("label"), Some(None));
    assert_eq!(restored.title_text(), Some("Sales"));
}

#[test]
fn chart_json_roundtrip() {
    let factory = ChartFactory::default();
    let context = factory
        .load_json(
            r#"{ "tag": "chart", "attributes": { "type": "waterfall" }, "children": [
                { "tag": "plot", "attributes": { "style": "first-bar-color: #123456" } },
                { "tag": "series", "attributes": { "style": "color: teal" } }
            ] }"#,
        )
        .expect("load");
    let chart = factory.generate(&context, &single_column()).expect("chart");

    let json = chart.to_json_pretty().expect("serialize");
    let restored = CategoryChart::from_json_str(&json).expect("deserialize");
    assert_eq!(restored, chart);
}

#[test]
fn telemetry_init_without_feature_is_a_noop() {
    if cfg!(feature = "telemetry") {
        return;
    }
    assert!(!telemetry::init_default_tracing());
}
