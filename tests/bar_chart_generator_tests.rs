use chart_doc::api::{ChartFactory, GeneratorConfig};
use chart_doc::core::{ChartElement, TAG_NAME_SERIES};
use chart_doc::data::ChartTableModel;
use chart_doc::generator::{BarChartGenerator, ChartGenerator, ChartType, series_column};
use chart_doc::render::{Color, DEFAULT_BORDER_WIDTH_PX, StrokeStyle};

fn quarterly() -> ChartTableModel {
    ChartTableModel::new(
        vec!["north".to_owned(), "south".to_owned(), "west".to_owned()],
        vec!["q1".to_owned(), "q2".to_owned()],
        vec![vec![1.0, 2.0, 3.0], vec![4.0, 5.0, 6.0]],
    )
    .expect("valid table")
}

#[test]
fn series_column_resolves_index_name_or_position() {
    let data = quarterly();
    let mut element = ChartElement::with_tag(TAG_NAME_SERIES);
    assert_eq!(series_column(&element, &data, false, 1), 1);

    element.set_attribute("column", "2");
    assert_eq!(series_column(&element, &data, false, 0), 2);

    element.set_attribute("column", "south");
    assert_eq!(series_column(&element, &data, false, 0), 1);

    element.set_attribute("column", "east");
    assert_eq!(series_column(&element, &data, false, 2), 2);

    element.set_attribute("column", "9");
    assert_eq!(series_column(&element, &data, false, 0), 0);
}

#[test]
fn series_column_uses_row_names_for_by_row_documents() {
    let data = quarterly();
    let mut element = ChartElement::with_tag(TAG_NAME_SERIES);

    element.set_attribute("column", "q2");
    assert_eq!(series_column(&element, &data, true, 0), 1);

    // Column names are categories once the table is read by row.
    element.set_attribute("column", "south");
    assert_eq!(series_column(&element, &data, true, 0), 0);

    // Only two rows exist, so index 2 is out of range.
    element.set_attribute("column", "2");
    assert_eq!(series_column(&element, &data, true, 1), 1);
}

#[test]
fn by_row_series_overrides_target_the_named_row() {
    let factory = ChartFactory::default();
    let context = factory
        .load_json(
            r#"{ "tag": "chart", "attributes": { "byrow": "true" }, "children": [
                { "tag": "series", "attributes": { "column": "q2", "style": "color: navy" } }
            ] }"#,
        )
        .expect("load");
    let chart = factory.generate(&context, &quarterly()).expect("chart");

    assert_eq!(chart.renderer.series.len(), 1);
    let q2 = chart.renderer.series(1).expect("series for row q2");
    assert_eq!(q2.paint, Some(Color::from_rgb8(0, 0, 128)));
    assert!(chart.renderer.series(0).is_none());
}

const BAR_DEFINITION: &str = r#"{
    "tag": "chart",
    "attributes": { "urls": "on" },
    "children": [
        { "tag": "legend" },
        { "tag": "plot" },
        { "tag": "series", "attributes": { "style": "color: auto; border-top-style: dotted" } },
        { "tag": "series", "attributes": { "style": "color: #336699; item-label-visible: hidden" } },
        { "tag": "series", "attributes": {
            "column": "west",
            "style": "border-top-style: none; border-top-width: 4px"
        } },
        { "tag": "series" }
    ]
}"#;

#[test]
fn bar_chart_applies_series_overrides_by_column() {
    let factory = ChartFactory::default();
    let context = factory.load_json(BAR_DEFINITION).expect("load");
    let chart = factory.generate(&context, &quarterly()).expect("chart");

    assert_eq!(chart.chart_type, ChartType::Bar);
    assert!(chart.legend);
    assert!(chart.urls);
    assert!(chart.renderer.waterfall.is_none());
    assert!(chart.renderer.draw_bar_outline);

    let first = chart.renderer.series(0).expect("series 0");
    assert_eq!(first.paint, None);
    let stroke = first.outline_stroke.expect("dotted outline");
    assert_eq!(stroke.style, StrokeStyle::Dotted);
    assert!((stroke.width - DEFAULT_BORDER_WIDTH_PX).abs() <= 1e-12);
    assert_eq!(first.outline_paint, None);

    let second = chart.renderer.series(1).expect("series 1");
    assert_eq!(second.paint, Some(Color::from_rgb8(0x33, 0x66, 0x99)));
    assert_eq!(second.item_labels_visible, Some(false));
    assert_eq!(second.outline_stroke, None);

    // The fourth series element falls outside the three dataset series.
    assert_eq!(chart.renderer.series.len(), 3);
}

#[test]
fn by_row_documents_swap_series_and_categories() {
    let config = GeneratorConfig::new().with_default_chart_type(ChartType::Bar);
    let factory = ChartFactory::new(config);
    let context = factory
        .load_json(
            r#"{ "tag": "chart", "attributes": { "byrow": "true" }, "children": [
                { "tag": "legend", "attributes": { "visible": "no" } }
            ] }"#,
        )
        .expect("load");
    let chart = factory.generate(&context, &quarterly()).expect("chart");

    assert_eq!(chart.dataset.series_keys, vec!["q1", "q2"]);
    assert_eq!(chart.dataset.category_keys, vec!["north", "south", "west"]);
    assert!(!chart.legend);
}

#[test]
fn bar_generator_without_styles_leaves_renderer_defaults() {
    let document = chart_doc::ChartDocument::new(ChartElement::with_tag("chart"));
    let chart = BarChartGenerator
        .create_chart(&document, &quarterly())
        .expect("chart");
    assert!(chart.renderer.series.is_empty());
    assert_eq!(chart.title, None);
    assert!(chart.validate().is_ok());
}
