use tracing::trace;

use crate::core::{
    ATTRIBUTE_COLUMN, ATTRIBUTE_TOOLTIPS, ATTRIBUTE_TYPE, ATTRIBUTE_URLS, ATTRIBUTE_VISIBLE,
    ChartDocument, ChartElement, ElementId, TAG_NAME_AXIS, TAG_NAME_LABEL, TAG_NAME_LEGEND,
};
use crate::css::StyleKey;
use crate::data::{CategoryDataset, ChartTableModel};
use crate::generator::{BarRendererState, CategoryChart, ChartType, PlotOrientation};
use crate::render::border_stroke;

const CATEGORY_AXIS_TYPES: &[&str] = &["domain", "category"];
const VALUE_AXIS_TYPES: &[&str] = &["range", "value"];

/// Reads the chart-level properties shared by every category chart and
/// builds an unstyled chart.
pub(crate) fn base_category_chart(
    chart_type: ChartType,
    document: &ChartDocument,
    data: &ChartTableModel,
) -> CategoryChart {
    CategoryChart {
        chart_type,
        title: document.title_text().map(str::to_owned),
        category_axis_label: axis_label(document, CATEGORY_AXIS_TYPES),
        value_axis_label: axis_label(document, VALUE_AXIS_TYPES),
        orientation: plot_orientation(document),
        legend: show_legend(document),
        tooltips: document.chart_flag(ATTRIBUTE_TOOLTIPS),
        urls: document.chart_flag(ATTRIBUTE_URLS),
        dataset: CategoryDataset::from_table(data, document.is_by_row()),
        renderer: BarRendererState::default(),
    }
}

/// Text of the `label` under the first `axis` whose `type` is one of `axis_types`.
fn axis_label(document: &ChartDocument, axis_types: &[&str]) -> Option<String> {
    let axis = document
        .find_children_by_name(document.root_id(), TAG_NAME_AXIS)
        .into_iter()
        .find(|id| {
            document
                .element(*id)
                .and_then(|axis| axis.attribute(ATTRIBUTE_TYPE))
                .is_some_and(|kind| axis_types.iter().any(|t| t.eq_ignore_ascii_case(kind)))
        })?;
    let label = *document.find_children_by_name(axis, TAG_NAME_LABEL).first()?;
    document
        .element(label)
        .and_then(ChartElement::text)
        .map(str::to_owned)
}

fn plot_orientation(document: &ChartDocument) -> PlotOrientation {
    let horizontal = document
        .plot_element()
        .and_then(|id| document.element(id))
        .and_then(|plot| plot.layout_style().keyword(StyleKey::Orientation))
        .is_some_and(|keyword| keyword == "horizontal");
    if horizontal {
        PlotOrientation::Horizontal
    } else {
        PlotOrientation::Vertical
    }
}

fn show_legend(document: &ChartDocument) -> bool {
    document
        .find_children_by_name(document.root_id(), TAG_NAME_LEGEND)
        .first()
        .and_then(|id| document.element(*id))
        .is_some_and(|legend| {
            ChartDocument::boolean_attribute_value(legend, ATTRIBUTE_VISIBLE, true)
        })
}

/// Dataset series index a series element styles.
///
/// The `column` attribute may hold an index or a name. Series are the table
/// rows when `by_row` is set and its columns otherwise, so names and bounds
/// are checked against the matching axis. Without a usable attribute the
/// element's position among the series elements is used.
#[must_use]
pub fn series_column(
    element: &ChartElement,
    data: &ChartTableModel,
    by_row: bool,
    position: usize,
) -> usize {
    let Some(column) = element.attribute(ATTRIBUTE_COLUMN).map(str::trim) else {
        return position;
    };
    let series_total = if by_row {
        data.row_count()
    } else {
        data.column_count()
    };
    column
        .parse::<usize>()
        .ok()
        .filter(|index| *index < series_total)
        .or_else(|| {
            if by_row {
                data.row_index(column)
            } else {
                data.column_index(column)
            }
        })
        .unwrap_or(position)
}

/// Applies item-label, paint and outline overrides of each series element.
pub(crate) fn apply_series_attributes(
    document: &ChartDocument,
    series: &[ElementId],
    data: &ChartTableModel,
    series_count: usize,
    renderer: &mut BarRendererState,
) {
    let by_row = document.is_by_row();
    for (position, id) in series.iter().enumerate() {
        let Some(element) = document.element(*id) else {
            continue;
        };
        let column = series_column(element, data, by_row, position);
        if column >= series_count {
            trace!(
                position,
                column,
                series_count,
                "series element has no dataset series"
            );
            continue;
        }
        let layout = element.layout_style();
        let style = renderer.series_mut(column);

        if let Some(keyword) = layout.keyword(StyleKey::ItemLabelVisible) {
            style.item_labels_visible = Some(keyword == "visible");
        }
        if let Some(paint) = layout.color(StyleKey::Color) {
            style.paint = Some(paint);
        }
        if let Some(stroke) = border_stroke(element) {
            if let Some(outline) = layout.color(StyleKey::BorderTopColor) {
                style.outline_paint = Some(outline);
            }
            style.outline_stroke = Some(stroke);
            renderer.draw_bar_outline = true;
        }
        trace!(position, column, "applied series attributes");
    }
}
