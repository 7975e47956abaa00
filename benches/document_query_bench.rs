use chart_doc::core::{ChartDocument, ChartElement, TAG_NAME_CHART, TAG_NAME_GROUP, TAG_NAME_SERIES};
use chart_doc::css::StyleResolver;
use criterion::{Criterion, criterion_group, criterion_main};
use std::hint::black_box;

fn wide_document(groups: usize, series_per_group: usize) -> ChartDocument {
    let mut doc = ChartDocument::new(ChartElement::with_tag(TAG_NAME_CHART));
    let root = doc.root_id();
    for _ in 0..groups {
        let group = doc
            .append_child(root, ChartElement::with_tag(TAG_NAME_GROUP))
            .expect("group");
        for _ in 0..series_per_group {
            let mut series = ChartElement::with_tag(TAG_NAME_SERIES);
            series.set_attribute("style", "color: #336699; border-top-style: solid");
            let series = doc.append_child(group, series).expect("series");
            doc.append_child(series, ChartElement::with_tag("label"))
                .expect("label");
        }
    }
    doc
}

fn bench_series_search_10k(c: &mut Criterion) {
    let doc = wide_document(100, 100);

    c.bench_function("series_search_10k", |b| {
        b.iter(|| {
            let found = black_box(&doc).series_elements();
            assert_eq!(found.len(), 10_000);
        })
    });
}

fn bench_inline_style_resolution_10k(c: &mut Criterion) {
    let doc = wide_document(100, 100);

    c.bench_function("inline_style_resolution_10k", |b| {
        b.iter(|| {
            let mut doc = doc.clone();
            StyleResolver::new()
                .resolve_document(black_box(&mut doc))
                .expect("styles should resolve");
        })
    });
}

criterion_group!(
    benches,
    bench_series_search_10k,
    bench_inline_style_resolution_10k
);
criterion_main!(benches);
