// benches/filter_sort.rs
use criterion::{black_box, criterion_group, criterion_main, Criterion};

use rankview::record::{KeywordRecord, KEYWORD_COLUMNS};
use rankview::view::TableView;

fn synthetic_keywords(n: usize) -> Vec<KeywordRecord> {
    (0..n)
        .map(|i| KeywordRecord {
            word: format!("keyword {} variant {}", i % 997, i),
            ws: Some((i % 5000) as u32),
            wsk: Some((i % 900) as u32),
            pos: if i % 7 == 0 { None } else { Some((i % 100) as u32) },
            url: Some(format!("https://example.com/page/{}", i % 311)),
        })
        .collect()
}

fn bench_filter(c: &mut Criterion) {
    let data = synthetic_keywords(10_000);

    c.bench_function("filter_10k", |b| {
        let mut view = TableView::new(KEYWORD_COLUMNS);
        view.load(Some(data.clone()));
        b.iter(|| {
            view.set_query(black_box("variant 42"));
            black_box(view.len())
        })
    });
}

fn bench_sort(c: &mut Criterion) {
    let data = synthetic_keywords(10_000);

    c.bench_function("sort_10k_numeric", |b| {
        let mut view = TableView::new(KEYWORD_COLUMNS);
        view.load(Some(data.clone()));
        b.iter(|| {
            view.sort_by(black_box("pos"));
            black_box(view.len())
        })
    });

    c.bench_function("sort_10k_text", |b| {
        let mut view = TableView::new(KEYWORD_COLUMNS);
        view.load(Some(data.clone()));
        b.iter(|| {
            view.sort_by(black_box("word"));
            black_box(view.len())
        })
    });
}

criterion_group!(benches, bench_filter, bench_sort);
criterion_main!(benches);
