// benches/extract.rs
use criterion::{black_box, criterion_group, criterion_main, Criterion};

use rtings_extract::{
    config::consts::*,
    extract,
    fetch::localize_links,
};

/// Roughly the size of a saved review page: lots of unrelated markup
/// around a ~500-row table.
fn synthetic_page() -> String {
    let mut html = String::with_capacity(1 << 20);
    html.push_str("<html><head>");
    for i in 0..400 {
        html.push_str(&format!(
            r#"<link rel="stylesheet" href="https://cdn.example.com/css/{i}.css"><script src="https://cdn.example.com/js/{i}.js"></script>"#
        ));
    }
    html.push_str("</head><body>");
    for i in 0..2_000 {
        html.push_str(&format!(r#"<div class="c{i}" style="background:url(https://img.example.com/{i}.png)"><p>filler {i}</p></div>"#));
    }
    html.push_str(START_ANCHOR);
    let rows: Vec<String> = (0..500)
        .map(|i| format!("{}{}{:.2}", 20 + i * 40, CELL_MARKER, 75.0 + (i % 13) as f32 * 0.7))
        .collect();
    html.push_str(&rows.join(ROW_MARKER));
    html.push_str(END_ANCHOR);
    html.push_str("</body></html>");
    html
}

fn bench_extract(c: &mut Criterion) {
    let doc = synthetic_page();

    c.bench_function("extract_rtings", |b| {
        b.iter(|| {
            let table = extract(black_box(&doc)).unwrap();
            black_box(table.row_count())
        })
    });

    c.bench_function("localize_links", |b| {
        b.iter(|| black_box(localize_links(black_box(&doc)).len()))
    });
}

criterion_group!(benches, bench_extract);
criterion_main!(benches);
