//! Benchmarks for page splitting and metadata normalization.
//!
//! Run with: cargo bench

use criterion::{black_box, criterion_group, criterion_main, Criterion};

use unpage::{split_pages, RawMetadata, StructuralEvent};

/// Creates a synthetic event stream with the given number of pages.
fn create_events(page_count: usize) -> Vec<StructuralEvent> {
    let mut events = vec![
        StructuralEvent::open("html", Vec::<(String, String)>::new()),
        StructuralEvent::open("body", Vec::<(String, String)>::new()),
    ];
    for i in 0..page_count {
        events.push(StructuralEvent::open("div", [("class", "page")]));
        for line in 0..20 {
            events.push(StructuralEvent::open("p", Vec::<(String, String)>::new()));
            events.push(StructuralEvent::characters(format!(
                "Page {}  line {}\n  benchmark   content for page splitting.",
                i + 1,
                line
            )));
            events.push(StructuralEvent::close("p"));
        }
        events.push(StructuralEvent::close("div"));
    }
    events.push(StructuralEvent::close("body"));
    events.push(StructuralEvent::close("html"));
    events
}

/// Creates an XHTML document with the given number of pages.
fn create_xhtml(page_count: usize) -> String {
    let mut xhtml = String::from(
        "<html xmlns=\"http://www.w3.org/1999/xhtml\"><head>\
         <meta name=\"Content-Type\" content=\"application/pdf\"/></head><body>",
    );
    for i in 0..page_count {
        xhtml.push_str("<div class=\"page\">");
        for line in 0..20 {
            xhtml.push_str(&format!(
                "<p>Page {}  line {} &amp; benchmark content.</p>\n",
                i + 1,
                line
            ));
        }
        xhtml.push_str("</div>");
    }
    xhtml.push_str("</body></html>");
    xhtml
}

/// Benchmark the accumulator over pre-built event streams.
fn bench_split_pages(c: &mut Criterion) {
    let mut group = c.benchmark_group("split_pages");

    for page_count in [1, 10, 100].iter() {
        let events = create_events(*page_count);

        group.bench_function(format!("{}_pages_compressed", page_count), |b| {
            b.iter(|| split_pages(black_box(events.clone()), true));
        });

        group.bench_function(format!("{}_pages_raw", page_count), |b| {
            b.iter(|| split_pages(black_box(events.clone()), false));
        });
    }

    group.finish();
}

/// Benchmark XHTML parsing straight into the accumulator.
fn bench_xhtml_pages(c: &mut Criterion) {
    let mut group = c.benchmark_group("xhtml_pages");

    for page_count in [1, 10, 100].iter() {
        let xhtml = create_xhtml(*page_count);

        group.bench_function(format!("{}_pages", page_count), |b| {
            b.iter(|| unpage::pages_from_xhtml(black_box(&xhtml), true).unwrap());
        });
    }

    group.finish();
}

/// Benchmark metadata normalization.
fn bench_normalize(c: &mut Criterion) {
    let raw: RawMetadata = [
        ("title", "Benchmark"),
        ("pdf:PDFVersion", "1.7"),
        ("xmpTPg:NPages", "100"),
        ("creator", "criterion"),
        ("meta:creation-date", "2020-01-01T00:00:00Z"),
    ]
    .into_iter()
    .collect();

    c.bench_function("normalize_metadata", |b| {
        b.iter(|| unpage::normalize_metadata(black_box(&raw)));
    });
}

criterion_group!(benches, bench_split_pages, bench_xhtml_pages, bench_normalize);
criterion_main!(benches);
