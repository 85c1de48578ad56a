//! Performance benchmarks for ui-layouts-docs.
//!
//! Run with: `cargo bench`
//!
//! Benchmarks cover the pure, per-request work: metadata extraction, text
//! normalization and catalog search.

use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion, Throughput};
use ui_layouts_docs::{
    extract_main_section, extract_meta_from_html, html_to_text, search_components, Catalog,
};

const SAMPLE_HTML: &str = r#"
<!DOCTYPE html>
<html lang="en">
<head>
    <meta charset="UTF-8">
    <title>Accordion - ui-layouts</title>
    <meta name="description" content="Collapsible content sections with smooth animation.">
    <meta name="keywords" content="accordion, collapse, disclosure, react">
    <meta property="og:title" content="Accordion">
    <meta property="og:image" content="/og/accordion.png">
    <meta name="twitter:card" content="summary_large_image">
    <meta name="ui-layouts:component-names" content="accordion, accordion-item">
    <meta name="ui-layouts:available-components" content="Accordion|AccordionItem|AccordionTrigger">
    <style>.accordion { transition: height 200ms; }</style>
</head>
<body>
    <header><nav><a href="/">Home</a><a href="/components">Components</a></nav></header>
    <main>
        <article>
            <h1>Accordion</h1>
            <p>A vertically stacked set of interactive headings that each reveal a
            section of content.</p>
            <h2>Installation</h2>
            <pre><code>npm install motion</code></pre>
            <h2>Usage</h2>
            <p>Wrap each item in <code>AccordionItem</code> and pair a trigger with
            its content.</p>
            <ul>
                <li>Single or multiple open items</li>
                <li>Keyboard navigation</li>
            </ul>
        </article>
    </main>
    <script>window.__NEXT_DATA__ = {"props":{}};</script>
    <footer><p>Copyright ui-layouts</p></footer>
</body>
</html>
"#;

fn bench_extract_meta(c: &mut Criterion) {
    c.bench_function("extract_meta_from_html", |b| {
        b.iter(|| {
            extract_meta_from_html(
                black_box(SAMPLE_HTML),
                black_box("https://ui-layouts.com/components/accordion"),
            )
        });
    });
}

fn bench_text(c: &mut Criterion) {
    let mut group = c.benchmark_group("text");

    for copies in [1usize, 10, 100] {
        let html = SAMPLE_HTML.repeat(copies);
        group.throughput(Throughput::Bytes(html.len() as u64));
        group.bench_with_input(BenchmarkId::new("html_to_text", copies), &html, |b, html| {
            b.iter(|| html_to_text(black_box(html)));
        });
        group.bench_with_input(BenchmarkId::new("snippet", copies), &html, |b, html| {
            b.iter(|| html_to_text(extract_main_section(black_box(html))));
        });
    }

    group.finish();
}

fn bench_search(c: &mut Criterion) {
    let catalog = Catalog::builtin();
    let mut group = c.benchmark_group("search");

    for query in ["accordion", "components", "zzz-no-match"] {
        group.bench_with_input(BenchmarkId::from_parameter(query), &query, |b, query| {
            b.iter(|| search_components(catalog, black_box(query), 20));
        });
    }

    group.finish();
}

criterion_group!(benches, bench_extract_meta, bench_text, bench_search);
criterion_main!(benches);
