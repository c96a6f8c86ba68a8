//! Benchmarks for post content rendering.

#![allow(clippy::format_push_string)] // Benchmark setup code, performance not critical

use criterion::{BenchmarkId, Criterion, Throughput, criterion_group, criterion_main};
use quill_renderer::{excerpt, render};

/// Generate post content with `embeds` directives spread across paragraphs.
fn generate_content(paragraphs: usize, embeds: usize) -> String {
    let mut content = String::with_capacity(paragraphs * 120);
    for i in 0..paragraphs {
        content.push_str(&format!(
            "<p>Paragraph {i} with <b>markup</b> & some text that needs escaping.</p>\n"
        ));
        if embeds > 0 && i % (paragraphs / embeds).max(1) == 0 {
            if i % 2 == 0 {
                content.push_str("[youtube:dQw4w9WgXcQ]\n");
            } else {
                content.push_str("[html]<figure><img src=\"a.png\"></figure>[/html]\n");
            }
        }
    }
    content
}

fn bench_render_plain(c: &mut Criterion) {
    let content = generate_content(20, 0);
    c.bench_function("render_plain_20_paragraphs", |b| {
        b.iter(|| render(&content));
    });
}

fn bench_render_varying_sizes(c: &mut Criterion) {
    let mut group = c.benchmark_group("render_with_embeds");
    for paragraphs in [10, 100, 1000] {
        let content = generate_content(paragraphs, paragraphs / 5);
        group.throughput(Throughput::Bytes(content.len() as u64));
        group.bench_with_input(
            BenchmarkId::from_parameter(paragraphs),
            &content,
            |b, content| b.iter(|| render(content)),
        );
    }
    group.finish();
}

fn bench_unterminated_raw_markup(c: &mut Criterion) {
    let content = "[html] never closed ".repeat(2000);
    c.bench_function("render_unterminated_raw_markup", |b| {
        b.iter(|| render(&content));
    });
}

fn bench_excerpt(c: &mut Criterion) {
    let content = generate_content(100, 20);
    c.bench_function("excerpt_150", |b| {
        b.iter(|| excerpt(&content, 150));
    });
}

criterion_group!(
    benches,
    bench_render_plain,
    bench_render_varying_sizes,
    bench_unterminated_raw_markup,
    bench_excerpt
);
criterion_main!(benches);
