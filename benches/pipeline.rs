//! Benchmarks for the tokensync pipeline: schema, extraction, rendering.

use criterion::{black_box, criterion_group, criterion_main, Criterion};
use serde_json::{json, Value};

use tokensync::emit::{render, Format};
use tokensync::extract::{extract_groups, ExtractOptions};
use tokensync::schema::parse_file;

/// A document with `pages` canvases of `frames` frames, each holding a
/// rectangle and a text layer.
fn synthetic_file(pages: usize, frames: usize) -> Value {
    let canvases: Vec<Value> = (0..pages)
        .map(|p| {
            let children: Vec<Value> = (0..frames)
                .map(|f| {
                    json!({
                        "id": format!("{p}:{f}"),
                        "name": format!("Card {p}/{f}"),
                        "type": "FRAME",
                        "absoluteBoundingBox": {"x": 0, "y": 0, "width": 320, "height": 200},
                        "cornerRadius": 8,
                        "fills": [{"type": "SOLID", "color": {"r": 1, "g": 1, "b": 1, "a": 1}}],
                        "children": [
                            {
                                "id": format!("{p}:{f}:r"),
                                "name": "Swatch",
                                "type": "RECTANGLE",
                                "absoluteBoundingBox": {"x": 8, "y": 8, "width": 24, "height": 24},
                                "fills": [{"type": "SOLID", "color": {"r": 0.2, "g": 0.4, "b": 0.8, "a": 0.5}}],
                                "strokes": [{"type": "SOLID", "color": {"r": 0, "g": 0, "b": 0}}]
                            },
                            {
                                "id": format!("{p}:{f}:t"),
                                "name": "Label",
                                "type": "TEXT",
                                "styles": {"text": format!("S:{f}")}
                            }
                        ]
                    })
                })
                .collect();
            json!({"id": format!("{p}"), "name": format!("Page {p}"), "type": "CANVAS", "children": children})
        })
        .collect();

    let components: serde_json::Map<String, Value> = (0..frames)
        .map(|i| {
            (
                format!("c:{i}"),
                json!({"key": format!("k{i}"), "name": format!("Component {i}"), "description": "bench"}),
            )
        })
        .collect();

    json!({
        "name": "Bench Library",
        "version": "1",
        "lastModified": "2024-01-01T00:00:00Z",
        "document": {"id": "0:0", "name": "Document", "type": "DOCUMENT", "children": canvases},
        "components": components,
        "styles": {}
    })
}

fn bench_schema(c: &mut Criterion) {
    let mut group = c.benchmark_group("schema");

    let small = synthetic_file(1, 10);
    let large = synthetic_file(10, 200);

    group.bench_function("parse_file_small", |b| {
        b.iter(|| parse_file(black_box(&small)).unwrap())
    });

    group.bench_function("parse_file_large", |b| {
        b.iter(|| parse_file(black_box(&large)).unwrap())
    });

    group.finish();
}

fn bench_extraction(c: &mut Criterion) {
    let mut group = c.benchmark_group("extraction");

    let file = parse_file(&synthetic_file(10, 200)).unwrap();
    let options = ExtractOptions::default();

    group.bench_function("extract_groups", |b| {
        b.iter(|| extract_groups(black_box(&file), &options).unwrap())
    });

    group.bench_function("descendants", |b| {
        b.iter(|| black_box(&file.document).descendants().count())
    });

    group.finish();
}

fn bench_rendering(c: &mut Criterion) {
    let mut group = c.benchmark_group("rendering");

    let file = parse_file(&synthetic_file(10, 200)).unwrap();
    let groups = extract_groups(&file, &ExtractOptions::default()).unwrap();

    for format in Format::ALL {
        group.bench_function(format!("render_{}", format.name()), |b| {
            b.iter(|| render(black_box(&groups), format).unwrap())
        });
    }

    group.finish();
}

criterion_group!(benches, bench_schema, bench_extraction, bench_rendering);
criterion_main!(benches);
