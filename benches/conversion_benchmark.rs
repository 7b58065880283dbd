//! Benchmark for tree conversion performance
//!
//! Target: a complete depth-12 tree (4095 leaves) converts in <10ms

use criterion::{black_box, criterion_group, criterion_main, Criterion};
use std::fmt::Write;
use tree_strategies::condition::parse;
use tree_strategies::config::{ConvertOptions, ExtractOptions, ParseOptions, RenderOptions};
use tree_strategies::convert::convert_tree_to_strategies;
use tree_strategies::render::render_to_vec;
use tree_strategies::strategy::extract;
use tree_strategies::tree::parse_tree;

const DEPTH: usize = 12;

/// Create a complete binary tree dump, ids assigned in pre-order
fn create_tree(depth: usize) -> String {
    fn write_node(out: &mut String, id: &mut u32, level: usize, depth: usize) {
        let own = *id;
        *id += 1;
        out.push_str(&"\t".repeat(level));

        if level == depth {
            writeln!(out, "{}:leaf={}", own, 0.001 * f64::from(own % 997)).unwrap();
            return;
        }

        // yes subtree occupies the next (2^(depth-level) - 1) ids
        let yes = own + 1;
        let no = yes + ((1u32 << (depth - level)) - 1);
        if level % 3 == 0 {
            writeln!(
                out,
                "{}:[feature_{}={}||or||feature_{}={}] yes={},no={}",
                own,
                level,
                own % 7,
                level + 1,
                own % 5,
                yes,
                no
            )
            .unwrap();
        } else {
            writeln!(out, "{}:[feature_{}={}] yes={},no={}", own, level, own % 11, yes, no).unwrap();
        }

        write_node(out, id, level + 1, depth);
        write_node(out, id, level + 1, depth);
    }

    let mut out = String::new();
    write_node(&mut out, &mut 0, 0, depth);
    out
}

fn benchmark_parse(c: &mut Criterion) {
    let text = create_tree(DEPTH);

    c.bench_function("parse_tree", |b| {
        b.iter(|| {
            let tree = parse_tree(black_box(&text), &ParseOptions::default());
            black_box(tree)
        })
    });
}

fn benchmark_extract(c: &mut Criterion) {
    let tree = parse_tree(&create_tree(DEPTH), &ParseOptions::default()).unwrap();
    let options = ExtractOptions::default();
    let filtered = ExtractOptions {
        skip_unsatisfiable: true,
    };

    c.bench_function("extract_strategies", |b| {
        b.iter(|| black_box(extract(&tree, &options).count()))
    });

    c.bench_function("extract_satisfiable_strategies", |b| {
        b.iter(|| black_box(extract(&tree, &filtered).count()))
    });

    c.bench_function("render_text", |b| {
        b.iter(|| {
            let rendered = render_to_vec(extract(&tree, &options), &RenderOptions::default(), &options);
            black_box(rendered)
        })
    });
}

fn benchmark_end_to_end(c: &mut Criterion) {
    let text = create_tree(DEPTH);
    let options = ConvertOptions::expanded_sorted();

    c.bench_function("convert_expanded_sorted", |b| {
        b.iter(|| black_box(convert_tree_to_strategies(black_box(&text), &options)))
    });
}

fn benchmark_condition_parsing(c: &mut Criterion) {
    let conditions = vec![
        "device_type=pc",
        "device_type=pc||or||browser=7",
        "region=FR-75||or||region=FR-92||or||region=FR-93",
        "os_family!=5",
    ];

    c.bench_function("condition_parsing", |b| {
        b.iter(|| {
            for cond in &conditions {
                let _ = black_box(parse(cond));
            }
        })
    });
}

criterion_group!(
    benches,
    benchmark_parse,
    benchmark_extract,
    benchmark_end_to_end,
    benchmark_condition_parsing
);
criterion_main!(benches);
