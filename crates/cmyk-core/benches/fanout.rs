//! Evaluation Benchmarks
//!
//! Cost of one color through the formula adapters and the color-space table.

use cmyk_core::{COLOR_SPACES, CanonicalColor, Converter, InputMode, Rgb8, cmyk, parse};
use criterion::{BenchmarkId, Criterion, Throughput, black_box, criterion_group, criterion_main};

fn sample_colors(count: usize) -> Vec<CanonicalColor> {
    (0..count)
        .map(|i| {
            let v = (i * 37) as u8;
            CanonicalColor::Rgb(Rgb8::new(v, v.wrapping_mul(3), v.wrapping_add(91)))
        })
        .collect()
}

// ============================================================================
// Formulas
// ============================================================================

fn bench_formulas(c: &mut Criterion) {
    let mut group = c.benchmark_group("formulas");
    let rgb = Rgb8::new(52, 152, 219);

    for (name, formula) in [
        ("complement", cmyk::complement as cmyk::FormulaFn),
        ("min_complement", cmyk::min_complement),
        ("two_stage", cmyk::two_stage),
        ("reciprocal_f32", cmyk::reciprocal_f32),
    ] {
        group.bench_function(name, |b| b.iter(|| formula(black_box(rgb))));
    }

    group.finish();
}

// ============================================================================
// Color spaces
// ============================================================================

fn bench_spaces(c: &mut Criterion) {
    let mut group = c.benchmark_group("spaces");

    for space in &COLOR_SPACES {
        group.bench_with_input(BenchmarkId::from_parameter(space.id), space, |b, space| {
            b.iter(|| space.report(black_box("#3498db")))
        });
    }

    group.finish();
}

// ============================================================================
// Full evaluation
// ============================================================================

fn bench_evaluate(c: &mut Criterion) {
    let mut group = c.benchmark_group("evaluate");
    let converter = Converter::new();

    let color = parse("#3498db", InputMode::Hex).unwrap();
    group.bench_function("single", |b| b.iter(|| converter.evaluate(black_box(&color))));

    for count in [16, 256] {
        let colors = sample_colors(count);
        group.throughput(Throughput::Elements(count as u64));
        group.bench_with_input(BenchmarkId::new("batch", count), &colors, |b, colors| {
            b.iter(|| {
                colors
                    .iter()
                    .map(|c| converter.evaluate(c).verdict.distinct_count)
                    .sum::<usize>()
            })
        });
    }

    group.finish();
}

criterion_group!(benches, bench_formulas, bench_spaces, bench_evaluate);
criterion_main!(benches);
