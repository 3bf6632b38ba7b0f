use criterion::{BenchmarkId, Criterion, Throughput, criterion_group, criterion_main};
use std::hint::black_box;
use maxrects_core::prelude::*;
use rand::{Rng, SeedableRng};

fn generate_rects(count: usize, min_size: u32, max_size: u32) -> Vec<Rect> {
    let mut rng = rand::rngs::StdRng::seed_from_u64(count as u64);
    (0..count)
        .map(|_| Rect::sized(rng.gen_range(min_size..=max_size), rng.gen_range(min_size..=max_size)))
        .collect()
}

fn bench_heuristics(c: &mut Criterion) {
    let mut group = c.benchmark_group("maxrects_heuristics");

    for count in [50, 100, 200] {
        let rects = generate_rects(count, 16, 64);
        group.throughput(Throughput::Elements(count as u64));

        for heuristic in Heuristic::ALL {
            group.bench_with_input(
                BenchmarkId::new(format!("{heuristic:?}"), count),
                &rects,
                |b, rects| {
                    b.iter(|| {
                        let mut packer = MaxRectsBinPack::new(1024, 1024, true);
                        let mut pending = rects.clone();
                        let placed = packer.insert_rects(&mut pending, heuristic);
                        black_box(placed)
                    });
                },
            );
        }
    }

    group.finish();
}

fn bench_pack_best(c: &mut Criterion) {
    let items: Vec<(String, u32, u32)> = generate_rects(150, 8, 96)
        .into_iter()
        .enumerate()
        .map(|(i, r)| (format!("tex_{i}"), r.width, r.height))
        .collect();
    let cfg = PackerConfig::builder().with_dimensions(512, 512).build();
    c.bench_function("pack_best_150", |b| {
        b.iter(|| black_box(pack_best(items.clone(), &cfg)))
    });
}

criterion_group!(benches, bench_heuristics, bench_pack_best);
criterion_main!(benches);
