use criterion::{BatchSize, BenchmarkId, Criterion, criterion_group, criterion_main};
use otter::{Card, CardKind, PhysicsConfig, Stepper, Viewport};
use std::hint::black_box;

fn build_board(count: usize) -> Vec<Card> {
    (0..count)
        .map(|i| {
            let angle = i as f64 * 2.399_963;
            let radius = 40.0 + 12.0 * i as f64;
            let kind = if i % 2 == 0 {
                CardKind::State
            } else {
                CardKind::Identity
            };
            let mut card = Card::new(
                format!("card_{i}"),
                kind,
                format!("Card {i}"),
                800.0 + radius * angle.cos(),
                400.0 + radius * angle.sin(),
            );
            // A ring of links plus one chord per card.
            card.connections.push(format!("card_{}", (i + 1) % count));
            card.connections.push(format!("card_{}", (i + count / 2) % count));
            card
        })
        .collect()
}

fn bench_stepper(c: &mut Criterion) {
    let viewport = Viewport::new(1600.0, 900.0);
    let stepper = Stepper::new(PhysicsConfig::default());

    let mut group = c.benchmark_group("stepper");
    for count in [8usize, 32, 128] {
        let board = build_board(count);
        group.bench_with_input(BenchmarkId::new("step_x60", count), &board, |b, board| {
            b.iter_batched(
                || board.clone(),
                |mut cards| {
                    for frame in 0..60 {
                        cards = stepper.step(black_box(&cards), viewport, None, frame as f64 * 16.0);
                    }
                    black_box(cards)
                },
                BatchSize::SmallInput,
            );
        });
    }
    group.finish();
}

criterion_group!(benches, bench_stepper);
criterion_main!(benches);
