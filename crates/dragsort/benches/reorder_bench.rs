#![forbid(unsafe_code)]

use criterion::{BenchmarkId, Criterion, criterion_group, criterion_main};
use dragsort::reflow::reflow_targets;
use dragsort::{Axis, BoundsSnapshot, Point, PointerEvent, PointerKind, Rect};
use dragsort_harness::list;
use std::hint::black_box;
use web_time::{Duration, Instant};

const ROW: f32 = 48.0;

fn mouse(phase: fn(u32, PointerKind, Point) -> PointerEvent, y: f32) -> PointerEvent {
    phase(7, PointerKind::Mouse, Point::new(100.0, y))
}

fn stacked(count: usize) -> BoundsSnapshot {
    let rects = (0..count)
        .map(|i| Rect::new(0.0, i as f32 * ROW, 200.0, ROW))
        .collect();
    BoundsSnapshot::from_rects(Axis::Vertical, rects)
}

fn bench_drag_lifecycle(c: &mut Criterion) {
    let mut group = c.benchmark_group("reorder/lifecycle");

    for count in [10usize, 100, 1000] {
        group.bench_with_input(BenchmarkId::new("down_move_64_up", count), &count, |b, &count| {
            b.iter(|| {
                let mut controller = list(count, ROW, 480.0);
                let t0 = Instant::now();
                let down = controller.pointer_down(&mouse(PointerEvent::down, 24.0), t0);
                black_box(down.to);
                for step in 0..64u64 {
                    let now = t0 + Duration::from_millis(step * 16);
                    let y = 24.0 + step as f32 * 6.0;
                    let moved = controller.pointer_move(&mouse(PointerEvent::moved, y), now);
                    black_box(moved.effects.len());
                    black_box(controller.tick(now).effects.len());
                }
                let release = mouse(PointerEvent::up, 408.0);
                let up = controller.pointer_up(&release, t0 + Duration::from_secs(2));
                black_box(up.committed_move());
            });
        });
    }

    group.finish();
}

fn bench_index_and_reflow(c: &mut Criterion) {
    let mut group = c.benchmark_group("reorder/index");

    for count in [100usize, 10_000] {
        let snapshot = stacked(count);
        let span = count as f32 * ROW;
        let id = BenchmarkId::new("insertion_index_sweep", count);
        group.bench_with_input(id, &snapshot, |b, snapshot| {
            b.iter(|| {
                let mut acc = 0usize;
                for i in 0..256 {
                    acc += snapshot.insertion_index(black_box(span * i as f32 / 256.0));
                }
                black_box(acc)
            });
        });
        group.bench_with_input(BenchmarkId::new("reflow_targets", count), &snapshot, |b, snapshot| {
            b.iter(|| black_box(reflow_targets(snapshot, 0, black_box(count - 1))));
        });
    }

    group.finish();
}

criterion_group!(benches, bench_drag_lifecycle, bench_index_and_reflow);
criterion_main!(benches);
