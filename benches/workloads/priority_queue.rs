use criterion::{black_box, BenchmarkId, Criterion};
use std::cmp::Reverse;
use std::collections::BinaryHeap;
use waygraph::PriorityQueue;

pub fn run(c: &mut Criterion) {
    let mut group = c.benchmark_group("priority_queue");
    group.warm_up_time(std::time::Duration::from_millis(500));
    group.measurement_time(std::time::Duration::from_secs(1));
    group.sample_size(10);

    for size in [100u32, 1_000, 10_000] {
        // Scrambled but deterministic input.
        let input: Vec<u32> = (0..size).map(|i| i.wrapping_mul(2_654_435_761) % size).collect();

        group.bench_with_input(BenchmarkId::new("enqueue_dequeue", size), &input, |b, input| {
            b.iter(|| {
                let mut queue = PriorityQueue::with_capacity(input.len());
                for &v in input {
                    queue.enqueue(black_box(v));
                }
                while let Ok(v) = queue.dequeue() {
                    black_box(v);
                }
            });
        });

        group.bench_with_input(BenchmarkId::new("std_reverse_heap", size), &input, |b, input| {
            b.iter(|| {
                let mut heap = BinaryHeap::with_capacity(input.len());
                for &v in input {
                    heap.push(Reverse(black_box(v)));
                }
                while let Some(Reverse(v)) = heap.pop() {
                    black_box(v);
                }
            });
        });
    }

    group.finish();
}
