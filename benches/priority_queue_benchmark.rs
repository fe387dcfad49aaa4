use criterion::{black_box, criterion_group, criterion_main, Criterion};
use std::cmp::Reverse;
use std::collections::BinaryHeap;
use waygraph::PriorityQueue;

fn bench_priority_queue(c: &mut Criterion) {
    let mut group = c.benchmark_group("priority_queue_ops");

    group.bench_function("std_binary_heap_push", |b| {
        b.iter(|| {
            let mut heap = BinaryHeap::new();
            for i in (0..1000).rev() {
                heap.push(Reverse(black_box(i)));
            }
        });
    });

    group.bench_function("priority_queue_enqueue", |b| {
        b.iter(|| {
            let mut queue = PriorityQueue::new();
            for i in (0..1000).rev() {
                queue.enqueue(black_box(i));
            }
        });
    });

    group.bench_function("std_binary_heap_push_pop", |b| {
        b.iter(|| {
            let mut heap = BinaryHeap::new();
            for i in (0..1000).rev() {
                heap.push(Reverse(i));
            }
            while let Some(Reverse(x)) = heap.pop() {
                black_box(x);
            }
        });
    });

    group.bench_function("priority_queue_enqueue_dequeue", |b| {
        b.iter(|| {
            let mut queue = PriorityQueue::new();
            for i in (0..1000).rev() {
                queue.enqueue(i);
            }
            while let Ok(x) = queue.dequeue() {
                black_box(x);
            }
        });
    });

    group.bench_function("priority_queue_into_sorted_vec", |b| {
        b.iter(|| {
            let queue: PriorityQueue<i32> = (0..1000).rev().collect();
            black_box(queue.into_sorted_vec());
        });
    });

    group.finish();
}

criterion_group!(benches, bench_priority_queue);
criterion_main!(benches);
