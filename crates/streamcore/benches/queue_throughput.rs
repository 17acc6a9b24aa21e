//! Benchmark – `streamcore::BoundedQueue` append/drain throughput
#![allow(missing_docs)]

use std::time::Duration;

use criterion::{BenchmarkId, Criterion, Throughput, black_box, criterion_group, criterion_main};
use streamcore::{BoundedQueue, ByteStream, StreamOptions, text};

const PAYLOAD_LEN: usize = 64 * 1024;

/// Deterministic payload of `len` bytes cycling through printable ASCII.
fn make_payload(len: usize) -> Vec<u8> {
    (0..len).map(|i| b' ' + (i % 95) as u8).collect()
}

/// Feed `payload` to a queue of `capacity` in `chunk`-sized appends, draining
/// half the queue after every append. Returns the number of bytes drained so
/// Criterion cannot optimise the work away.
fn run_append_drain(payload: &[u8], capacity: usize, chunk: usize) -> usize {
    let mut queue = BoundedQueue::new(capacity);
    let mut drained = 0;
    for part in payload.chunks(chunk) {
        queue.append(part);
        drained += queue.pop_front(queue.len() / 2).len();
    }
    drained + queue.pop_all().len()
}

fn bench_append_drain(c: &mut Criterion) {
    let payload = make_payload(PAYLOAD_LEN);
    let mut group = c.benchmark_group("append_drain");
    group.throughput(Throughput::Bytes(PAYLOAD_LEN as u64));
    group.measurement_time(Duration::from_secs(3));

    for (capacity, chunk) in [(256, 16), (4096, 16), (4096, 512), (PAYLOAD_LEN, 4096)] {
        group.bench_with_input(
            BenchmarkId::new(format!("cap{capacity}"), chunk),
            &(capacity, chunk),
            |b, &(capacity, chunk)| {
                b.iter(|| run_append_drain(black_box(&payload), capacity, chunk));
            },
        );
    }
    group.finish();
}

/// Overflow-heavy receive path: capacity is far smaller than the input.
fn bench_receive_overflow(c: &mut Criterion) {
    let payload = make_payload(PAYLOAD_LEN);
    c.bench_function("receive_overflow", |b| {
        b.iter(|| {
            let mut stream = ByteStream::new(StreamOptions {
                rx_capacity: 128,
                ..Default::default()
            });
            let mut evicted = 0;
            for part in payload.chunks(32) {
                evicted += stream.receive(black_box(part)).unwrap();
            }
            evicted
        });
    });
}

fn bench_field_checks(c: &mut Criterion) {
    let line = "255, -12 ,3.25,1e10,true,hello, 18446744073709551615";
    c.bench_function("split_and_check", |b| {
        b.iter(|| {
            let fields = text::split(black_box(line), ',');
            fields
                .iter()
                .filter(|f| streamcore::check_value_type(f, "double"))
                .count()
        });
    });
}

criterion_group!(
    benches,
    bench_append_drain,
    bench_receive_overflow,
    bench_field_checks
);
criterion_main!(benches);
