use criterion::{black_box, criterion_group, criterion_main, BatchSize, Criterion};
use long_map::LongMap;
use std::time::Duration;

fn lcg(mut s: u64) -> impl Iterator<Item = i64> {
    std::iter::from_fn(move || {
        s = s.wrapping_mul(6364136223846793005).wrapping_add(1);
        Some(s as i64)
    })
}

fn filled(seed: u64, n: usize) -> (LongMap<u64>, Vec<i64>) {
    let mut m = LongMap::new();
    let keys: Vec<i64> = lcg(seed).take(n).collect();
    for (i, &k) in keys.iter().enumerate() {
        m.put(k, i as u64);
    }
    (m, keys)
}

fn bench_put(c: &mut Criterion) {
    c.bench_function("long_map_put_10k", |b| {
        b.iter_batched(
            LongMap::<u64>::new,
            |mut m| {
                for (i, k) in lcg(1).take(10_000).enumerate() {
                    m.put(k, i as u64);
                }
                black_box(m)
            },
            BatchSize::SmallInput,
        )
    });
}

fn bench_put_presized(c: &mut Criterion) {
    c.bench_function("long_map_put_10k_presized", |b| {
        b.iter_batched(
            || LongMap::<u64>::with_capacity(16_384).unwrap(),
            |mut m| {
                for (i, k) in lcg(1).take(10_000).enumerate() {
                    m.put(k, i as u64);
                }
                black_box(m)
            },
            BatchSize::SmallInput,
        )
    });
}

fn bench_get_hit(c: &mut Criterion) {
    c.bench_function("long_map_get_hit", |b| {
        let (m, keys) = filled(7, 20_000);
        let mut it = keys.iter().cycle();
        b.iter(|| {
            let k = *it.next().unwrap();
            black_box(m.get(k));
        })
    });
}

fn bench_get_miss(c: &mut Criterion) {
    c.bench_function("long_map_get_miss", |b| {
        let (m, _) = filled(11, 10_000);
        let mut miss = lcg(0xdead_beef);
        b.iter(|| {
            let k = miss.next().unwrap();
            black_box(m.get(k));
        })
    });
}

fn bench_remove_reinsert(c: &mut Criterion) {
    c.bench_function("long_map_remove_reinsert", |b| {
        let (mut m, keys) = filled(13, 10_000);
        let mut it = keys.iter().cycle();
        b.iter(|| {
            let k = *it.next().unwrap();
            let v = m.remove(k).unwrap();
            black_box(m.put(k, v));
        })
    });
}

fn bench_contains_value(c: &mut Criterion) {
    c.bench_function("long_map_contains_value_miss_1k", |b| {
        let (m, _) = filled(17, 1_000);
        b.iter(|| black_box(m.contains_value(&u64::MAX)))
    });
}

fn bench_config() -> Criterion {
    Criterion::default()
        .sample_size(50)
        .measurement_time(Duration::from_secs(8))
        .warm_up_time(Duration::from_secs(2))
}

criterion_group! {
    name = benches;
    config = bench_config();
    targets = bench_put, bench_put_presized, bench_get_hit, bench_get_miss,
        bench_remove_reinsert, bench_contains_value
}
criterion_main!(benches);
