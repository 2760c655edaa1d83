use std::sync::Arc;

use criterion::{black_box, criterion_group, criterion_main, BatchSize, Criterion};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use skiplist::comparator::NaturalOrder;
use skiplist::opts::SkipListOptions;
use skiplist::SkipList;

const KEY_NUMS: u64 = 10000;

fn rand_keys(seed: u64) -> Vec<u64> {
    let mut rng = StdRng::seed_from_u64(seed);
    (0..KEY_NUMS).map(|_| rng.gen_range(0..KEY_NUMS * 4)).collect()
}

fn populated(keys: &[u64]) -> SkipList<u64> {
    let mut list: SkipList<u64> = SkipList::with_options(Arc::new(NaturalOrder {}), &SkipListOptions::with_seed(7)).unwrap();
    list.extend(keys.iter().copied());
    list
}

fn bench_skiplist(c: &mut Criterion) {
    let keys = rand_keys(1);

    c.bench_function("skiplist sequentially populate", |b| {
        b.iter(|| {
            let mut list: SkipList<u64> = SkipList::with_options(Arc::new(NaturalOrder {}), &SkipListOptions::with_seed(7)).unwrap();
            list.extend(0..KEY_NUMS);
            black_box(list.height())
        });
    });

    c.bench_function("skiplist randomly populate", |b| {
        b.iter(|| black_box(populated(&keys).height()));
    });

    let list = populated(&keys);
    let probes = rand_keys(2);
    c.bench_function("skiplist random find", |b| {
        b.iter(|| {
            probes.iter().filter(|key| list.find(key).is_some()).count()
        });
    });

    c.bench_function("skiplist remove all", |b| {
        b.iter_batched(
            || populated(&keys),
            |mut list| {
                for key in &keys {
                    list.remove(key);
                }
                black_box(list.is_empty())
            },
            BatchSize::LargeInput,
        );
    });
}

criterion_group!(benches, bench_skiplist);
criterion_main!(benches);
