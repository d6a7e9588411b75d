use criterion::{black_box, criterion_group, criterion_main, Criterion};
use txnstore::models::{TransactionEntry, ABSENT_ID};
use txnstore::store::TransactionStore;

fn seed_store() -> TransactionStore {
    let store = TransactionStore::new();
    store.upsert(1, TransactionEntry::new(1, Some("root".into()), 0.0, ABSENT_ID));

    // 100 chains of 10 entries hanging off the root.
    for chain in 0..100u64 {
        let mut parent = 1;
        for link in 0..10u64 {
            let id = 2 + chain * 10 + link;
            store.upsert(
                id,
                TransactionEntry::new(id, Some("leaf".into()), 10.0, parent),
            );
            parent = id;
        }
    }

    store
}

fn bench_upsert(c: &mut Criterion) {
    let store = TransactionStore::new();
    let mut id = 0u64;
    c.bench_function("upsert", |b| {
        b.iter(|| {
            id += 1;
            store.upsert(
                black_box(id),
                TransactionEntry::new(id, Some("bench".into()), 1.0, ABSENT_ID),
            )
        })
    });
}

fn bench_ids_of_type(c: &mut Criterion) {
    let store = seed_store();
    c.bench_function("ids_of_type", |b| {
        b.iter(|| store.ids_of_type(black_box("leaf")))
    });
}

fn bench_is_ancestor_deep_chain(c: &mut Criterion) {
    let store = seed_store();
    // Bottom of the first chain, nine links away from the root.
    let leaf = store.get(11).unwrap();
    c.bench_function("is_ancestor_deep_chain", |b| {
        b.iter(|| store.is_ancestor(black_box(1), &leaf).unwrap())
    });
}

fn bench_sum_linked_to_root(c: &mut Criterion) {
    let store = seed_store();
    c.bench_function("sum_linked_to_root", |b| {
        b.iter(|| store.sum_linked_to(black_box(1)).unwrap())
    });
}

criterion_group!(
    benches,
    bench_upsert,
    bench_ids_of_type,
    bench_is_ancestor_deep_chain,
    bench_sum_linked_to_root
);
criterion_main!(benches);
