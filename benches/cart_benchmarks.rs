use criterion::{black_box, criterion_group, criterion_main, Criterion};
use gini_cart::config::ValueOrder;
use gini_cart::data::{Dataset, Value};
use gini_cart::impurity::gini;
use gini_cart::splitter::{GiniSplitter, Splitter};
use gini_cart::tree::Tree;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use std::time::Duration;

fn random_dataset(n_rows: usize) -> Dataset {
    let mut rng = StdRng::seed_from_u64(0);
    let outlooks = ["ensolarado", "chuvoso", "nublado", "nevando"];
    let rows = (0..n_rows)
        .map(|_| {
            let outlook = outlooks[rng.gen_range(0..outlooks.len())];
            let wind: i64 = rng.gen_range(0..60);
            let humidity: f64 = (rng.gen_range(0.0..1.0_f64) * 100.0).round() / 100.0;
            let plays = (outlook != "chuvoso" && wind < 40) ^ rng.gen_bool(0.1);
            vec![
                Value::from(outlook),
                Value::Int(wind),
                Value::Float(humidity),
                Value::from(if plays { "sim" } else { "nao" }),
            ]
        })
        .collect();
    Dataset::new(rows).unwrap()
}

pub fn tree_benchmarks(c: &mut Criterion) {
    let data = random_dataset(500);
    let rows = data.row_refs();

    c.bench_function("gini", |b| b.iter(|| gini(black_box(&rows))));

    let splitter = GiniSplitter::new(ValueOrder::FirstSeen);
    c.bench_function("best_split", |b| b.iter(|| splitter.best_split(black_box(&rows))));

    let mut tree_train = c.benchmark_group("train_tree");
    tree_train.warm_up_time(Duration::from_secs(5));
    tree_train.sample_size(20);
    tree_train.bench_function("fit_first_seen", |b| {
        b.iter(|| Tree::fit(black_box(&data), &GiniSplitter::new(ValueOrder::FirstSeen)).unwrap())
    });
    tree_train.bench_function("fit_sorted", |b| {
        b.iter(|| Tree::fit(black_box(&data), &GiniSplitter::new(ValueOrder::Sorted)).unwrap())
    });
    tree_train.finish();

    let tree = Tree::fit(&data, &splitter).unwrap();
    c.bench_function("Tree Classify", |b| {
        b.iter(|| {
            for row in data.rows() {
                black_box(tree.classify(black_box(row)).unwrap());
            }
        })
    });
}

criterion_group!(benches, tree_benchmarks);
criterion_main!(benches);
