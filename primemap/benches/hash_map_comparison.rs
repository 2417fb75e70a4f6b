use criterion::{black_box, criterion_group, criterion_main, Criterion};
use primemap::StringMap;
use rand::{distr::Alphanumeric, Rng};
use rustc_hash::FxHashMap;
use std::collections::HashMap;

/// Generates a vector of key-value pairs for benchmarking.
fn generate_data(size: usize) -> Vec<(String, String)> {
    let mut rng = rand::rng();
    (0..size)
        .map(|_| {
            let key_len = rng.random_range(1..=25);
            let val_len = rng.random_range(1..=250);
            let key: String = (&mut rng)
                .sample_iter(&Alphanumeric)
                .take(key_len)
                .map(char::from)
                .collect();
            let value = (&mut rng)
                .sample_iter(&Alphanumeric)
                .take(val_len)
                .map(char::from)
                .collect();
            (key, value)
        })
        .collect()
}

fn benchmark_hash_map_comparisons(c: &mut Criterion) {
    for &size in &[1_000, 10_000, 100_000] {
        let mut group = c.benchmark_group(format!("size={size}"));
        let data = generate_data(size);

        // --- Our double-hashed StringMap ---
        group.bench_function("StringMap - insert", |b| {
            b.iter_with_setup(StringMap::new, |mut map| {
                for (k, v) in data.iter() {
                    map.insert(black_box(k.as_str()), black_box(v.as_str()));
                }
            });
        });

        let mut string_map_get = StringMap::new();
        for (k, v) in data.iter() {
            string_map_get.insert(k.as_str(), v.as_str());
        }
        group.bench_function("StringMap - get", |b| {
            b.iter(|| {
                for (k, _) in data.iter() {
                    string_map_get.get(black_box(k));
                }
            })
        });

        // --- std::collections::HashMap ---
        group.bench_function("std HashMap - insert", |b| {
            b.iter_with_setup(HashMap::new, |mut map: HashMap<String, String>| {
                for (k, v) in data.iter() {
                    map.insert(black_box(k.clone()), black_box(v.clone()));
                }
            });
        });

        let mut std_map_get: HashMap<String, String> = HashMap::new();
        for (k, v) in data.iter() {
            std_map_get.insert(k.clone(), v.clone());
        }
        group.bench_function("std HashMap - get", |b| {
            b.iter(|| {
                for (k, _) in data.iter() {
                    std_map_get.get(black_box(k));
                }
            })
        });

        // --- FxHashMap ---
        group.bench_function("FxHashMap - insert", |b| {
            b.iter_with_setup(FxHashMap::default, |mut map: FxHashMap<String, String>| {
                for (k, v) in data.iter() {
                    map.insert(black_box(k.clone()), black_box(v.clone()));
                }
            });
        });

        let mut fx_map_get: FxHashMap<String, String> = FxHashMap::default();
        for (k, v) in data.iter() {
            fx_map_get.insert(k.clone(), v.clone());
        }
        group.bench_function("FxHashMap - get", |b| {
            b.iter(|| {
                for (k, _) in data.iter() {
                    fx_map_get.get(black_box(k));
                }
            })
        });

        group.finish();
    }
}

criterion_group!(benches, benchmark_hash_map_comparisons);
criterion_main!(benches);
