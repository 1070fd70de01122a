use criterion::{black_box, criterion_group, criterion_main, Criterion};

use cssink_core::{hash, AppendStrategy, Backend, ConfigUpdate, StyleRegistry};

fn bench_hash(c: &mut Criterion) {
    let text = "&& { background-color: red; color: white; }".repeat(8);
    c.bench_function("hash", |b| b.iter(|| hash(black_box(&text))));
}

fn bench_register(c: &mut Criterion) {
    let (backend, _sink) = Backend::memory();
    let registry = StyleRegistry::new(backend);
    registry.configure(ConfigUpdate::new().append(AppendStrategy::Each));

    c.bench_function("register_style", |b| {
        b.iter(|| {
            registry
                .register_style(
                    black_box(&["&& { background-color: ", "; color: ", "; }"]),
                    &[&"red", &"white"],
                )
                .unwrap()
        })
    });
}

criterion_group!(benches, bench_hash, bench_register);
criterion_main!(benches);
