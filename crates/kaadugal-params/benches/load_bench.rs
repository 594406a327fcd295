//! Criterion benchmarks for kaadugal-params: loading and rendering parameter files.

use std::io::Write;

use criterion::{Criterion, criterion_group, criterion_main};
use tempfile::NamedTempFile;

use kaadugal_params::{ForestBuilderParams, MemoryReporter, ParamsLoader, TrainMethod};

/// A parameter file padded with `n_client_keys` keys the loader ignores.
fn make_params_file(n_client_keys: usize) -> NamedTempFile {
    let params = ForestBuilderParams::new(100, 16, 32, 64, 0.001)
        .with_train_method(TrainMethod::BreadthFirst)
        .with_n_threads(8);
    let mut text = params.to_params_string();
    for i in 0..n_client_keys {
        text.push_str(&format!("# client section {i}\nClientKey{i}: value{i}\n"));
    }
    let mut f = NamedTempFile::new().unwrap();
    f.write_all(text.as_bytes()).unwrap();
    f.flush().unwrap();
    f
}

fn bench_load(c: &mut Criterion) {
    let small = make_params_file(0);
    let large = make_params_file(1000);
    let loader = ParamsLoader::new();

    c.bench_function("load_8_keys", |b| {
        b.iter(|| loader.load(small.path(), &mut MemoryReporter::new()).unwrap());
    });

    c.bench_function("load_8_keys_plus_1000_client_keys", |b| {
        b.iter(|| loader.load(large.path(), &mut MemoryReporter::new()).unwrap());
    });
}

fn bench_render(c: &mut Criterion) {
    let params = ForestBuilderParams::new(100, 16, 32, 64, 0.001);

    c.bench_function("to_params_string", |b| {
        b.iter(|| params.to_params_string());
    });
}

criterion_group!(benches, bench_load, bench_render);
criterion_main!(benches);
