use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};
use std::fs;
use tempfile::TempDir;

use credsweep::{classifier, run_scan, ScanConfig};

fn env_content(lines: usize) -> String {
    let mut content = String::new();
    for i in 0..lines {
        content.push_str(&format!("API_KEY_{i}=sk-{i:030}\n"));
        content.push_str(&format!("SETTING_{i}=plain-value-{i}\n"));
    }
    content
}

fn setup_tree(file_count: usize) -> TempDir {
    let dir = TempDir::new().unwrap();
    for i in 0..file_count {
        let sub = dir.path().join(format!("service_{i}"));
        fs::create_dir_all(&sub).unwrap();
        fs::write(sub.join(".env"), env_content(20)).unwrap();
        fs::write(
            sub.join("config.json"),
            r#"{"apiKey": "real-key-12345678", "nested": {"clientSecret": "sec_abcdefghijk"}}"#,
        )
        .unwrap();
    }
    dir
}

fn bench_classifier(c: &mut Criterion) {
    c.bench_function("classify_real_value", |b| {
        b.iter(|| classifier::classify(black_box("API_KEY"), black_box("sk-1234567890abcdef")))
    });

    c.bench_function("classify_placeholder", |b| {
        b.iter(|| classifier::classify(black_box("API_KEY"), black_box("your_api_key_here")))
    });

    c.bench_function("classify_with_fallback_miss", |b| {
        b.iter(|| {
            classifier::classify_with_fallback(
                black_box("description"),
                black_box("an ordinary configuration string"),
            )
        })
    });

    c.bench_function("mask_value", |b| {
        b.iter(|| classifier::mask_value(black_box("sk-1234567890abcdefghijklmnop")))
    });
}

fn bench_scan(c: &mut Criterion) {
    let mut group = c.benchmark_group("full_scan");
    for file_count in [10, 50] {
        let dir = setup_tree(file_count);
        group.bench_with_input(
            BenchmarkId::from_parameter(file_count),
            &dir,
            |b, dir| {
                let config = ScanConfig::new(dir.path()).with_git(false);
                b.iter(|| run_scan(black_box(&config)).unwrap())
            },
        );
    }
    group.finish();
}

criterion_group!(benches, bench_classifier, bench_scan);
criterion_main!(benches);
