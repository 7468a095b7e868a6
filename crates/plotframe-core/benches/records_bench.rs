use plotframe_core::record::parse_records;
use criterion::{criterion_group, criterion_main, BenchmarkId, Criterion, black_box};

fn gen_json(n: usize) -> String {
    let rows = (0..n)
        .map(|i| format!(r#"{{"category":"c{}","value":{},"weight":{:.3}}}"#, i % 7, i, (i as f64 * 0.01).sin()))
        .collect::<Vec<_>>();
    format!("[{}]", rows.join(","))
}

fn bench_parse_records(c: &mut Criterion) {
    let mut group = c.benchmark_group("parse_records");
    for &n in &[1_000usize, 10_000usize] {
        let json = gen_json(n);
        group.bench_with_input(BenchmarkId::from_parameter(n), &json, |b, s| {
            b.iter(|| black_box(parse_records(s).expect("valid records")));
        });
    }
    group.finish();
}

criterion_group!(benches, bench_parse_records);
criterion_main!(benches);
