use criterion::{Criterion, criterion_group, criterion_main};
use std::hint::black_box;
use stdin_harness::compare::{compare_outputs, context_diff};

fn numbered_lines(count: usize, changed_every: usize) -> String {
    (0..count)
        .map(|i| {
            if changed_every > 0 && i % changed_every == 0 {
                format!("{} changed   \n", i)
            } else {
                format!("{} {} {}\n", i, i * 2, i * 3)
            }
        })
        .collect()
}

fn bench_compare_outputs(c: &mut Criterion) {
    let expected = numbered_lines(2000, 0);
    let same = numbered_lines(2000, 0);
    let different = numbered_lines(2000, 97);

    c.bench_function("compare_outputs_match", |b| {
        b.iter(|| compare_outputs(black_box(&same), black_box(&expected)));
    });
    c.bench_function("compare_outputs_mismatch", |b| {
        b.iter(|| compare_outputs(black_box(&different), black_box(&expected)));
    });
}

fn bench_context_diff(c: &mut Criterion) {
    let expected = numbered_lines(500, 0);
    let actual = numbered_lines(500, 13);
    let a: Vec<&str> = actual.lines().collect();
    let b: Vec<&str> = expected.lines().collect();

    c.bench_function("context_diff", |bench| {
        bench.iter(|| context_diff(black_box(&a), black_box(&b), "Actual Output", "Expected Output", 3));
    });
}

criterion_group!(benches, bench_compare_outputs, bench_context_diff);
criterion_main!(benches);
