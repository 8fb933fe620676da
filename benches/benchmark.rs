use criterion::{Criterion, black_box, criterion_group, criterion_main};
use fuzzy_sentence::FuzzyComparer;

fn benchmark_similarity(c: &mut Criterion) {
    let comparer = FuzzyComparer::default();
    let first = "The quick brown fox jumps over the lazy dog";
    let second = "the quik brwn fox jumped over a lazy dog!";

    c.bench_function("calculate_similarity", |b| {
        b.iter(|| {
            let _ = comparer.calculate_similarity(black_box(first), black_box(second));
        });
    });

    let long_first = first.repeat(20);
    let long_second = second.repeat(20);
    c.bench_function("calculate_similarity_long", |b| {
        b.iter(|| {
            let _ = comparer.calculate_similarity(black_box(&long_first), black_box(&long_second));
        });
    });
}

criterion_group!(benches, benchmark_similarity);
criterion_main!(benches);
