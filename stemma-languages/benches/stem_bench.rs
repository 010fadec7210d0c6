use criterion::{criterion_group, criterion_main, BenchmarkId, Criterion};
use stemma_languages::{stem_all, stem_language, Language};

static ENGLISH_WORDS: &[&str] = &[
    "running", "organization", "hopeful", "conditional", "cries", "controlling",
    "sensational", "generously", "quickly", "agreement",
];

static RUSSIAN_WORDS: &[&str] = &[
    "книгами", "красивый", "оставшись", "приключение", "остановились", "жадность",
    "прочитав", "забывшись", "ёлка", "возможностями",
];

fn bench_single(c: &mut Criterion) {
    let mut group = c.benchmark_group("stem_single");

    group.bench_function(BenchmarkId::new("english", ENGLISH_WORDS.len()), |b| {
        b.iter(|| {
            for &word in ENGLISH_WORDS {
                stem_language(word, Language::English, false);
            }
        })
    });

    group.bench_function(BenchmarkId::new("russian", RUSSIAN_WORDS.len()), |b| {
        b.iter(|| {
            for &word in RUSSIAN_WORDS {
                stem_language(word, Language::Russian, false);
            }
        })
    });

    group.finish();
}

fn bench_batch(c: &mut Criterion) {
    let words: Vec<&str> = ENGLISH_WORDS
        .iter()
        .cycle()
        .take(10_000)
        .copied()
        .collect();

    c.bench_function("stem_batch_parallel", |b| {
        b.iter(|| stem_all(&words, "english", false).unwrap())
    });
}

criterion_group!(benches, bench_single, bench_batch);
criterion_main!(benches);
