use criterion::{black_box, criterion_group, criterion_main, Criterion};
use hz_core::{Dictionary, ReviewHistory, ReviewRecord, SelectionParams, WordFreq};
use hz_selector::{stage2_knowledge, stage4_index, SelectionPipeline};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

fn generate(words: usize, alphabet: u32) -> (WordFreq, ReviewHistory, Dictionary) {
    let mut rng = StdRng::seed_from_u64(42);
    let mut corpus = WordFreq::new();
    let mut count = 10_000_000u64;
    while corpus.len() < words {
        let len = rng.gen_range(1..=4);
        let word: String = (0..len)
            .map(|_| char::from_u32(0x4e00 + rng.gen_range(0..alphabet)).unwrap())
            .collect();
        if !corpus.contains_key(&word) {
            corpus.insert(word, count);
            count = count.saturating_sub(rng.gen_range(0..100));
        }
    }
    let reviews: ReviewHistory = corpus
        .keys()
        .step_by(13)
        .take(words / 20)
        .map(|w| (w.clone(), ReviewRecord::new(rng.gen_range(1..50), rng.gen_range(0..10))))
        .collect();
    let dictionary: Dictionary = corpus.keys().map(|w| (w.clone(), format!("gloss of {w}"))).collect();
    (corpus, reviews, dictionary)
}

fn bench_pipeline(c: &mut Criterion) {
    for &(name, words) in &[("10k", 10_000), ("100k", 100_000)] {
        let (corpus, reviews, dictionary) = generate(words, 3000);
        let pipeline = SelectionPipeline::new(SelectionParams {
            max_global_rank: words,
            ..Default::default()
        });
        c.bench_function(&format!("pipeline_{name}"), |b| {
            b.iter(|| black_box(pipeline.run(black_box(&corpus), &reviews, &dictionary)))
        });
    }
}

fn bench_stages(c: &mut Criterion) {
    let (corpus, reviews, _) = generate(50_000, 3000);
    c.bench_function("estimate_knowledge_50k", |b| {
        b.iter(|| black_box(stage2_knowledge::estimate(black_box(&reviews))))
    });
    c.bench_function("build_index_50k", |b| {
        b.iter(|| black_box(stage4_index::build_index(black_box(&corpus))))
    });
}

criterion_group!(benches, bench_pipeline, bench_stages);
criterion_main!(benches);
