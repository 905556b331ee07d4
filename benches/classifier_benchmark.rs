use criterion::{black_box, criterion_group, criterion_main, Criterion};
use std::collections::HashMap;
use std::sync::Arc;

use phishguard::{Classifier, LogisticArtifact, LogisticModel, TfIdfVectorizer};

fn setup_benchmark_classifier(vocab_size: usize) -> Classifier {
    let vocabulary: HashMap<String, usize> = (0..vocab_size)
        .map(|i| (format!("term{}", i), i))
        .collect();
    let idf = (0..vocab_size).map(|i| 1.0 + (i as f32) * 0.01).collect();
    let vectorizer = TfIdfVectorizer::new(vocabulary, idf).unwrap();

    let weights = vec![(0..vocab_size).map(|i| ((i % 7) as f32) - 3.0).collect()];
    let model = LogisticModel::try_from(LogisticArtifact {
        classes: vec![0, 1],
        weights,
        intercepts: vec![0.1],
    })
    .unwrap();

    Classifier::builder()
        .with_parts(Arc::new(vectorizer), Arc::new(model))
        .build()
        .unwrap()
}

fn bench_prediction(c: &mut Criterion) {
    let classifier = setup_benchmark_classifier(5_000);
    let mut group = c.benchmark_group("Prediction");

    // Configure sampling
    group.sample_size(50);
    group.warm_up_time(std::time::Duration::from_secs(1));

    // Short text (< 10 tokens)
    group.bench_function("short_text", |b| {
        b.iter(|| {
            classifier
                .predict(black_box("term1 term2 verify your account"))
                .unwrap()
        })
    });

    // Medium text (~50 tokens)
    group.bench_function("medium_text", |b| {
        b.iter(|| {
            classifier
                .predict(black_box(
                    "term1 term2 term3 this is a medium length message that should take \
                     more time to vectorize and score due to its increased length and \
                     complexity, containing multiple sentences with various words and \
                     punctuation that the tokenizer has to walk through term40 term41",
                ))
                .unwrap()
        })
    });

    // Long text (~200 tokens)
    let long_text = "urgent term5 please verify your account immediately by clicking \
                     the link below, your mailbox has exceeded its storage quota and \
                     incoming messages will be rejected until you confirm your details "
        .repeat(8);
    group.bench_function("long_text", |b| {
        b.iter(|| classifier.predict(black_box(long_text.as_str())).unwrap())
    });

    group.finish();
}

fn bench_scaling(c: &mut Criterion) {
    let mut group = c.benchmark_group("Scaling");
    group.sample_size(50);
    group.warm_up_time(std::time::Duration::from_secs(1));

    // Test scaling with vocabulary size
    let vocab_sizes = [100, 1_000, 10_000, 50_000];
    for &size in &vocab_sizes {
        let classifier = setup_benchmark_classifier(size);

        group.bench_function(format!("vocabulary_{}", size), |b| {
            b.iter(|| {
                classifier
                    .predict(black_box("term1 term50 term99 some filler words"))
                    .unwrap()
            })
        });
    }

    group.finish();
}

criterion_group!(benches, bench_prediction, bench_scaling);
criterion_main!(benches);
