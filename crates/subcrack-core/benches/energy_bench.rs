use criterion::{criterion_group, criterion_main, Criterion};
use fastrand::Rng;
use std::hint::black_box;
use subcrack_core::alphabet;
use subcrack_core::corpus;
use subcrack_core::energy::EnergyEvaluator;
use subcrack_core::model::BigramModel;
use subcrack_core::permutation::Permutation;
use subcrack_core::sampler::Chain;

const REFERENCE: &str = include_str!("../../../data/corpus.txt");

fn criterion_benchmark(c: &mut Criterion) {
    let encoded = alphabet::encode(&corpus::normalize(REFERENCE)).unwrap();
    let model = BigramModel::estimate(&encoded);

    let mut rng = Rng::with_seed(99);
    let key = Permutation::shuffled(&mut rng);
    let cipher = key.inverse().apply(&encoded[..1000]);

    let evaluator = EnergyEvaluator::new(&cipher, &model);

    c.bench_function("energy (1k symbols)", |b| {
        b.iter(|| evaluator.energy(black_box(&key)))
    });

    c.bench_function("chain step (1k symbols)", |b| {
        let mut chain = Chain::new(evaluator, Some(7), 100);
        b.iter(|| black_box(chain.step()))
    });
}

criterion_group!(benches, criterion_benchmark);
criterion_main!(benches);
