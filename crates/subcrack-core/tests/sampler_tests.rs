use fastrand::Rng;
use std::time::Duration;
use subcrack_core::alphabet;
use subcrack_core::energy::EnergyEvaluator;
use subcrack_core::model::BigramModel;
use subcrack_core::permutation::Permutation;
use subcrack_core::sampler::history::EnergyWindow;
use subcrack_core::sampler::{
    metropolis_accept, Chain, NullProgress, ProgressCallback, Sampler, SamplerOptions, StopReason,
};

fn tiny_model() -> BigramModel {
    let corpus =
        alphabet::encode("it was a bright cold day in april and the clocks were striking").unwrap();
    BigramModel::estimate(&corpus)
}

#[test]
fn downhill_moves_are_always_accepted() {
    for seed in 0..200 {
        let mut rng = Rng::with_seed(seed);
        assert!(metropolis_accept(-1e-9, &mut rng));
        assert!(metropolis_accept(-50.0, &mut rng));
    }
}

#[test]
fn flat_moves_are_always_accepted() {
    // exp(0) = 1 and the uniform draw lives in [0, 1)
    for seed in 0..200 {
        let mut rng = Rng::with_seed(seed);
        assert!(metropolis_accept(0.0, &mut rng));
    }
}

#[test]
fn steep_uphill_moves_are_rejected() {
    let mut rng = Rng::with_seed(5);
    let taken = (0..1000).filter(|_| metropolis_accept(40.0, &mut rng)).count();
    assert_eq!(taken, 0);
}

#[test]
fn short_window_never_stops() {
    let mut w = EnergyWindow::new(100);
    for _ in 0..99 {
        w.push(10.0);
    }
    assert!(!w.is_full());
    assert!(!w.has_plateaued());
}

#[test]
fn descending_window_does_not_stop() {
    let mut w = EnergyWindow::new(100);
    for i in 0..100 {
        w.push(1000.0 - i as f64);
    }
    assert!(w.is_full());
    assert!(w.net_drift() < 0.0);
    assert!(!w.has_plateaued());
}

#[test]
fn oscillation_with_zero_net_drift_stops() {
    // the walk bounces around a basin and ends the window where it began
    let pattern = [10.0, 11.0, 10.0, 9.0, 10.0];
    let mut w = EnergyWindow::new(100);
    for i in 0..100 {
        w.push(pattern[i % pattern.len()]);
    }
    assert!(w.is_full());
    assert_eq!(w.net_drift(), 0.0);
    assert!(w.has_plateaued());
}

#[test]
fn window_evicts_oldest_beyond_capacity() {
    let mut w = EnergyWindow::new(3);
    for e in [1.0, 2.0, 3.0, 4.0] {
        w.push(e);
    }
    assert_eq!(w.len(), 3);
    assert!((w.net_drift() - 2.0).abs() < 1e-12);
}

#[test]
fn chain_starts_at_identity_with_seeded_history() {
    let model = tiny_model();
    let cipher = alphabet::encode("a bright cold day").unwrap();
    let evaluator = EnergyEvaluator::new(&cipher, &model);

    let chain = Chain::new(evaluator, Some(1), 100);
    assert_eq!(chain.key, Permutation::identity());
    assert_eq!(chain.window.len(), 1);
    assert_eq!(chain.accepted, 0);
    assert!(chain.energy.is_finite() && chain.energy > 0.0);
}

#[test]
fn fixed_seed_reproduces_the_trajectory() {
    let model = tiny_model();
    let cipher = alphabet::encode("the clocks were striking").unwrap();
    let evaluator = EnergyEvaluator::new(&cipher, &model);

    let mut a = Chain::new(evaluator, Some(42), 100);
    let mut b = Chain::new(evaluator, Some(42), 100);
    for _ in 0..500 {
        a.step();
        b.step();
    }
    assert_eq!(a.key, b.key);
    assert_eq!(a.energy, b.energy);
    assert_eq!(a.accepted, b.accepted);
}

#[test]
fn energy_stays_finite_across_steps() {
    let model = tiny_model();
    let cipher = alphabet::encode("april and the clocks").unwrap();
    let evaluator = EnergyEvaluator::new(&cipher, &model);

    let mut chain = Chain::new(evaluator, Some(9), 100);
    for _ in 0..2000 {
        chain.step();
        assert!(chain.energy.is_finite());
        assert!(chain.energy > 0.0);
    }
}

#[test]
fn tiny_cap_surfaces_as_iteration_cap() {
    let model = tiny_model();
    let cipher = alphabet::encode("cold day in april").unwrap();
    let evaluator = EnergyEvaluator::new(&cipher, &model);

    let options = SamplerOptions {
        max_iterations: 10,
        ..SamplerOptions::default()
    };
    let outcome = Sampler::new(evaluator, options).run(Some(1), &NullProgress);
    assert_eq!(outcome.stop, StopReason::IterationCap);
    assert_eq!(outcome.iterations, 10);
    assert!(!outcome.converged());
    assert!(outcome.key.is_bijection());
}

#[test]
fn cancellation_surfaces_as_stop_reason() {
    struct CancelNow;
    impl ProgressCallback for CancelNow {
        fn on_accept(&self, _iteration: u64, _energy: f64, _decoded: &str) -> bool {
            false
        }
    }

    let model = tiny_model();
    let cipher = alphabet::encode("it was a bright cold day").unwrap();
    let evaluator = EnergyEvaluator::new(&cipher, &model);

    let options = SamplerOptions {
        max_iterations: 100_000,
        report_interval: Duration::ZERO,
        ..SamplerOptions::default()
    };
    let outcome = Sampler::new(evaluator, options).run(Some(2), &CancelNow);
    assert_eq!(outcome.stop, StopReason::Cancelled);
}

#[test]
fn outcome_serializes_to_json_and_back() {
    let model = tiny_model();
    let cipher = alphabet::encode("were striking").unwrap();
    let evaluator = EnergyEvaluator::new(&cipher, &model);

    let options = SamplerOptions {
        max_iterations: 100,
        ..SamplerOptions::default()
    };
    let outcome = Sampler::new(evaluator, options).run(Some(3), &NullProgress);

    let json = serde_json::to_string(&outcome).unwrap();
    let back: subcrack_core::sampler::CrackOutcome = serde_json::from_str(&json).unwrap();
    assert_eq!(back.key, outcome.key);
    assert_eq!(back.stop, outcome.stop);
    assert_eq!(back.iterations, outcome.iterations);
}
