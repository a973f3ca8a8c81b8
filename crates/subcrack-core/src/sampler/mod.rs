pub mod history;
pub mod runner;

pub use self::runner::{
    CrackOutcome, NullProgress, ProgressCallback, Sampler, SamplerOptions, StopReason,
};

use self::history::EnergyWindow;
use crate::energy::EnergyEvaluator;
use crate::permutation::Permutation;
use fastrand::Rng;

/// Metropolis accept rule: downhill moves always, uphill moves with
/// probability exp(-delta). A fresh uniform draw decides the uphill case.
#[inline(always)]
pub fn metropolis_accept(delta: f64, rng: &mut Rng) -> bool {
    delta < 0.0 || rng.f64() < (-delta).exp()
}

/// One Metropolis random walk over key space. The chain owns its RNG, so a
/// fixed seed reproduces the full trajectory.
pub struct Chain<'a> {
    evaluator: EnergyEvaluator<'a>,
    pub key: Permutation,
    pub energy: f64,
    pub window: EnergyWindow,
    pub rng: Rng,
    pub accepted: u64,
}

impl<'a> Chain<'a> {
    /// Starts at the identity key with its energy as the only history
    /// entry.
    pub fn new(evaluator: EnergyEvaluator<'a>, seed: Option<u64>, window_capacity: usize) -> Self {
        let rng = match seed {
            Some(s) => Rng::with_seed(s),
            None => Rng::new(),
        };
        let key = Permutation::identity();
        let energy = evaluator.energy(&key);
        let mut window = EnergyWindow::new(window_capacity);
        window.push(energy);

        Self {
            evaluator,
            key,
            energy,
            window,
            rng,
            accepted: 0,
        }
    }

    /// One proposal plus accept/reject decision. Returns whether the move
    /// was taken. A rejected proposal leaves the state untouched and
    /// pushes nothing onto the window.
    pub fn step(&mut self) -> bool {
        let candidate = self.key.propose(&mut self.rng);
        let energy = self.evaluator.energy(&candidate);
        let delta = energy - self.energy;

        if metropolis_accept(delta, &mut self.rng) {
            self.key = candidate;
            self.energy = energy;
            self.window.push(energy);
            self.accepted += 1;
            true
        } else {
            false
        }
    }

    pub fn has_plateaued(&self) -> bool {
        self.window.has_plateaued()
    }
}
