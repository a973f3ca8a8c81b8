use super::Chain;
use crate::alphabet;
use crate::consts::{DECODE_PREVIEW_LEN, DEFAULT_MAX_ITERATIONS, ENERGY_WINDOW};
use crate::energy::EnergyEvaluator;
use crate::permutation::Permutation;
use rayon::prelude::*;
use serde::{Deserialize, Serialize};
use std::time::{Duration, Instant};
use strum_macros::{Display, EnumString};
use tracing::debug;

/// Knobs for a crack run. `max_iterations` is the safety valve for walks
/// whose plateau heuristic never fires; hitting it is an expected outcome,
/// not a failure.
#[derive(Debug, Clone)]
pub struct SamplerOptions {
    pub max_iterations: u64,
    pub window: usize,
    pub attempts: usize,
    pub report_interval: Duration,
}

impl Default for SamplerOptions {
    fn default() -> Self {
        Self {
            max_iterations: DEFAULT_MAX_ITERATIONS,
            window: ENERGY_WINDOW,
            attempts: 1,
            report_interval: Duration::from_secs(1),
        }
    }
}

/// Observer for accepted moves. Return false to cancel the walk.
pub trait ProgressCallback: Send + Sync {
    fn on_accept(&self, iteration: u64, energy: f64, decoded: &str) -> bool;
}

/// Discards every report and never cancels.
pub struct NullProgress;

impl ProgressCallback for NullProgress {
    fn on_accept(&self, _iteration: u64, _energy: f64, _decoded: &str) -> bool {
        true
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Display, EnumString)]
#[strum(serialize_all = "snake_case")]
#[serde(rename_all = "snake_case")]
pub enum StopReason {
    /// The recent-energy window went flat: the walk is oscillating inside
    /// a basin instead of descending.
    Plateaued,
    /// The iteration cap was hit before the plateau heuristic fired.
    IterationCap,
    /// A progress observer asked for the walk to stop.
    Cancelled,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CrackOutcome {
    pub key: Permutation,
    pub energy: f64,
    pub iterations: u64,
    pub accepted: u64,
    pub stop: StopReason,
}

impl CrackOutcome {
    pub fn converged(&self) -> bool {
        self.stop == StopReason::Plateaued
    }
}

/// Drives Metropolis chains against one evaluator.
pub struct Sampler<'a> {
    evaluator: EnergyEvaluator<'a>,
    options: SamplerOptions,
}

impl<'a> Sampler<'a> {
    pub fn new(evaluator: EnergyEvaluator<'a>, options: SamplerOptions) -> Self {
        Self { evaluator, options }
    }

    /// Runs a single chain until plateau, iteration cap, or cancellation.
    /// The plateau test runs every iteration; accepted moves are streamed
    /// to the callback, throttled by `report_interval`.
    pub fn run<CB: ProgressCallback>(&self, seed: Option<u64>, callback: &CB) -> CrackOutcome {
        let opts = &self.options;
        let mut chain = Chain::new(self.evaluator, seed, opts.window);
        let mut iterations = 0u64;
        let mut last_report = Instant::now();

        let stop = loop {
            if chain.has_plateaued() {
                break StopReason::Plateaued;
            }
            if iterations >= opts.max_iterations {
                break StopReason::IterationCap;
            }
            iterations += 1;

            if chain.step() && last_report.elapsed() >= opts.report_interval {
                let preview = self.decode_preview(&chain.key);
                if !callback.on_accept(iterations, chain.energy, &preview) {
                    break StopReason::Cancelled;
                }
                last_report = Instant::now();
            }
        };

        debug!(?stop, iterations, energy = chain.energy, "chain finished");

        CrackOutcome {
            key: chain.key,
            energy: chain.energy,
            iterations,
            accepted: chain.accepted,
            stop,
        }
    }

    /// Runs `attempts` independent chains and keeps the lowest-energy
    /// result. The chains share the evaluator read-only and each walk on
    /// their own thread with their own RNG; a fixed seed still reproduces
    /// the whole set because every attempt derives its seed from it.
    pub fn run_attempts<CB: ProgressCallback>(
        &self,
        seed: Option<u64>,
        callback: &CB,
    ) -> CrackOutcome {
        let attempts = self.options.attempts.max(1);
        if attempts == 1 {
            return self.run(seed, callback);
        }

        (0..attempts)
            .into_par_iter()
            .map(|i| self.run(seed.map(|s| s + i as u64 * 100), callback))
            .min_by(|a, b| a.energy.total_cmp(&b.energy))
            .expect("at least one attempt runs")
    }

    fn decode_preview(&self, key: &Permutation) -> String {
        let cipher = self.evaluator.ciphertext();
        let n = cipher.len().min(DECODE_PREVIEW_LEN);
        alphabet::decode(&key.apply(&cipher[..n]))
    }
}
