use crate::reports;
use clap::Args;
use serde::Serialize;
use std::path::PathBuf;
use std::process;
use subcrack_core::alphabet;
use subcrack_core::consts::DEFAULT_MAX_ITERATIONS;
use subcrack_core::corpus;
use subcrack_core::energy::EnergyEvaluator;
use subcrack_core::error::{ScResult, SubcrackError};
use subcrack_core::model::BigramModel;
use subcrack_core::sampler::{
    CrackOutcome, NullProgress, ProgressCallback, Sampler, SamplerOptions, StopReason,
};
use tracing::{error, info, warn};

#[derive(Args, Debug, Clone)]
pub struct CrackArgs {
    /// Ciphertext given inline (lowercase letters and spaces)
    #[arg(short, long, conflicts_with = "input")]
    pub text: Option<String>,

    /// Path to a file holding the ciphertext
    #[arg(short, long)]
    pub input: Option<PathBuf>,

    /// Seed for reproducible runs
    #[arg(short = 'S', long)]
    pub seed: Option<u64>,

    /// Iteration cap per chain
    #[arg(short = 'm', long, default_value_t = DEFAULT_MAX_ITERATIONS)]
    pub max_iterations: u64,

    /// Independent restarts; the lowest-energy result wins
    #[arg(short, long, default_value_t = 1)]
    pub attempts: usize,

    /// Emit the result as JSON instead of tables
    #[arg(long, default_value_t = false)]
    pub json: bool,

    /// Suppress intermediate decode logging
    #[arg(short, long, default_value_t = false)]
    pub quiet: bool,
}

struct CliLogger;

impl ProgressCallback for CliLogger {
    fn on_accept(&self, iteration: u64, energy: f64, decoded: &str) -> bool {
        info!("it {:>9} | energy {:>10.1} | {}", iteration, energy, decoded);
        true
    }
}

#[derive(Serialize)]
struct CrackReport {
    #[serde(flatten)]
    outcome: CrackOutcome,
    plaintext: String,
}

pub fn run(args: CrackArgs, corpus_path: &str) {
    if let Err(e) = try_run(&args, corpus_path) {
        error!("{}", e);
        process::exit(1);
    }
}

fn try_run(args: &CrackArgs, corpus_path: &str) -> ScResult<()> {
    info!("Loading corpus: {}", corpus_path);
    let corpus = corpus::load(corpus_path)?;
    let model = BigramModel::estimate(&corpus);

    let raw = match (&args.text, &args.input) {
        (Some(t), _) => t.clone(),
        (None, Some(path)) => std::fs::read_to_string(path)?,
        (None, None) => return Err(SubcrackError::MissingInput),
    };
    let cipher = alphabet::encode(raw.trim_end())?;
    if cipher.is_empty() {
        return Err(SubcrackError::EmptyInput);
    }

    let evaluator = EnergyEvaluator::new(&cipher, &model);
    let options = SamplerOptions {
        max_iterations: args.max_iterations,
        attempts: args.attempts,
        ..SamplerOptions::default()
    };
    let sampler = Sampler::new(evaluator, options);

    info!(
        "Running {} chain(s), cap {} iterations",
        args.attempts.max(1),
        args.max_iterations
    );
    let outcome = if args.quiet {
        sampler.run_attempts(args.seed, &NullProgress)
    } else {
        sampler.run_attempts(args.seed, &CliLogger)
    };

    if outcome.stop == StopReason::IterationCap {
        warn!("walk hit the iteration cap without plateauing; decode below is best-effort");
    }

    let plaintext = alphabet::decode(&outcome.key.apply(&cipher));

    if args.json {
        let report = CrackReport {
            outcome: outcome.clone(),
            plaintext,
        };
        println!("{}", serde_json::to_string_pretty(&report)?);
    } else {
        reports::print_key_table(&outcome.key);
        reports::print_summary(&outcome);
        println!("{}", plaintext);
    }

    Ok(())
}
