use clap::Args;
use fastrand::Rng;
use std::path::PathBuf;
use std::process;
use subcrack_core::alphabet;
use subcrack_core::corpus;
use subcrack_core::error::{ScResult, SubcrackError};
use subcrack_core::permutation::Permutation;
use tracing::{error, info};

#[derive(Args, Debug, Clone)]
pub struct ScrambleArgs {
    /// Plaintext given inline
    #[arg(short, long, conflicts_with = "input")]
    pub text: Option<String>,

    /// Path to a file holding the plaintext
    #[arg(short, long)]
    pub input: Option<PathBuf>,

    /// Seed for a reproducible random key
    #[arg(short = 'S', long)]
    pub seed: Option<u64>,

    /// Use this 27-character key instead of a random one
    #[arg(short, long)]
    pub key: Option<String>,
}

pub fn run(args: ScrambleArgs) {
    if let Err(e) = try_run(&args) {
        error!("{}", e);
        process::exit(1);
    }
}

fn try_run(args: &ScrambleArgs) -> ScResult<()> {
    let raw = match (&args.text, &args.input) {
        (Some(t), _) => t.clone(),
        (None, Some(path)) => std::fs::read_to_string(path)?,
        (None, None) => return Err(SubcrackError::MissingInput),
    };

    let plain = corpus::normalize(&raw);
    if plain.is_empty() {
        return Err(SubcrackError::EmptyInput);
    }

    let key = match &args.key {
        Some(k) => k.parse::<Permutation>()?,
        None => {
            let mut rng = match args.seed {
                Some(s) => Rng::with_seed(s),
                None => Rng::new(),
            };
            Permutation::shuffled(&mut rng)
        }
    };

    // `key` is the decode table, so encoding walks it backwards.
    let cipher = key.inverse().apply(&alphabet::encode(&plain)?);

    info!("key: {}", key);
    println!("{}", alphabet::decode(&cipher));

    Ok(())
}
