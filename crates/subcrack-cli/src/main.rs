use clap::{Parser, Subcommand};

mod cmd;
mod reports;

#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,

    /// Reference corpus the language model is estimated from
    #[arg(global = true, short, long, default_value = "data/corpus.txt")]
    corpus: String,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Recover the key of a substitution cipher and print the decode
    Crack(cmd::crack::CrackArgs),
    /// Encode a plaintext under a random or user-supplied substitution key
    Scramble(cmd::scramble::ScrambleArgs),
}

fn main() {
    // stdout carries the decoded text (and --json output); logs go to stderr
    tracing_subscriber::fmt().with_writer(std::io::stderr).init();

    let cli = Cli::parse();

    match cli.command {
        Commands::Crack(args) => cmd::crack::run(args, &cli.corpus),
        Commands::Scramble(args) => cmd::scramble::run(args),
    }
}
