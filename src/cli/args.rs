//! Command line argument parsing for the textbayes CLI using clap.

use std::path::PathBuf;

use clap::{Parser, Subcommand, ValueEnum};
use serde::{Deserialize, Serialize};

/// Ratio of the data used for training by `evaluate` when none is given.
pub const DEFAULT_TRAINING_RATIO: f64 = 2.0 / 3.0;

/// textbayes - Naive Bayes text classification
#[derive(Parser, Debug, Clone)]
#[command(name = "textbayes")]
#[command(about = "Multinomial Naive Bayes text classification")]
#[command(version = env!("CARGO_PKG_VERSION"))]
#[command(long_about = None)]
pub struct TextBayesArgs {
    /// Verbosity level (0=quiet, 1=normal, 2=verbose, 3=debug)
    #[arg(short, long, action = clap::ArgAction::Count)]
    pub verbose: u8,

    /// Quiet mode (overrides verbose)
    #[arg(short, long)]
    pub quiet: bool,

    /// Output format
    #[arg(short = 'f', long = "format", default_value = "human")]
    pub output_format: OutputFormat,

    /// Pretty-print JSON output
    #[arg(long)]
    pub pretty: bool,

    /// Subcommand to execute
    #[command(subcommand)]
    pub command: Command,
}

impl TextBayesArgs {
    /// Get the effective verbosity level
    pub fn verbosity(&self) -> u8 {
        if self.quiet {
            0
        } else {
            match self.verbose {
                0 => 1, // Default to normal
                n => n,
            }
        }
    }
}

/// Available CLI commands
#[derive(Subcommand, Debug, Clone)]
pub enum Command {
    /// Train on one file and classify the instances of another
    Classify(ClassifyArgs),

    /// Split one file randomly, train on one part and measure accuracy on the other
    Evaluate(EvaluateArgs),
}

/// Arguments for classifying a test file
#[derive(Parser, Debug, Clone)]
pub struct ClassifyArgs {
    /// Labeled training corpus
    #[arg(value_name = "TRAINING_FILE")]
    pub training_file: PathBuf,

    /// Corpus to classify
    #[arg(value_name = "TEST_FILE")]
    pub test_file: PathBuf,

    /// Output file, or directory receiving classification.txt
    #[arg(value_name = "OUTPUT")]
    pub output: PathBuf,

    /// Number of most frequent training words used as features
    #[arg(value_name = "VOCABULARY_SIZE")]
    pub vocabulary_size: Option<usize>,

    /// Write the words of each instance after its predicted label
    #[arg(long)]
    pub include_words: bool,

    /// JSON configuration file
    #[arg(short, long, value_name = "CONFIG_FILE")]
    pub config: Option<PathBuf>,

    /// Train and classify on the rayon thread pool
    #[arg(long)]
    pub parallel: bool,
}

/// Arguments for evaluating on a random split
#[derive(Parser, Debug, Clone)]
pub struct EvaluateArgs {
    /// Labeled corpus
    #[arg(value_name = "DATA_FILE")]
    pub data_file: PathBuf,

    /// Fraction of the instances used for training
    #[arg(short, long, default_value_t = DEFAULT_TRAINING_RATIO)]
    pub ratio: f64,

    /// Seed for a reproducible split
    #[arg(short, long)]
    pub seed: Option<u64>,

    /// Number of most frequent training words used as features
    #[arg(long)]
    pub vocabulary_size: Option<usize>,

    /// Write the predictions for the test part to this file
    #[arg(short, long, value_name = "OUTPUT_FILE")]
    pub output: Option<PathBuf>,

    /// JSON configuration file
    #[arg(short, long, value_name = "CONFIG_FILE")]
    pub config: Option<PathBuf>,

    /// Train and classify on the rayon thread pool
    #[arg(long)]
    pub parallel: bool,
}

/// Output formats for CLI
#[derive(ValueEnum, Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    /// Human-readable output
    Human,
    /// JSON output
    Json,
}
