//! Command line argument parsing for the spamsift CLI using clap.

use std::path::PathBuf;

use clap::{Parser, Subcommand};

/// Spamsift - a Naive-Bayes spam filter for short comments
#[derive(Parser, Debug, Clone)]
#[command(name = "spamsift")]
#[command(about = "Train and apply a Naive-Bayes spam filter for short comments")]
#[command(version = env!("CARGO_PKG_VERSION"))]
#[command(long_about = None)]
pub struct SpamsiftArgs {
    /// Verbosity level (0=quiet, 1=normal, 2=verbose)
    #[arg(short, long, action = clap::ArgAction::Count)]
    pub verbose: u8,

    /// Quiet mode (overrides verbose)
    #[arg(short, long)]
    pub quiet: bool,

    /// Subcommand to execute
    #[command(subcommand)]
    pub command: Command,
}

impl SpamsiftArgs {
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
    /// Train a model on a dataset and save the snapshot
    Train(TrainArgs),

    /// Evaluate a saved model against a dataset's testing split
    Evaluate(EvaluateArgs),

    /// Classify a single comment with a saved model
    Classify(ClassifyArgs),
}

/// Arguments for training a model
#[derive(Parser, Debug, Clone)]
pub struct TrainArgs {
    /// Dataset file (JSON with training/testing splits)
    #[arg(value_name = "DATASET_FILE")]
    pub dataset_file: PathBuf,

    /// Destination for the trained model snapshot (JSON)
    #[arg(value_name = "MODEL_FILE")]
    pub model_file: PathBuf,

    /// Decision threshold for the spam/ham score ratio
    #[arg(short, long)]
    pub threshold: Option<f64>,
}

/// Arguments for evaluating a model
#[derive(Parser, Debug, Clone)]
pub struct EvaluateArgs {
    /// Trained model snapshot (JSON)
    #[arg(value_name = "MODEL_FILE")]
    pub model_file: PathBuf,

    /// Dataset file whose testing split is evaluated
    #[arg(value_name = "DATASET_FILE")]
    pub dataset_file: PathBuf,

    /// Decision threshold for the spam/ham score ratio
    #[arg(short, long)]
    pub threshold: Option<f64>,

    /// Write per-sample prediction records to this JSON file
    #[arg(long, value_name = "DUMP_FILE")]
    pub dump: Option<PathBuf>,

    /// Only dump misclassified samples
    #[arg(long, requires = "dump")]
    pub wrong_only: bool,

    /// With --wrong-only, restrict the dump to samples of this real class
    #[arg(long, value_name = "CLASS", requires = "wrong_only")]
    pub real_class: Option<String>,
}

/// Arguments for classifying a single comment
#[derive(Parser, Debug, Clone)]
pub struct ClassifyArgs {
    /// Trained model snapshot (JSON)
    #[arg(value_name = "MODEL_FILE")]
    pub model_file: PathBuf,

    /// Comment text to classify
    #[arg(value_name = "TEXT")]
    pub text: String,

    /// Decision threshold for the spam/ham score ratio
    #[arg(short, long)]
    pub threshold: Option<f64>,
}
