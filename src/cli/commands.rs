//! Command implementations for the spamsift CLI.

use std::fs;

use serde::Serialize;

use crate::analysis::analyzer::{Analyzer, CommentAnalyzer};
use crate::classifier::MultinomialNb;
use crate::cli::args::*;
use crate::dataset::Dataset;
use crate::error::Result;
use crate::evaluation::ConfusionMatrix;

/// Execute a CLI command.
pub fn execute_command(args: SpamsiftArgs) -> Result<()> {
    match &args.command {
        Command::Train(train_args) => train(train_args.clone(), &args),
        Command::Evaluate(evaluate_args) => evaluate(evaluate_args.clone(), &args),
        Command::Classify(classify_args) => classify(classify_args.clone(), &args),
    }
}

/// Per-sample prediction record written by `evaluate --dump`.
#[derive(Debug, Serialize)]
struct PredictionRecord {
    comment: String,
    tokens: Vec<String>,
    real: String,
    pred: String,
}

/// Wrapper object for the dump file.
#[derive(Debug, Serialize)]
struct PredictionDump {
    result: Vec<PredictionRecord>,
}

/// Run every comment through the analyzer.
fn analyze_comments(analyzer: &CommentAnalyzer, comments: &[String]) -> Result<Vec<Vec<String>>> {
    comments
        .iter()
        .map(|comment| analyzer.analyze_to_terms(comment))
        .collect()
}

/// Print a confusion matrix and accuracy report.
fn report_metrics(matrix: &ConfusionMatrix, cli_args: &SpamsiftArgs) {
    if cli_args.verbosity() == 0 {
        return;
    }
    println!("Accuracy: {:.4}", matrix.accuracy());
    println!("Confusion Matrix:");
    println!("-> TP: {}", matrix.true_positives);
    println!("-> FN: {}", matrix.false_negatives);
    println!("-> FP: {}", matrix.false_positives);
    println!("-> TN: {}", matrix.true_negatives);
}

/// Train a model and save its snapshot.
fn train(args: TrainArgs, cli_args: &SpamsiftArgs) -> Result<()> {
    let dataset = Dataset::load_json(&args.dataset_file)?;
    let analyzer = CommentAnalyzer::new()?;

    if cli_args.verbosity() > 1 {
        let labels = dataset.training.labels();
        let spam = labels.iter().filter(|label| label.as_str() == "1").count();
        println!("Training samples: {} spam, {} ham", spam, labels.len() - spam);
    }

    let documents = analyze_comments(&analyzer, &dataset.training.x)?;
    let mut model = MultinomialNb::new();
    if let Some(threshold) = args.threshold {
        model.set_threshold(threshold);
    }
    model.fit(&documents, &dataset.training.labels())?;

    if !dataset.testing.is_empty() {
        let test_documents = analyze_comments(&analyzer, &dataset.testing.x)?;
        let predictions = model.predict(&test_documents)?;
        let matrix = ConfusionMatrix::from_labels(&predictions, &dataset.testing.labels())?;
        report_metrics(&matrix, cli_args);
    }

    model.save(&args.model_file)?;
    if cli_args.verbosity() > 0 {
        println!("Model saved to: {}", args.model_file.display());
    }

    Ok(())
}

/// Evaluate a saved model on a dataset's testing split.
fn evaluate(args: EvaluateArgs, cli_args: &SpamsiftArgs) -> Result<()> {
    let mut model = MultinomialNb::load(&args.model_file)?;
    if let Some(threshold) = args.threshold {
        model.set_threshold(threshold);
    }

    let dataset = Dataset::load_json(&args.dataset_file)?;
    let analyzer = CommentAnalyzer::new()?;

    let documents = analyze_comments(&analyzer, &dataset.testing.x)?;
    let predictions = model.predict(&documents)?;
    let actual = dataset.testing.labels();

    let matrix = ConfusionMatrix::from_labels(&predictions, &actual)?;
    report_metrics(&matrix, cli_args);

    if let Some(dump_path) = &args.dump {
        let records: Vec<PredictionRecord> = dataset
            .testing
            .x
            .iter()
            .zip(documents)
            .zip(actual.iter().zip(predictions.iter()))
            .map(|((comment, tokens), (real, pred))| PredictionRecord {
                comment: comment.clone(),
                tokens,
                real: real.clone(),
                pred: pred.clone(),
            })
            .filter(|record| {
                if !args.wrong_only {
                    return true;
                }
                if record.real == record.pred {
                    return false;
                }
                match &args.real_class {
                    Some(class) => &record.real == class,
                    None => true,
                }
            })
            .collect();

        let dump = PredictionDump { result: records };
        fs::write(dump_path, serde_json::to_string_pretty(&dump)?)?;
        if cli_args.verbosity() > 0 {
            println!("Predictions dumped to: {}", dump_path.display());
        }
    }

    Ok(())
}

/// Classify a single comment and print its label.
fn classify(args: ClassifyArgs, cli_args: &SpamsiftArgs) -> Result<()> {
    let mut model = MultinomialNb::load(&args.model_file)?;
    if let Some(threshold) = args.threshold {
        model.set_threshold(threshold);
    }

    let analyzer = CommentAnalyzer::new()?;
    let tokens = analyzer.analyze_to_terms(&args.text)?;

    if cli_args.verbosity() > 1 {
        println!("Tokens: {tokens:?}");
        for (class_name, score) in model.class_scores(&tokens) {
            println!("Score[{class_name}]: {score}");
        }
    }

    let predictions = model.predict(std::slice::from_ref(&tokens))?;
    println!("{}", predictions[0]);

    Ok(())
}
