//! Command implementations for the textbayes CLI.

use std::path::{Path, PathBuf};
use std::time::Instant;

use log::info;
use rand::rngs::StdRng;
use rand::{RngCore, SeedableRng};

use crate::analysis::Analyzer;
use crate::cli::args::*;
use crate::cli::output::*;
use crate::config::TextBayesConfig;
use crate::dataset::{DatasetView, TextDataset};
use crate::error::{Result, TextBayesError};
use crate::ml::bayes::BayesTextClassifier;

/// File written inside the output directory by the classify command.
pub const CLASSIFICATION_FILE_NAME: &str = "classification.txt";

/// Execute a CLI command.
pub fn execute_command(args: TextBayesArgs) -> Result<()> {
    match &args.command {
        Command::Classify(classify_args) => classify(classify_args.clone(), &args),
        Command::Evaluate(evaluate_args) => evaluate(evaluate_args.clone(), &args),
    }
}

/// Train on the training file and write the predicted labels of the test file.
fn classify(args: ClassifyArgs, cli_args: &TextBayesArgs) -> Result<()> {
    let start_time = Instant::now();
    let config = resolve_config(args.config.as_deref(), args.vocabulary_size, args.parallel)?;
    let analyzer = Analyzer::from_config(&config.analyzer)?;

    let training = load_dataset(&args.training_file, &analyzer)?;
    let test = load_dataset(&args.test_file, &analyzer)?;

    let mut classifier = BayesTextClassifier::new(config.classifier)?;
    classifier.train(&training)?;
    let predictions = classifier.classify_all(&test)?;

    let output_path = resolve_output_path(&args.output);
    predictions.save_to_file(&output_path, args.include_words)?;
    info!(
        "wrote {} predictions to {}",
        predictions.len(),
        output_path.display()
    );

    output_result(
        "Classification complete",
        &ClassificationResult {
            training_set: training.name().to_string(),
            training_instances: training.len(),
            test_set: test.name().to_string(),
            test_instances: test.len(),
            vocabulary_size: classifier.config().vocabulary_size,
            target_values: classifier.target_values().unwrap_or_default().to_vec(),
            output: output_path.to_string_lossy().to_string(),
            duration_ms: start_time.elapsed().as_millis() as u64,
        },
        cli_args,
    )
}

/// Split one file, train on the first part and measure accuracy on the second.
fn evaluate(args: EvaluateArgs, cli_args: &TextBayesArgs) -> Result<()> {
    let start_time = Instant::now();
    let config = resolve_config(args.config.as_deref(), args.vocabulary_size, args.parallel)?;
    let analyzer = Analyzer::from_config(&config.analyzer)?;

    let data = load_dataset(&args.data_file, &analyzer)?;

    let mut rng: Box<dyn RngCore> = match args.seed {
        Some(seed) => Box::new(StdRng::seed_from_u64(seed)),
        None => Box::new(rand::rng()),
    };
    let split = data.random_split_with(args.ratio, &mut *rng)?;

    let mut classifier = BayesTextClassifier::new(config.classifier)?;
    classifier.train(&split.training)?;
    let predictions = classifier.classify_all(&split.test)?;
    let (correct, accuracy) = score_predictions(&predictions, &split.test)?;

    let output = match &args.output {
        Some(path) => {
            let path = resolve_output_path(path);
            predictions.save_to_file(&path, false)?;
            Some(path.to_string_lossy().to_string())
        }
        None => None,
    };

    output_result(
        "Evaluation complete",
        &EvaluationResult {
            data_set: data.name().to_string(),
            training_instances: split.training.len(),
            test_instances: split.test.len(),
            vocabulary_size: classifier.config().vocabulary_size,
            target_values: classifier.target_values().unwrap_or_default().to_vec(),
            correct,
            accuracy,
            output,
            duration_ms: start_time.elapsed().as_millis() as u64,
        },
        cli_args,
    )
}

/// Number of `predictions` matching the labels of `expected`, and the
/// fraction that number makes up. Fails with `EmptyDataset` for no predictions.
fn score_predictions(
    predictions: &dyn DatasetView,
    expected: &dyn DatasetView,
) -> Result<(usize, f64)> {
    if predictions.is_empty() {
        return Err(TextBayesError::empty_dataset(format!(
            "cannot compute accuracy on {}: it has no instances",
            expected.name()
        )));
    }
    let correct = predictions
        .instances()
        .zip(expected.instances())
        .filter(|(predicted, actual)| predicted.label() == actual.label())
        .count();
    Ok((correct, correct as f64 / predictions.len() as f64))
}

/// Configuration from `config_path` (or the defaults) with command line overrides applied.
fn resolve_config(
    config_path: Option<&Path>,
    vocabulary_size: Option<usize>,
    parallel: bool,
) -> Result<TextBayesConfig> {
    let mut config = match config_path {
        Some(path) => TextBayesConfig::load_from_file(path)?,
        None => TextBayesConfig::default(),
    };

    if let Some(size) = vocabulary_size {
        config.classifier.vocabulary_size = size;
    }
    if parallel {
        config.classifier.parallel = true;
    }
    config.validate()?;
    Ok(config)
}

/// `path` itself, or `path/classification.txt` when `path` is a directory.
fn resolve_output_path(path: &Path) -> PathBuf {
    if path.is_dir() {
        path.join(CLASSIFICATION_FILE_NAME)
    } else {
        path.to_path_buf()
    }
}

fn load_dataset(path: &Path, analyzer: &Analyzer) -> Result<TextDataset> {
    let mut dataset = TextDataset::new();
    dataset.load_from_file(path, analyzer)?;
    Ok(dataset)
}
