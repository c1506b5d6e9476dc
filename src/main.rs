use std::path::PathBuf;
use std::time::Instant;

use anyhow::{Context, Result};
use clap::Parser;
// For the reproducible holdout split
use rand::{rngs::SmallRng, SeedableRng};
use tracing::{info, Level};
use tracing_subscriber::FmtSubscriber;

use nn_mnist::evaluator::{correct, par_correct};
use nn_mnist::mnist::{load_mnist, LoadOptions};
use nn_mnist::split::holdout;
use nn_mnist::{Classifier, Metric, NearestNeighbor};

/// Classify handwritten digits by their nearest labeled neighbor
#[derive(Parser, Debug)]
#[command(name = "nn_mnist", version, long_about = None)]
struct Args {
    /// CSV file of labeled training images
    training: PathBuf,

    /// CSV file of labeled validation images (a holdout of the training file is used if omitted)
    validation: Option<PathBuf>,

    /// Distance metric used to find the nearest neighbor
    #[arg(short, long, value_enum, default_value_t = Metric::Manhattan)]
    metric: Metric,

    /// The CSV files have no header row
    #[arg(long)]
    no_headers: bool,

    /// Number of rows to read from each file
    #[arg(long, default_value_t = usize::MAX, hide_default_value = true)]
    max_examples: usize,

    /// Share of the training file held out for validation when no validation file is given
    #[arg(long, default_value_t = 0.1)]
    validation_fraction: f64,

    /// Seed for the holdout split
    #[arg(long, default_value_t = 0)]
    seed: u64,

    /// Score validation images on all cores
    #[arg(short, long)]
    parallel: bool,

    /// Log level
    #[arg(long, default_value = "info")]
    log_level: String,
}

fn main() -> Result<()> {
    let args = Args::parse();

    let log_level = match args.log_level.as_str() {
        "trace" => Level::TRACE,
        "debug" => Level::DEBUG,
        "info" => Level::INFO,
        "warn" => Level::WARN,
        "error" => Level::ERROR,
        _ => Level::INFO,
    };
    let subscriber = FmtSubscriber::builder().with_max_level(log_level).finish();
    tracing::subscriber::set_global_default(subscriber)?;

    let options = LoadOptions {
        has_headers: !args.no_headers,
        max_examples: args.max_examples,
    };

    // Load the dataset
    let now = Instant::now();
    let observations = load_mnist(&args.training, &options)
        .with_context(|| format!("failed to load {}", args.training.display()))?;
    info!(
        "Loaded {} examples from {} [{}ms]",
        observations.len(),
        args.training.display(),
        now.elapsed().as_millis()
    );

    // Either load the validation data or carve it out of the training data
    let now = Instant::now();
    let (training, validation) = match &args.validation {
        Some(path) => {
            let validation = load_mnist(path, &options)
                .with_context(|| format!("failed to load {}", path.display()))?;
            info!(
                "Loaded {} validation examples from {} [{}ms]",
                validation.len(),
                path.display(),
                now.elapsed().as_millis()
            );
            (observations, validation)
        }
        None => {
            let mut rng = SmallRng::seed_from_u64(args.seed);
            let (training, validation) =
                holdout(observations, args.validation_fraction, &mut rng);
            info!(
                "Held out {} of {} examples for validation (seed {})",
                validation.len(),
                training.len() + validation.len(),
                args.seed
            );
            (training, validation)
        }
    };

    // Train the model
    let now = Instant::now();
    let mut classifier = NearestNeighbor::new(args.metric.function());
    classifier.train(training);
    info!(
        "Trained {} classifier on {} examples [{}ms]",
        args.metric,
        classifier.training_set().len(),
        now.elapsed().as_millis()
    );

    // Classify the validation data and compute accuracy
    let now = Instant::now();
    let accuracy = if args.parallel {
        par_correct(&validation, &classifier)
    } else {
        correct(&validation, &classifier)
    }
    .context("evaluation failed")?;
    info!(
        "Evaluated {} examples [{}ms]",
        validation.len(),
        now.elapsed().as_millis()
    );

    println!("Correctly classified: {:.2}%", accuracy * 100.0);
    Ok(())
}
