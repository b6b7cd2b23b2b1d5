//! Profile a person from the movies they rated five stars
//!
//! Usage:
//!   cargo run --bin profile_person
//!   cargo run --bin profile_person -- --input ratings.csv --hidden 3 --daydream 5

use anyhow::Context;
use clap::Parser;
use log::info;
use ndarray::Array2;
use serde::Serialize;

use rbm_profiling::data::RatingMatrix;
use rbm_profiling::profile::{latent_factor_loadings, FeatureInfluence, PersonalityProfile};
use rbm_profiling::rbm::{Rbm, TrainingHistory};
use rbm_profiling::ExperimentConfig;

#[derive(Parser, Debug)]
#[command(author, version, about = "Profile a person with a Restricted Boltzmann Machine")]
struct Args {
    /// Rating CSV (header of feature names, one 0/1 row per movie); demo set if omitted
    #[arg(short, long)]
    input: Option<String>,

    /// JSON experiment config; flags below override it
    #[arg(short, long)]
    config: Option<String>,

    /// Number of hidden units (latent factors)
    #[arg(long)]
    hidden: Option<usize>,

    /// Number of training epochs
    #[arg(short, long)]
    epochs: Option<usize>,

    /// Learning rate
    #[arg(short, long)]
    learning_rate: Option<f64>,

    /// Random seed
    #[arg(short, long)]
    seed: Option<u64>,

    /// Number of daydream samples to generate (0 disables)
    #[arg(short, long, default_value = "0")]
    daydream: usize,

    /// Print the report as JSON instead of text
    #[arg(long)]
    json: bool,
}

#[derive(Debug, Serialize)]
struct Report {
    features: Vec<String>,
    weights: Vec<Vec<f64>>,
    initial_error: Option<f64>,
    final_error: Option<f64>,
    profile: Vec<FeatureInfluence>,
    latent_states: Vec<Vec<f64>>,
    daydream: Vec<Vec<f64>>,
}

fn main() -> anyhow::Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let args = Args::parse();

    let mut config = match &args.config {
        Some(path) => ExperimentConfig::from_json_file(path)
            .with_context(|| format!("failed to load config {}", path))?,
        None => ExperimentConfig::default(),
    };

    let ratings = match &args.input {
        Some(path) => {
            info!("Loading ratings from {}", path);
            RatingMatrix::from_csv(path).with_context(|| format!("failed to load {}", path))?
        }
        None => RatingMatrix::demo(),
    };
    info!(
        "{} movies x {} features",
        ratings.num_movies(),
        ratings.num_features()
    );

    config.rbm.num_visible = ratings.num_features();
    if let Some(hidden) = args.hidden {
        config.rbm.num_hidden = hidden;
    }
    if let Some(seed) = args.seed {
        config.rbm.seed = seed;
    }
    if let Some(epochs) = args.epochs {
        config.training.max_epochs = epochs;
    }
    if let Some(learning_rate) = args.learning_rate {
        config.training.learning_rate = learning_rate;
    }
    config.validate()?;

    let mut rbm = Rbm::from_config(&config.rbm)?;
    let history = rbm.train(ratings.ratings(), &config.training)?;

    let profile = PersonalityProfile::from_weights(rbm.weights(), ratings.features(), &config.profile)?;
    let latent_states = rbm.run_visible(ratings.ratings())?;
    let dreams = if args.daydream > 0 {
        Some(rbm.daydream(args.daydream)?)
    } else {
        None
    };

    if args.json {
        let report = Report {
            features: ratings.features().to_vec(),
            weights: to_rows(rbm.weights().as_array()),
            initial_error: history.initial_error(),
            final_error: history.final_error(),
            profile: profile.ranked(),
            latent_states: to_rows(&latent_states),
            daydream: dreams.as_ref().map(to_rows).unwrap_or_default(),
        };
        println!("{}", serde_json::to_string_pretty(&report)?);
        return Ok(());
    }

    print_dataset(&ratings);
    print_training(&history);
    print_weights(&rbm, &ratings)?;
    print_profile(&profile, config.profile.neutral_band);
    print_latent_states(&ratings, &latent_states);
    if let Some(dreams) = dreams {
        print_daydream(&ratings, &dreams);
    }

    Ok(())
}

fn to_rows(m: &Array2<f64>) -> Vec<Vec<f64>> {
    m.rows().into_iter().map(|r| r.to_vec()).collect()
}

fn print_dataset(ratings: &RatingMatrix) {
    println!("\n=== Ratings ===");
    println!("Each row is a movie rated five stars, each column a feature.");
    println!("{}", ratings.features().join("\t"));
    for row in ratings.ratings().rows() {
        let cells: Vec<String> = row.iter().map(|v| format!("{}", *v as u8)).collect();
        println!("{}", cells.join("\t"));
    }
}

fn print_training(history: &TrainingHistory) {
    println!("\n=== Training ===");
    println!("Epochs:        {}", history.epochs());
    if let (Some(first), Some(last)) = (history.initial_error(), history.final_error()) {
        println!("Initial error: {:.4}", first);
        println!("Final error:   {:.4}", last);
    }
}

fn print_weights(rbm: &Rbm, ratings: &RatingMatrix) -> anyhow::Result<()> {
    println!("\n=== Weights ===");
    println!("Row 0 and column 0 are biases; rows 1.. are the features.");
    for (i, row) in rbm.weights().as_array().rows().into_iter().enumerate() {
        let label = if i == 0 {
            "bias"
        } else {
            ratings.features()[i - 1].as_str()
        };
        let cells: Vec<String> = row.iter().map(|w| format!("{:>9.4}", w)).collect();
        println!("{:<12}{}", label, cells.join(" "));
    }

    for hidden in 0..rbm.num_hidden() {
        let loadings = latent_factor_loadings(rbm.weights(), ratings.features(), hidden)?;
        let summary: Vec<String> = loadings
            .iter()
            .map(|(feature, w)| format!("{}={:.3}", feature, w))
            .collect();
        println!("Latent factor {}: {}", hidden + 1, summary.join(", "));
    }
    Ok(())
}

fn print_profile(profile: &PersonalityProfile, neutral_band: f64) {
    println!("\n=== Profile ===");
    println!(
        "Influence is the sum of a feature's weights to all hidden units; |x| < {} is slight.",
        neutral_band
    );
    for feature in profile.ranked() {
        println!(
            "{:<12}{:>9.4}  {}",
            feature.feature,
            feature.influence,
            feature.sentiment.as_str()
        );
    }
    if let Some(top) = profile.strongest() {
        println!("Strongest feature: {}", top.feature);
    }
}

fn print_latent_states(ratings: &RatingMatrix, states: &Array2<f64>) {
    println!("\n=== Latent factors per movie ===");
    for (movie, (input, hidden)) in ratings
        .ratings()
        .rows()
        .into_iter()
        .zip(states.rows())
        .enumerate()
    {
        let on: Vec<&str> = ratings
            .features()
            .iter()
            .zip(input.iter())
            .filter(|(_, &v)| v == 1.0)
            .map(|(f, _)| f.as_str())
            .collect();
        println!("Movie {} [{}] -> {:?}", movie + 1, on.join(", "), hidden.to_vec());
    }
}

fn print_daydream(ratings: &RatingMatrix, dreams: &Array2<f64>) {
    println!("\n=== Daydream ===");
    println!("Row 1 is the random starting point of the Gibbs chain.");
    println!("{}", ratings.features().join("\t"));
    for row in dreams.rows() {
        let cells: Vec<String> = row.iter().map(|v| format!("{:.2}", v)).collect();
        println!("{}", cells.join("\t"));
    }
}
