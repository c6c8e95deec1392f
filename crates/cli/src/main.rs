use anyhow::Result;
use metadata::{MetadataIndex, MovieId, UserId};
use predictor::RatingPredictor;
use std::path::Path;
use tracing::debug;

/// The (user, movie) pair to score. Hardcoded, matching the exported
/// demo: this binary exists to verify the exported model end to end,
/// not to serve arbitrary queries.
const USER_ID: UserId = 1;
const MOVIE_ID: MovieId = 1;

/// Input files, resolved relative to the working directory.
const METADATA_PATH: &str = "metadata.json";
const MODEL_PATH: &str = "recommender.onnx";

fn main() -> Result<()> {
    // Initialize tracing
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info")),
        )
        .init();

    // Straight line: load metadata, resolve indices, load model, predict.
    // Every failure propagates out of main with the underlying library's
    // diagnostic; nothing here is caught or retried.
    let index = MetadataIndex::load_from_file(Path::new(METADATA_PATH))?;

    let user_idx = index.user_index(USER_ID)?;
    let movie_idx = index.movie_index(MOVIE_ID)?;
    debug!(
        "Resolved user {} -> {}, movie {} -> {}",
        USER_ID, user_idx, MOVIE_ID, movie_idx
    );

    let mut predictor = RatingPredictor::load(MODEL_PATH)?;
    let rating = predictor.predict(user_idx, movie_idx)?;

    println!("Predicted rating: {}", rating);

    Ok(())
}
