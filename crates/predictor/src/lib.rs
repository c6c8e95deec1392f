//! Rating predictor backed by a local ONNX Runtime session.
//!
//! This crate wraps the trained recommender graph exported to ONNX. It
//! handles:
//! - Building a session from the model file with a CPU execution-provider
//!   preference
//! - Converting resolved embedding indices into the int64 input tensors the
//!   graph expects (`user_idx`, `movie_idx`)
//! - Running one forward pass and extracting the predicted rating

use std::path::Path;

use ndarray::Array1;
use ort::execution_providers::CPUExecutionProvider;
use ort::session::builder::GraphOptimizationLevel;
use ort::session::Session;
use ort::value::TensorRef;
use thiserror::Error;
use tracing::{debug, info};

/// Errors that can occur when loading the model or running inference
#[derive(Error, Debug)]
pub enum PredictorError {
    #[error("Failed to load model: {0}")]
    ModelLoadError(String),

    #[error("Inference failed: {0}")]
    InferenceError(String),

    #[error("Model returned no output values")]
    EmptyOutput,
}

/// Predictor holding a loaded inference session.
///
/// This wraps the ONNX Runtime session and provides a higher-level
/// interface: resolved (user, movie) indices in, predicted rating out.
/// The session is created once and dropped with the process; there is no
/// pooling or reuse across runs.
#[derive(Debug)]
pub struct RatingPredictor {
    session: Session,
    output_name: String,
}

impl RatingPredictor {
    /// Load the recommender graph from an ONNX file.
    ///
    /// # Arguments
    /// * `path` - Path to the .onnx model file
    ///
    /// # Returns
    /// A predictor ready to run a forward pass
    ///
    /// The session prefers the CPU execution provider; a single forward
    /// pass through two embedding lookups and a dot product does not
    /// warrant anything heavier.
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self, PredictorError> {
        let path = path.as_ref();

        if !path.exists() {
            return Err(PredictorError::ModelLoadError(format!(
                "Model file not found: {}",
                path.display()
            )));
        }

        info!("Loading ONNX model from {}", path.display());

        let session = Session::builder()
            .map_err(|e| PredictorError::ModelLoadError(format!("Failed to create session builder: {e}")))?
            .with_execution_providers([CPUExecutionProvider::default().build()])
            .map_err(|e| PredictorError::ModelLoadError(format!("Failed to register CPU EP: {e}")))?
            .with_optimization_level(GraphOptimizationLevel::Level3)
            .map_err(|e| PredictorError::ModelLoadError(format!("Failed to set optimization level: {e}")))?
            .commit_from_file(path)
            .map_err(|e| PredictorError::ModelLoadError(format!("Failed to load model: {e}")))?;

        // The graph has a single output (the predicted rating); take its
        // name from the session rather than hardcoding it.
        let output_name = session
            .outputs
            .first()
            .map(|o| o.name.clone())
            .ok_or_else(|| PredictorError::ModelLoadError("Model has no outputs".to_string()))?;

        Ok(Self {
            session,
            output_name,
        })
    }

    /// Predict the rating for one (user, movie) pair.
    ///
    /// # Arguments
    /// * `user_idx` - Dense embedding index for the user
    /// * `movie_idx` - Dense embedding index for the movie
    ///
    /// # Returns
    /// The first element of the model's first output tensor
    ///
    /// Shape, dtype, or input-name mismatches surface as `InferenceError`
    /// with the runtime's own diagnostic; nothing is retried or recovered.
    pub fn predict(&mut self, user_idx: i64, movie_idx: i64) -> Result<f32, PredictorError> {
        debug!("Running inference for user_idx={}, movie_idx={}", user_idx, movie_idx);

        // The graph expects each index as a length-one 1-D int64 tensor
        let user = index_tensor(user_idx);
        let movie = index_tensor(movie_idx);

        let user_tensor = TensorRef::from_array_view(&user)
            .map_err(|e| PredictorError::InferenceError(format!("Failed to create user tensor: {e}")))?;
        let movie_tensor = TensorRef::from_array_view(&movie)
            .map_err(|e| PredictorError::InferenceError(format!("Failed to create movie tensor: {e}")))?;

        let inputs = ort::inputs![
            "user_idx" => user_tensor,
            "movie_idx" => movie_tensor,
        ];

        let outputs = self
            .session
            .run(inputs)
            .map_err(|e| PredictorError::InferenceError(format!("Inference failed: {e}")))?;

        let output = outputs
            .get(self.output_name.as_str())
            .ok_or_else(|| {
                PredictorError::InferenceError(format!("Output '{}' not found", self.output_name))
            })?;

        let (_, data) = output
            .try_extract_tensor::<f32>()
            .map_err(|e| PredictorError::InferenceError(format!("Failed to extract output: {e}")))?;

        data.first().copied().ok_or(PredictorError::EmptyOutput)
    }

    /// Name of the output tensor the predicted rating is read from.
    pub fn output_name(&self) -> &str {
        &self.output_name
    }
}

/// Wrap a resolved index as the length-one 1-D int64 array the graph expects.
fn index_tensor(idx: i64) -> Array1<i64> {
    Array1::from_vec(vec![idx])
}
