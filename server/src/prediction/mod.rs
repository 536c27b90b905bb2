mod http_client;

use serde::Deserialize;
use thiserror::Error;

pub use http_client::HttpPredictionClient;

/// Body returned by the neural-network prediction service.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct PredictionResponse {
    pub prediction: i32,
    pub activations: Vec<f64>,
}

#[derive(Debug, Error)]
pub enum PredictionError {
    #[error("prediction request failed: {0}")]
    Request(#[source] reqwest::Error),
    #[error("prediction service returned HTTP {0}")]
    Status(u16),
    #[error("prediction response could not be decoded: {0}")]
    Decode(#[source] reqwest::Error),
    #[error("prediction response is malformed: {0}")]
    Malformed(String),
}

pub trait PredictionService: Send + Sync + 'static {
    /// `one_hot` is the comma-joined 27-value board encoding.
    fn predict(
        &self,
        one_hot: &str,
    ) -> impl Future<Output = Result<PredictionResponse, PredictionError>> + Send;
}
