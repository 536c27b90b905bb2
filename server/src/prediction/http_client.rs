use std::time::Duration;

use common::log;

use super::{PredictionError, PredictionResponse, PredictionService};
use crate::server_config::VALUES_PLACEHOLDER;

pub struct HttpPredictionClient {
    client: reqwest::Client,
    url_template: String,
}

impl HttpPredictionClient {
    pub fn new(url_template: String, timeout: Option<Duration>) -> Result<Self, PredictionError> {
        let mut builder = reqwest::Client::builder();
        if let Some(timeout) = timeout {
            builder = builder.timeout(timeout);
        }
        let client = builder.build().map_err(PredictionError::Request)?;

        Ok(Self { client, url_template })
    }

    pub fn request_url(&self, one_hot: &str) -> String {
        self.url_template.replace(VALUES_PLACEHOLDER, one_hot)
    }
}

impl PredictionService for HttpPredictionClient {
    async fn predict(&self, one_hot: &str) -> Result<PredictionResponse, PredictionError> {
        let url = self.request_url(one_hot);
        log!("predictionRequestUrl: {}", url);

        let response = self
            .client
            .get(&url)
            .send()
            .await
            .map_err(PredictionError::Request)?;

        let status = response.status();
        if !status.is_success() {
            return Err(PredictionError::Status(status.as_u16()));
        }

        response
            .json::<PredictionResponse>()
            .await
            .map_err(PredictionError::Decode)
    }
}
