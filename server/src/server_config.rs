use std::net::SocketAddr;
use std::time::Duration;

use common::config::Validate;
use serde::{Deserialize, Serialize};

pub const DEFAULT_CONFIG_PATH: &str = "player_config.yaml";
pub const DEFAULT_BIND_ADDRESS: &str = "0.0.0.0:8080";
pub const VALUES_PLACEHOLDER: &str = "{values}";
pub const DEFAULT_NEURAL_NETWORK_SERVICE_URL: &str =
    "http://localhost:8080/prediction?values={values}";
pub const HIGHEST_VALUES_TOLERANCE: f64 = 0.1;

/// What to answer when the prediction service cannot be reached or returns garbage.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum CollaboratorFailurePolicy {
    /// Leave the board untouched and still report success.
    #[default]
    Degrade,
    /// Report `successful = false` with the failure message.
    Propagate,
}

/// What the neural strategy does when the sampled cell is already taken.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum OccupiedCellPolicy {
    #[default]
    FallbackFirstEmpty,
    ResampleNearTies,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct PlayerConfig {
    pub bind_address: String,
    pub neural_network_service_url: String,
    pub request_timeout_ms: Option<u64>,
    pub highest_values_tolerance: f64,
    pub collaborator_failure_policy: CollaboratorFailurePolicy,
    pub occupied_cell_policy: OccupiedCellPolicy,
}

impl PlayerConfig {
    pub fn request_timeout(&self) -> Option<Duration> {
        self.request_timeout_ms.map(Duration::from_millis)
    }
}

impl Default for PlayerConfig {
    fn default() -> Self {
        Self {
            bind_address: DEFAULT_BIND_ADDRESS.to_string(),
            neural_network_service_url: DEFAULT_NEURAL_NETWORK_SERVICE_URL.to_string(),
            request_timeout_ms: None,
            highest_values_tolerance: HIGHEST_VALUES_TOLERANCE,
            collaborator_failure_policy: CollaboratorFailurePolicy::default(),
            occupied_cell_policy: OccupiedCellPolicy::default(),
        }
    }
}

impl Validate for PlayerConfig {
    fn validate(&self) -> Result<(), String> {
        self.bind_address
            .parse::<SocketAddr>()
            .map_err(|e| format!("bind_address '{}' is invalid: {}", self.bind_address, e))?;

        if !self.neural_network_service_url.contains(VALUES_PLACEHOLDER) {
            return Err(format!(
                "neural_network_service_url must contain the {} placeholder",
                VALUES_PLACEHOLDER
            ));
        }

        let tolerance = self.highest_values_tolerance;
        if !(tolerance > 0.0 && tolerance <= 1.0) {
            return Err(format!(
                "highest_values_tolerance must be in (0, 1], got {}",
                tolerance
            ));
        }

        if self.request_timeout_ms == Some(0) {
            return Err("request_timeout_ms must be positive when set".to_string());
        }

        Ok(())
    }
}
