use common::{Board, Mark, error, log, warn};
use rand::Rng;

use crate::move_error::MoveError;
use crate::near_tie::{choose_random_index, highest_activation_indices, output_activations};
use crate::prediction::{PredictionError, PredictionService};
use crate::server_config::{
    CollaboratorFailurePolicy, HIGHEST_VALUES_TOLERANCE, OccupiedCellPolicy, PlayerConfig,
};
use crate::strategy::Strategy;

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct MoveSettings {
    pub highest_values_tolerance: f64,
    pub collaborator_failure_policy: CollaboratorFailurePolicy,
    pub occupied_cell_policy: OccupiedCellPolicy,
}

impl Default for MoveSettings {
    fn default() -> Self {
        Self {
            highest_values_tolerance: HIGHEST_VALUES_TOLERANCE,
            collaborator_failure_policy: CollaboratorFailurePolicy::default(),
            occupied_cell_policy: OccupiedCellPolicy::default(),
        }
    }
}

impl From<&PlayerConfig> for MoveSettings {
    fn from(config: &PlayerConfig) -> Self {
        Self {
            highest_values_tolerance: config.highest_values_tolerance,
            collaborator_failure_policy: config.collaborator_failure_policy,
            occupied_cell_policy: config.occupied_cell_policy,
        }
    }
}

pub struct MoveCalculator<P: PredictionService> {
    prediction_service: P,
    settings: MoveSettings,
}

impl<P: PredictionService> MoveCalculator<P> {
    pub fn new(prediction_service: P, settings: MoveSettings) -> Self {
        Self {
            prediction_service,
            settings,
        }
    }

    /// Returns the board after the current player's move.
    ///
    /// Under `CollaboratorFailurePolicy::Degrade` a failed prediction yields the input board.
    pub async fn calculate_move<R: Rng + Send>(
        &self,
        board: Board,
        strategy: Strategy,
        rng: &mut R,
    ) -> Result<Board, MoveError> {
        let whose_turn = board.whose_turn().inspect_err(|e| {
            warn!("Invalid gameBoard state: {} ({})", board, e);
        })?;

        if board.first_empty_cell().is_none() {
            return Err(MoveError::BoardFull);
        }

        let mut board = board;
        match strategy {
            Strategy::Default => play_first_empty_cell(&mut board, whose_turn)?,
            Strategy::NeuralNetwork => {
                self.consult_neural_network(&mut board, whose_turn, rng).await?
            }
        }

        Ok(board)
    }

    async fn consult_neural_network<R: Rng + Send>(
        &self,
        board: &mut Board,
        whose_turn: Mark,
        rng: &mut R,
    ) -> Result<(), MoveError> {
        let one_hot = board.one_hot_string();

        let near_ties = match self.request_near_ties(&one_hot).await {
            Ok(near_ties) => near_ties,
            Err(e) => {
                error!("Caught error when calling neural network prediction service: {}", e);
                return match self.settings.collaborator_failure_policy {
                    CollaboratorFailurePolicy::Degrade => Ok(()),
                    CollaboratorFailurePolicy::Propagate => Err(e.into()),
                };
            }
        };

        let cell = resolve_cell(board, &near_ties, self.settings.occupied_cell_policy, rng)
            .ok_or(MoveError::BoardFull)?;
        log!("Playing cell {} from near-tie set {:?}", cell, near_ties);
        board.place(cell, whose_turn);
        Ok(())
    }

    async fn request_near_ties(&self, one_hot: &str) -> Result<Vec<usize>, PredictionError> {
        let response = self.prediction_service.predict(one_hot).await?;
        log!("prediction is: {}", response.prediction);

        let outputs = output_activations(&response.activations)?;
        Ok(highest_activation_indices(
            outputs,
            self.settings.highest_values_tolerance,
        ))
    }
}

pub fn play_first_empty_cell(board: &mut Board, mark: Mark) -> Result<(), MoveError> {
    let cell = board.first_empty_cell().ok_or(MoveError::BoardFull)?;
    board.place(cell, mark);
    Ok(())
}

/// Picks the cell to play from the near-tie set, honouring the occupied-cell policy.
pub fn resolve_cell<R: Rng + ?Sized>(
    board: &Board,
    near_ties: &[usize],
    policy: OccupiedCellPolicy,
    rng: &mut R,
) -> Option<usize> {
    let chosen = choose_random_index(near_ties, rng);

    if let Some(cell) = chosen.filter(|&cell| board.is_empty_at(cell)) {
        return Some(cell);
    }

    match policy {
        OccupiedCellPolicy::FallbackFirstEmpty => board.first_empty_cell(),
        OccupiedCellPolicy::ResampleNearTies => {
            let open: Vec<usize> = near_ties
                .iter()
                .copied()
                .filter(|&cell| board.is_empty_at(cell))
                .collect();
            choose_random_index(&open, rng).or_else(|| board.first_empty_cell())
        }
    }
}
