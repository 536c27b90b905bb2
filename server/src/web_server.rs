use std::sync::Arc;

use axum::{
    Json, Router,
    extract::{Query, State},
    routing::get,
};
use common::{Board, error, log, warn};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use serde::Deserialize;
use tower_http::cors::{Any, CorsLayer};

use crate::move_calculator::MoveCalculator;
use crate::player_response::PlayerResponse;
use crate::prediction::PredictionService;
use crate::strategy::Strategy;

pub struct WebServerState<P: PredictionService> {
    pub calculator: Arc<MoveCalculator<P>>,
}

impl<P: PredictionService> Clone for WebServerState<P> {
    fn clone(&self) -> Self {
        Self {
            calculator: Arc::clone(&self.calculator),
        }
    }
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PlayerQuery {
    pub game_board: String,
    pub strategy: Option<String>,
}

pub fn build_router<P: PredictionService>(calculator: MoveCalculator<P>) -> Router {
    let state = WebServerState {
        calculator: Arc::new(calculator),
    };

    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    Router::new()
        .route("/player", get(calculate_move_handler::<P>))
        .layer(cors)
        .with_state(state)
}

pub async fn run_web_server<P: PredictionService>(
    calculator: MoveCalculator<P>,
    bind_address: &str,
) -> std::io::Result<()> {
    let app = build_router(calculator);

    let listener = tokio::net::TcpListener::bind(bind_address).await?;
    log!("Tic-tac-toe player listening on {}", listener.local_addr()?);

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await
}

async fn shutdown_signal() {
    match tokio::signal::ctrl_c().await {
        Ok(()) => log!("Shutdown signal received"),
        Err(e) => error!("Failed to listen for Ctrl+C: {}", e),
    }
}

async fn calculate_move_handler<P: PredictionService>(
    State(state): State<WebServerState<P>>,
    Query(query): Query<PlayerQuery>,
) -> Json<PlayerResponse> {
    let game_board = query.game_board.trim().to_string();
    log!("gameBoard in:  {}", game_board);

    let response = calculate_move(&state.calculator, game_board, query.strategy.as_deref()).await;

    if response.successful {
        log!("gameBoard out: {}", response.game_board);
    } else {
        warn!("{}", response.message);
    }
    Json(response)
}

/// Every failure becomes a `successful = false` response echoing the input board.
async fn calculate_move<P: PredictionService>(
    calculator: &MoveCalculator<P>,
    game_board: String,
    strategy: Option<&str>,
) -> PlayerResponse {
    let board = match Board::parse(&game_board) {
        Ok(board) => board,
        Err(e) => return PlayerResponse::failure(game_board, e.to_string()),
    };

    let strategy = match Strategy::from_param(strategy) {
        Ok(strategy) => strategy,
        Err(e) => return PlayerResponse::failure(game_board, e.to_string()),
    };
    log!("strategy: {}", strategy);

    let mut rng = StdRng::seed_from_u64(rand::rng().random());
    match calculator.calculate_move(board, strategy, &mut rng).await {
        Ok(board) => PlayerResponse::success(board.to_string()),
        Err(e) => PlayerResponse::failure(game_board, e.to_string()),
    }
}
