use serde::Serialize;

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PlayerResponse {
    #[serde(rename = "gameBoard")]
    pub game_board: String,
    pub successful: bool,
    pub message: String,
}

impl PlayerResponse {
    pub fn success(game_board: String) -> Self {
        Self {
            game_board,
            successful: true,
            message: String::new(),
        }
    }

    pub fn failure(game_board: String, message: String) -> Self {
        Self {
            game_board,
            successful: false,
            message,
        }
    }
}
