pub mod move_calculator;
pub mod move_error;
pub mod near_tie;
pub mod player_response;
pub mod prediction;
pub mod server_config;
pub mod strategy;
pub mod web_server;
