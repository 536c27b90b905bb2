use std::fmt;
use std::str::FromStr;

use thiserror::Error;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum Strategy {
    /// Play the first empty cell.
    #[default]
    Default,
    /// Ask the prediction service and play one of its top-rated cells.
    NeuralNetwork,
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("Unknown strategy '{0}', expected 'default' or 'neuralNetwork'")]
pub struct StrategyError(pub String);

impl Strategy {
    /// Missing or blank names select the default strategy.
    pub fn from_param(param: Option<&str>) -> Result<Self, StrategyError> {
        match param.map(str::trim) {
            None | Some("") => Ok(Strategy::Default),
            Some(name) => name.parse(),
        }
    }
}

impl FromStr for Strategy {
    type Err = StrategyError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        if s.eq_ignore_ascii_case("default") {
            Ok(Strategy::Default)
        } else if s.eq_ignore_ascii_case("neuralNetwork") {
            Ok(Strategy::NeuralNetwork)
        } else {
            Err(StrategyError(s.to_string()))
        }
    }
}

impl fmt::Display for Strategy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Strategy::Default => write!(f, "default"),
            Strategy::NeuralNetwork => write!(f, "neuralNetwork"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_is_case_insensitive() {
        assert_eq!("DEFAULT".parse(), Ok(Strategy::Default));
        assert_eq!("neuralnetwork".parse(), Ok(Strategy::NeuralNetwork));
        assert_eq!("NeuralNetwork".parse(), Ok(Strategy::NeuralNetwork));
    }

    #[test]
    fn test_missing_param_selects_default() {
        assert_eq!(Strategy::from_param(None), Ok(Strategy::Default));
        assert_eq!(Strategy::from_param(Some("  ")), Ok(Strategy::Default));
    }

    #[test]
    fn test_unknown_strategy_is_rejected() {
        assert_eq!(
            Strategy::from_param(Some("playRandomCell")),
            Err(StrategyError("playRandomCell".to_string()))
        );
    }
}
