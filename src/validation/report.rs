use super::StructuralError;
use crate::game::Game;
use serde::Deserialize;
use serde::Serialize;

/// all-or-nothing verdict on a game document.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Report {
    valid: bool,
    message: String,
}

impl Report {
    pub const SUCCESS: &'static str = "Validation successful";

    pub fn success() -> Self {
        Self {
            valid: true,
            message: Self::SUCCESS.to_string(),
        }
    }

    pub fn valid(&self) -> bool {
        self.valid
    }
    pub fn message(&self) -> &str {
        &self.message
    }
}

impl From<&StructuralError> for Report {
    fn from(error: &StructuralError) -> Self {
        Self {
            valid: false,
            message: error.to_string(),
        }
    }
}

impl From<&Result<Game, StructuralError>> for Report {
    fn from(parsed: &Result<Game, StructuralError>) -> Self {
        match parsed {
            Err(error) => Self::from(error),
            Ok(_) => Self::success(),
        }
    }
}
