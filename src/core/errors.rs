use thiserror::Error;

use crate::core::models::CardId;

#[derive(Error, Debug)]
pub enum CardBoardError {
    #[error("I/O error: {0}")]
    Io(Box<std::io::Error>),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

impl From<std::io::Error> for CardBoardError {
    fn from(error: std::io::Error) -> Self {
        CardBoardError::Io(Box::new(error))
    }
}

/// Reasons an activation leaves the board untouched. The UI never shows these.
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum BoardError {
    #[error("bookmark destination is not measurable")]
    DestinationUnavailable,

    #[error("card {0} is not on the board")]
    UnknownCard(CardId),
}
