use thiserror::Error;
use uuid::Uuid;

use crate::models::RoundStatus;

pub type Result<T> = std::result::Result<T, PayoutError>;

/// Deterministic input-validation failures, raised before any monetary
/// computation begins. None clears up on retry; the caller must correct the
/// input and re-invoke.
#[derive(Debug, Error)]
pub enum PayoutError {
    #[error("Configuration error: {0}")]
    Configuration(String),

    #[error("Incomplete scores: team {team_id} has no score for hole {hole}")]
    IncompleteScores { team_id: Uuid, hole: u8 },

    #[error("Invalid winner: {0}")]
    InvalidWinner(String),

    #[error("Invalid round transition: {from:?} -> {to:?}")]
    InvalidTransition { from: RoundStatus, to: RoundStatus },
}
