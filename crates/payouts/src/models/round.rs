use chrono::NaiveDateTime;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::error::{PayoutError, Result};

/// A single round played by a group at a course
///
/// `calculated_skin_value_per_hole` and `calculated_cth_payout` are frozen by
/// the configuration resolver when the round starts and never change again,
/// even if the underlying configuration is edited or superseded. The payout
/// fields stay `None` until the round is completed.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Round {
    pub round_id: Uuid,
    pub course_id: Uuid,
    pub financial_configuration_id: Uuid,
    pub num_players: u32,
    pub total_pot: Decimal,
    pub calculated_skin_value_per_hole: Option<Decimal>,
    pub calculated_cth_payout: Option<Decimal>,
    pub status: RoundStatus,
    pub cth_winner_golfer_id: Option<Uuid>,
    pub final_skin_rollover_amount: Option<Decimal>,
    pub total_paid_out: Option<Decimal>,
    pub payout_verification_message: Option<String>,
    pub created_at: NaiveDateTime,
}

/// Round lifecycle states
///
/// Transitions are one-directional and never revert:
/// `PendingSetup -> SetupComplete -> InProgress -> Completed -> Finalized`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum RoundStatus {
    PendingSetup,
    SetupComplete,
    InProgress,
    Completed,
    Finalized,
}

impl RoundStatus {
    pub fn can_transition_to(self, next: RoundStatus) -> bool {
        matches!(
            (self, next),
            (RoundStatus::PendingSetup, RoundStatus::SetupComplete)
                | (RoundStatus::SetupComplete, RoundStatus::InProgress)
                | (RoundStatus::InProgress, RoundStatus::Completed)
                | (RoundStatus::Completed, RoundStatus::Finalized)
        )
    }
}

impl Round {
    /// A freshly created round awaiting team setup. The pot and the per-hole
    /// values are frozen later, when the round starts.
    pub fn new(course_id: Uuid, financial_configuration_id: Uuid, num_players: u32) -> Self {
        Self {
            round_id: Uuid::new_v4(),
            course_id,
            financial_configuration_id,
            num_players,
            total_pot: Decimal::ZERO,
            calculated_skin_value_per_hole: None,
            calculated_cth_payout: None,
            status: RoundStatus::PendingSetup,
            cth_winner_golfer_id: None,
            final_skin_rollover_amount: None,
            total_paid_out: None,
            payout_verification_message: None,
            created_at: chrono::Utc::now().naive_utc(),
        }
    }

    /// Moves the round to `next`, or fails without touching the round.
    pub fn transition_to(&mut self, next: RoundStatus) -> Result<()> {
        if !self.status.can_transition_to(next) {
            return Err(PayoutError::InvalidTransition {
                from: self.status,
                to: next,
            });
        }
        self.status = next;
        Ok(())
    }
}
