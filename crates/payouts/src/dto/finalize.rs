use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Contest winner selections supplied when completing a round
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FinalizeRoundRequest {
    /// Golfer who won the closest-to-the-hole contest.
    pub cth_winner_golfer_id: Uuid,
    /// Explicit overall-winner override. When absent the team with the
    /// lowest 18-hole total wins.
    pub overall_winner_team_id: Option<Uuid>,
}
