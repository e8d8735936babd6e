use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// A team of golfers within a round
///
/// Member order is preserved from team creation; the engine treats the order
/// of the team slice it is handed as round-team creation order.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Team {
    pub team_id: Uuid,
    pub round_id: Uuid,
    pub golfer_ids: Vec<Uuid>,
    pub is_overall_winner: bool,
}

impl Team {
    pub fn new(round_id: Uuid, golfer_ids: Vec<Uuid>) -> Self {
        Self {
            team_id: Uuid::new_v4(),
            round_id,
            golfer_ids,
            is_overall_winner: false,
        }
    }

    pub fn has_golfer(&self, golfer_id: Uuid) -> bool {
        self.golfer_ids.contains(&golfer_id)
    }
}
