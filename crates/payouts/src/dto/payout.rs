use std::collections::BTreeMap;

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Outcome of one hole's skin
///
/// `winning_team_id` is `None` when the lowest score was tied and the skin
/// carried over to the next hole.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HoleResult {
    pub hole: u8,
    pub lowest_strokes: u32,
    pub winning_team_id: Option<Uuid>,
    /// Amount paid on this hole, including any carried rollover. Zero when
    /// the hole tied.
    pub amount_won: Decimal,
    /// Unclaimed skins carried into this hole from earlier ties.
    pub rollover_count_before: u32,
}

/// Full result of the skins evaluation across all 18 holes
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SkinsOutcome {
    pub hole_results: Vec<HoleResult>,
    pub team_winnings: BTreeMap<Uuid, Decimal>,
    pub total_paid: Decimal,
    /// Skin value left unclaimed when hole 18 ends in a tie. Reported, never
    /// distributed.
    pub final_rollover_amount: Decimal,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CthPayoutDetail {
    pub golfer_id: Uuid,
    pub team_id: Uuid,
    pub amount: Decimal,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct OverallPayoutDetail {
    pub team_id: Uuid,
    pub amount: Decimal,
    pub share_per_golfer: Decimal,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ContestOutcome {
    pub cth: CthPayoutDetail,
    pub overall: OverallPayoutDetail,
}

/// Per-category winnings for one golfer
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PayoutBreakdown {
    pub skins_winnings: Decimal,
    pub cth_winnings: Decimal,
    pub overall_winnings: Decimal,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PlayerPayoutSummary {
    pub golfer_id: Uuid,
    pub team_id: Uuid,
    pub breakdown: PayoutBreakdown,
    pub total_winnings: Decimal,
}

/// Aggregated, verified payout distribution for a completed round
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RoundPayoutSummary {
    pub player_payouts: Vec<PlayerPayoutSummary>,
    pub total_distributed: Decimal,
    pub final_skin_rollover_amount: Decimal,
    /// `None` when the distribution reconciles with the pot; otherwise a
    /// human-readable description of the discrepancy for manual review.
    pub verification_message: Option<String>,
}
