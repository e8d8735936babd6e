use rust_decimal::Decimal;

use crate::dto::{
    ContestOutcome, CthPayoutDetail, FinalizeRoundRequest, OverallPayoutDetail, SkinsOutcome,
};
use crate::error::{PayoutError, Result};
use crate::models::{ScoreCard, Team};

use super::round_currency;

/// Applies the closest-to-the-hole and overall-winner payouts.
///
/// CTH goes entirely to the named golfer. The overall winner takes whatever
/// the pot has left after skins, CTH and any retained rollover; an explicit
/// override beats the automatic lowest-total selection.
pub fn calculate_contest_payouts(
    request: &FinalizeRoundRequest,
    teams: &[Team],
    scores: &ScoreCard,
    cth_payout: Decimal,
    total_pot: Decimal,
    skins: &SkinsOutcome,
) -> Result<ContestOutcome> {
    let cth_team = teams
        .iter()
        .find(|team| team.has_golfer(request.cth_winner_golfer_id))
        .ok_or_else(|| {
            PayoutError::InvalidWinner(format!(
                "Golfer {} is not a participant of this round",
                request.cth_winner_golfer_id
            ))
        })?;

    let overall_team = match request.overall_winner_team_id {
        Some(team_id) => teams
            .iter()
            .find(|team| team.team_id == team_id)
            .ok_or_else(|| {
                PayoutError::InvalidWinner(format!(
                    "Team {team_id} does not belong to this round"
                ))
            })?,
        None => lowest_total_team(teams, scores)?,
    };

    let overall_amount =
        total_pot - skins.total_paid - cth_payout - skins.final_rollover_amount;
    if overall_amount < Decimal::ZERO {
        tracing::warn!(
            %overall_amount,
            "skins and CTH payouts exceed the pot; overall winner owes the difference"
        );
    }

    let members = Decimal::from(overall_team.golfer_ids.len().max(1));
    let share_per_golfer = round_currency(overall_amount / members);

    Ok(ContestOutcome {
        cth: CthPayoutDetail {
            golfer_id: request.cth_winner_golfer_id,
            team_id: cth_team.team_id,
            amount: cth_payout,
        },
        overall: OverallPayoutDetail {
            team_id: overall_team.team_id,
            amount: overall_amount,
            share_per_golfer,
        },
    })
}

/// Team with the lowest summed strokes across all 18 holes.
///
/// Ties keep the earliest team in round-team creation order, which is the
/// order of the slice.
fn lowest_total_team<'a>(teams: &'a [Team], scores: &ScoreCard) -> Result<&'a Team> {
    let mut best: Option<(&Team, u32)> = None;
    for team in teams {
        let total = scores.team_total(team.team_id).ok_or_else(|| {
            PayoutError::IncompleteScores {
                team_id: team.team_id,
                hole: scores.first_missing_hole(team.team_id).unwrap_or(1),
            }
        })?;
        match best {
            Some((_, lowest)) if total >= lowest => {}
            _ => best = Some((team, total)),
        }
    }
    best.map(|(team, _)| team).ok_or_else(|| {
        PayoutError::InvalidWinner("Round has no teams to pick a winner from".to_string())
    })
}
