use std::collections::BTreeMap;

use rust_decimal::Decimal;
use uuid::Uuid;

use crate::dto::{HoleResult, SkinsOutcome};
use crate::error::{PayoutError, Result};
use crate::models::{HOLES_PER_ROUND, ScoreCard, Team};

/// Walks the 18-hole score grid and awards each hole's skin.
///
/// A hole's skin goes to the team with the sole lowest score, worth the
/// per-hole value plus any rollover carried from tied holes. A tied hole
/// pays no one and carries its value forward. Whatever is still carried
/// after hole 18 is reported as `final_rollover_amount` and distributed to
/// no one.
///
/// Pure and idempotent; the rollover accumulator lives entirely inside the
/// fold over holes.
pub fn evaluate_skins(
    teams: &[Team],
    scores: &ScoreCard,
    skin_value_per_hole: Decimal,
) -> Result<SkinsOutcome> {
    // Scoring must be finished before any money is computed.
    for team in teams {
        if let Some(hole) = scores.first_missing_hole(team.team_id) {
            return Err(PayoutError::IncompleteScores {
                team_id: team.team_id,
                hole,
            });
        }
    }

    let mut hole_results = Vec::with_capacity(HOLES_PER_ROUND as usize);
    let mut team_winnings: BTreeMap<Uuid, Decimal> = teams
        .iter()
        .map(|team| (team.team_id, Decimal::ZERO))
        .collect();
    let mut total_paid = Decimal::ZERO;
    let mut rollover: u32 = 0;

    for hole in 1..=HOLES_PER_ROUND {
        let hole_scores: Vec<(Uuid, u32)> = teams
            .iter()
            .filter_map(|team| {
                scores
                    .strokes_for(team.team_id, hole)
                    .map(|strokes| (team.team_id, strokes))
            })
            .collect();

        let Some(lowest) = hole_scores.iter().map(|(_, strokes)| *strokes).min() else {
            continue;
        };
        let mut at_lowest = hole_scores
            .iter()
            .filter(|(_, strokes)| *strokes == lowest)
            .map(|(team_id, _)| *team_id);

        let sole_winner = match (at_lowest.next(), at_lowest.next()) {
            (Some(team_id), None) => Some(team_id),
            _ => None,
        };

        let rollover_count_before = rollover;
        let amount_won = match sole_winner {
            Some(team_id) => {
                let amount = skin_value_per_hole * Decimal::from(1 + rollover);
                if let Some(winnings) = team_winnings.get_mut(&team_id) {
                    *winnings += amount;
                }
                total_paid += amount;
                rollover = 0;
                amount
            }
            None => {
                rollover += 1;
                Decimal::ZERO
            }
        };

        hole_results.push(HoleResult {
            hole,
            lowest_strokes: lowest,
            winning_team_id: sole_winner,
            amount_won,
            rollover_count_before,
        });
    }

    Ok(SkinsOutcome {
        hole_results,
        team_winnings,
        total_paid,
        final_rollover_amount: skin_value_per_hole * Decimal::from(rollover),
    })
}
