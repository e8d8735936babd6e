use crate::dto::{FinalizeRoundRequest, RoundPayoutSummary};
use crate::error::{PayoutError, Result};
use crate::models::{FinancialConfiguration, Round, RoundStatus, ScoreCard, Team};

use super::{aggregate_payouts, calculate_contest_payouts, evaluate_skins, resolve_round_financials};

/// Marks setup complete once teams and participants are assigned.
pub fn advance_setup(mut round: Round, teams: &[Team]) -> Result<Round> {
    if teams.len() < 2 {
        return Err(PayoutError::Configuration(
            "A round needs at least two teams".to_string(),
        ));
    }
    if teams.iter().any(|team| team.golfer_ids.is_empty()) {
        return Err(PayoutError::Configuration(
            "Every team needs at least one golfer".to_string(),
        ));
    }
    let assigned: usize = teams.iter().map(|team| team.golfer_ids.len()).sum();
    if assigned != round.num_players as usize {
        return Err(PayoutError::Configuration(format!(
            "{assigned} golfers assigned to teams but the round has {} players",
            round.num_players
        )));
    }

    round.transition_to(RoundStatus::SetupComplete)?;
    Ok(round)
}

/// Freezes the round's monetary values and opens it for scoring.
///
/// The resolved skin value, CTH payout and pot are bound to the round here
/// and never recomputed, so later configuration edits cannot retroactively
/// alter an in-progress round.
pub fn start_round(mut round: Round, config: &FinancialConfiguration) -> Result<Round> {
    if config.configuration_id != round.financial_configuration_id {
        return Err(PayoutError::Configuration(format!(
            "Round is bound to configuration {}, not {}",
            round.financial_configuration_id, config.configuration_id
        )));
    }

    let financials = resolve_round_financials(config, round.num_players)?;
    round.transition_to(RoundStatus::InProgress)?;
    round.total_pot = financials.total_pot;
    round.calculated_skin_value_per_hole = Some(financials.skin_value_per_hole);
    round.calculated_cth_payout = Some(financials.cth_payout);

    tracing::info!(
        round_id = %round.round_id,
        skin_value = %financials.skin_value_per_hole,
        cth_payout = %financials.cth_payout,
        total_pot = %financials.total_pot,
        "round started with frozen financials"
    );
    Ok(round)
}

/// Completes a round: evaluates skins, applies contest payouts, aggregates
/// and verifies the distribution.
///
/// Either the whole computation succeeds and the round moves to `Completed`,
/// or an error is returned and nothing is touched. The caller must serialize
/// concurrent completion attempts on the same round.
pub fn complete_round(
    mut round: Round,
    teams: &mut [Team],
    scores: &ScoreCard,
    request: &FinalizeRoundRequest,
) -> Result<(Round, RoundPayoutSummary)> {
    if !round.status.can_transition_to(RoundStatus::Completed) {
        return Err(PayoutError::InvalidTransition {
            from: round.status,
            to: RoundStatus::Completed,
        });
    }
    let skin_value = round.calculated_skin_value_per_hole.ok_or_else(|| {
        PayoutError::Configuration("Round has no frozen skin value".to_string())
    })?;
    let cth_payout = round.calculated_cth_payout.ok_or_else(|| {
        PayoutError::Configuration("Round has no frozen CTH payout".to_string())
    })?;

    let skins = evaluate_skins(teams, scores, skin_value)?;
    let contests =
        calculate_contest_payouts(request, teams, scores, cth_payout, round.total_pot, &skins)?;
    let summary = aggregate_payouts(round.total_pot, teams, &skins, &contests);

    for team in teams.iter_mut() {
        team.is_overall_winner = team.team_id == contests.overall.team_id;
    }
    round.cth_winner_golfer_id = Some(request.cth_winner_golfer_id);
    round.final_skin_rollover_amount = Some(summary.final_skin_rollover_amount);
    round.total_paid_out = Some(summary.total_distributed);
    round.payout_verification_message = summary.verification_message.clone();
    round.transition_to(RoundStatus::Completed)?;

    tracing::info!(
        round_id = %round.round_id,
        total_distributed = %summary.total_distributed,
        rollover = %summary.final_skin_rollover_amount,
        verified = summary.verification_message.is_none(),
        "round completed"
    );
    Ok((round, summary))
}

/// Manual confirmation step; locks the round from further edits.
pub fn finalize_round(mut round: Round) -> Result<Round> {
    round.transition_to(RoundStatus::Finalized)?;
    Ok(round)
}
