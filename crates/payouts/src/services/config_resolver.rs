use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::error::{PayoutError, Result};
use crate::models::FinancialConfiguration;

use super::round_currency;

/// Per-round monetary values frozen at round start
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RoundFinancials {
    pub skin_value_per_hole: Decimal,
    pub cth_payout: Decimal,
    pub total_pot: Decimal,
}

/// Derives the effective skin value, CTH payout and total pot for a round.
///
/// Pure function; the caller persists the result onto the round so that
/// later configuration edits never retroactively alter an in-progress round.
pub fn resolve_round_financials(
    config: &FinancialConfiguration,
    num_players: u32,
) -> Result<RoundFinancials> {
    if !config.is_validated {
        return Err(PayoutError::Configuration(format!(
            "Configuration {} has not been validated",
            config.configuration_id
        )));
    }

    let total_pot = round_currency(config.buy_in_amount * Decimal::from(num_players));

    let skin_value_per_hole = round_currency(
        config
            .skin_value_formula
            .evaluate(config.buy_in_amount, num_players),
    );
    if skin_value_per_hole <= Decimal::ZERO {
        return Err(PayoutError::Configuration(format!(
            "Skin value formula yields non-positive amount {skin_value_per_hole} for {num_players} players"
        )));
    }

    let cth_payout = round_currency(
        config
            .cth_payout_formula
            .evaluate(config.buy_in_amount, num_players),
    );
    if cth_payout <= Decimal::ZERO {
        return Err(PayoutError::Configuration(format!(
            "CTH payout formula yields non-positive amount {cth_payout} for {num_players} players"
        )));
    }

    Ok(RoundFinancials {
        skin_value_per_hole,
        cth_payout,
        total_pot,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::PayoutFormula;
    use uuid::Uuid;

    fn dec(s: &str) -> Decimal {
        s.parse().unwrap()
    }

    fn config(skin: PayoutFormula, cth: PayoutFormula) -> FinancialConfiguration {
        FinancialConfiguration {
            configuration_id: Uuid::new_v4(),
            group_id: Uuid::new_v4(),
            buy_in_amount: dec("20"),
            skin_value_formula: skin,
            cth_payout_formula: cth,
            is_validated: true,
            notes: None,
            created_at: chrono::NaiveDateTime::default(),
        }
    }

    #[test]
    fn test_resolves_fixed_formulas() {
        let config = config(
            PayoutFormula::Fixed { amount: dec("5") },
            PayoutFormula::Fixed { amount: dec("20") },
        );
        let financials = resolve_round_financials(&config, 8).unwrap();
        assert_eq!(financials.skin_value_per_hole, dec("5.00"));
        assert_eq!(financials.cth_payout, dec("20.00"));
        assert_eq!(financials.total_pot, dec("160.00"));
    }

    #[test]
    fn test_rounds_half_up_to_currency_precision() {
        // 2% of a 115 pot = 2.30, per player 0.333 * 7 = 2.331 -> 2.33
        let config = FinancialConfiguration {
            buy_in_amount: dec("16.43"),
            ..config(
                PayoutFormula::PercentOfPot { percent: dec("2") },
                PayoutFormula::PerPlayer { amount: dec("0.333") },
            )
        };
        let financials = resolve_round_financials(&config, 7).unwrap();
        // pot = 16.43 * 7 = 115.01, 2% = 2.3002 -> 2.30
        assert_eq!(financials.total_pot, dec("115.01"));
        assert_eq!(financials.skin_value_per_hole, dec("2.30"));
        assert_eq!(financials.cth_payout, dec("2.33"));
    }

    #[test]
    fn test_rejects_unvalidated_configuration() {
        let config = FinancialConfiguration {
            is_validated: false,
            ..config(
                PayoutFormula::Fixed { amount: dec("5") },
                PayoutFormula::Fixed { amount: dec("20") },
            )
        };
        let err = resolve_round_financials(&config, 8).unwrap_err();
        assert!(matches!(err, PayoutError::Configuration(_)));
    }

    #[test]
    fn test_rejects_non_positive_resolved_amount() {
        let config = config(
            PayoutFormula::Fixed { amount: dec("0") },
            PayoutFormula::Fixed { amount: dec("20") },
        );
        assert!(resolve_round_financials(&config, 8).is_err());
    }

    #[test]
    fn test_minimum_player_count_does_not_crash() {
        let config = config(
            PayoutFormula::PerPlayer { amount: dec("0.50") },
            PayoutFormula::PercentOfPot { percent: dec("10") },
        );
        let financials = resolve_round_financials(&config, 6).unwrap();
        assert_eq!(financials.skin_value_per_hole, dec("3.00"));
        assert_eq!(financials.cth_payout, dec("12.00"));
    }
}
