use chrono::NaiveDateTime;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Financial configuration for a golf group
///
/// Holds the buy-in and the formulas used to derive a round's per-hole skin
/// value and closest-to-the-hole payout. A round binds to exactly one
/// configuration when it starts and keeps the derived values even if the
/// group later edits or supersedes the configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FinancialConfiguration {
    pub configuration_id: Uuid,
    pub group_id: Uuid,
    pub buy_in_amount: Decimal,
    pub skin_value_formula: PayoutFormula,
    pub cth_payout_formula: PayoutFormula,
    pub is_validated: bool,
    pub notes: Option<String>,
    pub created_at: NaiveDateTime,
}

/// Closed set of payout formula shapes
///
/// The amount a formula yields depends on the round's player count, so the
/// same configuration works for a six-player outing and a full field.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum PayoutFormula {
    /// A flat amount, independent of player count.
    Fixed { amount: Decimal },
    /// A percentage of the round's total pot (buy-in times player count).
    PercentOfPot { percent: Decimal },
    /// A flat amount contributed per participating player.
    PerPlayer { amount: Decimal },
}

impl PayoutFormula {
    /// Evaluates the formula for a round with the given player count.
    ///
    /// Returns the raw amount without currency rounding; callers round at
    /// the boundary where the value is frozen onto a round.
    pub fn evaluate(&self, buy_in_amount: Decimal, num_players: u32) -> Decimal {
        let players = Decimal::from(num_players);
        match self {
            Self::Fixed { amount } => *amount,
            Self::PercentOfPot { percent } => {
                buy_in_amount * players * *percent / Decimal::from(100)
            }
            Self::PerPlayer { amount } => *amount * players,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn dec(s: &str) -> Decimal {
        s.parse().unwrap()
    }

    #[test]
    fn test_fixed_formula_ignores_player_count() {
        let formula = PayoutFormula::Fixed { amount: dec("5.00") };
        assert_eq!(formula.evaluate(dec("20"), 8), dec("5.00"));
        assert_eq!(formula.evaluate(dec("20"), 24), dec("5.00"));
    }

    #[test]
    fn test_percent_of_pot_scales_with_players() {
        let formula = PayoutFormula::PercentOfPot { percent: dec("12.5") };
        // pot = 20 * 8 = 160, 12.5% = 20
        assert_eq!(formula.evaluate(dec("20"), 8), dec("20.000"));
    }

    #[test]
    fn test_per_player_formula() {
        let formula = PayoutFormula::PerPlayer { amount: dec("0.625") };
        assert_eq!(formula.evaluate(dec("20"), 8), dec("5.000"));
    }
}
