use rust_decimal::{Decimal, RoundingStrategy};

pub mod config_resolver;
pub mod contests;
pub mod finalization;
pub mod payout_aggregation;
pub mod skins;

pub use config_resolver::{RoundFinancials, resolve_round_financials};
pub use contests::calculate_contest_payouts;
pub use finalization::{advance_setup, complete_round, finalize_round, start_round};
pub use payout_aggregation::aggregate_payouts;
pub use skins::evaluate_skins;

/// Rounds to currency precision (2 decimal places, half-up).
pub(crate) fn round_currency(amount: Decimal) -> Decimal {
    amount.round_dp_with_strategy(2, RoundingStrategy::MidpointAwayFromZero)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_round_currency_half_up() {
        assert_eq!(round_currency("2.345".parse().unwrap()), "2.35".parse().unwrap());
        assert_eq!(round_currency("2.344".parse().unwrap()), "2.34".parse().unwrap());
    }
}
