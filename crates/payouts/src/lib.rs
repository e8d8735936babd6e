pub mod dto;
pub mod error;
pub mod models;
pub mod services;

pub use error::{PayoutError, Result};
pub use models::{
    FinancialConfiguration, HOLES_PER_ROUND, PayoutFormula, Round, RoundStatus, ScoreCard,
    ScoreEntry, Team,
};
pub use services::{
    RoundFinancials, advance_setup, aggregate_payouts, calculate_contest_payouts, complete_round,
    evaluate_skins, finalize_round, resolve_round_financials, start_round,
};
