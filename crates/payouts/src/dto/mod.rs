pub mod finalize;
pub mod payout;
pub mod setup;

pub use finalize::FinalizeRoundRequest;
pub use payout::{
    ContestOutcome, CthPayoutDetail, HoleResult, OverallPayoutDetail, PayoutBreakdown,
    PlayerPayoutSummary, RoundPayoutSummary, SkinsOutcome,
};
pub use setup::{CreateFinancialConfigurationRequest, CreateRoundRequest};
