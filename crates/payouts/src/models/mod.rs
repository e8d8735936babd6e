pub mod financial_configuration;
pub mod round;
pub mod score;
pub mod team;

pub use financial_configuration::{FinancialConfiguration, PayoutFormula};
pub use round::{Round, RoundStatus};
pub use score::{HOLES_PER_ROUND, ScoreCard, ScoreEntry};
pub use team::Team;
