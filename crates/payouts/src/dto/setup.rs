use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use uuid::Uuid;
use validator::{Validate, ValidationError};

use crate::models::PayoutFormula;

/// Request payload for creating a group financial configuration
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct CreateFinancialConfigurationRequest {
    pub group_id: Uuid,

    #[validate(custom(function = "validate_positive_amount"))]
    pub buy_in_amount: Decimal,

    #[validate(custom(function = "validate_formula"))]
    pub skin_value_formula: PayoutFormula,

    #[validate(custom(function = "validate_formula"))]
    pub cth_payout_formula: PayoutFormula,

    #[validate(length(max = 500))]
    pub notes: Option<String>,
}

/// Request payload for setting up a new round
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct CreateRoundRequest {
    pub course_id: Uuid,

    pub financial_configuration_id: Uuid,

    #[validate(range(min = 6, max = 40, message = "A round needs between 6 and 40 players"))]
    pub num_players: u32,
}

fn validate_positive_amount(amount: &Decimal) -> Result<(), ValidationError> {
    if *amount > Decimal::ZERO {
        Ok(())
    } else {
        Err(ValidationError::new("amount_not_positive"))
    }
}

fn validate_formula(formula: &PayoutFormula) -> Result<(), ValidationError> {
    match formula {
        PayoutFormula::Fixed { amount } | PayoutFormula::PerPlayer { amount } => {
            validate_positive_amount(amount)
        }
        PayoutFormula::PercentOfPot { percent } => {
            if *percent > Decimal::ZERO && *percent <= Decimal::from(100) {
                Ok(())
            } else {
                Err(ValidationError::new("percent_out_of_range"))
            }
        }
    }
}
