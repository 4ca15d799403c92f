use crate::core::{AllocationError, SplitStrategy};
use crate::models::domain::UserId;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use validator::Validate;

/// Request to create an expense
///
/// ```json
/// {
///   "user_id": 1,
///   "amount": 400,
///   "currency": "INR",
///   "description": "Dinner",
///   "participants": [1, 2],
///   "split_type": "unequal",
///   "owed_shares": [135, 265]
/// }
/// ```
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct ExpenseIntent {
    /// The participant who paid the whole bill
    pub user_id: UserId,
    pub amount: Decimal,
    #[serde(default = "default_currency")]
    pub currency: String,
    pub description: String,
    #[validate(length(min = 1))]
    pub participants: Vec<UserId>,
    /// Kept as text so unknown strategies surface as a split error rather
    /// than a payload error
    #[serde(default = "default_split_type")]
    pub split_type: String,
    /// Owed amount per participant, in participant order
    #[serde(default)]
    pub owed_shares: Option<Vec<Decimal>>,
}

impl ExpenseIntent {
    pub fn strategy(&self) -> Result<SplitStrategy, AllocationError> {
        self.split_type.parse()
    }
}

fn default_currency() -> String {
    "INR".to_string()
}

fn default_split_type() -> String {
    SplitStrategy::Equal.as_str().to_string()
}

/// Request to create a group; forwarded as-is
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GroupIntent {
    pub name: String,
    #[serde(default = "default_group_type")]
    pub group_type: String,
    #[serde(default)]
    pub simplify_by_default: bool,
    #[serde(default)]
    pub users: Vec<UserId>,
}

fn default_group_type() -> String {
    "other".to_string()
}

/// Request to add a friend by email; Splitwise checks the address
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FriendIntent {
    pub user_email: String,
    #[serde(default)]
    pub first_name: Option<String>,
    #[serde(default)]
    pub last_name: Option<String>,
}

/// Query filter for listing expenses
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ExpenseFilter {
    /// Counterparty to list shared expenses with
    pub user_id: Option<UserId>,
    pub group_id: Option<i64>,
}
