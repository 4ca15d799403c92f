use crate::core::allocate;
use crate::error::GatewayError;
use crate::models::{
    Allocation, ExpenseFilter, ExpenseIntent, FriendIntent, GatewayResponse, GroupIntent, UserId,
};
use crate::services::payload::{expense_body, expense_query, friend_body, group_body};
use crate::services::SplitwiseClient;
use validator::Validate;

/// Translates intents into Splitwise calls.
///
/// Each operation issues exactly one downstream request and wraps the
/// payload in a [`GatewayResponse`]. Downstream failures come back unchanged.
#[derive(Debug, Clone)]
pub struct Gateway {
    client: SplitwiseClient,
}

impl Gateway {
    pub fn new(client: SplitwiseClient) -> Self {
        Self { client }
    }

    /// Split the expense locally, then create it downstream
    pub async fn create_expense(&self, intent: &ExpenseIntent) -> Result<GatewayResponse, GatewayError> {
        let allocation = Self::allocate(intent)?;
        let body = expense_body(intent, &allocation);

        tracing::info!(
            "Creating expense '{}' for {} participants ({})",
            intent.description,
            allocation.len(),
            intent.split_type
        );

        let data = self.client.post("/create_expense", Some(&body)).await?;
        Ok(GatewayResponse::success(data))
    }

    /// Validate an expense intent and compute its ledger without calling out
    pub fn allocate(intent: &ExpenseIntent) -> Result<Allocation, GatewayError> {
        intent.validate()?;
        let strategy = intent.strategy()?;

        Ok(allocate(
            intent.amount,
            &intent.participants,
            intent.user_id,
            strategy,
            intent.owed_shares.as_deref(),
        )?)
    }

    pub async fn list_expenses(&self, filter: &ExpenseFilter) -> Result<GatewayResponse, GatewayError> {
        let query = expense_query(filter);
        let data = self.client.get("/get_expenses", &query).await?;
        Ok(GatewayResponse::success(data))
    }

    pub async fn get_expense(&self, expense_id: i64) -> Result<GatewayResponse, GatewayError> {
        let data = self
            .client
            .get(&format!("/get_expense/{}", expense_id), &[])
            .await?;
        Ok(GatewayResponse::success(data))
    }

    /// Returns the authenticated user's record; the id is not forwarded
    pub async fn get_balance(&self, user_id: UserId) -> Result<GatewayResponse, GatewayError> {
        tracing::debug!("Balance requested for user {}, using current user", user_id);
        let data = self.client.get("/get_current_user", &[]).await?;
        Ok(GatewayResponse::success(data))
    }

    pub async fn create_group(&self, intent: &GroupIntent) -> Result<GatewayResponse, GatewayError> {
        let body = group_body(intent);

        tracing::info!("Creating group '{}' with {} users", intent.name, intent.users.len());

        let data = self.client.post("/create_group", Some(&body)).await?;
        Ok(GatewayResponse::success(data))
    }

    pub async fn delete_group(&self, group_id: i64) -> Result<GatewayResponse, GatewayError> {
        let data = self
            .client
            .post(&format!("/delete_group/{}", group_id), None)
            .await?;
        Ok(GatewayResponse::success(data))
    }

    pub async fn list_groups(&self) -> Result<GatewayResponse, GatewayError> {
        let data = self.client.get("/get_groups", &[]).await?;
        Ok(GatewayResponse::success(data))
    }

    pub async fn get_group(&self, group_id: i64) -> Result<GatewayResponse, GatewayError> {
        let data = self
            .client
            .get(&format!("/get_group/{}", group_id), &[])
            .await?;
        Ok(GatewayResponse::success(data))
    }

    pub async fn list_friends(&self) -> Result<GatewayResponse, GatewayError> {
        let data = self.client.get("/get_friends", &[]).await?;
        Ok(GatewayResponse::success(data))
    }

    pub async fn add_friend(&self, intent: &FriendIntent) -> Result<GatewayResponse, GatewayError> {
        let body = friend_body(intent);
        let data = self.client.post("/create_friend", Some(&body)).await?;
        Ok(GatewayResponse::success(data))
    }

    pub async fn delete_friend(&self, friend_id: UserId) -> Result<GatewayResponse, GatewayError> {
        let data = self
            .client
            .post(&format!("/delete_friend/{}", friend_id), None)
            .await?;
        Ok(GatewayResponse::success(data))
    }
}
