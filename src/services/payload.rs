use crate::core::format_amount;
use crate::models::{Allocation, ExpenseFilter, ExpenseIntent, FriendIntent, GroupIntent};
use serde_json::{Map, Value};

/// Flat request body in the downstream's encoding.
///
/// Nested per-user records are spelled as indexed keys, so the second
/// participant's owed amount becomes `users__1__owed_share`.
#[derive(Debug, Clone, Default)]
pub struct FlatBody {
    fields: Map<String, Value>,
}

impl FlatBody {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn insert(&mut self, key: &str, value: impl Into<Value>) -> &mut Self {
        self.fields.insert(key.to_string(), value.into());
        self
    }

    pub fn insert_indexed(
        &mut self,
        collection: &str,
        index: usize,
        field: &str,
        value: impl Into<Value>,
    ) -> &mut Self {
        self.fields
            .insert(format!("{}__{}__{}", collection, index, field), value.into());
        self
    }

    pub fn into_map(self) -> Map<String, Value> {
        self.fields
    }
}

/// Body for `POST /create_expense`
pub fn expense_body(intent: &ExpenseIntent, allocation: &Allocation) -> Map<String, Value> {
    let mut body = FlatBody::new();
    body.insert("cost", format_amount(intent.amount))
        .insert("description", intent.description.as_str())
        .insert("currency_code", intent.currency.as_str());

    for (idx, share) in allocation.shares.iter().enumerate() {
        body.insert_indexed("users", idx, "user_id", share.participant_id)
            .insert_indexed("users", idx, "paid_share", format_amount(share.paid))
            .insert_indexed("users", idx, "owed_share", format_amount(share.owed));
    }

    body.into_map()
}

/// Body for `POST /create_group`
pub fn group_body(intent: &GroupIntent) -> Map<String, Value> {
    let mut body = FlatBody::new();
    body.insert("name", intent.name.as_str())
        .insert("group_type", intent.group_type.as_str())
        .insert("simplify_by_default", intent.simplify_by_default);

    for (idx, uid) in intent.users.iter().enumerate() {
        body.insert_indexed("users", idx, "user_id", *uid);
    }

    body.into_map()
}

/// Body for `POST /create_friend`; blank names are left out
pub fn friend_body(intent: &FriendIntent) -> Map<String, Value> {
    let mut body = FlatBody::new();
    body.insert("user_email", intent.user_email.as_str());

    if let Some(first) = intent.first_name.as_deref().filter(|s| !s.is_empty()) {
        body.insert("user_first_name", first);
    }
    if let Some(last) = intent.last_name.as_deref().filter(|s| !s.is_empty()) {
        body.insert("user_last_name", last);
    }

    body.into_map()
}

/// Query for `GET /get_expenses`.
///
/// A group filter wins over a counterparty filter; zero ids count as absent.
pub fn expense_query(filter: &ExpenseFilter) -> Vec<(&'static str, String)> {
    let present = |id: Option<i64>| id.filter(|id| *id != 0);

    if let Some(group_id) = present(filter.group_id) {
        vec![("group_id", group_id.to_string())]
    } else if let Some(user_id) = present(filter.user_id) {
        vec![("friend_id", user_id.to_string())]
    } else {
        Vec::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::{allocate, SplitStrategy};
    use rust_decimal::Decimal;
    use serde_json::json;

    fn intent(amount: i64, split_type: &str) -> ExpenseIntent {
        ExpenseIntent {
            user_id: 1,
            amount: Decimal::from(amount),
            currency: "INR".to_string(),
            description: "Dinner".to_string(),
            participants: vec![1, 2],
            split_type: split_type.to_string(),
            owed_shares: None,
        }
    }

    #[test]
    fn test_expense_body_flat_keys() {
        let intent = intent(400, "equal");
        let allocation = allocate(intent.amount, &intent.participants, 1, SplitStrategy::Equal, None).unwrap();

        let body = expense_body(&intent, &allocation);

        assert_eq!(
            Value::Object(body),
            json!({
                "cost": "400.00",
                "description": "Dinner",
                "currency_code": "INR",
                "users__0__user_id": 1,
                "users__0__paid_share": "400.00",
                "users__0__owed_share": "0.00",
                "users__1__user_id": 2,
                "users__1__paid_share": "0.00",
                "users__1__owed_share": "200.00",
            })
        );
    }

    #[test]
    fn test_group_body() {
        let intent = GroupIntent {
            name: "Trip".to_string(),
            group_type: "trip".to_string(),
            simplify_by_default: true,
            users: vec![5, 9],
        };

        assert_eq!(
            Value::Object(group_body(&intent)),
            json!({
                "name": "Trip",
                "group_type": "trip",
                "simplify_by_default": true,
                "users__0__user_id": 5,
                "users__1__user_id": 9,
            })
        );
    }

    #[test]
    fn test_friend_body_skips_blank_names() {
        let intent = FriendIntent {
            user_email: "ada@example.com".to_string(),
            first_name: Some("Ada".to_string()),
            last_name: Some(String::new()),
        };

        assert_eq!(
            Value::Object(friend_body(&intent)),
            json!({ "user_email": "ada@example.com", "user_first_name": "Ada" })
        );
    }

    #[test]
    fn test_expense_query_precedence() {
        let both = ExpenseFilter { user_id: Some(3), group_id: Some(7) };
        assert_eq!(expense_query(&both), vec![("group_id", "7".to_string())]);

        let friend = ExpenseFilter { user_id: Some(3), group_id: None };
        assert_eq!(expense_query(&friend), vec![("friend_id", "3".to_string())]);

        let zero_group = ExpenseFilter { user_id: Some(3), group_id: Some(0) };
        assert_eq!(expense_query(&zero_group), vec![("friend_id", "3".to_string())]);

        assert!(expense_query(&ExpenseFilter::default()).is_empty());
    }
}
