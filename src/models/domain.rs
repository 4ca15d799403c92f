use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// Identifier of a user in the downstream ledger
pub type UserId = i64;

/// One participant's line in an expense ledger entry
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ParticipantShare {
    pub participant_id: UserId,
    /// Amount this participant paid upfront
    pub paid: Decimal,
    /// Amount this participant is responsible for
    pub owed: Decimal,
}

/// Result of splitting one expense across its participants
///
/// Shares are kept in the order the participants were supplied.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Allocation {
    pub shares: Vec<ParticipantShare>,
}

impl Allocation {
    /// Sum of every participant's paid amount
    pub fn total_paid(&self) -> Decimal {
        self.shares.iter().map(|s| s.paid).sum()
    }

    /// Sum of every participant's owed amount
    pub fn total_owed(&self) -> Decimal {
        self.shares.iter().map(|s| s.owed).sum()
    }

    /// Look up the share of a single participant
    pub fn share_of(&self, participant_id: UserId) -> Option<&ParticipantShare> {
        self.shares.iter().find(|s| s.participant_id == participant_id)
    }

    pub fn len(&self) -> usize {
        self.shares.len()
    }

    pub fn is_empty(&self) -> bool {
        self.shares.is_empty()
    }
}
