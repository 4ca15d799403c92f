use crate::core::money::{round_minor, MINOR_UNIT_SCALE, ROUNDING};
use crate::models::{Allocation, ParticipantShare, UserId};
use rust_decimal::Decimal;
use std::fmt;
use std::str::FromStr;
use thiserror::Error;

/// Errors detected while splitting an expense, before any downstream call
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum AllocationError {
    #[error("Invalid split_type. Use 'equal', 'shares', or 'unequal'.")]
    InvalidStrategy(String),

    #[error("owed_shares must be provided and match participants length for 'shares' or 'unequal' split_type.")]
    MissingOwedShares {
        expected: usize,
        actual: Option<usize>,
    },

    #[error("participants must contain at least one user")]
    EmptyParticipants,

    #[error("amount must be greater than zero, got {0}")]
    NonPositiveTotal(Decimal),
}

/// How the total of an expense is divided among participants
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SplitStrategy {
    /// Everyone except the payer owes the same rounded amount
    Equal,
    /// Owed amounts supplied by the caller, one per participant
    Shares,
    /// Same ledger as `Shares`; kept distinct because callers send both
    Unequal,
}

impl SplitStrategy {
    pub fn as_str(&self) -> &'static str {
        match self {
            SplitStrategy::Equal => "equal",
            SplitStrategy::Shares => "shares",
            SplitStrategy::Unequal => "unequal",
        }
    }

    fn requires_owed_shares(&self) -> bool {
        !matches!(self, SplitStrategy::Equal)
    }
}

impl FromStr for SplitStrategy {
    type Err = AllocationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "equal" => Ok(SplitStrategy::Equal),
            "shares" => Ok(SplitStrategy::Shares),
            "unequal" => Ok(SplitStrategy::Unequal),
            other => Err(AllocationError::InvalidStrategy(other.to_string())),
        }
    }
}

impl fmt::Display for SplitStrategy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Split `total` across `participants`, with `payer` covering the whole bill.
///
/// The payer's paid amount is the full total and every other participant
/// pays nothing. Owed amounts depend on the strategy:
///
/// - `Equal`: each non-payer owes `total / n` rounded to two places with
///   banker's rounding; the payer owes nothing. The remainder is not
///   redistributed, so owed amounts may miss the total by up to a cent per
///   participant.
/// - `Shares` / `Unequal`: owed amounts are `owed_shares` taken index by
///   index, rounded to two places. They are not reconciled against the total
///   and the payer's own entry is kept as given.
///
/// The payer is not required to appear in `participants`.
pub fn allocate(
    total: Decimal,
    participants: &[UserId],
    payer: UserId,
    strategy: SplitStrategy,
    owed_shares: Option<&[Decimal]>,
) -> Result<Allocation, AllocationError> {
    if participants.is_empty() {
        return Err(AllocationError::EmptyParticipants);
    }
    if total <= Decimal::ZERO {
        return Err(AllocationError::NonPositiveTotal(total));
    }

    let paid_total = round_minor(total);
    let paid_by = |uid: UserId| if uid == payer { paid_total } else { round_minor(Decimal::ZERO) };

    let shares = if strategy.requires_owed_shares() {
        let owed = match owed_shares {
            Some(owed) if !owed.is_empty() && owed.len() == participants.len() => owed,
            other => {
                return Err(AllocationError::MissingOwedShares {
                    expected: participants.len(),
                    actual: other.map(<[Decimal]>::len),
                })
            }
        };

        participants
            .iter()
            .zip(owed)
            .map(|(&uid, &owed)| ParticipantShare {
                participant_id: uid,
                paid: paid_by(uid),
                owed: round_minor(owed),
            })
            .collect()
    } else {
        let share = equal_share(total, participants.len());

        participants
            .iter()
            .map(|&uid| ParticipantShare {
                participant_id: uid,
                paid: paid_by(uid),
                owed: if uid == payer { round_minor(Decimal::ZERO) } else { share },
            })
            .collect()
    };

    tracing::debug!(
        "Allocated {} across {} participants ({})",
        paid_total,
        participants.len(),
        strategy
    );

    Ok(Allocation { shares })
}

/// Per-head share of an equal split, rounded to currency precision
#[inline]
pub fn equal_share(total: Decimal, participant_count: usize) -> Decimal {
    let mut share = (total / Decimal::from(participant_count))
        .round_dp_with_strategy(MINOR_UNIT_SCALE, ROUNDING);
    share.rescale(MINOR_UNIT_SCALE);
    share
}
