// Unit tests for the share allocator

use rust_decimal::Decimal;
use split_gateway::core::{allocate, equal_share, format_amount, AllocationError, SplitStrategy};
use split_gateway::models::ParticipantShare;
use std::str::FromStr;

fn dec(value: &str) -> Decimal {
    Decimal::from_str(value).expect("valid decimal")
}

fn decs(values: &[&str]) -> Vec<Decimal> {
    values.iter().map(|v| dec(v)).collect()
}

fn share(participant_id: i64, paid: &str, owed: &str) -> ParticipantShare {
    ParticipantShare {
        participant_id,
        paid: dec(paid),
        owed: dec(owed),
    }
}

#[test]
fn test_equal_split_example() {
    let result = allocate(dec("400"), &[1, 2], 1, SplitStrategy::Equal, None).unwrap();

    assert_eq!(result.shares, vec![share(1, "400.00", "0.00"), share(2, "0.00", "200.00")]);
}

#[test]
fn test_unequal_split_example() {
    let owed = decs(&["135", "265"]);
    let result = allocate(dec("400"), &[1, 2], 1, SplitStrategy::Unequal, Some(&owed[..])).unwrap();

    // The payer's own owed entry is kept, not forced to zero
    assert_eq!(result.shares, vec![share(1, "400.00", "135.00"), share(2, "0.00", "265.00")]);
}

#[test]
fn test_shares_split_example() {
    let owed = decs(&["50", "30", "20"]);
    let result = allocate(dec("100"), &[1, 2, 3], 1, SplitStrategy::Shares, Some(&owed[..])).unwrap();

    assert_eq!(
        result.shares,
        vec![
            share(1, "100.00", "50.00"),
            share(2, "0.00", "30.00"),
            share(3, "0.00", "20.00"),
        ]
    );
    assert_eq!(result.total_paid(), dec("100"));
    assert_eq!(result.total_owed(), dec("100"));
}

#[test]
fn test_equal_split_payer_invariants() {
    for n in 1..=12_i64 {
        let participants: Vec<i64> = (1..=n).collect();
        for total in ["0.01", "1", "10", "99.99", "100", "1234.56"] {
            let total = dec(total);
            let payer = n;
            let result = allocate(total, &participants, payer, SplitStrategy::Equal, None).unwrap();

            let payer_share = result.share_of(payer).unwrap();
            assert_eq!(payer_share.paid, total);
            assert_eq!(payer_share.owed, Decimal::ZERO);
            assert_eq!(result.total_paid(), total);

            for s in result.shares.iter().filter(|s| s.participant_id != payer) {
                assert_eq!(s.paid, Decimal::ZERO);
                assert_eq!(s.owed, equal_share(total, participants.len()));
            }
        }
    }
}

#[test]
fn test_equal_split_rounding_artifact_is_kept() {
    // 100 / 3 = 33.33 each; nothing is redistributed
    let result = allocate(dec("100"), &[1, 2, 3], 1, SplitStrategy::Equal, None).unwrap();

    assert_eq!(result.share_of(2).unwrap().owed, dec("33.33"));
    assert_eq!(result.share_of(3).unwrap().owed, dec("33.33"));
    assert_eq!(result.total_owed(), dec("66.66"));
}

#[test]
fn test_equal_share_sum_within_rounding_unit() {
    let cent = dec("0.01");
    for n in 1..=9_usize {
        for total in ["10", "10.01", "333.33", "1000", "7.77"] {
            let total = dec(total);
            let share = equal_share(total, n);
            let drift = (share * Decimal::from(n) - total).abs();
            // Each share is off by at most half a cent
            assert!(drift <= cent * Decimal::from(n) / Decimal::from(2), "n={} total={}", n, total);
        }
    }
}

#[test]
fn test_equal_share_bankers_rounding() {
    // 0.25 / 2 = 0.125 rounds to even
    assert_eq!(equal_share(dec("0.25"), 2), dec("0.12"));
    // 0.35 / 2 = 0.175 rounds to even
    assert_eq!(equal_share(dec("0.35"), 2), dec("0.18"));
}

#[test]
fn test_owed_shares_mismatch_is_not_corrected() {
    let owed = decs(&["10", "10"]);
    let result = allocate(dec("100"), &[1, 2], 1, SplitStrategy::Shares, Some(&owed[..])).unwrap();

    assert_eq!(result.total_owed(), dec("20"));
    assert_eq!(result.total_paid(), dec("100"));
}

#[test]
fn test_owed_shares_rounded_to_cents() {
    let owed = decs(&["33.333", "66.667"]);
    let result = allocate(dec("100"), &[1, 2], 1, SplitStrategy::Unequal, Some(&owed[..])).unwrap();

    assert_eq!(format_amount(result.shares[0].owed), "33.33");
    assert_eq!(format_amount(result.shares[1].owed), "66.67");
}

#[test]
fn test_missing_or_mismatched_owed_shares() {
    for strategy in [SplitStrategy::Shares, SplitStrategy::Unequal] {
        assert!(matches!(
            allocate(dec("100"), &[1, 2, 3], 1, strategy, None),
            Err(AllocationError::MissingOwedShares { expected: 3, actual: None })
        ));

        let short = decs(&["50", "50"]);
        assert!(matches!(
            allocate(dec("100"), &[1, 2, 3], 1, strategy, Some(&short[..])),
            Err(AllocationError::MissingOwedShares { expected: 3, actual: Some(2) })
        ));

        let long = decs(&["25", "25", "25", "25"]);
        assert!(matches!(
            allocate(dec("100"), &[1, 2, 3], 1, strategy, Some(&long[..])),
            Err(AllocationError::MissingOwedShares { expected: 3, actual: Some(4) })
        ));
    }
}

#[test]
fn test_unknown_strategy() {
    let err = "weights".parse::<SplitStrategy>().unwrap_err();
    assert_eq!(err, AllocationError::InvalidStrategy("weights".to_string()));
}

#[test]
fn test_order_follows_participants() {
    let owed = decs(&["1", "2", "3"]);
    let result = allocate(dec("6"), &[30, 10, 20], 10, SplitStrategy::Shares, Some(&owed[..])).unwrap();

    let ids: Vec<i64> = result.shares.iter().map(|s| s.participant_id).collect();
    assert_eq!(ids, vec![30, 10, 20]);
    assert_eq!(result.shares[1].paid, dec("6"));
}
