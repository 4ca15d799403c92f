use rust_decimal::{Decimal, RoundingStrategy};

/// Number of decimal places the downstream ledger accepts
pub const MINOR_UNIT_SCALE: u32 = 2;

/// Rounding applied to every amount before it leaves the gateway.
///
/// Midpoints go to the even neighbour (banker's rounding), so an exact
/// `0.125` becomes `0.12` and `0.135` becomes `0.14`.
pub const ROUNDING: RoundingStrategy = RoundingStrategy::MidpointNearestEven;

/// Round an amount to currency precision, keeping a fixed scale of two
#[inline]
pub fn round_minor(amount: Decimal) -> Decimal {
    let mut rounded = amount.round_dp_with_strategy(MINOR_UNIT_SCALE, ROUNDING);
    rounded.rescale(MINOR_UNIT_SCALE);
    rounded
}

/// Format an amount as a fixed two-decimal string, e.g. `400` -> `"400.00"`
pub fn format_amount(amount: Decimal) -> String {
    round_minor(amount).to_string()
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::str::FromStr;

    fn dec(value: &str) -> Decimal {
        Decimal::from_str(value).expect("valid decimal")
    }

    #[test]
    fn test_format_pads_integers() {
        assert_eq!(format_amount(dec("400")), "400.00");
        assert_eq!(format_amount(dec("12.5")), "12.50");
        assert_eq!(format_amount(Decimal::ZERO), "0.00");
    }

    #[test]
    fn test_round_uses_bankers_rounding() {
        assert_eq!(format_amount(dec("0.125")), "0.12");
        assert_eq!(format_amount(dec("0.135")), "0.14");
        assert_eq!(format_amount(dec("33.3333333")), "33.33");
        assert_eq!(format_amount(dec("66.666666")), "66.67");
    }

    #[test]
    fn test_round_keeps_fixed_scale() {
        assert_eq!(round_minor(dec("7")).scale(), MINOR_UNIT_SCALE);
        assert_eq!(round_minor(dec("7.129")).scale(), MINOR_UNIT_SCALE);
    }
}
