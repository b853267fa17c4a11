use ethnum::U256;

/// Parses a typed decimal string into the raw integer units of a coin with `decimals` places.
///
/// Returns `None` when the string is empty, is not a plain decimal, carries more fractional
/// digits than the coin supports, overflows, or is zero.
pub fn try_parse_amount(value: &str, decimals: u8) -> Option<u128> {
    let value = value.trim().replace(',', ".");
    if value.is_empty() {
        return None;
    }

    let (whole, fraction) = value.split_once('.').unwrap_or((value.as_str(), ""));
    if whole.is_empty() && fraction.is_empty() {
        return None;
    }
    if !whole.bytes().all(|b| b.is_ascii_digit()) || !fraction.bytes().all(|b| b.is_ascii_digit())
    {
        return None;
    }
    if fraction.len() > decimals as usize {
        return None;
    }

    let factor = 10u128.checked_pow(decimals.into())?;
    let whole: u128 = if whole.is_empty() { 0 } else { whole.parse().ok()? };

    // Pad the fractional part to match the precision
    let fraction: u128 = if fraction.is_empty() {
        0
    } else {
        format!("{fraction:0<width$}", width = decimals as usize)
            .parse()
            .ok()?
    };

    let raw = whole.checked_mul(factor)?.checked_add(fraction)?;

    (raw > 0).then_some(raw)
}

pub fn format_amount(amount: u128, decimals: u8) -> String {
    let factor = 10u128.pow(decimals.into());

    let integer_part = amount / factor;
    let fractional_part = amount % factor;

    if decimals == 0 {
        return integer_part.to_string();
    }

    let fractional_str = format!("{:0width$}", fractional_part, width = decimals as usize);

    // Trim trailing zeros for a cleaner display
    let trimmed_fractional = fractional_str.trim_end_matches('0');

    if trimmed_fractional.is_empty() {
        integer_part.to_string()
    } else {
        format!("{}.{}", integer_part, trimmed_fractional)
    }
}

/// Computes `value * numerator / denominator` with a 256-bit intermediate, rounding down and
/// saturating at `u128::MAX`.
pub fn mul_div(value: u128, numerator: u128, denominator: u128) -> u128 {
    let result = U256::from(value) * U256::from(numerator) / U256::from(denominator);

    if result > U256::from(u128::MAX) {
        u128::MAX
    } else {
        result.as_u128()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_whole_and_fractional_amounts() {
        assert_eq!(try_parse_amount("1", 8), Some(100_000_000));
        assert_eq!(try_parse_amount("1.5", 8), Some(150_000_000));
        assert_eq!(try_parse_amount(".25", 2), Some(25));
        assert_eq!(try_parse_amount("3.", 2), Some(300));
        assert_eq!(try_parse_amount("0,5", 1), Some(5));
    }

    #[test]
    fn rejects_unparseable_or_zero_amounts() {
        assert_eq!(try_parse_amount("", 8), None);
        assert_eq!(try_parse_amount(".", 8), None);
        assert_eq!(try_parse_amount("abc", 8), None);
        assert_eq!(try_parse_amount("1.2.3", 8), None);
        assert_eq!(try_parse_amount("-1", 8), None);
        assert_eq!(try_parse_amount("0.000", 8), None);
        assert_eq!(try_parse_amount("1e5", 8), None);
    }

    #[test]
    fn rejects_excess_precision() {
        assert_eq!(try_parse_amount("0.001", 2), None);
        assert_eq!(try_parse_amount("0.01", 2), Some(1));
    }

    #[test]
    fn rejects_overflowing_amounts() {
        let huge = "9".repeat(40);
        assert_eq!(try_parse_amount(&huge, 8), None);
    }

    #[test]
    fn formats_amounts_without_trailing_zeros() {
        assert_eq!(format_amount(150_000_000, 8), "1.5");
        assert_eq!(format_amount(100_000_000, 8), "1");
        assert_eq!(format_amount(1, 6), "0.000001");
        assert_eq!(format_amount(42, 0), "42");
    }

    #[test]
    fn mul_div_does_not_overflow_intermediate() {
        assert_eq!(mul_div(u128::MAX, 2, 4), u128::MAX / 2);
        assert_eq!(mul_div(u128::MAX, 3, 1), u128::MAX);
        assert_eq!(mul_div(1000, 10_050, 10_000), 1005);
    }
}
