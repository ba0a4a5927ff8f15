//! Conversion of human-readable amounts into base units.
use anyhow::{anyhow, Result};
use num_bigint::BigInt;

/// Number of decimals of the native token.
pub const IOTX_DECIMAL_NUM: usize = 18;

/// Number of decimals gas prices are given in.
pub const GAS_PRICE_DECIMAL_NUM: usize = 12;

/// Parses a decimal string such as `"1.5"` into base units with the given
/// number of decimals.
///
/// Negative amounts are returned as such; rejecting them is up to the action
/// builders.
pub fn parse_amount(amount: &str, decimals: usize) -> Result<BigInt> {
    let (negative, digits) = match amount.strip_prefix('-') {
        Some(rest) => (true, rest),
        None => (false, amount),
    };
    let (int, frac) = digits.split_once('.').unwrap_or((digits, ""));

    let is_digits = |s: &str| s.bytes().all(|b| b.is_ascii_digit());
    if (int.is_empty() && frac.is_empty()) || !is_digits(int) || !is_digits(frac) {
        return Err(anyhow!("units: malformed amount {:?}", amount));
    }
    if frac.len() > decimals {
        return Err(anyhow!(
            "units: amount {:?} has more than {} decimals",
            amount,
            decimals
        ));
    }

    let scaled = format!("{}{}{}", int, frac, "0".repeat(decimals - frac.len()));
    let value: BigInt = scaled
        .parse()
        .map_err(|_| anyhow!("units: malformed amount {:?}", amount))?;

    Ok(if negative { -value } else { value })
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn test_parse_amount() {
        let cases = vec![
            ("1", 18, "1000000000000000000"),
            ("1.5", 18, "1500000000000000000"),
            ("0.000000000000000001", 18, "1"),
            (".5", 1, "5"),
            ("7.", 2, "700"),
            ("100", 0, "100"),
            ("1", 12, "1000000000000"),
            ("-2.5", 1, "-25"),
        ];
        for (input, decimals, expected) in cases {
            assert_eq!(
                parse_amount(input, decimals).unwrap(),
                expected.parse::<BigInt>().unwrap(),
                "input {}",
                input
            );
        }
    }

    #[test]
    fn test_parse_amount_malformed() {
        for input in ["", ".", "-", "1.2.3", "abc", "1e18", "+1", " 1"] {
            assert!(parse_amount(input, 18).is_err(), "input {:?}", input);
        }
        assert!(parse_amount("0.001", 2).is_err());
    }
}
