use alloy_primitives::U256;

/// Number of wei in one ether (10^18)
pub const WEI_PER_ETHER: U256 = U256::from_limbs([1_000_000_000_000_000_000, 0, 0, 0]);

/// Render a wei balance as an exact decimal ether string.
///
/// The division is done with integer quotient and remainder so the result is
/// exact over the full `U256` range; no floating point is involved. Trailing
/// zeros in the fraction are trimmed, but at least one fractional digit is
/// kept, so zero renders as "0.0" and one ether as "1.0".
pub fn format_ether(wei: U256) -> String {
    let whole = wei / WEI_PER_ETHER;
    let remainder = wei % WEI_PER_ETHER;

    // The remainder is strictly below 10^18, so it fits in 18 decimal digits.
    let fraction = format!("{:0>18}", remainder.to_string());
    let fraction = fraction.trim_end_matches('0');
    let fraction = if fraction.is_empty() { "0" } else { fraction };

    format!("{}.{}", whole, fraction)
}
