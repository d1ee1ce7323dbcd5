use rust_decimal::{Decimal, RoundingStrategy};

/// Currency precision used for display.
pub const CURRENCY_DECIMALS: u32 = 2;

/// Formats an amount for display, e.g. `$23.50`.
///
/// Amounts are accumulated exactly; this is the only place they get rounded.
pub fn display_amount(amount: Decimal) -> String {
    let mut rounded =
        amount.round_dp_with_strategy(CURRENCY_DECIMALS, RoundingStrategy::MidpointAwayFromZero);
    rounded.rescale(CURRENCY_DECIMALS);
    format!("${rounded}")
}
