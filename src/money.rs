use rusty_money::{Formatter, Money, Params, Position, iso};

/// Format a minor-unit amount as grouped rupiah with no fractional digits,
/// e.g. `25000` -> `"Rp 25.000"`. Amounts are whole rupiah throughout the
/// storefront; there is no cents subdivision.
pub fn format_rupiah(amount: i64) -> String {
    let money = Money::from_major(amount, iso::IDR);
    let params = Params {
        digit_separator: '.',
        symbol: Some("Rp"),
        rounding: Some(0),
        positions: &[Position::Symbol, Position::Space, Position::Amount],
        ..Params::default()
    };
    Formatter::money(&money, params)
}
