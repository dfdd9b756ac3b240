//! Price formatting.
//!
//! Prices are whole rupiah amounts. Display follows the `id-ID` locale with
//! no fractional digits: `Rp 1.250.000` (non-breaking space after the symbol).

/// Currency symbol for Indonesian rupiah.
pub const IDR_SYMBOL: &str = "Rp";

/// Formats an amount as IDR with thousands separators and no decimals.
///
/// Fractions are rounded half away from zero.
#[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
pub fn format_idr(amount: f64) -> String {
    let whole = amount.abs().round() as u64;
    let digits = whole.to_string();

    let mut grouped = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, ch) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            grouped.push('.');
        }
        grouped.push(ch);
    }

    let sign = if amount < 0.0 && whole > 0 { "-" } else { "" };
    format!("{sign}{IDR_SYMBOL}\u{a0}{grouped}")
}
