//! Rupiah formatting and parsing.
//!
//! CRITICAL: Never use floating-point for money calculations.
//! All amounts in the system are `rust_decimal::Decimal`; this module only
//! renders them for display and parses grouped form input back. RKAS amounts
//! are whole rupiah, so formatting rounds to zero decimal places.

use rust_decimal::Decimal;
use thiserror::Error;

/// Error returned when an amount string cannot be parsed.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("Invalid amount: {0}")]
pub struct ParseAmountError(pub String);

/// Formats an amount as Indonesian rupiah with dot thousand separators.
///
/// `11_000_000` becomes `"Rp 11.000.000"`. Fractional parts are rounded away
/// (IDR carries no minor unit in budgeting practice).
#[must_use]
pub fn format_rupiah(amount: Decimal) -> String {
    let rounded = amount.round_dp(0).normalize();
    let digits = rounded.abs().to_string();

    let mut grouped = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, ch) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            grouped.push('.');
        }
        grouped.push(ch);
    }

    if rounded.is_sign_negative() && !rounded.is_zero() {
        format!("-Rp {grouped}")
    } else {
        format!("Rp {grouped}")
    }
}

/// Parses a rupiah amount from form input.
///
/// Accepts an optional sign, an optional `Rp` prefix, dot thousand
/// separators, and a comma decimal separator: `"Rp 11.000.000"`,
/// `"11000000"`, and `"-2.500,75"` all parse.
pub fn parse_rupiah(input: &str) -> Result<Decimal, ParseAmountError> {
    let trimmed = input.trim();
    let (negative, rest) = match trimmed.strip_prefix('-') {
        Some(rest) => (true, rest),
        None => (false, trimmed),
    };
    let rest = rest
        .trim_start()
        .strip_prefix("Rp")
        .unwrap_or(rest)
        .trim_start();

    let cleaned: String = rest
        .chars()
        .filter(|c| *c != '.' && !c.is_whitespace())
        .map(|c| if c == ',' { '.' } else { c })
        .collect();

    if cleaned.is_empty() {
        return Err(ParseAmountError(input.to_string()));
    }

    let amount: Decimal = cleaned
        .parse()
        .map_err(|_| ParseAmountError(input.to_string()))?;

    Ok(if negative { -amount } else { amount })
}
