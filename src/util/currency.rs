//! en-US currency formatting for product prices.
//!
//! Negative zero keeps its sign (`-$0.00`), matching the browser's
//! `Intl.NumberFormat` for `en-US`/`USD`.

#[cfg(test)]
#[path = "currency_test.rs"]
mod currency_test;

use num_format::Locale;

const LOCALE: Locale = Locale::en;

/// Format `price` as US dollars with grouped thousands and two decimals,
/// e.g. `1234.5` → `$1,234.50`, `-3.2` → `-$3.20`.
pub fn format_usd(price: f64) -> String {
    if price.is_nan() {
        return "$NaN".to_owned();
    }
    let sign = if price.is_sign_negative() { LOCALE.minus_sign() } else { "" };
    if price.is_infinite() {
        return format!("{sign}${}", LOCALE.infinity());
    }

    // Values this large have no fractional cents left to round.
    let scaled = price.abs() * 100.0;
    let rounded = if scaled.is_finite() { scaled.round() / 100.0 } else { price.abs() };
    let fixed = format!("{rounded:.2}");
    let (whole, cents) = fixed.split_once('.').unwrap_or((fixed.as_str(), "00"));
    format!("{sign}${}{}{cents}", group_thousands(whole), LOCALE.decimal())
}

fn group_thousands(digits: &str) -> String {
    let separator = LOCALE.separator();
    let mut out = String::with_capacity(digits.len() + digits.len() / 3 * separator.len());
    for (i, ch) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            out.push_str(separator);
        }
        out.push(ch);
    }
    out
}
