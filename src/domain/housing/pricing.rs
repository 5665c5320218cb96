use rust_decimal::prelude::FromPrimitive;
use rust_decimal::{Decimal, RoundingStrategy};

/// Price returned by the model for one request. Never persisted.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PredictionResult {
    price: f64,
}

impl PredictionResult {
    pub fn new(price: f64) -> Self {
        Self { price }
    }

    pub fn price(&self) -> f64 {
        self.price
    }

    /// Currency string with two decimals and thousands separators
    pub fn to_currency(&self) -> String {
        format_currency(self.price)
    }
}

/// Formats an amount as dollars, e.g. `$4,850,000.00`.
///
/// Negative amounts keep the sign after the symbol (`$-1,500.50`).
/// Non-finite values cannot be represented as a `Decimal` and are printed as-is.
pub fn format_currency(value: f64) -> String {
    let Some(amount) = Decimal::from_f64(value) else {
        return format!("${}", value);
    };

    let rounded = amount.round_dp_with_strategy(2, RoundingStrategy::MidpointAwayFromZero);
    let sign = if rounded.is_sign_negative() && !rounded.is_zero() {
        "-"
    } else {
        ""
    };

    let text = format!("{:.2}", rounded.abs());
    let (whole, cents) = text.split_once('.').unwrap_or((text.as_str(), "00"));

    format!("${}{}.{}", sign, group_thousands(whole), cents)
}

/// Inserts a comma every three digits: `7000` -> `7,000`
pub fn format_thousands(value: u32) -> String {
    group_thousands(&value.to_string())
}

fn group_thousands(digits: &str) -> String {
    let len = digits.len();
    let mut out = String::with_capacity(len + len / 3);
    for (i, ch) in digits.chars().enumerate() {
        if i > 0 && (len - i) % 3 == 0 {
            out.push(',');
        }
        out.push(ch);
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;

    #[test]
    fn test_currency_formatting() {
        assert_eq!(format_currency(4_850_000.0), "$4,850,000.00");
        assert_eq!(format_currency(1234.567), "$1,234.57");
        assert_eq!(format_currency(999.0), "$999.00");
        assert_eq!(format_currency(0.0), "$0.00");
    }

    #[test]
    fn test_negative_currency() {
        assert_eq!(format_currency(-1500.5), "$-1,500.50");
        // Rounds to zero, so no sign
        assert_eq!(format_currency(-0.001), "$0.00");
    }

    #[test]
    fn test_non_finite_currency() {
        assert_eq!(format_currency(f64::NAN), "$NaN");
    }

    #[test]
    fn test_midpoint_rounds_away_from_zero() {
        let amount = dec!(2.125);
        assert_eq!(
            amount.round_dp_with_strategy(2, RoundingStrategy::MidpointAwayFromZero),
            dec!(2.13)
        );
        assert_eq!(format_currency(12.5), "$12.50");
    }

    #[test]
    fn test_thousands() {
        assert_eq!(format_thousands(7000), "7,000");
        assert_eq!(format_thousands(20000), "20,000");
        assert_eq!(format_thousands(1000000), "1,000,000");
        assert_eq!(format_thousands(999), "999");
    }

    #[test]
    fn test_prediction_result_currency() {
        let result = PredictionResult::new(5_250_000.0);
        assert_eq!(result.price(), 5_250_000.0);
        assert_eq!(result.to_currency(), "$5,250,000.00");
    }
}
