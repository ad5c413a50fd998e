//! Common types for the shared crate

use serde::{Deserialize, Serialize};

/// Monetary amount (INR)
pub type Money = rust_decimal::Decimal;

/// Listing category a booking belongs to
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum BookingType {
    Dining,
    Play,
    Event,
}

impl BookingType {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Dining => "dining",
            Self::Play => "play",
            Self::Event => "event",
        }
    }
}

impl std::fmt::Display for BookingType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Format an amount with Indian digit grouping, e.g. `₹1,250`, `₹12,34,567` or `₹99.50`
pub fn format_inr(amount: Money) -> String {
    let rounded = amount.round_dp(2).normalize();
    let text = rounded.abs().to_string();
    let (whole, frac) = match text.split_once('.') {
        Some((w, f)) => (w.to_string(), Some(f.to_string())),
        None => (text, None),
    };

    // Last three digits, then groups of two: 12,34,567
    let grouped = if whole.len() <= 3 {
        whole
    } else {
        let (head, tail) = whole.split_at(whole.len() - 3);
        let mut out = String::new();
        for (i, ch) in head.chars().enumerate() {
            if i > 0 && (head.len() - i) % 2 == 0 {
                out.push(',');
            }
            out.push(ch);
        }
        format!("{out},{tail}")
    };

    let sign = if rounded.is_sign_negative() && !rounded.is_zero() {
        "-"
    } else {
        ""
    };
    match frac {
        Some(f) => format!("{sign}₹{grouped}.{f:0<2}"),
        None => format!("{sign}₹{grouped}"),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_booking_type_serde() {
        assert_eq!(serde_json::to_string(&BookingType::Play).unwrap(), "\"play\"");
        let t: BookingType = serde_json::from_str("\"dining\"").unwrap();
        assert_eq!(t, BookingType::Dining);
    }

    #[test]
    fn test_format_inr() {
        assert_eq!(format_inr(Money::from(0)), "₹0");
        assert_eq!(format_inr(Money::from(250)), "₹250");
        assert_eq!(format_inr(Money::from(1250)), "₹1,250");
        assert_eq!(format_inr(Money::from(1_234_567)), "₹12,34,567");
        assert_eq!(format_inr(Money::from(100_000)), "₹1,00,000");
        assert_eq!(format_inr(Money::new(123_456_789, 2)), "₹12,34,567.89");
        assert_eq!(format_inr(Money::new(9950, 2)), "₹99.50");
        assert_eq!(format_inr(Money::from(-40)), "-₹40");
    }
}
