//! Booking Model

use serde::{Deserialize, Serialize};

use crate::types::{BookingType, Money};

/// One priced line on a checkout draft or a confirmed booking
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LineItem {
    pub description: String,
    pub price: Money,
    pub quantity: u32,
}

impl LineItem {
    pub fn new(description: impl Into<String>, price: Money, quantity: u32) -> Self {
        Self {
            description: description.into(),
            price,
            quantity,
        }
    }

    pub fn subtotal(&self) -> Money {
        self.price * Money::from(self.quantity)
    }
}

/// Backend booking lifecycle
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum BookingStatus {
    #[default]
    Pending,
    Confirmed,
    Cancelled,
    Completed,
}

/// Booking entity, as listed under "My bookings"
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Booking {
    pub id: String,
    #[serde(default)]
    pub reference: Option<String>,
    pub booking_type: BookingType,
    pub venue_id: String,
    pub venue_name: String,
    /// `YYYY-MM-DD`
    pub date: String,
    #[serde(default)]
    pub time_slot: Option<String>,
    #[serde(default)]
    pub status: BookingStatus,
    #[serde(default)]
    pub amount: Money,
    #[serde(default)]
    pub line_items: Vec<LineItem>,
}

impl Booking {
    pub fn is_upcoming(&self) -> bool {
        matches!(self.status, BookingStatus::Pending | BookingStatus::Confirmed)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_line_item_subtotal() {
        let item = LineItem::new("Badminton · 60 min", Money::from(400), 3);
        assert_eq!(item.subtotal(), Money::from(1200));
    }

    #[test]
    fn test_line_item_price_serializes_as_string() {
        let item = LineItem::new("GA", Money::new(149_950, 2), 2);
        let json = serde_json::to_value(&item).unwrap();
        assert_eq!(json["price"], "1499.50");
        assert_eq!(json["quantity"], 2);
    }

    #[test]
    fn test_booking_deserialize_defaults() {
        let json = r#"{
            "id": "bk_1",
            "booking_type": "play",
            "venue_id": "pl_1",
            "venue_name": "Smash Arena",
            "date": "2026-10-20"
        }"#;
        let booking: Booking = serde_json::from_str(json).unwrap();
        assert_eq!(booking.status, BookingStatus::Pending);
        assert!(booking.is_upcoming());
        assert!(booking.line_items.is_empty());
    }
}
