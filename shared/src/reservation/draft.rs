//! Checkout draft
//!
//! Built by a booking screen from its selections and handed to checkout.

use chrono::{DateTime, Duration, NaiveDate, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::models::booking::LineItem;
use crate::reservation::time_slot::TimeSlot;
use crate::types::{BookingType, Money};

/// Drafts older than this are refused at checkout
pub const DEFAULT_DRAFT_MAX_AGE_MINUTES: i64 = 15;

/// Checkout payload
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BookingDraft {
    /// Client-generated, lets checkout tell one draft from the next
    pub draft_id: Uuid,
    pub venue_id: String,
    pub venue_name: String,
    pub date: NaiveDate,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub time_slot: Option<TimeSlot>,
    pub booking_type: BookingType,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub guests: Option<u32>,
    pub line_items: Vec<LineItem>,
    pub created_at: DateTime<Utc>,
}

impl BookingDraft {
    pub fn new(
        booking_type: BookingType,
        venue_id: impl Into<String>,
        venue_name: impl Into<String>,
        date: NaiveDate,
    ) -> Self {
        Self {
            draft_id: Uuid::new_v4(),
            venue_id: venue_id.into(),
            venue_name: venue_name.into(),
            date,
            time_slot: None,
            booking_type,
            guests: None,
            line_items: Vec::new(),
            created_at: Utc::now(),
        }
    }

    pub fn with_time_slot(mut self, slot: TimeSlot) -> Self {
        self.time_slot = Some(slot);
        self
    }

    pub fn with_guests(mut self, guests: u32) -> Self {
        self.guests = Some(guests);
        self
    }

    pub fn with_line_item(mut self, item: LineItem) -> Self {
        self.line_items.push(item);
        self
    }

    pub fn total(&self) -> Money {
        self.line_items.iter().map(LineItem::subtotal).sum()
    }

    pub fn descriptions(&self) -> Vec<&str> {
        self.line_items
            .iter()
            .map(|item| item.description.as_str())
            .collect()
    }

    /// `Mon, 19 Oct 2026 · 7:30 PM`
    pub fn schedule_label(&self) -> String {
        let date = self.date.format("%a, %-d %b %Y");
        match self.time_slot {
            Some(slot) => format!("{date} · {}", slot.display_12h()),
            None => date.to_string(),
        }
    }

    pub fn age(&self, now: DateTime<Utc>) -> Duration {
        now - self.created_at
    }

    pub fn is_stale(&self, max_age: Duration, now: DateTime<Utc>) -> bool {
        self.age(now) > max_age
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn draft() -> BookingDraft {
        BookingDraft::new(
            BookingType::Play,
            "pl_1",
            "Smash Arena",
            NaiveDate::from_ymd_opt(2026, 10, 19).unwrap(),
        )
        .with_time_slot(TimeSlot::parse("19:30").unwrap())
        .with_line_item(LineItem::new("Badminton · 60 min", Money::from(400), 2))
        .with_line_item(LineItem::new("Racket rental", Money::new(7550, 2), 1))
    }

    #[test]
    fn test_total_sums_line_items() {
        assert_eq!(draft().total(), Money::new(87550, 2));
    }

    #[test]
    fn test_schedule_label() {
        assert_eq!(draft().schedule_label(), "Mon, 19 Oct 2026 · 7:30 PM");
    }

    #[test]
    fn test_is_stale() {
        let d = draft();
        let max_age = Duration::minutes(DEFAULT_DRAFT_MAX_AGE_MINUTES);
        assert!(!d.is_stale(max_age, d.created_at + Duration::minutes(5)));
        assert!(d.is_stale(max_age, d.created_at + Duration::minutes(16)));
    }

    #[test]
    fn test_draft_serializes_slot_and_prices_as_strings() {
        let json = serde_json::to_value(draft()).unwrap();
        assert_eq!(json["time_slot"], "19:30");
        assert_eq!(json["booking_type"], "play");
        assert_eq!(json["line_items"][1]["price"], "75.50");
        assert!(json.get("guests").is_none());
    }
}
