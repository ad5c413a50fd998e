//! Event Model

use serde::{Deserialize, Serialize};

use crate::error::{ValidationError, ValidationResult};
use crate::models::location::Location;
use crate::models::media::{Faq, Images};
use crate::types::Money;
use crate::validation::{
    MAX_DESCRIPTION_LEN, MAX_NAME_LEN, parse_date, validate_date_range, validate_required_text,
    validate_slug,
};

/// A ticket tier on sale for an event
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TicketType {
    pub name: String,
    pub price: Money,
    /// Tickets still on sale
    #[serde(default)]
    pub available: u32,
}

/// Create/update event payload
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct EventDraft {
    pub title: String,
    pub slug: String,
    #[serde(default)]
    pub category: String,
    #[serde(default)]
    pub description: String,
    pub location: Location,
    #[serde(default)]
    pub images: Images,
    /// `YYYY-MM-DD`
    pub start_date: String,
    /// `YYYY-MM-DD`; single-day events leave it empty
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub end_date: Option<String>,
    /// `HH:MM`
    #[serde(default)]
    pub start_time: String,
    #[serde(default)]
    pub ticket_types: Vec<TicketType>,
    #[serde(default)]
    pub faqs: Vec<Faq>,
    #[serde(default)]
    pub terms: Vec<String>,
}

impl EventDraft {
    pub fn validate(&self) -> ValidationResult {
        validate_required_text(&self.title, "title", MAX_NAME_LEN)?;
        validate_slug(&self.slug, "slug")?;
        if self.description.chars().count() > MAX_DESCRIPTION_LEN {
            return Err(ValidationError::TooLong {
                field: "description".into(),
                len: self.description.chars().count(),
                max: MAX_DESCRIPTION_LEN,
            });
        }
        validate_required_text(&self.location.venue_name, "location.venue_name", MAX_NAME_LEN)?;
        validate_required_text(&self.location.city, "location.city", MAX_NAME_LEN)?;
        self.images.validate()?;

        let start = parse_date(&self.start_date, "start_date")?;
        if let Some(end) = self.end_date.as_deref().filter(|d| !d.trim().is_empty()) {
            validate_date_range(start, parse_date(end, "end_date")?, "end_date")?;
        }
        if !self.start_time.trim().is_empty()
            && crate::reservation::TimeSlot::parse(&self.start_time).is_none()
        {
            return Err(ValidationError::invalid("start_time", "expected HH:MM"));
        }

        if self.ticket_types.is_empty() {
            return Err(ValidationError::required("ticket_types"));
        }
        for ticket in &self.ticket_types {
            validate_required_text(&ticket.name, "ticket_types.name", MAX_NAME_LEN)?;
            if ticket.price < Money::ZERO {
                return Err(ValidationError::invalid("ticket_types.price", "cannot be negative"));
            }
        }
        for faq in &self.faqs {
            faq.validate()?;
        }
        Ok(())
    }

    /// Lowest ticket price, shown as "from ₹..." on listing cards
    pub fn starting_price(&self) -> Option<Money> {
        self.ticket_types.iter().map(|t| t.price).min()
    }
}

/// Event entity
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Event {
    pub id: String,
    #[serde(flatten)]
    pub draft: EventDraft,
}
