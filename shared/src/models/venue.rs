//! Play venue and dining outlet Models
//!
//! The create/edit forms for both categories share the same listing basics
//! (name, slug, location, images, FAQs, terms) and differ only in their
//! category-specific option lists.

use serde::{Deserialize, Serialize};

use crate::error::{ValidationError, ValidationResult};
use crate::models::location::Location;
use crate::models::media::{Faq, Images};
use crate::models::offer::Offer;
use crate::types::Money;
use crate::util::slugify;
use crate::validation::{
    MAX_DESCRIPTION_LEN, MAX_NAME_LEN, MAX_URL_LEN, validate_required_text, validate_slug,
};

/// Listing fields common to every venue and outlet
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct VenueBasics {
    pub name: String,
    pub slug: String,
    #[serde(default)]
    pub description: String,
    pub location: Location,
    #[serde(default)]
    pub images: Images,
    #[serde(default)]
    pub faqs: Vec<Faq>,
    #[serde(default)]
    pub terms: Vec<String>,
}

impl VenueBasics {
    /// Start a draft from a display name, pre-filling the slug
    pub fn named(name: impl Into<String>) -> Self {
        let name = name.into();
        Self {
            slug: slugify(&name),
            name,
            ..Default::default()
        }
    }

    pub fn validate(&self) -> ValidationResult {
        validate_required_text(&self.name, "name", MAX_NAME_LEN)?;
        validate_slug(&self.slug, "slug")?;
        if self.description.chars().count() > MAX_DESCRIPTION_LEN {
            return Err(ValidationError::TooLong {
                field: "description".into(),
                len: self.description.chars().count(),
                max: MAX_DESCRIPTION_LEN,
            });
        }
        self.location.validate()?;
        self.images.validate()?;
        for faq in &self.faqs {
            faq.validate()?;
        }
        if self.terms.iter().any(|t| t.trim().is_empty()) {
            return Err(ValidationError::invalid("terms", "remove empty entries"));
        }
        Ok(())
    }
}

// =============================================================================
// Play
// =============================================================================

/// A bookable sport at a play venue
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PlayOption {
    pub sport: String,
    pub price_per_slot: Money,
    /// Length of one bookable slot
    #[serde(default = "default_slot_minutes")]
    pub slot_minutes: u32,
}

fn default_slot_minutes() -> u32 {
    60
}

/// Create/update play venue payload
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct PlayVenueDraft {
    #[serde(flatten)]
    pub basics: VenueBasics,
    #[serde(default)]
    pub play_options: Vec<PlayOption>,
    /// Bookable start times, "HH:MM"
    #[serde(default)]
    pub time_slots: Vec<String>,
}

impl PlayVenueDraft {
    pub fn validate(&self) -> ValidationResult {
        self.basics.validate()?;
        if self.play_options.is_empty() {
            return Err(ValidationError::required("play_options"));
        }
        for option in &self.play_options {
            validate_required_text(&option.sport, "play_options.sport", MAX_NAME_LEN)?;
            if option.price_per_slot < Money::ZERO {
                return Err(ValidationError::invalid(
                    "play_options.price_per_slot",
                    "cannot be negative",
                ));
            }
            if option.slot_minutes == 0 {
                return Err(ValidationError::invalid(
                    "play_options.slot_minutes",
                    "must be greater than zero",
                ));
            }
        }
        Ok(())
    }
}

/// Play venue entity
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PlayVenue {
    pub id: String,
    #[serde(flatten)]
    pub draft: PlayVenueDraft,
}

// =============================================================================
// Dining
// =============================================================================

/// Create/update dining outlet payload
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct DiningVenueDraft {
    #[serde(flatten)]
    pub basics: VenueBasics,
    #[serde(default)]
    pub cuisines: Vec<String>,
    /// Indoor, outdoor, rooftop, ...
    #[serde(default)]
    pub seating_types: Vec<String>,
    #[serde(default)]
    pub menu_images: Vec<String>,
    /// Reservation start times, "HH:MM"; empty means the default list
    #[serde(default)]
    pub time_slots: Vec<String>,
    /// Charged per reservation when no pre-paid offer is chosen
    #[serde(default)]
    pub booking_fee: Money,
    #[serde(default)]
    pub cost_for_two: Option<Money>,
}

impl DiningVenueDraft {
    pub fn validate(&self) -> ValidationResult {
        self.basics.validate()?;
        for url in &self.menu_images {
            validate_required_text(url, "menu_images", MAX_URL_LEN)?;
        }
        if self.booking_fee < Money::ZERO {
            return Err(ValidationError::invalid("booking_fee", "cannot be negative"));
        }
        for slot in &self.time_slots {
            if crate::reservation::TimeSlot::parse(slot).is_none() {
                return Err(ValidationError::invalid(
                    "time_slots",
                    format!("'{slot}' is not a HH:MM time"),
                ));
            }
        }
        Ok(())
    }
}

/// Dining outlet entity, as returned by "get venue"
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DiningVenue {
    pub id: String,
    #[serde(flatten)]
    pub draft: DiningVenueDraft,
    #[serde(default)]
    pub offers: Vec<Offer>,
}
