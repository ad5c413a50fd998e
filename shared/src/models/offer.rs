//! Offer / coupon Model

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::error::{ValidationError, ValidationResult};
use crate::types::{BookingType, Money, format_inr};
use crate::validation::{
    MAX_DESCRIPTION_LEN, MAX_NAME_LEN, MAX_SHORT_TEXT_LEN, validate_date_range,
    validate_optional_text, validate_required_text,
};

/// How the discount value is applied
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum DiscountType {
    #[default]
    Percentage,
    Flat,
}

/// Create/update offer payload
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct OfferDraft {
    pub title: String,
    #[serde(default)]
    pub description: String,
    /// Coupon code; offers without one are applied by selection
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub code: Option<String>,
    #[serde(default)]
    pub discount_type: DiscountType,
    pub discount_value: Money,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub min_order_amount: Option<Money>,
    /// Pre-paid deal price per guest, when the offer is sold rather than applied
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub price: Option<Money>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub valid_from: Option<NaiveDate>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub valid_until: Option<NaiveDate>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub venue_type: Option<BookingType>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub venue_id: Option<String>,
    #[serde(default = "default_true")]
    pub is_active: bool,
}

fn default_true() -> bool {
    true
}

impl OfferDraft {
    pub fn validate(&self) -> ValidationResult {
        validate_required_text(&self.title, "title", MAX_NAME_LEN)?;
        if self.description.chars().count() > MAX_DESCRIPTION_LEN {
            return Err(ValidationError::TooLong {
                field: "description".into(),
                len: self.description.chars().count(),
                max: MAX_DESCRIPTION_LEN,
            });
        }
        validate_optional_text(&self.code, "code", MAX_SHORT_TEXT_LEN)?;

        if self.discount_value <= Money::ZERO {
            return Err(ValidationError::invalid("discount_value", "must be greater than zero"));
        }
        if self.discount_type == DiscountType::Percentage
            && self.discount_value > Money::ONE_HUNDRED
        {
            return Err(ValidationError::invalid("discount_value", "cannot exceed 100%"));
        }
        if let Some(min) = self.min_order_amount
            && min < Money::ZERO
        {
            return Err(ValidationError::invalid("min_order_amount", "cannot be negative"));
        }
        if let Some(price) = self.price
            && price < Money::ZERO
        {
            return Err(ValidationError::invalid("price", "cannot be negative"));
        }
        if let (Some(from), Some(until)) = (self.valid_from, self.valid_until) {
            validate_date_range(from, until, "valid_until")?;
        }
        Ok(())
    }
}

/// Offer entity
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Offer {
    pub id: String,
    #[serde(flatten)]
    pub draft: OfferDraft,
}

impl Offer {
    pub fn title(&self) -> &str {
        &self.draft.title
    }

    /// Short discount label, e.g. `20% off` or `₹200 off`
    pub fn discount_label(&self) -> String {
        match self.draft.discount_type {
            DiscountType::Percentage => {
                format!("{}% off", self.draft.discount_value.normalize())
            }
            DiscountType::Flat => format!("{} off", format_inr(self.draft.discount_value)),
        }
    }

    /// Whether the offer can be used on `date`
    pub fn is_available_on(&self, date: NaiveDate) -> bool {
        self.draft.is_active
            && self.draft.valid_from.is_none_or(|from| date >= from)
            && self.draft.valid_until.is_none_or(|until| date <= until)
    }
}
