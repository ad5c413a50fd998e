//! Offer / regular-reservation tab selection
//!
//! The dining booking screen lists the venue's offers followed by a
//! synthetic "Regular Table Reservation" tab. Exactly one tab is selected at
//! a time; the first tab is selected initially.

use crate::error::{ValidationError, ValidationResult};
use crate::models::offer::Offer;

/// Label of the synthetic non-discount tab
pub const REGULAR_RESERVATION_LABEL: &str = "Regular Table Reservation";

/// Prefix of the checkout line naming a chosen offer
pub const OFFER_LINE_PREFIX: &str = "Offer:";

#[derive(Debug, Clone, PartialEq)]
pub enum OfferTab {
    Offer(Offer),
    Regular,
}

impl OfferTab {
    pub fn title(&self) -> &str {
        match self {
            Self::Offer(offer) => offer.title(),
            Self::Regular => REGULAR_RESERVATION_LABEL,
        }
    }

    pub fn is_regular(&self) -> bool {
        matches!(self, Self::Regular)
    }

    /// Lines describing this choice on the checkout page
    pub fn description_lines(&self) -> Vec<String> {
        match self {
            Self::Regular => vec![
                REGULAR_RESERVATION_LABEL.to_string(),
                "Table reserved at the standard menu price".to_string(),
            ],
            Self::Offer(offer) => {
                let mut lines = vec![
                    format!("{OFFER_LINE_PREFIX} {}", offer.title()),
                    offer.discount_label(),
                ];
                let description = offer.draft.description.trim();
                if !description.is_empty() {
                    lines.push(description.to_string());
                }
                if let Some(code) = offer.draft.code.as_deref().filter(|c| !c.is_empty()) {
                    lines.push(format!("Code: {code}"));
                }
                lines
            }
        }
    }
}

/// Tab list with a single selected index
#[derive(Debug, Clone)]
pub struct OfferTabs {
    tabs: Vec<OfferTab>,
    selected: Option<usize>,
}

impl OfferTabs {
    /// Offers in the given order, then the regular tab; index 0 selected
    pub fn new(offers: impl IntoIterator<Item = Offer>) -> Self {
        let mut tabs: Vec<OfferTab> = offers.into_iter().map(OfferTab::Offer).collect();
        tabs.push(OfferTab::Regular);
        Self {
            tabs,
            selected: Some(0),
        }
    }

    pub fn tabs(&self) -> &[OfferTab] {
        &self.tabs
    }

    pub fn len(&self) -> usize {
        self.tabs.len()
    }

    /// Never true: the regular tab is always present
    pub fn is_empty(&self) -> bool {
        self.tabs.is_empty()
    }

    pub fn selected_index(&self) -> Option<usize> {
        self.selected
    }

    pub fn selected(&self) -> Option<&OfferTab> {
        self.selected.and_then(|i| self.tabs.get(i))
    }

    pub fn select(&mut self, index: usize) -> ValidationResult {
        if index >= self.tabs.len() {
            return Err(ValidationError::invalid(
                "offer",
                format!("tab {index} does not exist ({} tabs)", self.tabs.len()),
            ));
        }
        self.selected = Some(index);
        Ok(())
    }

    /// Select the regular tab
    pub fn select_regular(&mut self) {
        self.selected = Some(self.tabs.len() - 1);
    }

    pub fn clear(&mut self) {
        self.selected = None;
    }

    pub fn is_regular_selected(&self) -> bool {
        self.selected().is_some_and(OfferTab::is_regular)
    }

    /// Selected real offer, if any
    pub fn selected_offer(&self) -> Option<&Offer> {
        match self.selected()? {
            OfferTab::Offer(offer) => Some(offer),
            OfferTab::Regular => None,
        }
    }
}
