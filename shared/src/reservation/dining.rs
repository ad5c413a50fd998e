//! Dining reservation screen

use chrono::NaiveDate;

use crate::error::{ValidationError, ValidationResult};
use crate::models::booking::LineItem;
use crate::models::offer::Offer;
use crate::models::venue::DiningVenue;
use crate::reservation::date_strip::{DEFAULT_DATE_STRIP_DAYS, DateChip, date_strip};
use crate::reservation::draft::BookingDraft;
use crate::reservation::offer_tabs::{OfferTab, OfferTabs};
use crate::reservation::time_slot::SlotPicker;
use crate::types::{BookingType, Money};

/// Largest party one reservation can hold
pub const MAX_GUESTS: u32 = 20;

/// State of the dining booking-configuration screen
#[derive(Debug, Clone)]
pub struct DiningBookingForm {
    venue_id: String,
    venue_name: String,
    booking_fee: Money,
    dates: Vec<DateChip>,
    selected_date: Option<NaiveDate>,
    active_offers: Vec<Offer>,
    pub slots: SlotPicker,
    pub offers: OfferTabs,
    guests: u32,
}

impl DiningBookingForm {
    /// Set up the screen for `venue`, with the date strip starting at `today`
    pub fn new(venue: &DiningVenue, today: NaiveDate) -> Self {
        let dates = date_strip(today, DEFAULT_DATE_STRIP_DAYS);
        let selected_date = dates.first().map(|chip| chip.date);
        let active_offers: Vec<Offer> = venue
            .offers
            .iter()
            .filter(|offer| offer.draft.is_active)
            .cloned()
            .collect();
        let offers = OfferTabs::new(Self::offers_on(&active_offers, selected_date));
        Self {
            venue_id: venue.id.clone(),
            venue_name: venue.draft.basics.name.clone(),
            booking_fee: venue.draft.booking_fee,
            selected_date,
            dates,
            active_offers,
            slots: SlotPicker::new(&venue.draft.time_slots),
            offers,
            guests: 2,
        }
    }

    fn offers_on(offers: &[Offer], date: Option<NaiveDate>) -> Vec<Offer> {
        offers
            .iter()
            .filter(|offer| date.is_some_and(|date| offer.is_available_on(date)))
            .cloned()
            .collect()
    }

    pub fn dates(&self) -> &[DateChip] {
        &self.dates
    }

    pub fn selected_date(&self) -> Option<NaiveDate> {
        self.selected_date
    }

    /// Pick a date from the strip
    ///
    /// The offer tabs are rebuilt for the new date, so the selection falls
    /// back to the first offer valid that day (or the regular tab).
    pub fn select_date(&mut self, date: NaiveDate) -> ValidationResult {
        if !self.dates.iter().any(|chip| chip.date == date) {
            return Err(ValidationError::invalid("date", "pick a date from the list"));
        }
        if self.selected_date != Some(date) {
            self.selected_date = Some(date);
            self.offers = OfferTabs::new(Self::offers_on(&self.active_offers, Some(date)));
        }
        Ok(())
    }

    pub fn guests(&self) -> u32 {
        self.guests
    }

    pub fn set_guests(&mut self, guests: u32) -> ValidationResult {
        if guests == 0 {
            return Err(ValidationError::invalid("guests", "must be at least 1"));
        }
        if guests > MAX_GUESTS {
            return Err(ValidationError::invalid(
                "guests",
                format!("at most {MAX_GUESTS} guests per reservation"),
            ));
        }
        self.guests = guests;
        Ok(())
    }

    /// Assemble the checkout draft from the current selections
    pub fn build_checkout(&self) -> ValidationResult<BookingDraft> {
        let date = self
            .selected_date
            .ok_or_else(|| ValidationError::required("date"))?;
        let slot = self
            .slots
            .selected()
            .ok_or_else(|| ValidationError::required("time_slot"))?;
        let tab = self
            .offers
            .selected()
            .ok_or_else(|| ValidationError::required("offer"))?;
        if let OfferTab::Offer(offer) = tab {
            if !offer.is_available_on(date) {
                return Err(ValidationError::invalid(
                    "offer",
                    format!("'{}' is not valid on {date}", offer.title()),
                ));
            }
        }

        let mut draft =
            BookingDraft::new(BookingType::Dining, &self.venue_id, &self.venue_name, date)
                .with_time_slot(slot)
                .with_guests(self.guests);

        // Pre-paid offers are charged per guest; everything else pays the booking fee once
        let (price, quantity) = match tab {
            OfferTab::Offer(offer) => match offer.draft.price {
                Some(price) => (price, self.guests),
                None => (self.booking_fee, 1),
            },
            OfferTab::Regular => (self.booking_fee, 1),
        };
        for (i, line) in tab.description_lines().into_iter().enumerate() {
            draft = if i == 0 {
                draft.with_line_item(LineItem::new(line, price, quantity))
            } else {
                draft.with_line_item(LineItem::new(line, Money::ZERO, 1))
            };
        }
        draft = draft.with_line_item(LineItem::new(
            format!("Guests: {}", self.guests),
            Money::ZERO,
            1,
        ));

        tracing::debug!(
            venue_id = %self.venue_id,
            date = %date,
            slot = %slot,
            regular = tab.is_regular(),
            "Built dining checkout draft"
        );
        Ok(draft)
    }
}
