//! Play venue booking screen

use chrono::NaiveDate;

use crate::error::{ValidationError, ValidationResult};
use crate::models::booking::LineItem;
use crate::models::venue::{PlayOption, PlayVenue};
use crate::reservation::date_strip::{DEFAULT_DATE_STRIP_DAYS, DateChip, date_strip};
use crate::reservation::draft::BookingDraft;
use crate::reservation::time_slot::TimeSlot;
use crate::types::BookingType;

/// Hourly start times used when a venue configures none
const DEFAULT_PLAY_START_HOUR: u32 = 6;
const DEFAULT_PLAY_END_HOUR: u32 = 23;

/// Longest run of consecutive slots in one booking
pub const MAX_CONSECUTIVE_SLOTS: u32 = 4;

#[derive(Debug, Clone)]
pub struct PlayBookingForm {
    venue_id: String,
    venue_name: String,
    options: Vec<PlayOption>,
    selected_option: Option<usize>,
    dates: Vec<DateChip>,
    selected_date: Option<NaiveDate>,
    start_times: Vec<TimeSlot>,
    selected_start: Option<TimeSlot>,
    slot_count: u32,
}

impl PlayBookingForm {
    pub fn new(venue: &PlayVenue, today: NaiveDate) -> Self {
        let mut start_times: Vec<TimeSlot> = venue
            .draft
            .time_slots
            .iter()
            .filter_map(|s| TimeSlot::parse(s))
            .collect();
        if start_times.is_empty() {
            start_times = (DEFAULT_PLAY_START_HOUR..DEFAULT_PLAY_END_HOUR)
                .filter_map(|h| TimeSlot::from_hm(h, 0))
                .collect();
        }
        start_times.sort();
        start_times.dedup();

        let dates = date_strip(today, DEFAULT_DATE_STRIP_DAYS);
        Self {
            venue_id: venue.id.clone(),
            venue_name: venue.draft.basics.name.clone(),
            selected_option: (!venue.draft.play_options.is_empty()).then_some(0),
            options: venue.draft.play_options.clone(),
            selected_date: dates.first().map(|chip| chip.date),
            dates,
            start_times,
            selected_start: None,
            slot_count: 1,
        }
    }

    pub fn options(&self) -> &[PlayOption] {
        &self.options
    }

    pub fn select_option(&mut self, index: usize) -> ValidationResult {
        if index >= self.options.len() {
            return Err(ValidationError::invalid("play_option", "unknown sport"));
        }
        self.selected_option = Some(index);
        Ok(())
    }

    pub fn dates(&self) -> &[DateChip] {
        &self.dates
    }

    pub fn select_date(&mut self, date: NaiveDate) -> ValidationResult {
        if !self.dates.iter().any(|chip| chip.date == date) {
            return Err(ValidationError::invalid("date", "pick a date from the list"));
        }
        self.selected_date = Some(date);
        Ok(())
    }

    pub fn start_times(&self) -> &[TimeSlot] {
        &self.start_times
    }

    pub fn select_start(&mut self, slot: TimeSlot) -> ValidationResult {
        if !self.start_times.contains(&slot) {
            return Err(ValidationError::invalid("time_slot", "not a bookable start time"));
        }
        self.selected_start = Some(slot);
        Ok(())
    }

    pub fn slot_count(&self) -> u32 {
        self.slot_count
    }

    pub fn set_slot_count(&mut self, count: u32) -> ValidationResult {
        if !(1..=MAX_CONSECUTIVE_SLOTS).contains(&count) {
            return Err(ValidationError::invalid(
                "slots",
                format!("book between 1 and {MAX_CONSECUTIVE_SLOTS} slots"),
            ));
        }
        self.slot_count = count;
        Ok(())
    }

    pub fn build_checkout(&self) -> ValidationResult<BookingDraft> {
        let option = self
            .selected_option
            .and_then(|i| self.options.get(i))
            .ok_or_else(|| ValidationError::required("play_option"))?;
        let date = self
            .selected_date
            .ok_or_else(|| ValidationError::required("date"))?;
        let start = self
            .selected_start
            .ok_or_else(|| ValidationError::required("time_slot"))?;

        let end = option
            .slot_minutes
            .checked_mul(self.slot_count)
            .and_then(|minutes| start.add_minutes(minutes))
            .ok_or_else(|| {
                ValidationError::invalid("time_slot", "booking would run past midnight")
            })?;

        let description = format!(
            "{} · {} min slot · {} – {}",
            option.sport,
            option.slot_minutes,
            start.display_12h(),
            end.display_12h()
        );
        Ok(
            BookingDraft::new(BookingType::Play, &self.venue_id, &self.venue_name, date)
                .with_time_slot(start)
                .with_line_item(LineItem::new(
                    description,
                    option.price_per_slot,
                    self.slot_count,
                )),
        )
    }
}
