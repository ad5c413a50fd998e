//! Dining time-slot partitioner
//!
//! Venues configure reservation start times as `"HH:MM"` strings. The slot
//! picker splits them into lunch and dinner, shows at most
//! [`VISIBLE_SLOT_LIMIT`] per tab until "show more" is toggled, and renders
//! them in 12-hour form.

use std::fmt;
use std::str::FromStr;

use chrono::{NaiveTime, Timelike};
use serde::{Deserialize, Serialize};

use crate::error::{ValidationError, ValidationResult};

/// First hour (inclusive) of the lunch window
pub const LUNCH_START_HOUR: u32 = 11;
/// First hour of the dinner window; lunch ends here
pub const DINNER_START_HOUR: u32 = 16;
/// Slots shown per tab before "show more"
pub const VISIBLE_SLOT_LIMIT: usize = 8;

/// Used when a venue has no `time_slots` configured
pub const DEFAULT_DINING_SLOTS: &[&str] = &[
    "12:00", "12:30", "13:00", "13:30", "14:00", "14:30", "15:00", "15:30", "18:00", "18:30",
    "19:00", "19:30", "20:00", "20:30", "21:00", "21:30", "22:00", "22:30", "23:00",
];

/// A reservation start time with minute precision
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct TimeSlot(NaiveTime);

impl TimeSlot {
    /// Parse `"HH:MM"` (24-hour). Returns `None` for anything else.
    pub fn parse(s: &str) -> Option<Self> {
        NaiveTime::parse_from_str(s.trim(), "%H:%M").ok().map(Self)
    }

    pub fn from_hm(hour: u32, minute: u32) -> Option<Self> {
        NaiveTime::from_hms_opt(hour, minute, 0).map(Self)
    }

    pub fn hour(&self) -> u32 {
        self.0.hour()
    }

    pub fn minute(&self) -> u32 {
        self.0.minute()
    }

    /// Meal window this slot falls in, if any
    pub fn meal(&self) -> Option<MealTab> {
        match self.hour() {
            h if (LUNCH_START_HOUR..DINNER_START_HOUR).contains(&h) => Some(MealTab::Lunch),
            h if h >= DINNER_START_HOUR => Some(MealTab::Dinner),
            _ => None,
        }
    }

    /// 12-hour display form: `00:00` → `12:00 AM`, `13:30` → `1:30 PM`
    pub fn display_12h(&self) -> String {
        let hour = self.hour();
        let suffix = if hour < 12 { "AM" } else { "PM" };
        let hour12 = match hour % 12 {
            0 => 12,
            h => h,
        };
        format!("{hour12}:{:02} {suffix}", self.minute())
    }

    /// Slot `minutes` later, if it stays on the same day
    pub fn add_minutes(&self, minutes: u32) -> Option<Self> {
        let total = (self.hour() * 60 + self.minute()).checked_add(minutes)?;
        Self::from_hm(total / 60, total % 60).filter(|_| total < 24 * 60)
    }
}

impl fmt::Display for TimeSlot {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:02}:{:02}", self.hour(), self.minute())
    }
}

impl FromStr for TimeSlot {
    type Err = ValidationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
            .ok_or_else(|| ValidationError::invalid("time_slot", format!("'{s}' is not HH:MM")))
    }
}

impl TryFrom<String> for TimeSlot {
    type Error = ValidationError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        value.parse()
    }
}

impl From<TimeSlot> for String {
    fn from(slot: TimeSlot) -> Self {
        slot.to_string()
    }
}

/// Format a `"HH:MM"` string for display; `None` if it does not parse
pub fn format_time(s: &str) -> Option<String> {
    TimeSlot::parse(s).map(|slot| slot.display_12h())
}

/// Meal tab on the dining booking screen
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum MealTab {
    #[default]
    Lunch,
    Dinner,
}

/// Input slots split by meal window
///
/// Every input string lands in exactly one bucket. Slots before
/// [`LUNCH_START_HOUR`] and strings that are not `HH:MM` go to `unassigned`.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SlotPartition {
    pub lunch: Vec<TimeSlot>,
    pub dinner: Vec<TimeSlot>,
    pub unassigned: Vec<String>,
}

impl SlotPartition {
    pub fn for_tab(&self, tab: MealTab) -> &[TimeSlot] {
        match tab {
            MealTab::Lunch => &self.lunch,
            MealTab::Dinner => &self.dinner,
        }
    }

    pub fn len(&self) -> usize {
        self.lunch.len() + self.dinner.len() + self.unassigned.len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

/// Split slots into lunch / dinner, keeping input order
pub fn partition<S: AsRef<str>>(slots: &[S]) -> SlotPartition {
    let mut out = SlotPartition::default();
    for raw in slots {
        let raw = raw.as_ref();
        match TimeSlot::parse(raw) {
            Some(slot) => match slot.meal() {
                Some(MealTab::Lunch) => out.lunch.push(slot),
                Some(MealTab::Dinner) => out.dinner.push(slot),
                None => out.unassigned.push(raw.to_string()),
            },
            None => out.unassigned.push(raw.to_string()),
        }
    }
    out
}

/// Slots to render for one tab
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SlotView {
    pub slots: Vec<TimeSlot>,
    /// Whether the "show more" toggle applies
    pub has_more: bool,
    /// Slots currently hidden behind the toggle
    pub hidden: usize,
}

impl SlotView {
    /// Empty view renders the "no slots" message
    pub fn is_empty(&self) -> bool {
        self.slots.is_empty()
    }
}

/// Cap `slots` at [`VISIBLE_SLOT_LIMIT`] unless `show_more` is set
pub fn visible_slots(slots: &[TimeSlot], show_more: bool) -> SlotView {
    let has_more = slots.len() > VISIBLE_SLOT_LIMIT;
    let shown = if show_more || !has_more {
        slots.len()
    } else {
        VISIBLE_SLOT_LIMIT
    };
    SlotView {
        slots: slots[..shown].to_vec(),
        has_more,
        hidden: slots.len() - shown,
    }
}

/// Slot picker UI state: meal tab, show-more toggle, selected slot
#[derive(Debug, Clone)]
pub struct SlotPicker {
    partition: SlotPartition,
    meal_tab: MealTab,
    show_more: bool,
    selected: Option<TimeSlot>,
}

impl SlotPicker {
    /// Build from a venue's configured slots, falling back to
    /// [`DEFAULT_DINING_SLOTS`] when none are configured
    pub fn new<S: AsRef<str>>(venue_slots: &[S]) -> Self {
        let partition = if venue_slots.is_empty() {
            partition(DEFAULT_DINING_SLOTS)
        } else {
            partition(venue_slots)
        };
        if !partition.unassigned.is_empty() {
            tracing::debug!(
                count = partition.unassigned.len(),
                "Ignoring slots outside the lunch and dinner windows"
            );
        }
        let meal_tab = if partition.lunch.is_empty() && !partition.dinner.is_empty() {
            MealTab::Dinner
        } else {
            MealTab::Lunch
        };
        Self {
            partition,
            meal_tab,
            show_more: false,
            selected: None,
        }
    }

    pub fn partition(&self) -> &SlotPartition {
        &self.partition
    }

    pub fn meal_tab(&self) -> MealTab {
        self.meal_tab
    }

    /// Switch tab; collapses "show more" and drops a selection from the other tab
    pub fn set_meal_tab(&mut self, tab: MealTab) {
        if tab == self.meal_tab {
            return;
        }
        self.meal_tab = tab;
        self.show_more = false;
        if self.selected.is_some_and(|s| s.meal() != Some(tab)) {
            self.selected = None;
        }
    }

    pub fn show_more(&self) -> bool {
        self.show_more
    }

    pub fn toggle_show_more(&mut self) {
        self.show_more = !self.show_more;
    }

    pub fn view(&self) -> SlotView {
        visible_slots(self.partition.for_tab(self.meal_tab), self.show_more)
    }

    /// Select a slot of the current tab
    pub fn select(&mut self, slot: TimeSlot) -> ValidationResult {
        if !self.partition.for_tab(self.meal_tab).contains(&slot) {
            return Err(ValidationError::invalid(
                "time_slot",
                format!("{} is not offered for this meal", slot.display_12h()),
            ));
        }
        self.selected = Some(slot);
        Ok(())
    }

    pub fn selected(&self) -> Option<TimeSlot> {
        self.selected
    }

    pub fn clear_selection(&mut self) {
        self.selected = None;
    }
}
