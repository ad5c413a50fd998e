//! Booking-configuration logic
//!
//! Everything a booking screen computes before checkout: the date strip,
//! the dining slot picker, the offer tabs, and the checkout draft built
//! from them. Availability, pricing rules and persistence stay on the
//! backend; these types only shape data it already returned.

pub mod date_strip;
pub mod dining;
pub mod draft;
pub mod event;
pub mod offer_tabs;
pub mod play;
pub mod time_slot;

pub use date_strip::{DEFAULT_DATE_STRIP_DAYS, DateChip, date_strip};
pub use dining::{DiningBookingForm, MAX_GUESTS};
pub use draft::{BookingDraft, DEFAULT_DRAFT_MAX_AGE_MINUTES};
pub use event::{EventBookingForm, MAX_TICKETS_PER_BOOKING};
pub use offer_tabs::{OfferTab, OfferTabs, REGULAR_RESERVATION_LABEL};
pub use play::PlayBookingForm;
pub use time_slot::{
    DEFAULT_DINING_SLOTS, MealTab, SlotPartition, SlotPicker, SlotView, TimeSlot,
    VISIBLE_SLOT_LIMIT, format_time, partition, visible_slots,
};
