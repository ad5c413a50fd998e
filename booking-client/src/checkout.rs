//! Checkout hand-off
//!
//! A booking screen puts its draft here and the checkout flow takes it. The
//! store holds at most one draft and refuses drafts that sat around longer
//! than `max_age`, so an abandoned checkout cannot resubmit stale venue or
//! price data.

use std::sync::Arc;

use chrono::{DateTime, Duration, Utc};
use parking_lot::Mutex;
use shared::ValidationError;
use shared::reservation::{BookingDraft, DEFAULT_DRAFT_MAX_AGE_MINUTES};

use crate::ClientResult;

/// Shared slot holding the pending checkout draft
#[derive(Debug, Clone)]
pub struct CheckoutStore {
    slot: Arc<Mutex<Option<BookingDraft>>>,
    max_age: Duration,
}

impl CheckoutStore {
    pub fn new() -> Self {
        Self::with_max_age(Duration::minutes(DEFAULT_DRAFT_MAX_AGE_MINUTES))
    }

    pub fn with_max_age(max_age: Duration) -> Self {
        Self {
            slot: Arc::new(Mutex::new(None)),
            max_age,
        }
    }

    pub fn max_age(&self) -> Duration {
        self.max_age
    }

    /// Store a draft, replacing any previous one
    pub fn put(&self, draft: BookingDraft) -> ClientResult<()> {
        if draft.line_items.is_empty() {
            return Err(ValidationError::invalid("line_items", "nothing to check out").into());
        }
        tracing::debug!(
            draft_id = %draft.draft_id,
            venue_id = %draft.venue_id,
            total = %draft.total(),
            "Checkout draft stored"
        );
        if let Some(previous) = self.slot.lock().replace(draft) {
            tracing::debug!(draft_id = %previous.draft_id, "Replaced earlier checkout draft");
        }
        Ok(())
    }

    /// Look at the pending draft without consuming it
    pub fn peek(&self) -> Option<BookingDraft> {
        self.slot.lock().clone()
    }

    /// Consume the pending draft
    ///
    /// `Ok(None)` when nothing is pending. A stale draft is dropped and
    /// reported as a validation error.
    pub fn take(&self) -> ClientResult<Option<BookingDraft>> {
        self.take_at(Utc::now())
    }

    pub fn take_at(&self, now: DateTime<Utc>) -> ClientResult<Option<BookingDraft>> {
        let Some(draft) = self.slot.lock().take() else {
            return Ok(None);
        };
        if draft.is_stale(self.max_age, now) {
            tracing::warn!(
                draft_id = %draft.draft_id,
                age_secs = draft.age(now).num_seconds(),
                "Discarding stale checkout draft"
            );
            return Err(ValidationError::invalid(
                "checkout",
                "booking details have expired, please select your booking again",
            )
            .into());
        }
        Ok(Some(draft))
    }

    /// Drop the pending draft, e.g. when the user navigates away
    pub fn clear(&self) {
        self.slot.lock().take();
    }

    pub fn is_empty(&self) -> bool {
        self.slot.lock().is_none()
    }
}

impl Default for CheckoutStore {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;
    use shared::BookingType;
    use shared::models::LineItem;
    use shared::types::Money;

    fn draft() -> BookingDraft {
        BookingDraft::new(
            BookingType::Dining,
            "dn_1",
            "Toit",
            NaiveDate::from_ymd_opt(2026, 10, 24).unwrap(),
        )
        .with_line_item(LineItem::new(
            "Regular Table Reservation",
            Money::from(100),
            1,
        ))
    }

    #[test]
    fn test_put_then_take_consumes() {
        let store = CheckoutStore::new();
        let d = draft();
        store.put(d.clone()).unwrap();
        assert_eq!(store.peek(), Some(d.clone()));

        assert_eq!(store.take().unwrap(), Some(d));
        assert!(store.is_empty());
        assert_eq!(store.take().unwrap(), None);
    }

    #[test]
    fn test_put_replaces_previous_draft() {
        let store = CheckoutStore::new();
        let first = draft();
        let second = draft();
        store.put(first).unwrap();
        store.put(second.clone()).unwrap();
        assert_eq!(store.take().unwrap().map(|d| d.draft_id), Some(second.draft_id));
    }

    #[test]
    fn test_stale_draft_is_rejected_and_dropped() {
        let store = CheckoutStore::new();
        let d = draft();
        let created = d.created_at;
        store.put(d).unwrap();

        let err = store.take_at(created + Duration::minutes(20)).unwrap_err();
        assert!(err.user_message().contains("expired"));
        assert!(store.is_empty());
    }

    #[test]
    fn test_fresh_draft_within_custom_max_age() {
        let store = CheckoutStore::with_max_age(Duration::minutes(30));
        let d = draft();
        let created = d.created_at;
        store.put(d).unwrap();
        assert!(store.take_at(created + Duration::minutes(20)).unwrap().is_some());
    }

    #[test]
    fn test_empty_draft_is_refused() {
        let store = CheckoutStore::new();
        let empty = BookingDraft::new(
            BookingType::Play,
            "pl_1",
            "Smash Arena",
            NaiveDate::from_ymd_opt(2026, 10, 24).unwrap(),
        );
        assert!(store.put(empty).is_err());
        assert!(store.is_empty());
    }

    #[test]
    fn test_clones_share_the_slot() {
        let screen = CheckoutStore::new();
        let checkout = screen.clone();
        screen.put(draft()).unwrap();
        assert!(checkout.take().unwrap().is_some());
        assert!(screen.is_empty());
    }
}
