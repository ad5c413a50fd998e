//! Event listings and admin event forms

use shared::models::{Event, EventDraft};

use super::segment;
use crate::{ClientResult, HttpClient};

impl HttpClient {
    /// `GET /events`
    pub async fn list_events(&self) -> ClientResult<Vec<Event>> {
        self.get("events").await
    }

    /// `GET /events/:slug`
    pub async fn get_event(&self, slug_or_id: &str) -> ClientResult<Event> {
        self.get(&format!("events/{}", segment(slug_or_id))).await
    }

    /// `POST /admin/events`
    pub async fn create_event(&self, draft: &EventDraft) -> ClientResult<Event> {
        draft.validate()?;
        let event: Event = self.post("admin/events", draft).await?;
        tracing::info!(event_id = %event.id, "Event created");
        Ok(event)
    }

    /// `PUT /admin/events/:id`
    pub async fn update_event(&self, id: &str, draft: &EventDraft) -> ClientResult<Event> {
        draft.validate()?;
        self.put(&format!("admin/events/{}", segment(id)), draft)
            .await
    }
}
