//! Dining outlets

use shared::models::{DiningVenue, DiningVenueDraft};

use super::segment;
use crate::{ClientResult, HttpClient};

impl HttpClient {
    /// `GET /dining`
    pub async fn list_dining_venues(&self) -> ClientResult<Vec<DiningVenue>> {
        self.get("dining").await
    }

    /// `GET /dining/:slug`, offers included
    pub async fn get_dining_venue(&self, slug_or_id: &str) -> ClientResult<DiningVenue> {
        self.get(&format!("dining/{}", segment(slug_or_id))).await
    }

    /// `POST /admin/dining`
    pub async fn create_dining_venue(
        &self,
        draft: &DiningVenueDraft,
    ) -> ClientResult<DiningVenue> {
        draft.validate()?;
        let venue: DiningVenue = self.post("admin/dining", draft).await?;
        tracing::info!(venue_id = %venue.id, "Dining outlet created");
        Ok(venue)
    }

    /// `PUT /admin/dining/:id`
    pub async fn update_dining_venue(
        &self,
        id: &str,
        draft: &DiningVenueDraft,
    ) -> ClientResult<DiningVenue> {
        draft.validate()?;
        self.put(&format!("admin/dining/{}", segment(id)), draft)
            .await
    }
}
