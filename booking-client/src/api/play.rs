//! Play (sports) venues

use shared::models::{PlayVenue, PlayVenueDraft};

use super::segment;
use crate::{ClientResult, HttpClient};

impl HttpClient {
    /// `GET /play`
    pub async fn list_play_venues(&self) -> ClientResult<Vec<PlayVenue>> {
        self.get("play").await
    }

    /// `GET /play/:slug`
    pub async fn get_play_venue(&self, slug_or_id: &str) -> ClientResult<PlayVenue> {
        self.get(&format!("play/{}", segment(slug_or_id))).await
    }

    /// `POST /admin/play`
    pub async fn create_play_venue(&self, draft: &PlayVenueDraft) -> ClientResult<PlayVenue> {
        draft.validate()?;
        let venue: PlayVenue = self.post("admin/play", draft).await?;
        tracing::info!(venue_id = %venue.id, "Play venue created");
        Ok(venue)
    }

    /// `PUT /admin/play/:id`
    pub async fn update_play_venue(
        &self,
        id: &str,
        draft: &PlayVenueDraft,
    ) -> ClientResult<PlayVenue> {
        draft.validate()?;
        self.put(&format!("admin/play/{}", segment(id)), draft).await
    }
}
