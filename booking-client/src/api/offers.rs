//! Offers and coupons

use shared::models::{Offer, OfferDraft};

use super::segment;
use crate::{ClientResult, HttpClient};

impl HttpClient {
    /// `GET /offers`, optionally for one venue
    pub async fn list_offers(&self, venue_id: Option<&str>) -> ClientResult<Vec<Offer>> {
        match venue_id {
            Some(id) => self.get(&format!("offers?venue_id={}", segment(id))).await,
            None => self.get("offers").await,
        }
    }

    /// `GET /offers/:id`
    pub async fn get_offer(&self, id: &str) -> ClientResult<Offer> {
        self.get(&format!("offers/{}", segment(id))).await
    }

    /// `POST /offers`
    pub async fn create_offer(&self, draft: &OfferDraft) -> ClientResult<Offer> {
        draft.validate()?;
        let offer: Offer = self.post("offers", draft).await?;
        tracing::info!(offer_id = %offer.id, "Offer created");
        Ok(offer)
    }

    /// `PUT /offers/:id`
    pub async fn update_offer(&self, id: &str, draft: &OfferDraft) -> ClientResult<Offer> {
        draft.validate()?;
        self.put(&format!("offers/{}", segment(id)), draft).await
    }

    /// `DELETE /offers/:id`
    pub async fn delete_offer(&self, id: &str) -> ClientResult<()> {
        self.delete(&format!("offers/{}", segment(id))).await?;
        tracing::info!(offer_id = %id, "Offer deleted");
        Ok(())
    }
}
