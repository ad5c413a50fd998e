use shared::models::Booking;

use super::segment;
use crate::{ClientResult, HttpClient};

impl HttpClient {
    /// `GET /bookings`, the signed-in user's bookings
    pub async fn list_bookings(&self) -> ClientResult<Vec<Booking>> {
        self.get("bookings").await
    }

    /// `GET /bookings/:id`
    pub async fn get_booking(&self, id: &str) -> ClientResult<Booking> {
        self.get(&format!("bookings/{}", segment(id))).await
    }
}
