//! Partner (organizer) verification
//!
//! Organizers submit their organization, bank, GST and contact details;
//! admins review, edit and approve them.

use shared::models::{ApprovePartnerRequest, Partner, PartnerVerification};

use super::segment;
use crate::{ClientResult, HttpClient};

impl HttpClient {
    /// `GET /admin/partners`
    pub async fn list_partners(&self) -> ClientResult<Vec<Partner>> {
        self.get("admin/partners").await
    }

    /// `PATCH /admin/partners/:id/approve`
    pub async fn approve_partner(
        &self,
        id: &str,
        remarks: Option<String>,
    ) -> ClientResult<Partner> {
        let request = ApprovePartnerRequest {
            remarks: remarks.filter(|r| !r.trim().is_empty()),
        };
        let partner: Partner = self
            .patch(&format!("admin/partners/{}/approve", segment(id)), &request)
            .await?;
        tracing::info!(partner_id = %partner.id, "Partner approved");
        Ok(partner)
    }

    /// `PUT /admin/partners/:id`
    pub async fn update_partner(
        &self,
        id: &str,
        verification: &PartnerVerification,
    ) -> ClientResult<Partner> {
        verification.validate()?;
        self.put(&format!("admin/partners/{}", segment(id)), verification)
            .await
    }

    /// `POST /partners/verification`, an organizer submitting their details
    pub async fn submit_verification(
        &self,
        verification: &PartnerVerification,
    ) -> ClientResult<Partner> {
        verification.validate()?;
        self.post("partners/verification", verification).await
    }
}
