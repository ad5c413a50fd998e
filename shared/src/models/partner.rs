//! Partner (organizer) verification Model
//!
//! Mirrors the backend's partner-verification schema. Admin staff review,
//! edit and approve it; nothing is computed over it client-side.

use serde::{Deserialize, Serialize};

use crate::error::ValidationResult;
use crate::validation::{
    MAX_ADDRESS_LEN, MAX_NAME_LEN, MAX_SHORT_TEXT_LEN, validate_email, validate_gstin,
    validate_ifsc, validate_optional_text, validate_phone, validate_required_text,
};

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Organization {
    pub name: String,
    /// Proprietorship, partnership, private limited, ...
    #[serde(default)]
    pub org_type: String,
    #[serde(default)]
    pub pan: Option<String>,
    #[serde(default)]
    pub address: String,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct BankDetails {
    #[serde(default)]
    pub account_holder: String,
    pub account_number: String,
    pub ifsc: String,
    #[serde(default)]
    pub bank_name: String,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct GstDetails {
    #[serde(default)]
    pub registered: bool,
    #[serde(default)]
    pub gstin: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Contact {
    pub name: String,
    pub email: String,
    pub phone: String,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum VerificationStatus {
    #[default]
    Pending,
    Approved,
    Rejected,
}

/// Editable verification record
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct PartnerVerification {
    pub organization: Organization,
    pub bank: BankDetails,
    #[serde(default)]
    pub gst: GstDetails,
    pub contact: Contact,
    #[serde(default)]
    pub status: VerificationStatus,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub remarks: Option<String>,
}

impl PartnerVerification {
    pub fn validate(&self) -> ValidationResult {
        validate_required_text(&self.organization.name, "organization.name", MAX_NAME_LEN)?;
        validate_optional_text(&self.organization.pan, "organization.pan", MAX_SHORT_TEXT_LEN)?;
        if !self.organization.address.is_empty() {
            validate_required_text(
                &self.organization.address,
                "organization.address",
                MAX_ADDRESS_LEN,
            )?;
        }

        validate_required_text(&self.contact.name, "contact.name", MAX_NAME_LEN)?;
        validate_email(&self.contact.email, "contact.email")?;
        validate_phone(&self.contact.phone, "contact.phone")?;

        validate_required_text(
            &self.bank.account_number,
            "bank.account_number",
            MAX_SHORT_TEXT_LEN,
        )?;
        validate_ifsc(&self.bank.ifsc, "bank.ifsc")?;

        if self.gst.registered {
            validate_gstin(self.gst.gstin.as_deref().unwrap_or_default(), "gst.gstin")?;
        }
        Ok(())
    }
}

/// Partner entity, as listed on the admin review page
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Partner {
    pub id: String,
    #[serde(flatten)]
    pub verification: PartnerVerification,
}

impl Partner {
    pub fn is_pending(&self) -> bool {
        self.verification.status == VerificationStatus::Pending
    }
}

/// Body of `PATCH /admin/partners/:id/approve`
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ApprovePartnerRequest {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub remarks: Option<String>,
}
