//! Shared types for the booking marketplace
//!
//! Domain models mirrored from the marketplace backend, the response
//! envelope, client-side validation helpers and the booking-configuration
//! logic (slot picker, date strip, offer tabs, checkout drafts).

pub mod client;
pub mod error;
pub mod models;
pub mod reservation;
pub mod response;
pub mod types;
pub mod util;
pub mod validation;

// Re-exports
pub use error::{ValidationError, ValidationResult};
pub use response::ApiResponse;
pub use serde::{Deserialize, Serialize};
pub use types::{BookingType, Money};
