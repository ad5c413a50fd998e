//! Typed endpoint modules
//!
//! Each module adds an `impl HttpClient` block for one backend resource.
//! Drafts are validated before anything is sent, so a missing required
//! field never reaches the network.

pub mod auth;
pub mod bookings;
pub mod dining;
pub mod events;
pub mod locations;
pub mod offers;
pub mod partners;
pub mod play;
pub mod upload;

use std::borrow::Cow;

/// Percent-encode one path segment (ids, slugs, state names)
pub(crate) fn segment(value: &str) -> Cow<'_, str> {
    urlencoding::encode(value.trim())
}
