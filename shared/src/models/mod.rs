//! Data models
//!
//! Mirrored from the marketplace backend. Drafts are the bodies the admin
//! forms build and submit wholesale; read models add the backend-owned `id`.

pub mod booking;
pub mod event;
pub mod listing;
pub mod location;
pub mod media;
pub mod offer;
pub mod partner;
pub mod region;
pub mod venue;

// Re-exports
pub use booking::*;
pub use event::*;
pub use listing::*;
pub use location::*;
pub use media::*;
pub use offer::*;
pub use partner::*;
pub use region::*;
pub use venue::*;
