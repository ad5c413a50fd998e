//! Booking Client - HTTP client for the marketplace backend
//!
//! Provides the request wrapper, typed endpoint modules, the signed-in
//! session, and the client-side state that sits between a booking screen and
//! checkout (checkout store, submit guard, debounced search).

pub mod api;
pub mod checkout;
pub mod config;
pub mod error;
pub mod guard;
pub mod http;
pub mod search;
pub mod session;

pub use checkout::CheckoutStore;
pub use config::ClientConfig;
pub use error::{ClientError, ClientResult};
pub use guard::{SubmitGuard, SubmitPermit};
pub use http::HttpClient;
pub use search::{CatalogSource, SearchDispatcher, SearchResults, SearchSource};
pub use session::{Session, SessionStorage, SessionStore};

// Re-export shared types for convenience
pub use shared::client::{LoginResponse, UserProfile};
pub use shared::ApiResponse;
