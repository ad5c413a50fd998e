//! Listing summaries for browse pages and the navbar search

use serde::{Deserialize, Serialize};

use crate::models::event::Event;
use crate::models::venue::{DiningVenue, PlayVenue};
use crate::types::BookingType;

/// Minimal card data for any bookable listing
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Listing {
    pub kind: BookingType,
    pub id: String,
    pub name: String,
    pub slug: String,
    pub city: String,
}

impl Listing {
    /// Case-insensitive match of every whitespace-separated term against
    /// name or city
    pub fn matches(&self, query: &str) -> bool {
        let name = self.name.to_lowercase();
        let city = self.city.to_lowercase();
        let mut terms = query.split_whitespace().peekable();
        if terms.peek().is_none() {
            return false;
        }
        terms.all(|term| {
            let term = term.to_lowercase();
            name.contains(&term) || city.contains(&term)
        })
    }

    /// Route path of the listing's detail page
    pub fn path(&self) -> String {
        let prefix = match self.kind {
            BookingType::Dining => "dining",
            BookingType::Play => "play",
            BookingType::Event => "events",
        };
        format!("/{prefix}/{}", self.slug)
    }
}

impl From<&Event> for Listing {
    fn from(event: &Event) -> Self {
        Self {
            kind: BookingType::Event,
            id: event.id.clone(),
            name: event.draft.title.clone(),
            slug: event.draft.slug.clone(),
            city: event.draft.location.city.clone(),
        }
    }
}

impl From<&PlayVenue> for Listing {
    fn from(venue: &PlayVenue) -> Self {
        Self {
            kind: BookingType::Play,
            id: venue.id.clone(),
            name: venue.draft.basics.name.clone(),
            slug: venue.draft.basics.slug.clone(),
            city: venue.draft.basics.location.city.clone(),
        }
    }
}

impl From<&DiningVenue> for Listing {
    fn from(venue: &DiningVenue) -> Self {
        Self {
            kind: BookingType::Dining,
            id: venue.id.clone(),
            name: venue.draft.basics.name.clone(),
            slug: venue.draft.basics.slug.clone(),
            city: venue.draft.basics.location.city.clone(),
        }
    }
}
