//! Location Model

use serde::{Deserialize, Serialize};

use crate::error::{ValidationError, ValidationResult};
use crate::validation::{
    MAX_ADDRESS_LEN, MAX_NAME_LEN, MAX_SHORT_TEXT_LEN, MAX_URL_LEN, validate_optional_text,
    validate_required_text,
};

/// Where a venue, outlet or event takes place
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Location {
    pub venue_name: String,
    pub address: String,
    pub city: String,
    pub state: String,
    #[serde(default, rename = "lat", skip_serializing_if = "Option::is_none")]
    pub latitude: Option<f64>,
    #[serde(default, rename = "long", skip_serializing_if = "Option::is_none")]
    pub longitude: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub map_url: Option<String>,
}

impl Location {
    pub fn validate(&self) -> ValidationResult {
        validate_required_text(&self.venue_name, "location.venue_name", MAX_NAME_LEN)?;
        validate_required_text(&self.address, "location.address", MAX_ADDRESS_LEN)?;
        validate_required_text(&self.city, "location.city", MAX_SHORT_TEXT_LEN)?;
        validate_required_text(&self.state, "location.state", MAX_SHORT_TEXT_LEN)?;
        validate_optional_text(&self.map_url, "location.map_url", MAX_URL_LEN)?;

        if let Some(lat) = self.latitude
            && !(-90.0..=90.0).contains(&lat)
        {
            return Err(ValidationError::invalid("location.lat", "out of range"));
        }
        if let Some(long) = self.longitude
            && !(-180.0..=180.0).contains(&long)
        {
            return Err(ValidationError::invalid("location.long", "out of range"));
        }
        Ok(())
    }

    /// `"Venue, City"` as shown on listing cards
    pub fn short_label(&self) -> String {
        match (self.venue_name.trim(), self.city.trim()) {
            ("", city) => city.to_string(),
            (venue, "") => venue.to_string(),
            (venue, city) => format!("{venue}, {city}"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn location() -> Location {
        Location {
            venue_name: "Turf Park".into(),
            address: "12 Ring Road".into(),
            city: "Pune".into(),
            state: "Maharashtra".into(),
            latitude: Some(18.52),
            longitude: Some(73.85),
            map_url: None,
        }
    }

    #[test]
    fn test_location_validate() {
        assert!(location().validate().is_ok());

        let mut missing_city = location();
        missing_city.city.clear();
        assert_eq!(missing_city.validate().unwrap_err().field(), "location.city");

        let mut bad_lat = location();
        bad_lat.latitude = Some(120.0);
        assert_eq!(bad_lat.validate().unwrap_err().field(), "location.lat");
    }

    #[test]
    fn test_location_serde_field_names() {
        let json = serde_json::to_value(location()).unwrap();
        assert_eq!(json["lat"], 18.52);
        assert_eq!(json["long"], 73.85);
        assert!(json.get("map_url").is_none());
    }

    #[test]
    fn test_location_short_label() {
        assert_eq!(location().short_label(), "Turf Park, Pune");
        let mut l = location();
        l.venue_name.clear();
        assert_eq!(l.short_label(), "Pune");
    }
}
