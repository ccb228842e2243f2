//! Place records returned by nearby search and detail lookups.

use serde::{Deserialize, Serialize};

/// Whether a place is currently open, as far as the provider knows.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum OpenStatus {
    Open,
    Closed,
    #[default]
    Unknown,
}

impl From<Option<bool>> for OpenStatus {
    fn from(open_now: Option<bool>) -> Self {
        match open_now {
            Some(true) => OpenStatus::Open,
            Some(false) => OpenStatus::Closed,
            None => OpenStatus::Unknown,
        }
    }
}

/// One nearby search result, annotated with its distance from the origin.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NearbyPlace {
    /// Provider-assigned opaque identifier.
    pub place_id: String,
    pub name: String,
    pub address: String,
    pub latitude: f64,
    pub longitude: f64,
    /// Average rating; `0.0` when the place has no ratings.
    pub rating: f64,
    pub rating_count: u32,
    pub open_status: OpenStatus,
    pub photo_url: Option<String>,
    /// Great-circle distance from the search origin, in meters.
    pub distance_m: f64,
    /// Short label such as `"350m"` or `"2.3km"`.
    pub distance_text: String,
    /// Category key the search was issued with.
    pub category: String,
}

/// A single review excerpt attached to a [`PlaceDetail`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PlaceReview {
    pub author: String,
    /// Star rating, 1 to 5; `None` when the provider omits it.
    pub rating: Option<u8>,
    pub text: String,
    /// Provider-localized relative time, e.g. "2 weeks ago".
    pub relative_time: String,
}

/// Full detail for one place, fetched on demand.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PlaceDetail {
    pub place_id: String,
    pub name: String,
    pub address: String,
    pub phone: Option<String>,
    pub website: Option<String>,
    /// Deep link into the provider's map UI.
    pub maps_url: Option<String>,
    pub rating: f64,
    pub rating_count: u32,
    pub latitude: f64,
    pub longitude: f64,
    /// One free-text line per weekday; empty when unknown.
    pub opening_hours: Vec<String>,
    pub open_status: OpenStatus,
    /// At most five, in provider order.
    pub reviews: Vec<PlaceReview>,
    /// At most five photo URLs, in provider order.
    pub photos: Vec<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn open_status_from_tri_state() {
        assert_eq!(OpenStatus::from(Some(true)), OpenStatus::Open);
        assert_eq!(OpenStatus::from(Some(false)), OpenStatus::Closed);
        assert_eq!(OpenStatus::from(None), OpenStatus::Unknown);
    }

    #[test]
    fn nearby_place_serializes_open_status_as_string() {
        let place = NearbyPlace {
            place_id: "abc".to_string(),
            name: "Shibuya Animal Clinic".to_string(),
            address: "Shibuya 1-2-3".to_string(),
            latitude: 35.658,
            longitude: 139.701,
            rating: 4.5,
            rating_count: 120,
            open_status: OpenStatus::Unknown,
            photo_url: None,
            distance_m: 350.0,
            distance_text: "350m".to_string(),
            category: "veterinary".to_string(),
        };
        let json: serde_json::Value = serde_json::to_value(&place).expect("serialize");
        assert_eq!(json["open_status"], "unknown");
        assert!(json["photo_url"].is_null());
        assert_eq!(json["distance_text"], "350m");
    }
}
