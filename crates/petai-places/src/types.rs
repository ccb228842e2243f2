//! Places provider response types.
//!
//! Both endpoints wrap their payload in a `{"status": "...", ...}` envelope.
//! Individual place records are decoded one at a time so a single malformed
//! entry never discards the rest of the response.

use serde::{Deserialize, Deserializer};

/// Envelope for the nearby search endpoint. `results` is kept as raw JSON
/// and decoded per record by the client.
#[derive(Debug, Deserialize)]
pub struct NearbySearchResponse {
    pub status: String,
    #[serde(default)]
    pub error_message: Option<String>,
    #[serde(default)]
    pub results: Vec<serde_json::Value>,
}

/// Envelope for the place details endpoint.
#[derive(Debug, Deserialize)]
pub struct DetailsResponse {
    pub status: String,
    #[serde(default)]
    pub error_message: Option<String>,
    #[serde(default)]
    pub result: Option<serde_json::Value>,
}

#[derive(Debug, Clone, Copy, Deserialize)]
pub struct LatLng {
    pub lat: f64,
    pub lng: f64,
}

#[derive(Debug, Clone, Deserialize)]
pub struct Geometry {
    pub location: LatLng,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct OpeningHours {
    #[serde(default)]
    pub open_now: Option<bool>,
    #[serde(default)]
    pub weekday_text: Vec<String>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct RawPhoto {
    pub photo_reference: String,
}

/// One record from a nearby search.
#[derive(Debug, Clone, Deserialize)]
pub struct RawPlace {
    pub place_id: String,
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub vicinity: Option<String>,
    #[serde(default)]
    pub formatted_address: Option<String>,
    pub geometry: Geometry,
    /// Omitted by the provider for places with no ratings.
    #[serde(default)]
    pub rating: Option<f64>,
    #[serde(default)]
    pub user_ratings_total: Option<u32>,
    #[serde(default)]
    pub opening_hours: Option<OpeningHours>,
    #[serde(default)]
    pub photos: Vec<RawPhoto>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct RawReview {
    #[serde(default)]
    pub author_name: String,
    /// Nominally 1 to 5; range is enforced during normalization.
    #[serde(default)]
    pub rating: Option<f64>,
    #[serde(default)]
    pub text: String,
    #[serde(default)]
    pub relative_time_description: String,
}

/// The `result` object of a details lookup.
#[derive(Debug, Clone, Deserialize)]
pub struct RawPlaceDetail {
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub formatted_address: Option<String>,
    #[serde(default)]
    pub formatted_phone_number: Option<String>,
    #[serde(default)]
    pub website: Option<String>,
    /// Deep link into the provider's map UI.
    #[serde(default)]
    pub url: Option<String>,
    #[serde(default)]
    pub rating: Option<f64>,
    #[serde(default)]
    pub user_ratings_total: Option<u32>,
    pub geometry: Geometry,
    #[serde(default)]
    pub opening_hours: Option<OpeningHours>,
    #[serde(default, deserialize_with = "skip_malformed_reviews")]
    pub reviews: Vec<RawReview>,
    #[serde(default)]
    pub photos: Vec<RawPhoto>,
}

/// Decodes reviews one at a time, dropping entries that do not decode so a
/// single bad review never discards the whole detail record.
fn skip_malformed_reviews<'de, D>(deserializer: D) -> Result<Vec<RawReview>, D::Error>
where
    D: Deserializer<'de>,
{
    let values = Option::<Vec<serde_json::Value>>::deserialize(deserializer)?.unwrap_or_default();
    Ok(values
        .into_iter()
        .filter_map(|value| match serde_json::from_value(value) {
            Ok(review) => Some(review),
            Err(e) => {
                tracing::debug!(error = %e, "skipping malformed review");
                None
            }
        })
        .collect())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn detail_keeps_reviews_without_rating_and_skips_malformed_ones() {
        let detail: RawPlaceDetail = serde_json::from_value(serde_json::json!({
            "name": "Paw Clinic",
            "geometry": { "location": { "lat": 35.68, "lng": 139.76 } },
            "reviews": [
                { "author_name": "a", "text": "no stars" },
                { "author_name": 42, "rating": 5 },
                { "author_name": "b", "rating": 4 }
            ]
        }))
        .expect("detail should decode");

        assert_eq!(detail.reviews.len(), 2);
        assert_eq!(detail.reviews[0].author_name, "a");
        assert!(detail.reviews[0].rating.is_none());
        assert_eq!(detail.reviews[1].rating, Some(4.0));
    }

    #[test]
    fn detail_accepts_null_reviews() {
        let detail: RawPlaceDetail = serde_json::from_value(serde_json::json!({
            "geometry": { "location": { "lat": 35.68, "lng": 139.76 } },
            "reviews": null
        }))
        .expect("detail should decode");
        assert!(detail.reviews.is_empty());
    }
}
