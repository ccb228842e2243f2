//! HTTP client for the Places provider's nearby-search and details APIs.
//!
//! Wraps `reqwest` with provider-specific status handling, API key and
//! language management, and typed response decoding. Status `ZERO_RESULTS`
//! is a successful empty answer; every other non-`OK` status surfaces as
//! [`PlacesError::Status`].

use std::time::Duration;

use petai_core::{Coordinate, DEFAULT_PLACES_BASE_URL};
use reqwest::{Client, Url};

use crate::error::PlacesError;
use crate::types::{DetailsResponse, NearbySearchResponse, RawPlace, RawPlaceDetail};

/// Fields requested from the details endpoint.
pub const DETAIL_FIELDS: &str = "name,formatted_address,formatted_phone_number,website,\
opening_hours,reviews,photos,geometry,rating,user_ratings_total,url";

/// Parameters for one nearby search request.
#[derive(Debug, Clone, Copy)]
pub struct NearbyQuery<'a> {
    pub location: Coordinate,
    pub radius_m: u32,
    pub keyword: &'a str,
    pub place_type: Option<&'a str>,
}

/// Client for the Places provider.
///
/// Use [`PlacesClient::new`] for production or
/// [`PlacesClient::with_base_url`] to point at a mock server in tests.
pub struct PlacesClient {
    client: Client,
    api_key: String,
    language: String,
    base_url: Url,
}

impl PlacesClient {
    /// Creates a client pointed at the production Places API.
    ///
    /// # Errors
    ///
    /// Returns [`PlacesError::Http`] if the underlying `reqwest::Client`
    /// cannot be constructed.
    pub fn new(api_key: &str, timeout_secs: u64, language: &str) -> Result<Self, PlacesError> {
        Self::with_base_url(api_key, timeout_secs, language, DEFAULT_PLACES_BASE_URL)
    }

    /// Creates a client with a custom base URL (for testing with wiremock).
    ///
    /// # Errors
    ///
    /// Returns [`PlacesError::Http`] if the `reqwest::Client` cannot be
    /// constructed, or [`PlacesError::InvalidBaseUrl`] if `base_url` does
    /// not parse.
    pub fn with_base_url(
        api_key: &str,
        timeout_secs: u64,
        language: &str,
        base_url: &str,
    ) -> Result<Self, PlacesError> {
        let client = Client::builder()
            .timeout(Duration::from_secs(timeout_secs))
            .connect_timeout(Duration::from_secs(5))
            .user_agent("petai/0.1 (nearby-search)")
            .build()?;

        // Endpoint paths are joined relative to the base, so it must end
        // with exactly one slash.
        let normalised = format!("{}/", base_url.trim_end_matches('/'));
        let base_url = Url::parse(&normalised).map_err(|e| PlacesError::InvalidBaseUrl {
            url: base_url.to_string(),
            reason: e.to_string(),
        })?;

        Ok(Self {
            client,
            api_key: api_key.to_owned(),
            language: language.to_owned(),
            base_url,
        })
    }

    /// Runs a nearby search and returns the decoded place records in
    /// provider order.
    ///
    /// Records missing an id or geometry are skipped. `ZERO_RESULTS`
    /// yields an empty vector.
    ///
    /// # Errors
    ///
    /// - [`PlacesError::Status`] if the provider reports a failure status.
    /// - [`PlacesError::Http`] on network failure or non-2xx HTTP status.
    /// - [`PlacesError::Deserialize`] if the envelope is malformed.
    pub async fn nearby_search(&self, query: &NearbyQuery<'_>) -> Result<Vec<RawPlace>, PlacesError> {
        let location = query.location.to_string();
        let radius = query.radius_m.to_string();
        let mut params = vec![
            ("location", location.as_str()),
            ("radius", radius.as_str()),
            ("keyword", query.keyword),
        ];
        if let Some(place_type) = query.place_type {
            params.push(("type", place_type));
        }

        let url = self.build_url("nearbysearch/json", &params);
        let body = self.request_json(url, "nearbysearch").await?;
        let envelope: NearbySearchResponse =
            serde_json::from_value(body).map_err(|e| PlacesError::Deserialize {
                context: "nearbysearch".to_string(),
                source: e,
            })?;

        match envelope.status.as_str() {
            "OK" => {}
            "ZERO_RESULTS" => return Ok(Vec::new()),
            _ => {
                return Err(PlacesError::Status {
                    status: envelope.status,
                    message: envelope
                        .error_message
                        .unwrap_or_else(|| "no error message".to_string()),
                })
            }
        }

        let places = envelope
            .results
            .into_iter()
            .filter_map(|v| match serde_json::from_value::<RawPlace>(v) {
                Ok(place) => Some(place),
                Err(e) => {
                    tracing::debug!(error = %e, "skipping malformed nearby search record");
                    None
                }
            })
            .collect();

        Ok(places)
    }

    /// Fetches the detail record for `place_id`.
    ///
    /// # Errors
    ///
    /// - [`PlacesError::Status`] for any status other than `OK`
    ///   (including `NOT_FOUND` and `INVALID_REQUEST`).
    /// - [`PlacesError::Http`] on network failure or non-2xx HTTP status.
    /// - [`PlacesError::Deserialize`] if the envelope or result is malformed.
    pub async fn place_details(&self, place_id: &str) -> Result<RawPlaceDetail, PlacesError> {
        let url = self.build_url(
            "details/json",
            &[("place_id", place_id), ("fields", DETAIL_FIELDS)],
        );
        let body = self.request_json(url, "details").await?;
        let envelope: DetailsResponse =
            serde_json::from_value(body).map_err(|e| PlacesError::Deserialize {
                context: format!("details(place_id={place_id})"),
                source: e,
            })?;

        if envelope.status != "OK" {
            return Err(PlacesError::Status {
                status: envelope.status,
                message: envelope
                    .error_message
                    .unwrap_or_else(|| "no error message".to_string()),
            });
        }

        let result = envelope.result.unwrap_or(serde_json::Value::Null);
        serde_json::from_value(result).map_err(|e| PlacesError::Deserialize {
            context: format!("details(place_id={place_id}).result"),
            source: e,
        })
    }

    /// Builds a fetchable image URL for a photo reference.
    #[must_use]
    pub fn photo_url(&self, photo_reference: &str, max_width: u32) -> String {
        let mut url = self
            .base_url
            .join("photo")
            .unwrap_or_else(|_| self.base_url.clone());
        url.query_pairs_mut()
            .append_pair("maxwidth", &max_width.to_string())
            .append_pair("photo_reference", photo_reference)
            .append_pair("key", &self.api_key);
        url.to_string()
    }

    /// Builds an endpoint URL with the caller's parameters followed by
    /// `language` and `key`, all percent-encoded.
    fn build_url(&self, endpoint: &str, extra: &[(&str, &str)]) -> Url {
        let mut url = self
            .base_url
            .join(endpoint)
            .unwrap_or_else(|_| self.base_url.clone());
        {
            let mut pairs = url.query_pairs_mut();
            for (k, v) in extra {
                pairs.append_pair(k, v);
            }
            pairs.append_pair("language", &self.language);
            pairs.append_pair("key", &self.api_key);
        }
        url
    }

    /// Sends a GET request, asserts a 2xx HTTP status, and parses the body
    /// as JSON. `context` names the endpoint in errors instead of the URL,
    /// which contains the API key.
    async fn request_json(&self, url: Url, context: &str) -> Result<serde_json::Value, PlacesError> {
        let response = self
            .client
            .get(url)
            .send()
            .await
            .and_then(reqwest::Response::error_for_status)
            .map_err(reqwest::Error::without_url)?;
        let body = response.text().await.map_err(reqwest::Error::without_url)?;
        serde_json::from_str(&body).map_err(|e| PlacesError::Deserialize {
            context: context.to_string(),
            source: e,
        })
    }
}

#[cfg(test)]
#[path = "client_test.rs"]
mod tests;
