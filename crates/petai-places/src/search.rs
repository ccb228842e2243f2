//! Nearby place search with distance ranking.
//!
//! [`ProximitySearch`] is the soft-fail layer over [`PlacesClient`]: every
//! provider or transport error is logged and turned into an empty list (or
//! `None` for detail lookups). Nothing here retries; a manual refresh is the
//! caller's retry.

use petai_core::{AppConfig, Coordinate, NearbyPlace, PlaceDetail, SearchCategory};

use crate::client::{NearbyQuery, PlacesClient};
use crate::error::PlacesError;
use crate::normalize::{
    normalize_detail, normalize_nearby, sort_by_distance, DETAIL_PHOTO_MAX_WIDTH,
    SEARCH_PHOTO_MAX_WIDTH,
};

pub const DEFAULT_RADIUS_M: u32 = 5_000;

pub struct ProximitySearch {
    client: PlacesClient,
    default_radius_m: u32,
}

impl ProximitySearch {
    #[must_use]
    pub fn new(client: PlacesClient, default_radius_m: u32) -> Self {
        Self {
            client,
            default_radius_m,
        }
    }

    /// Builds the provider client and search layer from application config.
    ///
    /// A missing API key is allowed (development only; config loading
    /// enforces it in production) and makes every search come back empty.
    ///
    /// # Errors
    ///
    /// Returns [`PlacesError`] if the HTTP client cannot be built or the
    /// configured base URL is invalid.
    pub fn from_app_config(config: &AppConfig) -> Result<Self, PlacesError> {
        let api_key = config.places_api_key.as_deref().unwrap_or_else(|| {
            tracing::warn!("PETAI_PLACES_API_KEY not set; nearby search will return no results");
            ""
        });
        let client = PlacesClient::with_base_url(
            api_key,
            config.places_timeout_secs,
            &config.places_language,
            &config.places_base_url,
        )?;
        Ok(Self::new(client, config.search_radius_m))
    }

    /// Maps a category key to its search category. Unknown keys fall back
    /// to [`SearchCategory::All`] and are logged.
    #[must_use]
    pub fn resolve_category(key: &str) -> SearchCategory {
        SearchCategory::from_key(key).unwrap_or_else(|| {
            tracing::warn!(category = key, "unknown category; searching all categories");
            SearchCategory::All
        })
    }

    /// Searches for places near `origin`, nearest first.
    ///
    /// Returns an empty list when `origin` is `None`, when the provider has
    /// no results, and on any provider or transport failure.
    pub async fn search(
        &self,
        origin: Option<Coordinate>,
        category: &str,
        radius_m: Option<u32>,
    ) -> Vec<NearbyPlace> {
        let Some(origin) = origin else {
            tracing::debug!("no origin available; skipping nearby search");
            return Vec::new();
        };

        let category = Self::resolve_category(category);
        let query = NearbyQuery {
            location: origin,
            radius_m: radius_m.unwrap_or(self.default_radius_m),
            keyword: category.keyword(),
            place_type: category.place_type(),
        };

        let raw = match self.client.nearby_search(&query).await {
            Ok(raw) => raw,
            Err(e) => {
                tracing::warn!(error = %e, category = %category, "nearby search failed");
                return Vec::new();
            }
        };

        let mut places: Vec<NearbyPlace> = raw
            .into_iter()
            .map(|p| {
                normalize_nearby(p, origin, category.key(), |reference| {
                    self.client.photo_url(reference, SEARCH_PHOTO_MAX_WIDTH)
                })
            })
            .collect();
        sort_by_distance(&mut places);

        tracing::debug!(
            category = %category,
            count = places.len(),
            "nearby search complete"
        );
        places
    }

    /// Looks up full detail for one place.
    ///
    /// Returns `None` for a blank id and on any failure; callers treat
    /// `None` as "unavailable" without distinguishing the cause.
    pub async fn place_detail(&self, place_id: &str) -> Option<PlaceDetail> {
        let place_id = place_id.trim();
        if place_id.is_empty() {
            return None;
        }

        match self.client.place_details(place_id).await {
            Ok(raw) => Some(normalize_detail(raw, place_id, |reference| {
                self.client.photo_url(reference, DETAIL_PHOTO_MAX_WIDTH)
            })),
            Err(e) => {
                tracing::warn!(error = %e, place_id, "place detail lookup failed");
                None
            }
        }
    }
}
