//! Conversion from raw provider records to [`NearbyPlace`] and
//! [`PlaceDetail`].
//!
//! Optional provider fields get documented defaults here: rating `0.0`,
//! rating count `0`, open status `Unknown`, and no photo.

use petai_core::{
    distance_meters, format_distance, Coordinate, NearbyPlace, OpenStatus, PlaceDetail,
    PlaceReview,
};

use crate::types::{RawPlace, RawPlaceDetail};

/// Maximum reviews and photos kept on a [`PlaceDetail`].
pub const DETAIL_ITEM_LIMIT: usize = 5;

pub const SEARCH_PHOTO_MAX_WIDTH: u32 = 400;
pub const DETAIL_PHOTO_MAX_WIDTH: u32 = 800;

/// Normalizes one nearby search record relative to `origin`.
///
/// `photo_url` turns a provider photo reference into a fetchable URL; it
/// is only called when the record has at least one photo.
pub fn normalize_nearby<F>(
    raw: RawPlace,
    origin: Coordinate,
    category: &str,
    photo_url: F,
) -> NearbyPlace
where
    F: Fn(&str) -> String,
{
    let location = Coordinate {
        lat: raw.geometry.location.lat,
        lng: raw.geometry.location.lng,
    };
    let distance_m = distance_meters(origin, location);

    let address = raw
        .vicinity
        .filter(|s| !s.is_empty())
        .or(raw.formatted_address)
        .unwrap_or_default();

    NearbyPlace {
        place_id: raw.place_id,
        name: raw.name,
        address,
        latitude: location.lat,
        longitude: location.lng,
        rating: raw.rating.unwrap_or(0.0),
        rating_count: raw.user_ratings_total.unwrap_or(0),
        open_status: OpenStatus::from(raw.opening_hours.and_then(|h| h.open_now)),
        photo_url: raw.photos.first().map(|p| photo_url(&p.photo_reference)),
        distance_m,
        distance_text: format_distance(distance_m),
        category: category.to_string(),
    }
}

/// Normalizes a details record, truncating reviews and photos to
/// [`DETAIL_ITEM_LIMIT`] in provider order.
pub fn normalize_detail<F>(raw: RawPlaceDetail, place_id: &str, photo_url: F) -> PlaceDetail
where
    F: Fn(&str) -> String,
{
    let (opening_hours, open_now) = raw
        .opening_hours
        .map_or((Vec::new(), None), |h| (h.weekday_text, h.open_now));

    let reviews = raw
        .reviews
        .into_iter()
        .take(DETAIL_ITEM_LIMIT)
        .map(|r| PlaceReview {
            author: r.author_name,
            rating: review_stars(r.rating),
            text: r.text,
            relative_time: r.relative_time_description,
        })
        .collect();

    let photos = raw
        .photos
        .iter()
        .take(DETAIL_ITEM_LIMIT)
        .map(|p| photo_url(&p.photo_reference))
        .collect();

    PlaceDetail {
        place_id: place_id.to_string(),
        name: raw.name,
        address: raw.formatted_address.unwrap_or_default(),
        phone: raw.formatted_phone_number.filter(|s| !s.is_empty()),
        website: raw.website.filter(|s| !s.is_empty()),
        maps_url: raw.url.filter(|s| !s.is_empty()),
        rating: raw.rating.unwrap_or(0.0),
        rating_count: raw.user_ratings_total.unwrap_or(0),
        latitude: raw.geometry.location.lat,
        longitude: raw.geometry.location.lng,
        opening_hours,
        open_status: OpenStatus::from(open_now),
        reviews,
        photos,
    }
}

/// Rounds a provider review rating to whole stars in `1..=5`. Missing or
/// non-finite ratings stay absent.
// Clamped to 1..=5 before the cast, so it cannot truncate.
#[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
fn review_stars(rating: Option<f64>) -> Option<u8> {
    rating
        .filter(|r| r.is_finite())
        .map(|r| r.round().clamp(1.0, 5.0) as u8)
}

/// Sorts places nearest-first. The sort is stable, so equal distances keep
/// provider order.
pub fn sort_by_distance(places: &mut [NearbyPlace]) {
    places.sort_by(|a, b| a.distance_m.total_cmp(&b.distance_m));
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::RawPlace;

    const ORIGIN: Coordinate = Coordinate {
        lat: 35.681_236,
        lng: 139.767_125,
    };

    fn raw(json: serde_json::Value) -> RawPlace {
        serde_json::from_value(json).expect("raw place should decode")
    }

    fn fake_photo_url(reference: &str) -> String {
        format!("https://photos.example.com/{reference}")
    }

    #[test]
    fn missing_optional_fields_use_defaults() {
        let place = normalize_nearby(
            raw(serde_json::json!({
                "place_id": "p1",
                "name": "Paw Hotel",
                "geometry": { "location": { "lat": 35.681_236, "lng": 139.767_125 } }
            })),
            ORIGIN,
            "hotel",
            fake_photo_url,
        );
        assert!(place.rating.abs() < f64::EPSILON);
        assert_eq!(place.rating_count, 0);
        assert_eq!(place.open_status, OpenStatus::Unknown);
        assert!(place.photo_url.is_none());
        assert_eq!(place.address, "");
        assert_eq!(place.distance_text, "0m");
        assert_eq!(place.category, "hotel");
    }

    #[test]
    fn address_prefers_vicinity_then_formatted_address() {
        let with_vicinity = normalize_nearby(
            raw(serde_json::json!({
                "place_id": "p1",
                "vicinity": "Chiyoda 1-1",
                "formatted_address": "1-1 Chiyoda, Tokyo, Japan",
                "geometry": { "location": { "lat": 35.0, "lng": 139.0 } }
            })),
            ORIGIN,
            "all",
            fake_photo_url,
        );
        assert_eq!(with_vicinity.address, "Chiyoda 1-1");

        let formatted_only = normalize_nearby(
            raw(serde_json::json!({
                "place_id": "p2",
                "formatted_address": "1-1 Chiyoda, Tokyo, Japan",
                "geometry": { "location": { "lat": 35.0, "lng": 139.0 } }
            })),
            ORIGIN,
            "all",
            fake_photo_url,
        );
        assert_eq!(formatted_only.address, "1-1 Chiyoda, Tokyo, Japan");
    }

    #[test]
    fn photo_url_uses_first_photo_only() {
        let place = normalize_nearby(
            raw(serde_json::json!({
                "place_id": "p1",
                "geometry": { "location": { "lat": 35.0, "lng": 139.0 } },
                "photos": [{ "photo_reference": "first" }, { "photo_reference": "second" }],
                "opening_hours": { "open_now": false }
            })),
            ORIGIN,
            "all",
            fake_photo_url,
        );
        assert_eq!(
            place.photo_url.as_deref(),
            Some("https://photos.example.com/first")
        );
        assert_eq!(place.open_status, OpenStatus::Closed);
    }

    #[test]
    fn review_stars_clamps_to_range() {
        assert_eq!(review_stars(Some(4.0)), Some(4));
        assert_eq!(review_stars(Some(4.6)), Some(5));
        assert_eq!(review_stars(Some(0.0)), Some(1));
        assert_eq!(review_stars(Some(9.0)), Some(5));
        assert_eq!(review_stars(Some(-3.0)), Some(1));
        assert_eq!(review_stars(Some(f64::NAN)), None);
        assert_eq!(review_stars(None), None);
    }

    #[test]
    fn sort_by_distance_is_stable_for_ties() {
        let make = |id: &str, d: f64| NearbyPlace {
            place_id: id.to_string(),
            name: id.to_string(),
            address: String::new(),
            latitude: 0.0,
            longitude: 0.0,
            rating: 0.0,
            rating_count: 0,
            open_status: OpenStatus::Unknown,
            photo_url: None,
            distance_m: d,
            distance_text: format_distance(d),
            category: "all".to_string(),
        };
        let mut places = vec![make("far", 900.0), make("tie-a", 100.0), make("tie-b", 100.0)];
        sort_by_distance(&mut places);
        let ids: Vec<&str> = places.iter().map(|p| p.place_id.as_str()).collect();
        assert_eq!(ids, ["tie-a", "tie-b", "far"]);
    }
}
