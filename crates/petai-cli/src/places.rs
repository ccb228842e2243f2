//! `nearby` and `place` command handlers.

use anyhow::Context;
use petai_core::{AppConfig, Coordinate, OpenStatus, SearchCategory};
use petai_places::ProximitySearch;

fn open_status_text(status: OpenStatus) -> &'static str {
    match status {
        OpenStatus::Open => "open",
        OpenStatus::Closed => "closed",
        OpenStatus::Unknown => "-",
    }
}

pub(crate) fn empty_result_message(category: SearchCategory, origin: Coordinate) -> String {
    match category {
        SearchCategory::All => format!("no places found near {origin}"),
        other => format!("no places found near {origin} (category: {})", other.key()),
    }
}

/// Prints places near (`lat`, `lng`), nearest first.
///
/// # Errors
///
/// Returns an error if the coordinate is out of range or the search client
/// cannot be built. Provider failures print an empty result instead.
pub(crate) async fn run_nearby(
    config: &AppConfig,
    lat: f64,
    lng: f64,
    category: &str,
    radius: Option<u32>,
) -> anyhow::Result<()> {
    let origin = Coordinate::try_new(lat, lng)?;
    anyhow::ensure!(radius != Some(0), "--radius must be greater than zero");
    let search = ProximitySearch::from_app_config(config)?;

    let resolved = ProximitySearch::resolve_category(category);
    let places = search.search(Some(origin), resolved.key(), radius).await;
    if places.is_empty() {
        println!("{}", empty_result_message(resolved, origin));
        return Ok(());
    }

    println!("{:<9}{:<8}{:<8}{:<32}ADDRESS", "DIST", "RATING", "OPEN", "NAME");
    for place in &places {
        println!(
            "{:<9}{:<8.1}{:<8}{:<32}{}",
            place.distance_text,
            place.rating,
            open_status_text(place.open_status),
            place.name,
            place.address
        );
    }
    println!("\n{} result(s)", places.len());
    Ok(())
}

/// Prints full detail for `place_id`.
///
/// # Errors
///
/// Returns an error if the search client cannot be built or the place is
/// unavailable.
pub(crate) async fn run_place(config: &AppConfig, place_id: &str) -> anyhow::Result<()> {
    let search = ProximitySearch::from_app_config(config)?;
    let detail = search
        .place_detail(place_id)
        .await
        .with_context(|| format!("place '{place_id}' is unavailable"))?;

    println!("{}", detail.name);
    println!("Address: {}", detail.address);
    if let Some(phone) = &detail.phone {
        println!("Phone:   {phone}");
    }
    if let Some(website) = &detail.website {
        println!("Web:     {website}");
    }
    if let Some(maps_url) = &detail.maps_url {
        println!("Map:     {maps_url}");
    }
    println!(
        "Rating:  {:.1} ({} reviews), {}",
        detail.rating,
        detail.rating_count,
        open_status_text(detail.open_status)
    );
    if !detail.opening_hours.is_empty() {
        println!();
        for line in &detail.opening_hours {
            println!("  {line}");
        }
    }
    if !detail.reviews.is_empty() {
        println!();
        for review in &detail.reviews {
            let stars = review
                .rating
                .map_or_else(|| "-".to_string(), |r| r.to_string());
            println!("  [{stars}] {} ({})", review.author, review.relative_time);
            if !review.text.is_empty() {
                println!("      {}", review.text);
            }
        }
    }
    Ok(())
}
