//! `track` and `stats` command handlers over the local analytics log.

use petai_analytics::{InteractionAnalytics, JsonlEventStore};
use petai_core::{AppConfig, NewEvent};

async fn open_analytics(config: &AppConfig) -> anyhow::Result<InteractionAnalytics<JsonlEventStore>> {
    let store = JsonlEventStore::open(config.analytics_path.clone()).await?;
    Ok(InteractionAnalytics::new(store))
}

/// Appends one event to the log at `PETAI_ANALYTICS_PATH`.
///
/// # Errors
///
/// Returns an error if the log cannot be opened or written.
pub(crate) async fn run_track(config: &AppConfig, event: NewEvent) -> anyhow::Result<()> {
    let analytics = open_analytics(config).await?;
    let recorded = analytics.record(event).await?;
    println!(
        "recorded {} ({}) in {}",
        recorded.id,
        recorded.kind,
        analytics.store().path().display()
    );
    Ok(())
}

/// Prints the aggregated stats, as a table or as JSON.
///
/// # Errors
///
/// Returns an error if the log cannot be read.
pub(crate) async fn run_stats(config: &AppConfig, json: bool) -> anyhow::Result<()> {
    let stats = open_analytics(config).await?.stats().await?;

    if json {
        println!("{}", serde_json::to_string_pretty(&stats)?);
        return Ok(());
    }

    println!("Total events: {}", stats.total_events);
    if stats.by_category.is_empty() {
        println!("no categorized events recorded yet");
    } else {
        println!();
        println!(
            "{:<16}{:<8}{:<8}{:<8}{:<8}{:<8}TOTAL",
            "CATEGORY", "CHAT", "PAGE", "MAP", "CALL", "ROUTE"
        );
        for row in &stats.by_category {
            println!(
                "{:<16}{:<8}{:<8}{:<8}{:<8}{:<8}{}",
                row.category_label,
                row.chat_recommendations,
                row.page_clicks,
                row.map_clicks,
                row.call_clicks,
                row.direction_clicks,
                row.total_interactions
            );
        }
    }

    if !stats.daily_counts.is_empty() {
        println!();
        println!("{:<12}EVENTS", "DATE");
        for day in &stats.daily_counts {
            println!("{:<12}{}", day.date.to_string(), day.count);
        }
    }
    Ok(())
}
