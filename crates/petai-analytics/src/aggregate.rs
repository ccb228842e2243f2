//! Pure aggregation over the full event log.

use std::collections::{BTreeMap, HashMap};

use chrono::NaiveDate;
use petai_core::{
    category_label, AnalyticsEvent, AnalyticsStats, CategoryStat, DailyCount, EventKind,
};

/// Number of events in the recent feed.
pub const RECENT_EVENTS_LIMIT: usize = 50;
/// Number of most recent active days kept in the daily series.
pub const DAILY_WINDOW_DAYS: usize = 30;

/// Aggregates an event log into dashboard statistics.
///
/// - `by_category`: one row per distinct category, sorted by total
///   descending; equal totals keep the order in which the category first
///   appears in the log. Events without a category are counted only in
///   `total_events` and the daily series.
/// - `recent_events`: the latest [`RECENT_EVENTS_LIMIT`] events by
///   timestamp, newest first.
/// - `daily_counts`: per-UTC-day counts for the latest
///   [`DAILY_WINDOW_DAYS`] days that have events, ascending. Empty days are
///   not filled in.
#[must_use]
pub fn compute_stats(events: &[AnalyticsEvent]) -> AnalyticsStats {
    AnalyticsStats {
        total_events: events.len() as u64,
        by_category: category_breakdown(events),
        recent_events: recent_events(events),
        daily_counts: daily_counts(events),
    }
}

fn category_breakdown(events: &[AnalyticsEvent]) -> Vec<CategoryStat> {
    let mut index: HashMap<&str, usize> = HashMap::new();
    let mut rows: Vec<CategoryStat> = Vec::new();

    for event in events {
        let Some(category) = event.category.as_deref() else {
            continue;
        };
        let slot = *index.entry(category).or_insert_with(|| {
            rows.push(CategoryStat {
                category: category.to_string(),
                category_label: category_label(category).to_string(),
                chat_recommendations: 0,
                page_clicks: 0,
                map_clicks: 0,
                call_clicks: 0,
                direction_clicks: 0,
                total_interactions: 0,
            });
            rows.len() - 1
        });

        let row = &mut rows[slot];
        match event.kind {
            EventKind::ChatRecommendation => row.chat_recommendations += 1,
            EventKind::BusinessClick => row.page_clicks += 1,
            EventKind::BusinessMapClick => row.map_clicks += 1,
            EventKind::BusinessCallClick => row.call_clicks += 1,
            EventKind::BusinessDirectionClick => row.direction_clicks += 1,
        }
        row.total_interactions += 1;
    }

    // Stable: ties stay in first-seen order.
    rows.sort_by(|a, b| b.total_interactions.cmp(&a.total_interactions));
    rows
}

fn recent_events(events: &[AnalyticsEvent]) -> Vec<AnalyticsEvent> {
    let mut ordered: Vec<&AnalyticsEvent> = events.iter().collect();
    ordered.sort_by_key(|e| e.timestamp);
    ordered
        .into_iter()
        .rev()
        .take(RECENT_EVENTS_LIMIT)
        .cloned()
        .collect()
}

fn daily_counts(events: &[AnalyticsEvent]) -> Vec<DailyCount> {
    let mut per_day: BTreeMap<NaiveDate, u64> = BTreeMap::new();
    for event in events {
        *per_day.entry(event.timestamp.date_naive()).or_insert(0) += 1;
    }

    let skip = per_day.len().saturating_sub(DAILY_WINDOW_DAYS);
    per_day
        .into_iter()
        .skip(skip)
        .map(|(date, count)| DailyCount { date, count })
        .collect()
}

#[cfg(test)]
#[path = "aggregate_test.rs"]
mod tests;
