//! Interaction analytics event and report types.
//!
//! Wire payloads use camelCase field names and `type` for the event kind so
//! dashboards that already read the analytics endpoint keep working.

use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};

use crate::error::CoreError;

/// The closed set of interactions that can be tracked.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum EventKind {
    /// The chat assistant recommended a business category.
    ChatRecommendation,
    /// A business detail page was opened.
    BusinessClick,
    BusinessMapClick,
    BusinessCallClick,
    BusinessDirectionClick,
}

impl EventKind {
    pub const ALL_VARIANTS: [EventKind; 5] = [
        EventKind::ChatRecommendation,
        EventKind::BusinessClick,
        EventKind::BusinessMapClick,
        EventKind::BusinessCallClick,
        EventKind::BusinessDirectionClick,
    ];

    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            EventKind::ChatRecommendation => "chat_recommendation",
            EventKind::BusinessClick => "business_click",
            EventKind::BusinessMapClick => "business_map_click",
            EventKind::BusinessCallClick => "business_call_click",
            EventKind::BusinessDirectionClick => "business_direction_click",
        }
    }
}

impl std::fmt::Display for EventKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl std::str::FromStr for EventKind {
    type Err = CoreError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL_VARIANTS
            .into_iter()
            .find(|k| k.as_str() == s)
            .ok_or_else(|| CoreError::UnknownEventKind(s.to_string()))
    }
}

/// Client-supplied fields of an interaction, before id and timestamp are
/// assigned.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NewEvent {
    #[serde(rename = "type")]
    pub kind: EventKind,
    #[serde(default)]
    pub category: Option<String>,
    #[serde(default)]
    pub business_name: Option<String>,
    /// UI origin of the interaction, e.g. `"chat"` or `"business_list"`.
    pub source: String,
}

/// A recorded interaction in the append-only event log.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AnalyticsEvent {
    pub id: String,
    #[serde(rename = "type")]
    pub kind: EventKind,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub category: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub business_name: Option<String>,
    pub source: String,
    pub timestamp: DateTime<Utc>,
}

impl AnalyticsEvent {
    /// Stamps a [`NewEvent`] with an id and creation time.
    #[must_use]
    pub fn from_new(new: NewEvent, id: String, timestamp: DateTime<Utc>) -> Self {
        Self {
            id,
            kind: new.kind,
            category: new.category,
            business_name: new.business_name,
            source: new.source,
            timestamp,
        }
    }
}

/// Per-category interaction breakdown. Derived on every stats request.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CategoryStat {
    pub category: String,
    pub category_label: String,
    pub chat_recommendations: u64,
    pub page_clicks: u64,
    pub map_clicks: u64,
    pub call_clicks: u64,
    pub direction_clicks: u64,
    pub total_interactions: u64,
}

/// Number of events recorded on one UTC calendar day.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DailyCount {
    pub date: NaiveDate,
    pub count: u64,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AnalyticsStats {
    pub total_events: u64,
    pub by_category: Vec<CategoryStat>,
    /// Newest first.
    pub recent_events: Vec<AnalyticsEvent>,
    /// Ascending by date; only days with at least one event.
    pub daily_counts: Vec<DailyCount>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn new_event_deserializes_wire_shape() {
        let json = serde_json::json!({
            "type": "business_call_click",
            "category": "grooming",
            "businessName": "Trim Salon Paw",
            "source": "business_detail"
        });
        let event: NewEvent = serde_json::from_value(json).expect("deserialize");
        assert_eq!(event.kind, EventKind::BusinessCallClick);
        assert_eq!(event.business_name.as_deref(), Some("Trim Salon Paw"));
    }

    #[test]
    fn new_event_rejects_unknown_kind() {
        let json = serde_json::json!({ "type": "page_view", "source": "web" });
        assert!(serde_json::from_value::<NewEvent>(json).is_err());
    }

    #[test]
    fn new_event_optional_fields_default_to_none() {
        let json = serde_json::json!({ "type": "chat_recommendation", "source": "chat" });
        let event: NewEvent = serde_json::from_value(json).expect("deserialize");
        assert!(event.category.is_none());
        assert!(event.business_name.is_none());
    }

    #[test]
    fn event_kind_from_str_matches_wire_names() {
        for kind in EventKind::ALL_VARIANTS {
            assert_eq!(kind.as_str().parse::<EventKind>().unwrap(), kind);
        }
        assert!(matches!(
            "unknown".parse::<EventKind>(),
            Err(CoreError::UnknownEventKind(ref k)) if k == "unknown"
        ));
    }

    #[test]
    fn daily_count_serializes_plain_date() {
        let row = DailyCount {
            date: NaiveDate::from_ymd_opt(2026, 3, 9).unwrap(),
            count: 4,
        };
        let json = serde_json::to_value(&row).unwrap();
        assert_eq!(json["date"], "2026-03-09");
    }
}
