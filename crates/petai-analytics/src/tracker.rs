//! Event recording and stats over an injected [`EventStore`].

use chrono::{DateTime, Utc};
use petai_core::{AnalyticsEvent, AnalyticsStats, NewEvent};
use rand::Rng;

use crate::aggregate::compute_stats;
use crate::error::AnalyticsError;
use crate::store::EventStore;

const ID_ALPHABET: &[u8] = b"0123456789abcdefghijklmnopqrstuvwxyz";
const ID_SUFFIX_LEN: usize = 4;

/// Generates an event id: the millisecond timestamp followed by a short
/// random base-36 suffix. Unique enough for an interaction log; not a
/// security token.
#[must_use]
pub fn generate_event_id(now: DateTime<Utc>) -> String {
    let mut rng = rand::rng();
    let suffix: String = (0..ID_SUFFIX_LEN)
        .map(|_| char::from(ID_ALPHABET[rng.random_range(0..ID_ALPHABET.len())]))
        .collect();
    format!("{}{suffix}", now.timestamp_millis())
}

/// Records interaction events and aggregates them on demand.
///
/// The backing store is chosen by the caller: [`crate::MemoryEventStore`]
/// for client-local use, [`crate::JsonlEventStore`] on the server.
pub struct InteractionAnalytics<S> {
    store: S,
}

impl<S: EventStore> InteractionAnalytics<S> {
    #[must_use]
    pub fn new(store: S) -> Self {
        Self { store }
    }

    #[must_use]
    pub fn store(&self) -> &S {
        &self.store
    }

    /// Stamps `new` with an id and the current UTC time and appends it.
    /// Blank category and business names are stored as absent.
    ///
    /// # Errors
    ///
    /// Returns the store's [`AnalyticsError`] if the append fails.
    pub async fn record(&self, new: NewEvent) -> Result<AnalyticsEvent, AnalyticsError> {
        let now = Utc::now();
        let new = NewEvent {
            category: non_blank(new.category),
            business_name: non_blank(new.business_name),
            ..new
        };
        let event = AnalyticsEvent::from_new(new, generate_event_id(now), now);
        self.store.append(&event).await?;
        tracing::debug!(
            id = %event.id,
            kind = %event.kind,
            category = event.category.as_deref().unwrap_or("-"),
            "analytics event recorded"
        );
        Ok(event)
    }

    /// Best-effort [`record`](Self::record): failures are logged and
    /// reported as `false`, never raised, so the instrumented action is not
    /// affected.
    pub async fn track(&self, new: NewEvent) -> bool {
        let kind = new.kind;
        match self.record(new).await {
            Ok(_) => true,
            Err(e) => {
                tracing::warn!(error = %e, kind = %kind, "dropping analytics event");
                false
            }
        }
    }

    /// Reads the full log and aggregates it.
    ///
    /// # Errors
    ///
    /// Returns the store's [`AnalyticsError`] if the log cannot be read.
    pub async fn stats(&self) -> Result<AnalyticsStats, AnalyticsError> {
        let events = self.store.read_all().await?;
        Ok(compute_stats(&events))
    }
}

fn non_blank(value: Option<String>) -> Option<String> {
    value
        .map(|s| s.trim().to_string())
        .filter(|s| !s.is_empty())
}
