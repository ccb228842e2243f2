//! Event store abstraction and the in-process backend.

use std::future::Future;

use petai_core::AnalyticsEvent;
use tokio::sync::RwLock;

use crate::error::AnalyticsError;

/// Append-only storage for analytics events.
///
/// Implementations must never lose an append to a concurrent one: two
/// overlapping `append` calls both end up in `read_all`.
pub trait EventStore: Send + Sync {
    fn append(
        &self,
        event: &AnalyticsEvent,
    ) -> impl Future<Output = Result<(), AnalyticsError>> + Send;

    /// Returns every stored event in append order.
    fn read_all(&self) -> impl Future<Output = Result<Vec<AnalyticsEvent>, AnalyticsError>> + Send;
}

/// Process-local store for client contexts and tests. Contents live as long
/// as the store value.
#[derive(Debug, Default)]
pub struct MemoryEventStore {
    events: RwLock<Vec<AnalyticsEvent>>,
}

impl MemoryEventStore {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Seeds the store with existing events, e.g. restored from a
    /// client-side snapshot.
    #[must_use]
    pub fn with_events(events: Vec<AnalyticsEvent>) -> Self {
        Self {
            events: RwLock::new(events),
        }
    }
}

impl EventStore for MemoryEventStore {
    async fn append(&self, event: &AnalyticsEvent) -> Result<(), AnalyticsError> {
        self.events.write().await.push(event.clone());
        Ok(())
    }

    async fn read_all(&self) -> Result<Vec<AnalyticsEvent>, AnalyticsError> {
        Ok(self.events.read().await.clone())
    }
}
