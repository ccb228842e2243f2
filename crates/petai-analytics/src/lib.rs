//! Append-only interaction analytics with on-demand aggregation.

pub mod aggregate;
pub mod error;
pub mod jsonl;
pub mod store;
pub mod tracker;

pub use aggregate::{compute_stats, DAILY_WINDOW_DAYS, RECENT_EVENTS_LIMIT};
pub use error::AnalyticsError;
pub use jsonl::JsonlEventStore;
pub use store::{EventStore, MemoryEventStore};
pub use tracker::{generate_event_id, InteractionAnalytics};
