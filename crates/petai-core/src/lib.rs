pub mod analytics;
pub mod app_config;
pub mod category;
pub mod config;
pub mod distance;
pub mod error;
pub mod geo;
pub mod places;

pub use analytics::{
    AnalyticsEvent, AnalyticsStats, CategoryStat, DailyCount, EventKind, NewEvent,
};
pub use app_config::{AppConfig, Environment};
pub use category::{category_label, SearchCategory};
pub use config::{load_app_config, load_app_config_from_env, DEFAULT_PLACES_BASE_URL};
pub use distance::{distance_meters, format_distance, EARTH_RADIUS_M};
pub use error::{ConfigError, CoreError};
pub use geo::Coordinate;
pub use places::{NearbyPlace, OpenStatus, PlaceDetail, PlaceReview};
