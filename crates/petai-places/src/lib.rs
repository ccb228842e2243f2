pub mod client;
pub mod error;
pub mod normalize;
pub mod search;
pub mod types;

pub use client::{NearbyQuery, PlacesClient};
pub use error::PlacesError;
pub use search::ProximitySearch;
pub use types::{RawPlace, RawPlaceDetail};
