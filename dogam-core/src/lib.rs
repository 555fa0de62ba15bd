// Public modules
pub mod catalog;
pub mod category;
pub mod facets;
pub mod filtering;
pub mod io;
pub mod models;
pub mod schema;
pub mod state;

// Re-export commonly used types for convenience
pub use catalog::Catalog;
pub use category::{Category, FacetName};
pub use facets::{level_options, shadow_options, WEATHER_OPTIONS};
pub use filtering::{apply_filters, has_filters, matches_filters};
pub use io::{load_collection, parse_collection};
pub use models::{
    BirdRecord, CookingRecord, FishRecord, Filters, GardenRecord, InsectRecord, OtherRecord,
    Record, ShopRecord,
};
pub use schema::{schema_for, validate_against_schema};
pub use state::{BrowserState, FacetValue};
