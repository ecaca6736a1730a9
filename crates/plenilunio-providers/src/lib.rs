// Error types
pub mod error;

// Static season catalog
pub mod catalog;

// Live climate readings
pub mod climate;

pub use catalog::{BUNDLED_CATALOG, CatalogLoader, CatalogSource};
pub use climate::{
    ClimateFetcher, ClimateSource, DEFAULT_API_BASE_URL, DEFAULT_CLIMATE_TIMEOUT,
    DisabledClimateSource, HttpClimateSource,
};
pub use error::{Error, Result};
