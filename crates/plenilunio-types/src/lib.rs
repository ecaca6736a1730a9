pub mod catalog;
pub mod climate;
pub mod error;
pub mod season;

pub use catalog::SeasonCatalog;
pub use climate::{ClimateResponse, LiveClimateReading, ReadingValue};
pub use error::{Error, Result};
pub use season::{Cosmovision, Practice, SeasonId, SeasonRecord, StaticClimate};
