mod demographic;
mod feature;
mod stats;

pub use demographic::Demographic;
pub use feature::{DistrictFeature, FeatureCollection};
pub use stats::{DistrictStatistics, DISTRICT_PLACEHOLDER};
