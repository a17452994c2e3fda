mod city;
mod registry;

pub use city::{City, LatLng};
pub use registry::CityRegistry;
