use serde::{Deserialize, Serialize};

/// Zoom applied when a registry entry does not carry its own.
pub(crate) const DEFAULT_CITY_ZOOM: u8 = 11;

/// WGS84 coordinate pair, latitude first (Leaflet order).
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct LatLng {
    pub lat: f64,
    pub lng: f64,
}

impl LatLng {
    pub const fn new(lat: f64, lng: f64) -> Self { Self { lat, lng } }
}

/// A city with precomputed police-district results.
#[derive(Clone, Debug, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct City {
    pub id: String,
    /// Display name, "<City>, <State>".
    pub name: String,
    /// Path of the feature collection below the results directory, e.g. "NC/raleigh.geojson".
    pub source_path: String,
    pub center: LatLng,
    pub initial_zoom: u8,
}

impl City {
    pub fn new(id: &str, name: &str, source_path: &str, lat: f64, lng: f64) -> Self {
        Self {
            id: id.to_string(),
            name: name.to_string(),
            source_path: source_path.to_string(),
            center: LatLng::new(lat, lng),
            initial_zoom: DEFAULT_CITY_ZOOM,
        }
    }

    #[inline] pub fn with_zoom(mut self, zoom: u8) -> Self { self.initial_zoom = zoom; self }
}

/// Registry file entry: `{ "id", "name", "file", "lat", "lng", "zoom"? }`.
#[derive(Debug, Deserialize)]
pub(super) struct CityEntry {
    id: String,
    name: String,
    file: String,
    lat: f64,
    lng: f64,
    #[serde(default)]
    zoom: Option<u8>,
}

impl From<CityEntry> for City {
    fn from(entry: CityEntry) -> Self {
        City {
            id: entry.id,
            name: entry.name,
            source_path: entry.file,
            center: LatLng::new(entry.lat, entry.lng),
            initial_zoom: entry.zoom.unwrap_or(DEFAULT_CITY_ZOOM),
        }
    }
}
