use serde::Deserialize;
use serde_json::{Map, Value};

use super::DistrictStatistics;

/// One police-district polygon with its published statistics.
#[derive(Clone, Debug)]
pub struct DistrictFeature {
    geometry: Value,
    properties: Map<String, Value>,
    stats: DistrictStatistics,
}

impl DistrictFeature {
    pub fn new(geometry: Value, properties: Map<String, Value>) -> Self {
        let stats = DistrictStatistics::from_properties(&properties);
        Self { geometry, properties, stats }
    }

    /// Feature with no geometry, built from normalized statistics.
    pub fn from_statistics(stats: DistrictStatistics) -> Self {
        Self { geometry: Value::Null, properties: stats.to_properties(), stats }
    }

    /// Polygon/MultiPolygon payload exactly as published.
    #[inline] pub fn geometry(&self) -> &Value { &self.geometry }

    /// Raw property bag exactly as published.
    #[inline] pub fn properties(&self) -> &Map<String, Value> { &self.properties }

    #[inline] pub fn statistics(&self) -> &DistrictStatistics { &self.stats }

    #[inline] pub fn district(&self) -> &str { &self.stats.district }
}

/// Ordered district features of one city. Order is source order and carries no meaning.
#[derive(Clone, Debug, Default)]
pub struct FeatureCollection {
    features: Vec<DistrictFeature>,
}

#[derive(Deserialize)]
struct RawCollection {
    features: Vec<RawFeature>,
}

#[derive(Deserialize)]
struct RawFeature {
    #[serde(default)]
    geometry: Value,
    #[serde(default)]
    properties: Value,
}

impl FeatureCollection {
    pub fn new(features: Vec<DistrictFeature>) -> Self { Self { features } }

    /// Decode a GeoJSON FeatureCollection document.
    pub fn from_slice(bytes: &[u8]) -> Result<Self, serde_json::Error> {
        let raw: RawCollection = serde_json::from_slice(bytes)?;
        Ok(Self::from_raw(raw))
    }

    /// Decode an already-parsed GeoJSON FeatureCollection document.
    pub fn from_value(value: Value) -> Result<Self, serde_json::Error> {
        let raw: RawCollection = serde_json::from_value(value)?;
        Ok(Self::from_raw(raw))
    }

    fn from_raw(raw: RawCollection) -> Self {
        let features = raw.features.into_iter()
            .map(|feature| {
                let properties = match feature.properties {
                    Value::Object(props) => props,
                    _ => Map::new(),
                };
                DistrictFeature::new(feature.geometry, properties)
            })
            .collect();
        Self { features }
    }

    #[inline] pub fn len(&self) -> usize { self.features.len() }

    #[inline] pub fn is_empty(&self) -> bool { self.features.is_empty() }

    #[inline] pub fn features(&self) -> &[DistrictFeature] { &self.features }

    #[inline] pub fn get(&self, index: usize) -> Option<&DistrictFeature> { self.features.get(index) }

    /// Normalized statistics in source order.
    pub fn statistics(&self) -> Vec<DistrictStatistics> {
        self.features.iter().map(|f| f.statistics().clone()).collect()
    }

    /// Index of the first feature carrying the given district label.
    pub fn position(&self, district: &str) -> Option<usize> {
        self.features.iter().position(|f| f.district() == district)
    }
}
