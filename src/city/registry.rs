use std::{fs, path::Path};

use anyhow::{Context, Result, ensure};

use super::city::{City, CityEntry};

/// Static list of cities whose district results have been published.
#[derive(Clone, Debug)]
pub struct CityRegistry {
    cities: Vec<City>,
}

impl Default for CityRegistry {
    fn default() -> Self { Self::builtin() }
}

impl CityRegistry {
    /// Build a registry from a list of cities, rejecting duplicate ids.
    pub fn new(cities: Vec<City>) -> Result<Self> {
        for (i, city) in cities.iter().enumerate() {
            ensure!(
                !cities[..i].iter().any(|other| other.id == city.id),
                "[CityRegistry::new] Duplicate city id '{}'", city.id
            );
        }
        Ok(Self { cities })
    }

    /// The cities published with the site.
    pub fn builtin() -> Self {
        Self {
            cities: vec![
                City::new("raleigh-nc", "Raleigh, NC", "NC/raleigh.geojson", 35.7796, -78.6382),
                City::new("charlotte-nc", "Charlotte, NC", "NC/charlotte.geojson", 35.2271, -80.8431),
                City::new("los-angeles-ca", "Los Angeles, CA", "CA/los_angeles.geojson", 34.0522, -118.2437),
                City::new("sacramento-ca", "Sacramento, CA", "CA/sacramento.geojson", 38.5816, -121.4944),
                City::new("chicago-il", "Chicago, IL", "IL/chicago.geojson", 41.8781, -87.6298),
                City::new("atlanta-ga", "Atlanta, GA", "GA/atlanta.geojson", 33.7501, -84.3885),
                City::new("philadelphia-pa", "Philadelphia, PA", "PA/philadelphia.geojson", 40.0094, -75.1333),
                City::new("arlington-tx", "Arlington, TX", "TX/arlington.geojson", 32.7007, -97.1247),
                City::new("austin-tx", "Austin, TX", "TX/austin.geojson", 30.3039, -97.7544),
                City::new("denver-co", "Denver, CO", "CO/denver.geojson", 39.7619, -104.8811),
            ],
        }
    }

    /// Parse a registry from a JSON array of city entries.
    pub fn from_json_str(json: &str) -> Result<Self> {
        let entries: Vec<CityEntry> = serde_json::from_str(json)
            .context("[CityRegistry::from_json_str] Failed to parse city registry")?;
        Self::new(entries.into_iter().map(City::from).collect())
    }

    /// Read a registry from a JSON file.
    pub fn from_json_file(path: &Path) -> Result<Self> {
        let json = fs::read_to_string(path)
            .with_context(|| format!("[CityRegistry::from_json_file] Failed to read {}", path.display()))?;
        Self::from_json_str(&json)
    }

    #[inline] pub fn len(&self) -> usize { self.cities.len() }

    #[inline] pub fn is_empty(&self) -> bool { self.cities.is_empty() }

    /// Cities in registry (insertion) order.
    #[inline] pub fn cities(&self) -> &[City] { &self.cities }

    /// Look up a city by its stable id.
    pub fn get(&self, id: &str) -> Option<&City> {
        self.cities.iter().find(|city| city.id == id)
    }

    /// Cities in selector order: alphabetical by display name, then by id.
    pub fn sorted(&self) -> Vec<&City> {
        let mut sorted: Vec<&City> = self.cities.iter().collect();
        sorted.sort_by(|a, b| a.name.cmp(&b.name).then_with(|| a.id.cmp(&b.id)));
        sorted
    }
}
