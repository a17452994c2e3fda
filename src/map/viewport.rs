use serde::Serialize;
use tracing::debug;

use crate::city::{City, LatLng};

/// Center of the wide view shown before any city is chosen (continental US).
pub const DEFAULT_CENTER: LatLng = LatLng::new(39.8283, -98.5795);

/// Continental-scale zoom used with no active city.
pub const WIDE_ZOOM: u8 = 4;

/// City-scale zoom; registry entries default to it.
pub const CITY_ZOOM: u8 = 11;

/// Interaction limits handed to the map substrate.
#[derive(Clone, Copy, Debug, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct MapLimits {
    pub min_zoom: u8,
    pub max_zoom: u8,
    /// [[south, west], [north, east]]
    pub max_bounds: [[f64; 2]; 2],
}

pub const MAP_LIMITS: MapLimits = MapLimits {
    min_zoom: WIDE_ZOOM,
    max_zoom: 16,
    max_bounds: [[5.499550, -200.276413], [83.162102, -52.233040]],
};

/// Map camera target.
#[derive(Clone, Copy, Debug, PartialEq, Serialize)]
pub struct Viewport {
    pub center: LatLng,
    pub zoom: u8,
}

impl Viewport {
    /// Target for the given active city, or the wide default.
    pub fn for_city(city: Option<&City>) -> Self {
        match city {
            Some(city) => Viewport { center: city.center, zoom: city.initial_zoom },
            None => Viewport { center: DEFAULT_CENTER, zoom: WIDE_ZOOM },
        }
    }
}

/// Issues one viewport move per change of (lat, lng, zoom).
#[derive(Clone, Debug, Default)]
pub struct ViewportController {
    current: Option<Viewport>,
}

impl ViewportController {
    pub fn new() -> Self { Self::default() }

    /// Last target issued, if any.
    #[inline] pub fn current(&self) -> Option<Viewport> { self.current }

    /// Returns the move to issue, or `None` when the target is unchanged.
    pub fn update(&mut self, city: Option<&City>) -> Option<Viewport> {
        let target = Viewport::for_city(city);
        if self.current == Some(target) { return None }

        debug!(lat = target.center.lat, lng = target.center.lng, zoom = target.zoom, "viewport move");
        self.current = Some(target);
        Some(target)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn raleigh() -> City { City::new("raleigh-nc", "Raleigh, NC", "NC/raleigh.geojson", 35.7796, -78.6382) }

    #[test]
    fn first_update_always_moves() {
        let mut vc = ViewportController::new();
        assert_eq!(vc.update(None), Some(Viewport { center: DEFAULT_CENTER, zoom: WIDE_ZOOM }));
        assert_eq!(vc.update(None), None);
    }

    #[test]
    fn city_change_moves_once() {
        let mut vc = ViewportController::new();
        vc.update(None);
        let moved = vc.update(Some(&raleigh())).unwrap();
        assert_eq!(moved.center, LatLng::new(35.7796, -78.6382));
        assert_eq!(moved.zoom, CITY_ZOOM);
        assert_eq!(vc.update(Some(&raleigh())), None);
    }

    #[test]
    fn zoom_change_alone_moves() {
        let mut vc = ViewportController::new();
        vc.update(Some(&raleigh()));
        assert_eq!(vc.update(Some(&raleigh().with_zoom(13))).map(|v| v.zoom), Some(13));
    }

    #[test]
    fn clearing_city_returns_to_wide_view() {
        let mut vc = ViewportController::new();
        vc.update(Some(&raleigh()));
        assert_eq!(vc.update(None).map(|v| v.zoom), Some(WIDE_ZOOM));
    }
}
