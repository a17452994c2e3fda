use districtview_core::{
    ActiveMetric, CityRegistry, FeatureCollection, LoadError, LoadOutcome, MapEvent, MapSession,
    RequestToken, MAP_LIMITS, RESULTS_DIR,
};
use serde::Serialize;
use wasm_bindgen::{JsValue, prelude::wasm_bindgen};

use crate::common::*;

/// Retrieval the page must perform after a city change.
#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct FetchRequest<'a> {
    token: u64,
    city_id: &'a str,
    /// Path relative to the site base, e.g. "results/NC/raleigh.geojson".
    path: String,
}

#[wasm_bindgen]
pub struct WasmSession {
    registry: CityRegistry,
    inner: MapSession,
}

#[wasm_bindgen]
impl WasmSession {
    /// Start a session over the built-in registry, or over a JSON array of
    /// `{ id, name, file, lat, lng, zoom? }` entries.
    #[wasm_bindgen(constructor)]
    pub fn new(registry_json: Option<String>) -> Result<WasmSession, JsValue> {
        let registry = match registry_json {
            Some(json) => CityRegistry::from_json_str(&json).map_err(js_err)?,
            None => CityRegistry::builtin(),
        };
        Ok(WasmSession { registry, inner: MapSession::new() })
    }

    /// Cities in selector order.
    pub fn cities(&self) -> Result<JsValue, JsValue> {
        to_js(&self.registry.sorted())
    }

    /// Zoom and pan limits for the map substrate.
    pub fn map_limits(&self) -> Result<JsValue, JsValue> {
        to_js(&MAP_LIMITS)
    }

    /// Metric selector entries: `[{ key, label }]`.
    pub fn metrics(&self) -> Result<JsValue, JsValue> {
        #[derive(Serialize)]
        struct Entry { key: &'static str, label: &'static str }
        let entries: Vec<Entry> = ActiveMetric::all().map(|m| Entry { key: m.key(), label: m.label() }).collect();
        to_js(&entries)
    }

    /// Change the active city (`undefined` clears it). Returns the fetch to
    /// perform, or `null` when no city is active.
    pub fn select_city(&mut self, city_id: Option<String>) -> Result<JsValue, JsValue> {
        let city = match city_id.as_deref().filter(|id| !id.is_empty()) {
            Some(id) => Some(self.registry.get(id).cloned().ok_or_else(|| js_err(LoadError::UnknownCity(id.to_string())))?),
            None => None,
        };

        match self.inner.select_city(city) {
            Some(request) => to_js(&FetchRequest {
                token: request.token.get(),
                city_id: &request.city.id,
                path: format!("{}/{}", RESULTS_DIR, request.city.source_path),
            }),
            None => Ok(JsValue::NULL),
        }
    }

    /// Deliver the body of a completed fetch. Returns "applied", "stale" or "failed".
    pub fn complete_load(&mut self, token: f64, body: &str) -> Result<JsValue, JsValue> {
        let result = FeatureCollection::from_slice(body.as_bytes()).map_err(LoadError::from);
        self.finish(token, result)
    }

    /// Report a failed fetch (network error or non-success status).
    pub fn fail_load(&mut self, token: f64, url: String, message: String) -> Result<JsValue, JsValue> {
        self.finish(token, Err(LoadError::Fetch { url, message }))
    }

    pub fn click_feature(&mut self, index: usize) {
        self.inner.handle_event(MapEvent::FeatureClick(index));
    }

    pub fn background_click(&mut self) {
        self.inner.handle_event(MapEvent::BackgroundClick);
    }

    pub fn dismiss(&mut self) {
        self.inner.handle_event(MapEvent::Dismiss);
    }

    pub fn set_metric(&mut self, key: &str) -> Result<(), JsValue> {
        let metric: ActiveMetric = key.parse().map_err(js_err)?;
        self.inner.set_metric(metric);
        Ok(())
    }

    pub fn set_scaled(&mut self, scaled: bool) {
        self.inner.set_scaled(scaled);
    }

    /// Displayed feature collection as GeoJSON, or `null`.
    pub fn features(&self) -> Result<JsValue, JsValue> {
        let Some(features) = self.inner.features() else { return Ok(JsValue::NULL) };
        let geojson = serde_json::json!({
            "type": "FeatureCollection",
            "features": features.features().iter().map(|f| serde_json::json!({
                "type": "Feature",
                "geometry": f.geometry(),
                "properties": f.properties(),
            })).collect::<Vec<_>>(),
        });
        to_js(&geojson)
    }

    /// Style of one feature: `{ color, weight, fillColor, fillOpacity }`.
    pub fn style_at(&self, index: usize) -> Result<JsValue, JsValue> {
        match self.inner.style_at(index) {
            Some(style) => to_js(&style),
            None => Ok(JsValue::NULL),
        }
    }

    /// Styles of all displayed features, in feature order.
    pub fn styles(&self) -> Result<JsValue, JsValue> {
        to_js(&self.inner.styles())
    }

    /// Detail panel fields, or `null` while nothing is selected.
    pub fn detail_panel(&self) -> Result<JsValue, JsValue> {
        to_js(&self.inner.detail_panel())
    }

    /// District table rows, or `null` while no layer is shown.
    pub fn table(&self) -> Result<JsValue, JsValue> {
        to_js(&self.inner.table())
    }

    /// Drain pending map commands: `[{ type: "moveViewport" | "showLayer" | "clearLayer" | "restyle", ... }]`.
    pub fn take_commands(&mut self) -> Result<JsValue, JsValue> {
        to_js(&self.inner.take_commands())
    }

    /// Offer the displayed city's CSV as a browser download.
    /// Returns the filename, or `undefined` when there is nothing to export.
    pub fn export_csv(&self) -> Result<Option<String>, JsValue> {
        self.inner.export(&mut BrowserDownload::csv()).map_err(js_err)
    }
}

impl WasmSession {
    fn finish(&mut self, token: f64, result: Result<FeatureCollection, LoadError>) -> Result<JsValue, JsValue> {
        let failure = result.as_ref().err().map(|e| e.to_string());
        let outcome = self.inner.complete_load(RequestToken::from_raw(token as u64), result);
        if let (LoadOutcome::Failed, Some(message)) = (outcome, failure) {
            console_warn(&format!("Failed to load district features: {message}"));
        }
        to_js(&outcome)
    }
}
