use std::sync::Arc;

use anyhow::Result;
use serde::Serialize;
use tracing::{debug, trace, warn};

use crate::{
    city::City,
    district::{DistrictFeature, FeatureCollection},
    io::{csv::export_csv, sink::DownloadSink},
    source::LoadError,
};
use super::{
    metric::ActiveMetric,
    panel::DetailPanel,
    selection::{SelectionController, SelectionState},
    style::{style, style_scaled, MetricScale, VisualStyle},
    table::DistrictTable,
    viewport::{Viewport, ViewportController},
};

/// Fencing token attached to one outstanding feature retrieval.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize)]
pub struct RequestToken(u64);

impl RequestToken {
    #[inline] pub fn get(&self) -> u64 { self.0 }

    #[inline] pub fn from_raw(raw: u64) -> Self { Self(raw) }
}

/// Retrieval the host must perform for the newly active city.
#[derive(Clone, Debug, PartialEq)]
pub struct LoadRequest {
    pub token: RequestToken,
    pub city: City,
}

/// What happened to a completed retrieval.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum LoadOutcome {
    /// Response belonged to the active request and is now displayed.
    Applied,
    /// Response was superseded by a later city change and was discarded.
    Stale,
    /// Active request failed; nothing is displayed.
    Failed,
}

/// Instruction for the map-rendering substrate.
#[derive(Clone, Debug, PartialEq, Serialize)]
#[serde(tag = "type", rename_all = "camelCase")]
pub enum MapCommand {
    MoveViewport { viewport: Viewport },
    /// Render the session's feature layer, binding clicks per feature index.
    ShowLayer,
    ClearLayer,
    /// Styles changed; re-query every feature's style.
    Restyle,
}

/// User interaction on the map surface.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum MapEvent {
    /// Click on the feature at this index of the displayed collection.
    FeatureClick(usize),
    /// Click on empty map area.
    BackgroundClick,
    /// Detail panel closed.
    Dismiss,
}

/// Per-city interaction state: active city, its features, selection,
/// viewport and active metric.
#[derive(Debug, Default)]
pub struct MapSession {
    city: Option<City>,
    features: Option<Arc<FeatureCollection>>,
    pending: Option<RequestToken>,
    next_token: u64,
    metric: ActiveMetric,
    scaled: bool,
    selection: SelectionController,
    viewport: ViewportController,
    commands: Vec<MapCommand>,
}

impl MapSession {
    /// New session with no city; queues the wide default viewport.
    pub fn new() -> Self {
        let mut session = Self::default();
        session.sync_viewport();
        session
    }

    #[inline] pub fn city(&self) -> Option<&City> { self.city.as_ref() }

    #[inline] pub fn features(&self) -> Option<&FeatureCollection> { self.features.as_deref() }

    #[inline] pub fn selection(&self) -> &SelectionState { self.selection.state() }

    #[inline] pub fn metric(&self) -> ActiveMetric { self.metric }

    #[inline] pub fn viewport(&self) -> Option<Viewport> { self.viewport.current() }

    /// Token of the retrieval the session is waiting for, if any.
    #[inline] pub fn pending(&self) -> Option<RequestToken> { self.pending }

    /// Drain queued substrate commands, oldest first.
    pub fn take_commands(&mut self) -> Vec<MapCommand> { std::mem::take(&mut self.commands) }

    /// Make `city` active (or clear it). Selection and the feature layer are
    /// reset unconditionally, even when the same city is chosen again. Returns
    /// the retrieval to perform; responses to earlier requests become stale.
    pub fn select_city(&mut self, city: Option<City>) -> Option<LoadRequest> {
        debug!(city = city.as_ref().map(|c| c.id.as_str()), "city changed");

        self.selection.city_changed();
        if self.features.take().is_some() {
            self.commands.push(MapCommand::ClearLayer);
        }
        self.city = city;
        self.sync_viewport();

        self.pending = match self.city.is_some() {
            true => Some(self.issue_token()),
            false => None,
        };
        self.pending.zip(self.city.clone()).map(|(token, city)| LoadRequest { token, city })
    }

    /// Deliver the result of a retrieval. Results whose token is not the
    /// pending one are discarded without touching the display.
    pub fn complete_load(&mut self, token: RequestToken, result: Result<FeatureCollection, LoadError>) -> LoadOutcome {
        if self.pending != Some(token) {
            trace!(token = token.get(), "discarding stale feature response");
            return LoadOutcome::Stale;
        }
        self.pending = None;

        match result {
            Ok(features) => {
                debug!(token = token.get(), features = features.len(), "feature layer loaded");
                self.features = Some(Arc::new(features));
                self.commands.push(MapCommand::ShowLayer);
                LoadOutcome::Applied
            }
            Err(err) => {
                let city = self.city.as_ref().map(|c| c.id.as_str()).unwrap_or_default();
                warn!(city, error = %err, "failed to load district features");
                self.features = None;
                self.selection.dismiss();
                LoadOutcome::Failed
            }
        }
    }

    /// Dispatch a map interaction. Feature clicks never reach the background handler.
    pub fn handle_event(&mut self, event: MapEvent) {
        match event {
            MapEvent::FeatureClick(index) => self.click_feature(index),
            MapEvent::BackgroundClick => trace!("background click ignored"),
            MapEvent::Dismiss => self.dismiss(),
        }
    }

    /// Select the feature at `index` of the displayed collection. Unknown
    /// indices and clicks with no layer shown are ignored.
    pub fn click_feature(&mut self, index: usize) {
        let Some(feature) = self.feature(index) else {
            trace!(index, "click on unknown feature ignored");
            return;
        };
        let feature = feature.clone();
        self.selection.click(&feature);
        self.commands.push(MapCommand::Restyle);
    }

    /// Close the detail panel.
    pub fn dismiss(&mut self) {
        if self.selection.state().is_idle() { return }
        self.selection.dismiss();
        self.commands.push(MapCommand::Restyle);
    }

    /// Change the active metric. Viewport and selection are untouched.
    pub fn set_metric(&mut self, metric: ActiveMetric) {
        if self.metric == metric { return }
        debug!(metric = metric.key(), "active metric changed");
        self.metric = metric;
        if self.scaled { self.commands.push(MapCommand::Restyle) }
    }

    /// Color fills by the active metric's ramp instead of the flat fill.
    pub fn set_scaled(&mut self, scaled: bool) {
        if self.scaled == scaled { return }
        self.scaled = scaled;
        self.commands.push(MapCommand::Restyle);
    }

    #[inline] pub fn feature(&self, index: usize) -> Option<&DistrictFeature> {
        self.features.as_ref().and_then(|fc| fc.get(index))
    }

    /// Style of the feature at `index` under the current selection and metric.
    pub fn style_at(&self, index: usize) -> Option<VisualStyle> {
        let feature = self.feature(index)?;
        Some(match self.scaled {
            true => style_scaled(feature.statistics(), self.selection(), &self.metric_scale()),
            false => style(feature.statistics(), self.selection(), self.metric),
        })
    }

    /// Styles of every displayed feature, in feature order.
    pub fn styles(&self) -> Vec<VisualStyle> {
        let Some(features) = self.features() else { return Vec::new() };
        let scale = self.metric_scale();
        features.features().iter()
            .map(|f| match self.scaled {
                true => style_scaled(f.statistics(), self.selection(), &scale),
                false => style(f.statistics(), self.selection(), self.metric),
            })
            .collect()
    }

    /// Active metric's range over the displayed districts.
    pub fn metric_scale(&self) -> MetricScale {
        let features = self.features().map(|fc| fc.features()).unwrap_or_default();
        MetricScale::new(self.metric, features.iter().map(|f| f.statistics()))
    }

    /// Detail panel for the current selection; `None` while idle.
    pub fn detail_panel(&self) -> Option<DetailPanel> {
        DetailPanel::from_selection(self.selection())
    }

    /// District table for the displayed city; `None` when no layer is shown.
    pub fn table(&self) -> Option<DistrictTable> {
        self.features().map(|fc| DistrictTable::new(fc.features().iter().map(|f| f.statistics())))
    }

    /// Export the displayed city's statistics through `sink`. Returns the
    /// offered filename, or `None` when there is nothing to export.
    pub fn export(&self, sink: &mut dyn DownloadSink) -> Result<Option<String>> {
        let (Some(city), Some(features)) = (self.city(), self.features()) else { return Ok(None) };
        export_csv(sink, &features.statistics(), &city.name)
    }

    fn issue_token(&mut self) -> RequestToken {
        self.next_token += 1;
        RequestToken(self.next_token)
    }

    fn sync_viewport(&mut self) {
        if let Some(viewport) = self.viewport.update(self.city.as_ref()) {
            self.commands.push(MapCommand::MoveViewport { viewport });
        }
    }
}
