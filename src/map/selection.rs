use tracing::{debug, trace};

use crate::district::{DistrictFeature, DistrictStatistics};

/// Currently selected district of the active city.
#[derive(Clone, Debug, Default, PartialEq)]
pub enum SelectionState {
    #[default]
    Idle,
    Focused(DistrictStatistics),
}

impl SelectionState {
    #[inline]
    pub fn selected(&self) -> Option<&DistrictStatistics> {
        match self {
            SelectionState::Idle => None,
            SelectionState::Focused(stats) => Some(stats),
        }
    }

    #[inline] pub fn is_idle(&self) -> bool { matches!(self, SelectionState::Idle) }
}

/// Owns the selection state machine: Idle <-> Focused(record).
#[derive(Clone, Debug, Default)]
pub struct SelectionController {
    state: SelectionState,
}

impl SelectionController {
    pub fn new() -> Self { Self::default() }

    #[inline] pub fn state(&self) -> &SelectionState { &self.state }

    /// A feature click replaces the selection wholesale (re-click never toggles).
    pub fn click(&mut self, feature: &DistrictFeature) {
        debug!(district = feature.district(), "district selected");
        self.state = SelectionState::Focused(feature.statistics().clone());
    }

    /// User closed the detail panel.
    pub fn dismiss(&mut self) {
        if !self.state.is_idle() { debug!("selection dismissed") }
        self.state = SelectionState::Idle;
    }

    /// The active city changed (possibly to the same city): always reset.
    pub fn city_changed(&mut self) {
        trace!("selection reset on city change");
        self.state = SelectionState::Idle;
    }
}
