mod metric;
mod panel;
mod selection;
mod session;
mod style;
mod table;
mod viewport;

pub use metric::ActiveMetric;
pub use panel::{DemographicRow, DetailPanel};
pub use selection::{SelectionController, SelectionState};
pub use session::{LoadOutcome, LoadRequest, MapCommand, MapEvent, MapSession, RequestToken};
pub use style::{style, style_scaled, MetricScale, VisualStyle, SELECTED, UNSELECTED};
pub use table::{DistrictTable, TableRow};
pub use viewport::{MapLimits, Viewport, ViewportController, CITY_ZOOM, DEFAULT_CENTER, MAP_LIMITS, WIDE_ZOOM};
