#![doc = "districtview public API"]
mod city;
mod common;
mod district;
mod io;
mod map;
mod source;

#[cfg(not(target_arch = "wasm32"))]
pub mod cli;
#[cfg(not(target_arch = "wasm32"))]
pub mod commands;

#[doc(inline)]
pub use city::{City, CityRegistry, LatLng};

#[doc(inline)]
pub use district::{Demographic, DistrictFeature, DistrictStatistics, FeatureCollection, DISTRICT_PLACEHOLDER};

#[doc(inline)]
pub use map::{
    style, style_scaled, ActiveMetric, DemographicRow, DetailPanel, DistrictTable, LoadOutcome,
    LoadRequest, MapCommand, MapEvent, MapLimits, MapSession, MetricScale, RequestToken,
    SelectionController, SelectionState, TableRow, Viewport, ViewportController, VisualStyle,
    CITY_ZOOM, DEFAULT_CENTER, MAP_LIMITS, SELECTED, UNSELECTED, WIDE_ZOOM,
};

#[doc(inline)]
pub use io::{
    color::Rgb,
    csv::{export_csv, export_filename, to_csv, CsvExport, EXPORT_COLUMNS},
    sink::{DownloadSink, MemorySink},
};

#[cfg(not(target_arch = "wasm32"))]
#[doc(inline)]
pub use io::sink::DirectorySink;

#[doc(inline)]
pub use source::{FeatureSource, LoadError, LocalSource, RESULTS_DIR};

#[cfg(feature = "download")]
#[doc(inline)]
pub use source::HttpSource;
