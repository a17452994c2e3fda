pub mod cities;
pub mod export;
pub mod inspect;
pub mod table;

use anyhow::{Context, Result};
use tracing::debug;

use crate::cli::Cli;
use crate::city::CityRegistry;
use crate::map::{LoadOutcome, MapSession};
use crate::source::{FeatureSource, LoadError, LocalSource};

/// Registry from `--registry`, or the built-in one.
pub(crate) fn registry(cli: &Cli) -> Result<CityRegistry> {
    match &cli.registry {
        Some(path) => CityRegistry::from_json_file(path),
        None => Ok(CityRegistry::builtin()),
    }
}

/// Feature source selected by the global options.
pub(crate) fn source(cli: &Cli) -> Box<dyn FeatureSource> {
    #[cfg(feature = "download")]
    if let Some(base_url) = &cli.base_url {
        debug!(base_url, "fetching results over HTTP");
        return Box::new(crate::source::HttpSource::new(base_url));
    }

    debug!(data_dir = %cli.data_dir.display(), "reading results from local data root");
    Box::new(LocalSource::new(&cli.data_dir))
}

/// Make `city_id` the active city of a fresh session and load its features.
/// Retrieval failures are fatal here rather than absorbed.
pub(crate) fn open_session(cli: &Cli, city_id: &str) -> Result<MapSession> {
    let registry = registry(cli)?;
    let city = registry.get(city_id)
        .cloned()
        .ok_or_else(|| LoadError::UnknownCity(city_id.to_string()))?;

    let mut session = MapSession::new();
    let request = session.select_city(Some(city))
        .context("[commands::open_session] City change issued no load request")?;

    let features = source(cli).load(&request.city)
        .with_context(|| format!("[commands::open_session] Failed to load {}", request.city.name))?;
    let outcome = session.complete_load(request.token, Ok(features));
    debug_assert_eq!(outcome, LoadOutcome::Applied);

    Ok(session)
}
