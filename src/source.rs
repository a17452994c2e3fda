//! Retrieval of a city's published feature collection.

use std::path::PathBuf;

use thiserror::Error;

use crate::{city::City, district::FeatureCollection};

/// Directory below the data root (or base URL) holding per-city results.
pub const RESULTS_DIR: &str = "results";

/// Why a city's feature collection could not be retrieved.
#[derive(Debug, Error)]
pub enum LoadError {
    #[error("failed to read {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to fetch {url}: {message}")]
    Fetch { url: String, message: String },

    #[error("malformed feature collection: {0}")]
    Parse(#[from] serde_json::Error),

    #[error("unknown city '{0}'")]
    UnknownCity(String),
}

/// Something that can produce a city's feature collection.
pub trait FeatureSource {
    fn load(&self, city: &City) -> Result<FeatureCollection, LoadError>;
}

/// Reads `<root>/results/<sourcePath>` from the local filesystem.
#[derive(Clone, Debug)]
pub struct LocalSource {
    root: PathBuf,
}

impl LocalSource {
    pub fn new(root: impl Into<PathBuf>) -> Self { Self { root: root.into() } }

    pub fn path_for(&self, city: &City) -> PathBuf {
        self.root.join(RESULTS_DIR).join(&city.source_path)
    }
}

impl FeatureSource for LocalSource {
    fn load(&self, city: &City) -> Result<FeatureCollection, LoadError> {
        let path = self.path_for(city);
        let bytes = std::fs::read(&path).map_err(|source| LoadError::Io { path, source })?;
        Ok(FeatureCollection::from_slice(&bytes)?)
    }
}

#[cfg(feature = "download")]
pub use http::HttpSource;

#[cfg(feature = "download")]
mod http {
    use reqwest::blocking::Client;

    use super::{FeatureSource, LoadError, RESULTS_DIR};
    use crate::{city::City, district::FeatureCollection};

    /// Fetches `<base>/results/<sourcePath>` over HTTP.
    #[derive(Clone, Debug)]
    pub struct HttpSource {
        base_url: String,
        client: Client,
    }

    impl HttpSource {
        pub fn new(base_url: &str) -> Self {
            let base_url = match base_url.ends_with('/') {
                true => base_url.to_string(),
                false => format!("{base_url}/"),
            };
            Self { base_url, client: Client::new() }
        }

        pub fn url_for(&self, city: &City) -> String {
            format!("{}{}/{}", self.base_url, RESULTS_DIR, city.source_path)
        }
    }

    impl FeatureSource for HttpSource {
        fn load(&self, city: &City) -> Result<FeatureCollection, LoadError> {
            let url = self.url_for(city);
            let fetch_err = |e: reqwest::Error| LoadError::Fetch { url: url.clone(), message: e.to_string() };

            let bytes = self.client.get(&url).send()
                .and_then(|resp| resp.error_for_status())
                .and_then(|resp| resp.bytes())
                .map_err(fetch_err)?;

            Ok(FeatureCollection::from_slice(&bytes)?)
        }
    }

}
