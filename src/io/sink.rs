//! Download targets for exported files.

use anyhow::Result;

/// Host-side "save this file" capability.
pub trait DownloadSink {
    /// Offer `content` for download under `filename`.
    fn offer(&mut self, filename: &str, content: &[u8]) -> Result<()>;
}

/// Collects offered files in memory.
#[derive(Clone, Debug, Default)]
pub struct MemorySink {
    pub files: Vec<(String, Vec<u8>)>,
}

impl DownloadSink for MemorySink {
    fn offer(&mut self, filename: &str, content: &[u8]) -> Result<()> {
        self.files.push((filename.to_string(), content.to_vec()));
        Ok(())
    }
}

#[cfg(not(target_arch = "wasm32"))]
pub use directory::DirectorySink;

#[cfg(not(target_arch = "wasm32"))]
mod directory {
    use std::path::{Path, PathBuf};

    use anyhow::Result;

    use super::DownloadSink;
    use crate::common::fs::write_atomic;

    /// Saves offered files into a directory.
    #[derive(Clone, Debug)]
    pub struct DirectorySink {
        dir: PathBuf,
        force: bool,
    }

    impl DirectorySink {
        pub fn new(dir: impl Into<PathBuf>) -> Self {
            Self { dir: dir.into(), force: false }
        }

        /// Overwrite files that already exist.
        pub fn with_force(mut self, force: bool) -> Self { self.force = force; self }

        #[inline] pub fn dir(&self) -> &Path { &self.dir }

        pub fn path_for(&self, filename: &str) -> PathBuf { self.dir.join(filename) }
    }

    impl DownloadSink for DirectorySink {
        fn offer(&mut self, filename: &str, content: &[u8]) -> Result<()> {
            write_atomic(&self.path_for(filename), content, self.force)
        }
    }

    #[cfg(test)]
    mod tests {
        use super::*;

        #[test]
        fn saves_into_directory() {
            let dir = tempfile::tempdir().unwrap();
            let mut sink = DirectorySink::new(dir.path().join("exports"));
            sink.offer("a.csv", b"x").unwrap();
            assert_eq!(std::fs::read(sink.path_for("a.csv")).unwrap(), b"x");
            assert!(sink.offer("a.csv", b"y").is_err());

            let mut sink = sink.with_force(true);
            sink.offer("a.csv", b"y").unwrap();
            assert_eq!(std::fs::read(sink.path_for("a.csv")).unwrap(), b"y");
        }
    }
}
