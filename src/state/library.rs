use std::path::{Path, PathBuf};
use tracing::{info, warn};

use super::data::{CandidateImage, Pixels};
use super::workflow::AnalysisError;
use crate::kv::{loader, resolver, AssetError, LogicalName};

/// The AssetLibrary owns the key visual folder.
/// It turns logical names into decoded images, applying the configured
/// decode ceiling. Nothing is cached; every call reads from disk.
#[derive(Debug, Clone)]
pub struct AssetLibrary {
    directory: PathBuf,
    max_dimension: u32,
}

impl AssetLibrary {
    /// Create a library over `directory`.
    ///
    /// The directory does not need to exist yet; missing folders simply
    /// resolve nothing.
    pub fn new(directory: impl Into<PathBuf>, max_dimension: u32) -> Self {
        AssetLibrary {
            directory: directory.into(),
            max_dimension,
        }
    }

    /// Get the folder this library reads from
    pub fn directory(&self) -> &Path {
        &self.directory
    }

    /// Find the file backing a logical name, if any
    pub fn locate(&self, name: LogicalName) -> Option<PathBuf> {
        resolver::resolve(name.as_str(), &self.directory)
    }

    /// Resolve and decode one key visual
    pub fn load(&self, name: LogicalName) -> Result<CandidateImage, AssetError> {
        let path = self.locate(name).ok_or_else(|| AssetError::NotFound {
            name,
            directory: self.directory.clone(),
        })?;

        let image = loader::load_visual(&path, self.max_dimension)?;

        Ok(CandidateImage {
            name,
            path,
            pixels: Pixels::new(image),
        })
    }

    /// Load the three candidate slots in order
    ///
    /// All three must load; otherwise the error lists every slot that
    /// failed so the user can fix the folder in one go.
    pub fn load_candidates(&self) -> Result<[CandidateImage; 3], AnalysisError> {
        let loaded = LogicalName::CANDIDATES.map(|name| {
            self.load(name).map_err(|err| {
                warn!("⚠️  Candidate {} unavailable: {}", name, err);
                name
            })
        });

        let candidates = match loaded {
            [Ok(first), Ok(second), Ok(third)] => [first, second, third],
            results => {
                return Err(AnalysisError::MissingCandidates {
                    directory: self.directory.clone(),
                    missing: results.into_iter().filter_map(Result::err).collect(),
                });
            }
        };

        info!(
            "✅ Loaded candidates from {}: {}",
            self.directory.display(),
            candidates
                .iter()
                .map(|c| format!("{} ({}x{})", c.name, c.pixels.width(), c.pixels.height()))
                .collect::<Vec<_>>()
                .join(", ")
        );

        Ok(candidates)
    }
}
