/// Key visual file handling
///
/// This module handles:
/// - The fixed set of logical key visual names (name.rs)
/// - Locating a key visual on disk regardless of case/extension (resolver.rs)
/// - Decoding and downscaling oversized images (loader.rs)
/// - Fitting images into uniform grid thumbnails (thumbnail.rs)

pub mod name;
pub mod resolver;
pub mod loader;
pub mod thumbnail;

pub use name::LogicalName;

use std::path::PathBuf;
use thiserror::Error;

/// Why a key visual could not be turned into pixels
#[derive(Debug, Error)]
pub enum AssetError {
    #[error("no file for {name} in {}", .directory.display())]
    NotFound { name: LogicalName, directory: PathBuf },

    #[error("failed to read {}: {source}", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to decode {}: {source}", .path.display())]
    Decode {
        path: PathBuf,
        #[source]
        source: image::ImageError,
    },
}
