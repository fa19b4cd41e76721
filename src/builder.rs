//! Builder-style configuration for [`ArcCache`].
//!
//! Construction needs two inputs: a capacity (validated, must be positive)
//! and a blob store directory (created on build). The builder makes the
//! directory explicit instead of defaulting to the working directory, which
//! is what tests and embedding applications almost always want.
//!
//! ## Example
//!
//! ```
//! use arckit::builder::ArcBuilder;
//!
//! let dir = tempfile::tempdir().unwrap();
//! let mut cache = ArcBuilder::new(128)
//!     .directory(dir.path().join("blobs"))
//!     .try_build()
//!     .unwrap();
//!
//! cache.set("k", vec![1, 2, 3]).unwrap();
//! assert_eq!(cache.len(), 1);
//! ```

use std::path::PathBuf;

use crate::error::ArcError;
use crate::policy::arc::ArcCache;

/// Directory used when no other is configured, relative to the working
/// directory.
pub const DEFAULT_DIRECTORY: &str = "cache_directory";

/// Builder for [`ArcCache`] instances.
#[derive(Debug, Clone)]
pub struct ArcBuilder {
    capacity: usize,
    directory: PathBuf,
}

impl ArcBuilder {
    /// Starts a builder for a cache of `capacity` entries, rooted at
    /// [`DEFAULT_DIRECTORY`] until configured otherwise.
    pub fn new(capacity: usize) -> Self {
        Self {
            capacity,
            directory: PathBuf::from(DEFAULT_DIRECTORY),
        }
    }

    /// Sets the blob store directory. Created (with parents) on build.
    pub fn directory(mut self, path: impl Into<PathBuf>) -> Self {
        self.directory = path.into();
        self
    }

    /// Validates the configuration and builds the cache.
    ///
    /// Fails with [`ArcError::Config`] for a zero capacity and
    /// [`ArcError::Store`] when the directory cannot be created.
    pub fn try_build(self) -> Result<ArcCache, ArcError> {
        ArcCache::with_directory(self.capacity, self.directory)
    }
}
