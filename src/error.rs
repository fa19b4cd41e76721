//! Error types for the arckit library.
//!
//! ## Key Components
//!
//! - [`ConfigError`]: Returned when cache configuration parameters are invalid
//!   (e.g. zero capacity).
//! - [`StoreError`]: Returned when a blob store filesystem operation fails.
//!   Carries the offending path and the underlying [`std::io::Error`].
//! - [`ArcError`]: Construction-time error that unifies the two.
//!
//! ## Example Usage
//!
//! ```
//! use arckit::error::ArcError;
//! use arckit::policy::arc::ArcCache;
//!
//! // Zero capacity is rejected before any directory is created.
//! let err = ArcCache::new(0).unwrap_err();
//! assert!(matches!(err, ArcError::Config(_)));
//! assert!(err.to_string().contains("capacity"));
//! ```

use std::fmt;
use std::io;
use std::path::{Path, PathBuf};

// ---------------------------------------------------------------------------
// ConfigError
// ---------------------------------------------------------------------------

/// Error returned when cache configuration parameters are invalid.
///
/// Produced by fallible constructors such as
/// [`ArcCache::new`](crate::policy::arc::ArcCache::new) and
/// [`ArcBuilder::try_build`](crate::builder::ArcBuilder::try_build).
/// Carries a human-readable description of which parameter failed validation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ConfigError(String);

impl ConfigError {
    /// Creates a new `ConfigError` with the given description.
    #[inline]
    pub fn new(msg: impl Into<String>) -> Self {
        Self(msg.into())
    }

    /// Returns the error description.
    #[inline]
    pub fn message(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl std::error::Error for ConfigError {}

// ---------------------------------------------------------------------------
// StoreError
// ---------------------------------------------------------------------------

/// Error returned when a blob store filesystem operation fails.
///
/// A `StoreError` aborts the cache operation that triggered it. The in-memory
/// lists may be out of step with the on-disk directory afterwards; callers
/// that need consistency should retire the cache instance.
#[derive(Debug)]
pub struct StoreError {
    path: PathBuf,
    source: io::Error,
}

impl StoreError {
    pub(crate) fn new(path: impl Into<PathBuf>, source: io::Error) -> Self {
        Self {
            path: path.into(),
            source,
        }
    }

    /// The filesystem path the failed operation touched.
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// The underlying I/O error kind.
    pub fn kind(&self) -> io::ErrorKind {
        self.source.kind()
    }
}

impl fmt::Display for StoreError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "blob store I/O failure at {}: {}",
            self.path.display(),
            self.source
        )
    }
}

impl std::error::Error for StoreError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        Some(&self.source)
    }
}

// ---------------------------------------------------------------------------
// ArcError
// ---------------------------------------------------------------------------

/// Construction-time error for [`ArcCache`](crate::policy::arc::ArcCache).
///
/// Construction validates the capacity and creates the blob directory, so it
/// can fail either way.
#[derive(Debug)]
pub enum ArcError {
    /// Invalid configuration (zero capacity).
    Config(ConfigError),
    /// The blob store directory could not be created.
    Store(StoreError),
}

impl fmt::Display for ArcError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ArcError::Config(err) => err.fmt(f),
            ArcError::Store(err) => err.fmt(f),
        }
    }
}

impl std::error::Error for ArcError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            ArcError::Config(err) => Some(err),
            ArcError::Store(err) => Some(err),
        }
    }
}

impl From<ConfigError> for ArcError {
    fn from(err: ConfigError) -> Self {
        ArcError::Config(err)
    }
}

impl From<StoreError> for ArcError {
    fn from(err: StoreError) -> Self {
        ArcError::Store(err)
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
