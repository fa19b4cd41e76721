//! Flat-file value store keyed by string.
//!
//! One regular file per key inside a single directory: file name = key,
//! file contents = raw value bytes. No index, no checksums. The ARC
//! controller uses this as its side channel for recovering values whose
//! in-memory bookkeeping has been demoted to a ghost list.
//!
//! ```text
//!   <root>/
//!   ├── "user:17"      ← value bytes for key "user:17"
//!   ├── "page_4"
//!   └── "tile/9"       ← keys must be valid file names; they are not escaped
//! ```
//!
//! Every operation is a blocking whole-file filesystem call; failures are
//! reported as [`StoreError`] and abort the cache operation that triggered
//! them. Exclusive access is assumed: pointing two stores at the same
//! directory is undefined.

use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use crate::error::StoreError;

/// Directory-backed key→bytes store.
///
/// # Example
///
/// ```
/// use arckit::store::BlobStore;
///
/// let dir = tempfile::tempdir().unwrap();
/// let store = BlobStore::open(dir.path().join("blobs")).unwrap();
///
/// store.write("k1", b"hello").unwrap();
/// assert_eq!(store.read("k1").unwrap(), b"hello");
///
/// store.remove("k1").unwrap();
/// assert!(!store.contains("k1"));
/// ```
#[derive(Debug)]
pub struct BlobStore {
    root: PathBuf,
}

impl BlobStore {
    /// Creates the backing directory (and any missing parents) and opens the
    /// store. On Unix the directory is made world-readable and -writable,
    /// mode `0o777`.
    pub fn open(root: impl Into<PathBuf>) -> Result<Self, StoreError> {
        let root = root.into();
        fs::create_dir_all(&root).map_err(|err| StoreError::new(&root, err))?;

        #[cfg(unix)]
        {
            use std::os::unix::fs::PermissionsExt;
            fs::set_permissions(&root, fs::Permissions::from_mode(0o777))
                .map_err(|err| StoreError::new(&root, err))?;
        }

        Ok(Self { root })
    }

    /// The backing directory.
    pub fn root(&self) -> &Path {
        &self.root
    }

    /// The file path holding `key`'s value.
    pub fn path_for(&self, key: &str) -> PathBuf {
        self.root.join(key)
    }

    /// Writes `value` as the full contents of `key`'s file, replacing any
    /// previous contents.
    pub fn write(&self, key: &str, value: &[u8]) -> Result<(), StoreError> {
        let path = self.path_for(key);
        fs::write(&path, value).map_err(|err| StoreError::new(path, err))
    }

    /// Reads the complete value stored for `key`.
    pub fn read(&self, key: &str) -> Result<Vec<u8>, StoreError> {
        let path = self.path_for(key);
        fs::read(&path).map_err(|err| StoreError::new(path, err))
    }

    /// Deletes `key`'s file. Removing a key that has no file is an error.
    pub fn remove(&self, key: &str) -> Result<(), StoreError> {
        let path = self.path_for(key);
        fs::remove_file(&path).map_err(|err| StoreError::new(path, err))
    }

    /// Returns `true` if a file exists for `key`.
    pub fn contains(&self, key: &str) -> bool {
        self.path_for(key).is_file()
    }

    /// Removes the backing directory and everything in it.
    pub fn destroy(&self) -> io::Result<()> {
        fs::remove_dir_all(&self.root)
    }
}
