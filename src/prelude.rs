pub use crate::builder::{ArcBuilder, DEFAULT_DIRECTORY};
pub use crate::error::{ArcError, ConfigError, StoreError};
pub use crate::metrics::{ArcStateSnapshot, CacheStats};
pub use crate::policy::arc::{ArcCache, ListKind, Removed};
pub use crate::policy::lru::LruCache;
pub use crate::store::BlobStore;
pub use crate::traits::{ReadOnlyCache, StatsProvider};
