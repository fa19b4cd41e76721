pub mod arc;
pub mod lru;

pub use arc::{ArcCache, ListKind, Removed};
pub use lru::LruCache;
