//! Album storage abstraction
//!
//! Handlers only see the [`AlbumStore`] trait, so the collection can be swapped
//! without touching the HTTP layer.

use async_trait::async_trait;

use crate::types::Album;
use crate::Result;

pub mod memory;

pub use memory::InMemoryStore;

/// Ordered album collection
#[async_trait]
pub trait AlbumStore: Send + Sync {
    /// All albums in insertion order
    async fn list(&self) -> Result<Vec<Album>>;

    /// First album whose id equals `id` exactly
    async fn get(&self, id: &str) -> Result<Option<Album>>;

    /// Append an album to the end of the collection
    async fn append(&self, album: Album) -> Result<Album>;

    /// Number of albums currently held
    async fn len(&self) -> Result<usize>;

    async fn is_empty(&self) -> Result<bool> {
        Ok(self.len().await? == 0)
    }
}
