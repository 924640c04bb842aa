//! In-process album store

use async_trait::async_trait;
use tokio::sync::RwLock;

use crate::types::{seed_albums, Album};
use crate::Result;

use super::AlbumStore;

/// Album collection held in process memory.
///
/// Reads share the lock; appends take it exclusively.
#[derive(Debug, Default)]
pub struct InMemoryStore {
    albums: RwLock<Vec<Album>>,
}

impl InMemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_albums(albums: Vec<Album>) -> Self {
        Self {
            albums: RwLock::new(albums),
        }
    }

    /// Store pre-populated with the seed catalogue
    pub fn seeded() -> Self {
        Self::with_albums(seed_albums())
    }
}

#[async_trait]
impl AlbumStore for InMemoryStore {
    async fn list(&self) -> Result<Vec<Album>> {
        Ok(self.albums.read().await.clone())
    }

    async fn get(&self, id: &str) -> Result<Option<Album>> {
        let albums = self.albums.read().await;
        Ok(albums.iter().find(|album| album.id == id).cloned())
    }

    async fn append(&self, album: Album) -> Result<Album> {
        let mut albums = self.albums.write().await;
        albums.push(album.clone());
        tracing::debug!(id = %album.id, total = albums.len(), "Album appended");
        Ok(album)
    }

    async fn len(&self) -> Result<usize> {
        Ok(self.albums.read().await.len())
    }
}
