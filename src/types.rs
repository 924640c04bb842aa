//! Core types for the album service

use serde::de::{IgnoredAny, MapAccess, Visitor};
use serde::{Deserialize, Deserializer, Serialize};
use std::fmt;

use crate::{Error, Result};

/// Album identifier. Uniqueness is not enforced anywhere.
pub type AlbumId = String;

/// A single record album
///
/// Decoding is lenient about shape: keys match case-insensitively, missing
/// fields keep their default and `null` leaves a field untouched. A value of
/// the wrong JSON type is still an error.
#[derive(Debug, Clone, Default, Serialize, PartialEq)]
pub struct Album {
    pub id: AlbumId,
    pub title: String,
    pub artist: String,
    pub price: f64,
}

impl Album {
    pub fn new(
        id: impl Into<String>,
        title: impl Into<String>,
        artist: impl Into<String>,
        price: f64,
    ) -> Self {
        Self {
            id: id.into(),
            title: title.into(),
            artist: artist.into(),
            price,
        }
    }

    /// Decode the first JSON value of a request body.
    ///
    /// Anything after that value is ignored. A top-level `null` yields an
    /// empty album; an empty body is rejected.
    pub fn from_body(body: &[u8]) -> Result<Self> {
        let mut values = serde_json::Deserializer::from_slice(body).into_iter::<Option<Album>>();
        match values.next() {
            Some(decoded) => Ok(decoded?.unwrap_or_default()),
            None => Err(Error::invalid_request("request body is empty")),
        }
    }
}

impl<'de> Deserialize<'de> for Album {
    fn deserialize<D>(deserializer: D) -> std::result::Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        deserializer.deserialize_map(AlbumVisitor)
    }
}

struct AlbumVisitor;

impl<'de> Visitor<'de> for AlbumVisitor {
    type Value = Album;

    fn expecting(&self, formatter: &mut fmt::Formatter) -> fmt::Result {
        formatter.write_str("an album object")
    }

    fn visit_map<A>(self, mut map: A) -> std::result::Result<Album, A::Error>
    where
        A: MapAccess<'de>,
    {
        let mut album = Album::default();

        // Later duplicates overwrite earlier ones
        while let Some(key) = map.next_key::<String>()? {
            match key.to_lowercase().as_str() {
                "id" => assign(&mut album.id, map.next_value()?),
                "title" => assign(&mut album.title, map.next_value()?),
                "artist" => assign(&mut album.artist, map.next_value()?),
                "price" => assign(&mut album.price, map.next_value()?),
                _ => {
                    map.next_value::<IgnoredAny>()?;
                }
            }
        }

        Ok(album)
    }
}

fn assign<T>(slot: &mut T, value: Option<T>) {
    if let Some(value) = value {
        *slot = value;
    }
}

/// Records the catalogue starts with.
pub fn seed_albums() -> Vec<Album> {
    vec![
        Album::new("1", "Blue Train", "John Coltrane", 56.99),
        Album::new("2", "Jeru", "Gerry Mulligan", 17.99),
        Album::new(
            "3",
            "Sarah Vaughan and Clifford Brown",
            "Sarah Vaughan",
            39.99,
        ),
    ]
}
