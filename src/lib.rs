//! Albums - a small HTTP service over an in-memory album catalogue
//!
//! The service keeps an ordered collection of album records and exposes:
//! - `GET /albums` to list every record in insertion order
//! - `GET /albums/:id` to fetch the first record with a matching id
//! - `POST /albums` to append a record decoded from a JSON body

pub mod api;
pub mod config;
pub mod error;
pub mod store;
pub mod types;

pub use error::{Error, Result};
