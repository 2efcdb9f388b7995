//! Shared library for the places function.
//!
//! Reads place records from Airtable, keeps the approved ones and reshapes
//! them into the JSON the website consumes.

pub mod airtable;
pub mod config;
pub mod error;
pub mod handler;
pub mod http;
pub mod models;

pub use airtable::{AirtableClient, RecordSource, UpstreamRecord};
pub use config::{Config, Credentials};
pub use error::{Error, Result};
pub use handler::handle;
pub use models::{approved_places, ErrorBody, PlaceView, PlacesResponse};
