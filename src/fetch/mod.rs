//! Retrieval of sounding pages from the Wyoming service.

pub mod client;
pub mod url;

pub use client::{HttpFetcher, SoundingFetcher, decode_body};
pub use url::build_url;
