//! Data Loader
//!
//! Fetches `data.json` and turns it into the in-memory collection.

use gloo_net::http::Request;
use thiserror::Error;
use web_sys::RequestCache;

use crate::config::DATA_URL;
use crate::models::{Item, RawItem};

/// Why the collection could not be loaded
#[derive(Debug, Error, PartialEq)]
pub enum LoadError {
    #[error("HTTP {0}")]
    Status(u16),
    #[error("request failed: {0}")]
    Network(String),
    #[error("invalid data: {0}")]
    Parse(String),
}

impl From<gloo_net::Error> for LoadError {
    fn from(err: gloo_net::Error) -> Self {
        match err {
            gloo_net::Error::SerdeError(e) => LoadError::Parse(e.to_string()),
            other => LoadError::Network(other.to_string()),
        }
    }
}

impl From<serde_json::Error> for LoadError {
    fn from(err: serde_json::Error) -> Self {
        LoadError::Parse(err.to_string())
    }
}

/// Give each raw item its position as id
pub fn assign_ids(raw: Vec<RawItem>) -> Vec<Item> {
    (0u32..).zip(raw).map(|(id, raw)| Item::from_raw(id, raw)).collect()
}

/// Decode a `data.json` body
pub fn parse_items(body: &str) -> Result<Vec<Item>, LoadError> {
    let raw: Vec<RawItem> = serde_json::from_str(body)?;
    Ok(assign_ids(raw))
}

/// GET the collection with the HTTP cache bypassed
pub async fn fetch_items() -> Result<Vec<Item>, LoadError> {
    let resp = Request::get(DATA_URL)
        .cache(RequestCache::NoStore)
        .send()
        .await?;
    if !resp.ok() {
        return Err(LoadError::Status(resp.status()));
    }
    let body = resp.text().await?;
    parse_items(&body)
}
