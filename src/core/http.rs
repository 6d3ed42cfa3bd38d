//! HTTP utilities for league backend communication

use crate::Result;
use reqwest::header::{HeaderMap, HeaderValue, ACCEPT, AUTHORIZATION};

/// Build request headers, adding a bearer credential when one is configured.
pub fn auth_header_map(token: Option<&str>) -> Result<HeaderMap> {
    let mut h = HeaderMap::new();
    h.insert(ACCEPT, HeaderValue::from_static("application/json"));
    if let Some(token) = token {
        let value = format!("Bearer {}", token.trim());
        h.insert(AUTHORIZATION, HeaderValue::from_str(&value)?);
    }
    Ok(h)
}
