// src/core/net.rs
// Blocking HTTP GET. One attempt per request, no retry.

use std::time::Duration;

use reqwest::blocking::Client;

use crate::error::{Error, Result};

pub struct Http {
    client: Client,
}

impl Http {
    pub fn new(timeout_secs: u64) -> Result<Self> {
        let client = Client::builder()
            .timeout(Duration::from_secs(timeout_secs))
            .user_agent(concat!("bulletin_scrape/", env!("CARGO_PKG_VERSION")))
            .build()
            .map_err(|e| Error::Fetch { url: s!(), reason: e.to_string() })?;
        Ok(Self { client })
    }

    /// GET `url`; any non-200 status is an error.
    pub fn get_bytes(&self, url: &str) -> Result<Vec<u8>> {
        let fail = |reason: String| Error::Fetch { url: s!(url), reason };

        let resp = self.client.get(url).send().map_err(|e| fail(e.to_string()))?;
        let status = resp.status();
        if !status.is_success() {
            return Err(fail(format!("HTTP error: {status}")));
        }
        let body = resp.bytes().map_err(|e| fail(e.to_string()))?;
        tracing::debug!(url, bytes = body.len(), "fetched");
        Ok(body.to_vec())
    }

    pub fn get_text(&self, url: &str) -> Result<String> {
        let bytes = self.get_bytes(url)?;
        Ok(String::from_utf8_lossy(&bytes).into_owned())
    }
}
