// src/net.rs

// Blocking page fetch. Rendering/JS execution is out of scope; what the
// server returns is what gets parsed.

use std::error::Error;
use std::time::Duration;

use crate::params::{FETCH_TIMEOUT_SECS, USER_AGENT};

pub fn fetch_page(url: &str) -> Result<String, Box<dyn Error>> {
    let client = reqwest::blocking::Client::builder()
        .user_agent(USER_AGENT)
        .timeout(Duration::from_secs(FETCH_TIMEOUT_SECS))
        .build()?;

    let resp = client.get(url).send()?;
    let status = resp.status();
    if !status.is_success() {
        return Err(format!("HTTP error: {} {}", status, url).into());
    }
    Ok(resp.text()?)
}
