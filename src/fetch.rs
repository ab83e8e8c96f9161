//! HTTP collaborator: fetch a URL body as bytes, optionally through a proxy.

use std::time::Duration;

use reqwest::blocking::Client;
use tracing::debug;
use url::Url;

use crate::errors::{OpError, OpResult};

const FETCH_TIMEOUT: Duration = Duration::from_secs(30);

/// Fetch the full response body of `url`. A non-blank `proxy` routes the
/// request through that host; a blank or absent proxy means a direct
/// connection. Non-2xx statuses are failures.
pub fn fetch(url: &str, proxy: Option<&str>) -> OpResult<Vec<u8>> {
    let parsed = Url::parse(url.trim()).map_err(|e| OpError::InvalidUrl {
        url: url.trim().to_string(),
        reason: e.to_string(),
    })?;

    let mut builder = Client::builder().timeout(FETCH_TIMEOUT);
    if let Some(proxy) = effective_proxy(proxy) {
        debug!(proxy, "routing request through proxy");
        builder = builder.proxy(reqwest::Proxy::all(proxy)?);
    }
    let client = builder.build()?;

    let response = client.get(parsed).send()?.error_for_status()?;
    let body = response.bytes()?;
    debug!(url, bytes = body.len(), "fetched");
    Ok(body.to_vec())
}

fn effective_proxy(proxy: Option<&str>) -> Option<&str> {
    proxy.map(str::trim).filter(|p| !p.is_empty())
}
