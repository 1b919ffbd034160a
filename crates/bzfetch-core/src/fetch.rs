//! Blocking HTTP GET of a release asset into memory.
//!
//! Uses the curl crate (libcurl). GitHub release downloads answer with a
//! redirect to their CDN, so redirects are followed. The response status is
//! checked after the transfer; anything outside 2xx is a transfer error.

use crate::error::{FetchError, Result};
use std::time::Duration;

const CONNECT_TIMEOUT: Duration = Duration::from_secs(30);

/// Performs one GET of `url` and returns the full response body.
///
/// Runs in the current thread. No retry.
pub fn fetch(url: &str) -> Result<Vec<u8>> {
    let curl_err = |source: curl::Error| FetchError::Curl {
        url: url.to_string(),
        source,
    };

    let mut body: Vec<u8> = Vec::new();

    let mut easy = curl::easy::Easy::new();
    easy.url(url).map_err(curl_err)?;
    easy.follow_location(true).map_err(curl_err)?;
    easy.connect_timeout(CONNECT_TIMEOUT).map_err(curl_err)?;
    easy.useragent(&format!("bzfetch/{}", env!("CARGO_PKG_VERSION")))
        .map_err(curl_err)?;

    tracing::info!("downloading {}", url);
    {
        let mut transfer = easy.transfer();
        transfer
            .write_function(|data| {
                body.extend_from_slice(data);
                Ok(data.len())
            })
            .map_err(curl_err)?;
        transfer.perform().map_err(curl_err)?;
    }

    let code = easy.response_code().map_err(curl_err)?;
    if !(200..300).contains(&code) {
        return Err(FetchError::Transfer {
            url: url.to_string(),
            status: code,
        });
    }

    tracing::debug!(bytes = body.len(), status = code, "download complete");
    Ok(body)
}
