use async_trait::async_trait;
use reqwest::{Client, StatusCode, header::ACCEPT, redirect::Policy};
use tracing::{debug, error, info, instrument, warn};

use crate::{config::HttpSettings, error::ForecastError};

use super::ForecastSource;

const MAX_REDIRECTS: usize = 10;

/// Fetches the forecast document with a single GET request.
#[derive(Debug, Clone)]
pub struct HttpForecastSource {
    url: String,
    http: Client,
}

impl HttpForecastSource {
    pub fn new(url: impl Into<String>, settings: &HttpSettings) -> Result<Self, ForecastError> {
        if settings.accept_invalid_certs {
            warn!("TLS certificate and hostname verification is DISABLED; responses can be forged");
        }

        let http = Client::builder()
            .timeout(settings.timeout())
            .redirect(Policy::limited(MAX_REDIRECTS))
            .danger_accept_invalid_certs(settings.accept_invalid_certs)
            .build()?;

        Ok(Self { url: url.into(), http })
    }
}

#[async_trait]
impl ForecastSource for HttpForecastSource {
    #[instrument(skip(self), fields(url = %self.url))]
    async fn fetch(&self) -> Result<String, ForecastError> {
        let res = self
            .http
            .get(&self.url)
            .header(ACCEPT, "application/json")
            .send()
            .await
            .inspect_err(|e| error!("Request failed: {e}"))?;

        let status = res.status();
        info!("HTTP response code: {}", status.as_u16());

        let body = res.text().await.inspect_err(|e| error!("Failed to read response body: {e}"))?;

        if status != StatusCode::OK {
            error!("Request failed with status {status}");
            return Err(ForecastError::HttpStatus {
                status: status.as_u16(),
                body: truncate_body(&body),
            });
        }

        info!("Request successful ({} bytes)", body.len());
        debug!("Raw response:\n{body}");

        Ok(body)
    }
}

fn truncate_body(body: &str) -> String {
    const MAX: usize = 200;
    if body.len() <= MAX {
        return body.to_string();
    }

    let mut end = MAX;
    while !body.is_char_boundary(end) {
        end -= 1;
    }
    format!("{}...", &body[..end])
}
