use async_trait::async_trait;
use std::fmt::Debug;

use crate::error::ForecastError;

pub mod http;

pub use http::HttpForecastSource;

/// Public forecast endpoint of the Malaysian open data portal.
pub const FORECAST_URL: &str = "https://api.data.gov.my/weather/forecast";

/// Anything that can hand back a raw forecast document.
#[async_trait]
pub trait ForecastSource: Send + Sync + Debug {
    /// Fetch the full response body. An `Ok` body is always from a successful response.
    async fn fetch(&self) -> Result<String, ForecastError>;
}

/// A fixed body, for running the pipeline without a network.
#[derive(Debug, Clone)]
pub struct StaticSource(pub String);

#[async_trait]
impl ForecastSource for StaticSource {
    async fn fetch(&self) -> Result<String, ForecastError> {
        Ok(self.0.clone())
    }
}
