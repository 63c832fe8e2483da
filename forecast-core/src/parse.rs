use serde_json::Value;
use tracing::debug;

use crate::{
    error::{ForecastError, json_type_name},
    model::RawForecastEntry,
};

/// Parse a response body into the list of raw forecast entries.
///
/// The body must be well-formed JSON whose top-level value is an array.
pub fn parse_entries(body: &str) -> Result<Vec<RawForecastEntry>, ForecastError> {
    let value: Value = serde_json::from_str(body)?;

    match value {
        Value::Array(entries) => {
            debug!(count = entries.len(), "parsed forecast array");
            Ok(entries)
        }
        other => Err(ForecastError::Schema { found: json_type_name(&other) }),
    }
}
