use serde::{Deserialize, Serialize};

/// Placeholder written for text fields missing from the upstream entry.
pub const MISSING_TEXT: &str = "N/A";

/// One flattened forecast entry, ready to be exported.
///
/// Serialized field names are the capitalized export keys
/// (`Location`, `Date`, ..., `SummaryWhen`, `MinTemp`, `MaxTemp`).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct ForecastRecord {
    pub location: String,
    pub date: String,
    pub morning: String,
    pub afternoon: String,
    pub night: String,
    pub summary: String,
    pub summary_when: String,
    pub min_temp: i32,
    pub max_temp: i32,
}

impl Default for ForecastRecord {
    fn default() -> Self {
        Self {
            location: MISSING_TEXT.to_string(),
            date: MISSING_TEXT.to_string(),
            morning: MISSING_TEXT.to_string(),
            afternoon: MISSING_TEXT.to_string(),
            night: MISSING_TEXT.to_string(),
            summary: MISSING_TEXT.to_string(),
            summary_when: MISSING_TEXT.to_string(),
            min_temp: 0,
            max_temp: 0,
        }
    }
}

/// Raw array element as returned by the forecast API.
pub type RawForecastEntry = serde_json::Value;
