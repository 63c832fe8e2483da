use serde_json::{Map, Value};

use crate::{
    error::{ForecastError, json_type_name},
    model::{ForecastRecord, MISSING_TEXT, RawForecastEntry},
};

/// Project every raw entry into a [`ForecastRecord`], preserving order.
///
/// Absent (or `null`) fields fall back to `"N/A"` / `0`. A field that is
/// present with the wrong JSON type fails the whole projection.
pub fn project_records(entries: &[RawForecastEntry]) -> Result<Vec<ForecastRecord>, ForecastError> {
    entries
        .iter()
        .enumerate()
        .map(|(index, entry)| project_entry(index, entry))
        .collect()
}

fn project_entry(index: usize, entry: &RawForecastEntry) -> Result<ForecastRecord, ForecastError> {
    let obj = entry.as_object().ok_or_else(|| ForecastError::FieldType {
        index,
        field: "entry",
        expected: "an object",
        found: json_type_name(entry).to_string(),
    })?;

    let fields = Fields { index, obj };

    Ok(ForecastRecord {
        location: fields.location()?,
        date: fields.text("date")?,
        morning: fields.text("morning_forecast")?,
        afternoon: fields.text("afternoon_forecast")?,
        night: fields.text("night_forecast")?,
        summary: fields.text("summary_forecast")?,
        summary_when: fields.text("summary_when")?,
        min_temp: fields.integer("min_temp")?,
        max_temp: fields.integer("max_temp")?,
    })
}

struct Fields<'a> {
    index: usize,
    obj: &'a Map<String, Value>,
}

impl Fields<'_> {
    fn location(&self) -> Result<String, ForecastError> {
        let location = match self.obj.get("location") {
            None | Some(Value::Null) => return Ok(MISSING_TEXT.to_string()),
            Some(Value::Object(location)) => location,
            Some(other) => return Err(self.mismatch("location", "an object", other)),
        };

        match location.get("location_name") {
            None | Some(Value::Null) => Ok(MISSING_TEXT.to_string()),
            Some(Value::String(name)) => Ok(name.clone()),
            Some(other) => Err(self.mismatch("location.location_name", "a string", other)),
        }
    }

    fn text(&self, field: &'static str) -> Result<String, ForecastError> {
        match self.obj.get(field) {
            None | Some(Value::Null) => Ok(MISSING_TEXT.to_string()),
            Some(Value::String(s)) => Ok(s.clone()),
            Some(other) => Err(self.mismatch(field, "a string", other)),
        }
    }

    fn integer(&self, field: &'static str) -> Result<i32, ForecastError> {
        let n = match self.obj.get(field) {
            None | Some(Value::Null) => return Ok(0),
            Some(Value::Number(n)) => n,
            Some(other) => return Err(self.mismatch(field, "an integer", other)),
        };

        let out_of_range = || ForecastError::FieldType {
            index: self.index,
            field,
            expected: "an integer",
            found: format!("out-of-range number {n}"),
        };

        if let Some(i) = n.as_i64() {
            return i32::try_from(i).map_err(|_| out_of_range());
        }

        // Floats truncate toward zero. A u64 above i64::MAX lands here too and is rejected.
        match n.as_f64() {
            Some(f) if n.is_f64() && fits_i32(f.trunc()) => Ok(f.trunc() as i32),
            _ => Err(out_of_range()),
        }
    }

    fn mismatch(&self, field: &'static str, expected: &'static str, found: &Value) -> ForecastError {
        ForecastError::FieldType {
            index: self.index,
            field,
            expected,
            found: json_type_name(found).to_string(),
        }
    }
}

fn fits_i32(f: f64) -> bool {
    f.is_finite() && f >= f64::from(i32::MIN) && f <= f64::from(i32::MAX)
}
