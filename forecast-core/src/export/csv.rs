use std::io::{self, Write};

use crate::model::ForecastRecord;

pub const HEADER: &str = "Location,Date,Morning,Afternoon,Night,Summary,SummaryWhen,MinTemp,MaxTemp";

/// Write the header and one row per record.
///
/// Fields containing a comma, quote or line break are quoted, with embedded
/// quotes doubled. Everything else is written verbatim.
pub fn write_csv<W: Write>(records: &[ForecastRecord], mut out: W) -> io::Result<()> {
    writeln!(out, "{HEADER}")?;

    for r in records {
        writeln!(
            out,
            "{},{},{},{},{},{},{},{},{}",
            escape(&r.location),
            escape(&r.date),
            escape(&r.morning),
            escape(&r.afternoon),
            escape(&r.night),
            escape(&r.summary),
            escape(&r.summary_when),
            r.min_temp,
            r.max_temp,
        )?;
    }

    out.flush()
}

pub fn to_bytes(records: &[ForecastRecord]) -> io::Result<Vec<u8>> {
    let mut buf = Vec::new();
    write_csv(records, &mut buf)?;
    Ok(buf)
}

fn escape(field: &str) -> std::borrow::Cow<'_, str> {
    if field.contains([',', '"', '\n', '\r']) {
        format!("\"{}\"", field.replace('"', "\"\"")).into()
    } else {
        field.into()
    }
}
