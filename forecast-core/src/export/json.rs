use std::io::{self, Write};

use serde::Serialize;
use serde_json::ser::{PrettyFormatter, Serializer};

use crate::model::ForecastRecord;

/// Write the records as a JSON array, indented with four spaces and
/// terminated by a newline.
pub fn write_json<W: Write>(records: &[ForecastRecord], mut out: W) -> io::Result<()> {
    let formatter = PrettyFormatter::with_indent(b"    ");
    let mut ser = Serializer::with_formatter(&mut out, formatter);
    records.serialize(&mut ser).map_err(io::Error::from)?;

    writeln!(out)?;
    out.flush()
}

pub fn to_bytes(records: &[ForecastRecord]) -> io::Result<Vec<u8>> {
    let mut buf = Vec::new();
    write_json(records, &mut buf)?;
    Ok(buf)
}
