//! CSV output writer for parsed records.

use std::fs::File;
use std::io::{self, BufWriter, Write};
use std::path::Path;

use crate::core::models::ParsedRecord;
use crate::error::Result;

/// Header line of the records CSV.
pub const CSV_HEADER: &str = "date,timestamp,sender,message,emojis";

/// Writes records to a CSV file.
///
/// # Format
/// - Header: `date,timestamp,sender,message,emojis` (unquoted)
/// - Every record field is quoted
/// - Emojis are comma-joined inside their field
/// - Encoding: UTF-8
pub fn write_csv(records: &[ParsedRecord], output_path: impl AsRef<Path>) -> Result<()> {
    let file = File::create(output_path)?;
    write_csv_to(records, BufWriter::new(file))
}

/// Renders records as a CSV string.
pub fn to_csv(records: &[ParsedRecord]) -> Result<String> {
    let mut buf = Vec::new();
    write_csv_to(records, &mut buf)?;
    String::from_utf8(buf).map_err(|e| io::Error::new(io::ErrorKind::InvalidData, e).into())
}

fn write_csv_to<W: Write>(records: &[ParsedRecord], mut out: W) -> Result<()> {
    writeln!(out, "{CSV_HEADER}")?;

    let mut writer = csv::WriterBuilder::new()
        .has_headers(false)
        .quote_style(csv::QuoteStyle::Always)
        .from_writer(out);

    for record in records {
        writer.write_record([
            record.date.as_str(),
            record.timestamp.as_str(),
            record.sender.as_str(),
            record.message.as_str(),
            record.emoji_field().as_str(),
        ])?;
    }

    writer.flush()?;
    Ok(())
}
