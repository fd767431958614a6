//! JSONL output writer for parsed records.

use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::Path;

use crate::core::models::ParsedRecord;
use crate::error::Result;

/// Writes records to JSONL (JSON Lines) format.
///
/// Each line is a valid JSON object:
/// ```jsonl
/// {"date":"1/6/20","timestamp":"1/6/20 11:26 AM","sender":"Jane","message":"hi","emojis":[]}
/// ```
///
/// Unlike CSV, emojis stay a list.
pub fn write_jsonl(records: &[ParsedRecord], output_path: impl AsRef<Path>) -> Result<()> {
    let file = File::create(output_path)?;
    let mut writer = BufWriter::new(file);
    write_jsonl_to(records, &mut writer)?;
    writer.flush()?;
    Ok(())
}

/// Renders records as a JSONL string.
pub fn to_jsonl(records: &[ParsedRecord]) -> Result<String> {
    let mut output = String::new();
    for record in records {
        output.push_str(&serde_json::to_string(record)?);
        output.push('\n');
    }
    Ok(output)
}

fn write_jsonl_to<W: Write>(records: &[ParsedRecord], out: &mut W) -> Result<()> {
    for record in records {
        serde_json::to_writer(&mut *out, record)?;
        out.write_all(b"\n")?;
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::{BufRead, BufReader};
    use tempfile::NamedTempFile;

    fn sample() -> Vec<ParsedRecord> {
        vec![
            ParsedRecord {
                date: "1/6/20".into(),
                timestamp: "1/6/20 11:26 AM".into(),
                sender: "Jane".into(),
                message: "Hello".into(),
                emojis: vec![],
            },
            ParsedRecord {
                date: "1/6/20".into(),
                timestamp: "1/6/20 11:27 AM".into(),
                sender: "Bob".into(),
                message: "Hi 🔥".into(),
                emojis: vec!['🔥'],
            },
        ]
    }

    #[test]
    fn test_write_jsonl_basic() {
        let temp_file = NamedTempFile::new().unwrap();
        write_jsonl(&sample(), temp_file.path()).unwrap();

        let file = std::fs::File::open(temp_file.path()).unwrap();
        let lines: Vec<String> = BufReader::new(file).lines().map(|l| l.unwrap()).collect();
        assert_eq!(lines.len(), 2);

        let second: serde_json::Value = serde_json::from_str(&lines[1]).unwrap();
        assert_eq!(second["sender"], "Bob");
        assert_eq!(second["emojis"][0], "🔥");
    }

    #[test]
    fn test_to_jsonl_parses_back() {
        let jsonl = to_jsonl(&sample()).unwrap();
        let parsed: Vec<ParsedRecord> = jsonl
            .lines()
            .map(|l| serde_json::from_str(l).unwrap())
            .collect();
        assert_eq!(parsed, sample());
    }
}
