//! Delimited-file export of harvested rows.

use std::fs::{self, File};
use std::io::{BufWriter, Write};
use std::path::Path;

use expodir_scraper::{ExhibitorRow, OUTPUT_HEADER};

/// Writes `rows` to `path`, replacing any existing file.
///
/// The parent directory is created when missing.
///
/// # Errors
///
/// Returns an error if the directory or file cannot be created or written.
pub(crate) fn write_rows(path: &Path, rows: &[ExhibitorRow]) -> anyhow::Result<()> {
    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
        fs::create_dir_all(parent)?;
    }
    let file = File::create(path)?;
    write_rows_to(BufWriter::new(file), rows)
}

/// Writes the header and then one record per row.
///
/// The header is written even when `rows` is empty.
pub(crate) fn write_rows_to<W: Write>(out: W, rows: &[ExhibitorRow]) -> anyhow::Result<()> {
    let mut writer = csv::WriterBuilder::new()
        .has_headers(false)
        .from_writer(out);
    writer.write_record(OUTPUT_HEADER)?;
    for row in rows {
        writer.serialize(row)?;
    }
    writer.flush()?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn row(id: &str, text: &str, raw: &str) -> ExhibitorRow {
        ExhibitorRow {
            exhibitor_id: id.to_owned(),
            name: "Acme, Inc.".to_owned(),
            country: "DE".to_owned(),
            city: "Köln".to_owned(),
            location: String::new(),
            profile_text: text.to_owned(),
            raw_profile: raw.to_owned(),
        }
    }

    fn render(rows: &[ExhibitorRow]) -> String {
        let mut buf = Vec::new();
        write_rows_to(&mut buf, rows).expect("in-memory write should succeed");
        String::from_utf8(buf).expect("export is UTF-8")
    }

    #[test]
    fn empty_export_still_has_header() {
        assert_eq!(
            render(&[]),
            "exhibitor_id,name,country,city,location,profile_text,raw_profile\n"
        );
    }

    #[test]
    fn fields_with_delimiters_and_quotes_are_quoted() {
        let out = render(&[row("123", "Hello World", r#"{"text":"Hello\nWorld"}"#)]);
        let mut lines = out.lines();
        lines.next();
        assert_eq!(
            lines.next(),
            Some(r#"123,"Acme, Inc.",DE,Köln,,Hello World,"{""text"":""Hello\nWorld""}""#)
        );
    }

    #[test]
    fn rows_read_back_with_raw_profile_round_trip() {
        let raw = r#"{"text":"Grüße","tags":["a","b"]}"#;
        let out = render(&[row("1", "Grüße", raw), row("2", "", "{}")]);

        let mut reader = csv::Reader::from_reader(out.as_bytes());
        let read: Vec<ExhibitorRow> = reader
            .deserialize()
            .collect::<Result<_, _>>()
            .expect("rows should deserialize");

        assert_eq!(read.len(), 2);
        assert_eq!(read[0].city, "Köln");
        let parsed: serde_json::Value = serde_json::from_str(&read[0].raw_profile).unwrap();
        assert_eq!(parsed, serde_json::json!({"text": "Grüße", "tags": ["a", "b"]}));
        assert_eq!(read[1].raw_profile, "{}");
    }

    #[test]
    fn write_rows_creates_parent_and_overwrites_existing_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("nested").join("exhibitors.csv");

        write_rows(&path, &[row("1", "a", "{}"), row("2", "b", "{}")]).unwrap();
        write_rows(&path, &[row("3", "c", "{}")]).unwrap();

        let contents = fs::read_to_string(&path).unwrap();
        assert_eq!(contents.lines().count(), 2, "header + one row: {contents}");
        assert!(contents.lines().nth(1).unwrap().starts_with("3,"));
    }
}
