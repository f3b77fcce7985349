//! CSV text handling: file-type check, encoding detection and row splitting.
//!
//! Turns uploaded bytes into trimmed string fields per data row. No
//! knowledge of hours or scores lives here; see [`crate::validation`].

use csv::{ReaderBuilder, Trim};

use crate::error::UploadError;

/// MIME type browsers report for CSV files.
pub const CSV_MIME: &str = "text/csv";

/// One data row after the header, fields trimmed.
#[derive(Debug, Clone, PartialEq)]
pub struct CsvRow {
    /// Header is row 0, the line after it row 1. Blank lines still count.
    pub row: usize,
    pub fields: Vec<String>,
}

impl CsvRow {
    pub fn field_refs(&self) -> Vec<&str> {
        self.fields.iter().map(String::as_str).collect()
    }
}

/// Accept a file when either the MIME type or the extension says CSV.
pub fn is_csv_file(name: &str, mime: &str) -> bool {
    mime.eq_ignore_ascii_case(CSV_MIME) || name.to_ascii_lowercase().ends_with(".csv")
}

/// Detect the encoding of raw bytes using chardet
pub fn detect_encoding(bytes: &[u8]) -> String {
    let charset = chardet::detect(bytes).0;

    match charset.to_lowercase().as_str() {
        // chardet reports an empty charset for empty input
        "" | "ascii" | "utf-8" | "utf8" => "utf-8".to_string(),
        "iso-8859-1" | "iso-8859-15" | "latin-1" | "latin1" => "iso-8859-1".to_string(),
        "windows-1252" | "cp1252" => "windows-1252".to_string(),
        other => other.to_string(),
    }
}

/// Decode bytes to text in the given encoding. Unknown encodings fall back
/// to lossy UTF-8. A leading byte-order mark is dropped.
pub fn decode_content(bytes: &[u8], encoding: &str) -> Result<String, UploadError> {
    let text = match encoding.to_lowercase().as_str() {
        "utf-8" | "utf8" | "ascii" => String::from_utf8(bytes.to_vec())
            .map_err(|e| UploadError::Encoding(e.to_string()))?,
        "iso-8859-1" | "latin-1" | "latin1" => encoding_rs::ISO_8859_15.decode(bytes).0.into_owned(),
        "windows-1252" | "cp1252" => encoding_rs::WINDOWS_1252.decode(bytes).0.into_owned(),
        _ => String::from_utf8_lossy(bytes).into_owned(),
    };
    Ok(text.trim_start_matches('\u{feff}').to_string())
}

/// Detect and decode in one step.
pub fn decode_auto(bytes: &[u8]) -> Result<String, UploadError> {
    let encoding = detect_encoding(bytes);
    log::debug!("Detected encoding {}", encoding);
    decode_content(bytes, &encoding)
}

/// Split CSV text into data rows.
///
/// The first line is the header and is ignored, even when it is blank.
/// Rows that are empty after trimming are skipped but keep their place in
/// the row count. Rows are not length-checked here.
pub fn data_rows(content: &str, delimiter: u8) -> Result<Vec<CsvRow>, UploadError> {
    let mut reader = ReaderBuilder::new()
        .delimiter(delimiter)
        .has_headers(false)
        .flexible(true)
        .trim(Trim::All)
        .from_reader(content.as_bytes());

    let mut rows = Vec::new();
    for (index, result) in reader.records().enumerate() {
        let record = result.map_err(|e| UploadError::Malformed(e.to_string()))?;

        // The reader skips blank lines, so the header is found by line number.
        let line = record.position().map(|p| p.line()).unwrap_or(index as u64 + 1);
        if line <= 1 {
            continue;
        }

        if record.len() == 1 && record[0].is_empty() {
            continue;
        }

        rows.push(CsvRow {
            row: (line - 1) as usize,
            fields: record.iter().map(str::to_string).collect(),
        });
    }

    Ok(rows)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_header_is_skipped() {
        let rows = data_rows("hours,fall,winter\n1,50,55\n2,60,70", b',').unwrap();
        assert_eq!(rows.len(), 2);
        assert_eq!(rows[0].fields, vec!["1", "50", "55"]);
        assert_eq!(rows[1].row, 2);
    }

    #[test]
    fn test_blank_first_line_is_the_header() {
        let rows = data_rows("\nhours,fall,winter\n1,50,55\n", b',').unwrap();
        assert_eq!(rows.len(), 2);
        assert_eq!(rows[0].row, 1);
        assert_eq!(rows[0].fields, vec!["hours", "fall", "winter"]);
        assert_eq!(rows[1].row, 2);
    }

    #[test]
    fn test_fields_are_trimmed() {
        let rows = data_rows("a,b,c\n  1 , 2 ,3  ", b',').unwrap();
        assert_eq!(rows[0].fields, vec!["1", "2", "3"]);
    }

    #[test]
    fn test_blank_lines_skipped_but_counted() {
        let rows = data_rows("a,b,c\n1,2,3\n\n   \n4,5,6\n", b',').unwrap();
        assert_eq!(rows.len(), 2);
        assert_eq!(rows[0].row, 1);
        assert_eq!(rows[1].row, 4);
    }

    #[test]
    fn test_crlf_line_endings() {
        let rows = data_rows("a,b,c\r\n1,2,3\r\n4,5,6\r\n", b',').unwrap();
        assert_eq!(rows.len(), 2);
        assert_eq!(rows[1].fields, vec!["4", "5", "6"]);
    }

    #[test]
    fn test_ragged_rows_are_kept() {
        let rows = data_rows("a,b,c\n1,2\n1,2,3,4", b',').unwrap();
        assert_eq!(rows[0].fields.len(), 2);
        assert_eq!(rows[1].fields.len(), 4);
    }

    #[test]
    fn test_quoted_values() {
        let rows = data_rows("a,b,c\n\"1\",\"2\",\"3\"", b',').unwrap();
        assert_eq!(rows[0].fields, vec!["1", "2", "3"]);
    }

    #[test]
    fn test_header_only() {
        assert!(data_rows("hours,fall,winter\n", b',').unwrap().is_empty());
        assert!(data_rows("", b',').unwrap().is_empty());
    }

    #[test]
    fn test_is_csv_file() {
        assert!(is_csv_file("scores.csv", ""));
        assert!(is_csv_file("SCORES.CSV", "application/octet-stream"));
        assert!(is_csv_file("export", "text/csv"));
        assert!(!is_csv_file("scores.xlsx", "application/vnd.ms-excel"));
    }

    #[test]
    fn test_utf8_bom_is_stripped() {
        let bytes = b"\xEF\xBB\xBFhours,fall,winter\n1,2,3";
        let text = decode_content(bytes, "utf-8").unwrap();
        assert!(text.starts_with("hours"));
    }

    #[test]
    fn test_latin1_decoding() {
        // "Soci\xe9t\xe9" in ISO-8859-1
        let bytes: &[u8] = &[0x53, 0x6F, 0x63, 0x69, 0xE9, 0x74, 0xE9];
        let decoded = decode_content(bytes, "iso-8859-1").unwrap();
        assert!(decoded.starts_with("Soci"));
    }

    #[test]
    fn test_decode_auto_ascii() {
        let text = decode_auto(b"hours,fall,winter\n1,2,3").unwrap();
        assert_eq!(text, "hours,fall,winter\n1,2,3");
    }
}
