//! Generic CSV to JSON reader with encoding and delimiter auto-detection.
//!
//! Converts CSV rows into JSON objects keyed by column header. All values are
//! surfaced as strings; typing happens later in [`crate::models`]. No
//! dashboard-specific logic here.
//!
//! Exports from regional tooling regularly arrive as ISO-8859-1 or
//! Windows-1252 with `;` separators, so both the encoding and the delimiter
//! are sniffed before parsing.

use serde_json::{json, Map, Value};
use std::path::Path;

use crate::error::{CsvError, CsvResult};

/// A parsed CSV file with detection metadata.
#[derive(Debug, Clone)]
pub struct CsvTable {
    /// Parsed rows as JSON objects (all values strings).
    pub records: Vec<Value>,
    /// Detected encoding.
    pub encoding: String,
    /// Detected delimiter.
    pub delimiter: char,
    /// Column headers.
    pub headers: Vec<String>,
}

/// Detect the encoding of raw bytes using chardet.
pub fn detect_encoding(bytes: &[u8]) -> String {
    let result = chardet::detect(bytes);
    let charset = result.0;

    // Normalize charset names
    match charset.to_lowercase().as_str() {
        "ascii" | "utf-8" | "utf8" => "utf-8".to_string(),
        "iso-8859-1" | "iso-8859-15" | "latin-1" | "latin1" => "iso-8859-1".to_string(),
        "windows-1252" | "cp1252" => "windows-1252".to_string(),
        _ => charset,
    }
}

/// Decode bytes to a string using the specified encoding.
pub fn decode_content(bytes: &[u8], encoding: &str) -> CsvResult<String> {
    match encoding.to_lowercase().as_str() {
        "utf-8" | "utf8" | "ascii" => Ok(String::from_utf8_lossy(bytes).to_string()),
        "iso-8859-1" | "latin-1" | "latin1" => {
            Ok(encoding_rs::ISO_8859_15.decode(bytes).0.to_string())
        }
        "windows-1252" | "cp1252" => Ok(encoding_rs::WINDOWS_1252.decode(bytes).0.to_string()),
        // Fallback: UTF-8 with lossy conversion
        _ => Ok(String::from_utf8_lossy(bytes).to_string()),
    }
}

/// Detect the delimiter by counting occurrences in the first line.
pub fn detect_delimiter(content: &str) -> char {
    let first_line = content.lines().next().unwrap_or("");

    let separators = [',', ';', '\t', '|'];
    let mut best_sep = ',';
    let mut best_count = 0;

    for &sep in &separators {
        let count = first_line.matches(sep).count();
        if count > best_count {
            best_count = count;
            best_sep = sep;
        }
    }

    best_sep
}

/// Read a CSV file with auto-detection of encoding and delimiter.
///
/// # Example
/// ```ignore
/// let table = read_csv_file("sales_data.csv")?;
/// println!("Encoding: {}, Delimiter: '{}'", table.encoding, table.delimiter);
/// println!("Rows: {}", table.records.len());
/// ```
pub fn read_csv_file<P: AsRef<Path>>(path: P) -> CsvResult<CsvTable> {
    let bytes = std::fs::read(path.as_ref())?;
    read_csv_bytes(&bytes)
}

/// Read CSV bytes with auto-detection of encoding and delimiter.
pub fn read_csv_bytes(bytes: &[u8]) -> CsvResult<CsvTable> {
    if bytes.is_empty() {
        return Err(CsvError::EmptyFile);
    }

    let encoding = detect_encoding(bytes);
    let content = decode_content(bytes, &encoding)?;
    let delimiter = detect_delimiter(&content);

    parse_with_delimiter(&content, delimiter, encoding)
}

/// Parse decoded CSV content with an explicit delimiter.
pub fn parse_with_delimiter(
    content: &str,
    delimiter: char,
    encoding: String,
) -> CsvResult<CsvTable> {
    if content.trim().is_empty() {
        return Err(CsvError::EmptyFile);
    }

    let mut reader = csv::ReaderBuilder::new()
        .delimiter(delimiter as u8)
        .trim(csv::Trim::All)
        .flexible(true)
        .from_reader(content.as_bytes());

    let headers: Vec<String> = reader
        .headers()?
        .iter()
        .map(|h| h.trim_matches('"').to_string())
        .collect();

    if headers.is_empty() || headers.iter().all(|h| h.is_empty()) {
        return Err(CsvError::NoHeaders);
    }

    let mut records = Vec::new();
    for result in reader.records() {
        let row = result?;

        // Blank lines between data rows are tolerated
        if row.iter().all(|v| v.is_empty()) {
            continue;
        }

        let mut obj = Map::new();
        for (i, header) in headers.iter().enumerate() {
            let raw_value = row.get(i).map(|s| s.trim_matches('"')).unwrap_or("");
            obj.insert(header.clone(), json!(raw_value));
        }
        records.push(Value::Object(obj));
    }

    Ok(CsvTable {
        records,
        encoding,
        delimiter,
        headers,
    })
}
