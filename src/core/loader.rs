use crate::core::Storage;
use crate::utils::error::{MedalError, Result};
use csv::{ReaderBuilder, StringRecord};

/// A data row with the 1-based line it came from.
#[derive(Debug, Clone)]
pub struct RawRow {
    pub line: u64,
    pub fields: StringRecord,
}

/// Reads `path` through `storage` and splits it into data rows.
pub fn load_rows<S: Storage>(storage: &S, path: &str) -> Result<Vec<RawRow>> {
    let bytes = storage.read_file(path)?;
    let text = String::from_utf8(bytes).map_err(|e| {
        MedalError::file_read(
            path,
            &std::io::Error::new(std::io::ErrorKind::InvalidData, e.utf8_error()),
        )
    })?;

    tracing::debug!("Read {} bytes from {}", text.len(), path);
    parse_rows(&text)
}

/// Splits every line on `,` and discards the first (header) line.
///
/// Quoting is disabled on purpose: a comma always separates fields, and rows
/// may have any width. Blank lines yield no row.
pub fn parse_rows(text: &str) -> Result<Vec<RawRow>> {
    let mut reader = ReaderBuilder::new()
        .has_headers(true)
        .flexible(true)
        .quoting(false)
        .from_reader(text.as_bytes());

    let mut rows = Vec::new();
    for result in reader.records() {
        let fields = result?;
        let line = fields.position().map(|p| p.line()).unwrap_or_default();
        rows.push(RawRow { line, fields });
    }

    Ok(rows)
}
