//! Proad CSVの読み込み（カンマ区切り、"#" 行はコメント）

use crate::error::{AuslastungError, Result};
use std::path::Path;

pub fn read_rows(path: &Path) -> Result<Vec<Vec<String>>> {
    let mut reader = csv::ReaderBuilder::new()
        .delimiter(b',')
        .comment(Some(b'#'))
        .has_headers(false)
        .flexible(true)
        .from_path(path)
        .map_err(|e| AuslastungError::ProadRead {
            path: path.display().to_string(),
            message: e.to_string(),
        })?;

    let mut rows = Vec::new();
    for record in reader.records() {
        let record = record?;
        rows.push(record.iter().map(|field| field.to_string()).collect());
    }

    Ok(rows)
}
