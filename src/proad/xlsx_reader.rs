//! Proad XLSXの読み込み（最初のワークシート）

use crate::error::{AuslastungError, Result};
use calamine::{open_workbook, Reader, Xlsx};
use std::path::Path;

pub fn read_rows(path: &Path) -> Result<Vec<Vec<String>>> {
    let read_error = |message: String| AuslastungError::ProadRead {
        path: path.display().to_string(),
        message,
    };

    let mut workbook: Xlsx<_> = open_workbook(path).map_err(|e: calamine::XlsxError| read_error(e.to_string()))?;

    let range = match workbook.worksheet_range_at(0) {
        Some(range) => range.map_err(|e| read_error(e.to_string()))?,
        None => return Err(read_error("workbook contains no sheets".into())),
    };

    // 範囲がA1から始まらない場合も列位置を保つ
    let (start_row, start_col) = range.start().unwrap_or((0, 0));
    let mut rows: Vec<Vec<String>> = vec![Vec::new(); start_row as usize];

    for row in range.rows() {
        let mut fields = vec![String::new(); start_col as usize];
        fields.extend(row.iter().map(|cell| cell.to_string()));
        rows.push(fields);
    }

    Ok(rows)
}
