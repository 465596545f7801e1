//! Proad-Export読み込みモジュール
//!
//! ## 処理フロー
//! 1. 拡張子で形式を判定（.csv / .xlsx）
//! 2. 生の行（文字列の配列）を読み込み
//! 3. 先頭行（ヘッダー）を捨て、フリーランサーを除外してRecordに変換

pub mod csv_reader;
pub mod xlsx_reader;

use crate::error::{AuslastungError, Result};
use auslastung_common::{ClassificationRules, Record};
use std::path::Path;

/// 固定の列位置
const COL_SHORT_NAME: usize = 0;
const COL_FULL_NAME: usize = 1;
const COL_ACTIVITY: usize = 3;
const COL_DESCRIPTION: usize = 6;
const COL_JOB_CODE: usize = 7;
const COL_HOURS: usize = 8;

/// 入力ファイル形式
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ProadFormat {
    Csv,
    Xlsx,
}

impl ProadFormat {
    pub fn from_path(path: &Path) -> Result<Self> {
        let ext = path
            .extension()
            .map(|e| e.to_string_lossy().to_lowercase())
            .unwrap_or_default();

        match ext.as_str() {
            "csv" => Ok(ProadFormat::Csv),
            "xlsx" => Ok(ProadFormat::Xlsx),
            _ => Err(AuslastungError::UnsupportedFormat(path.display().to_string())),
        }
    }
}

/// Proadファイルを読み込んでRecordに変換
pub fn read_proad_file(path: &Path, rules: &ClassificationRules) -> Result<Vec<Record>> {
    let format = ProadFormat::from_path(path)?;

    if !path.exists() {
        return Err(AuslastungError::FileNotFound(path.display().to_string()));
    }
    let size = std::fs::metadata(path)?.len();
    log::info!("using file: {}, size: {}", path.display(), size);

    let rows = match format {
        ProadFormat::Csv => csv_reader::read_rows(path)?,
        ProadFormat::Xlsx => xlsx_reader::read_rows(path)?,
    };

    Ok(parse_rows(&rows, rules))
}

/// 生の行をRecordに変換
///
/// 先頭行はヘッダーとして捨てる。時間が数値でなければ0。
pub fn parse_rows(rows: &[Vec<String>], rules: &ClassificationRules) -> Vec<Record> {
    rows.iter()
        .skip(1)
        .map(|row| parse_row(row))
        .filter(|record| !rules.is_excluded(&record.full_name))
        .collect()
}

fn parse_row(row: &[String]) -> Record {
    let field = |index: usize| row.get(index).cloned().unwrap_or_default();

    Record {
        short_name: field(COL_SHORT_NAME),
        full_name: field(COL_FULL_NAME),
        activity: field(COL_ACTIVITY),
        description: field(COL_DESCRIPTION),
        job_code: field(COL_JOB_CODE),
        hours: parse_hours(&field(COL_HOURS)),
        category: None,
        registered: false,
    }
}

/// 時間の解析（"4.5" / "4,5"、失敗時は0）
pub fn parse_hours(value: &str) -> f64 {
    let value = value.trim();
    value
        .parse::<f64>()
        .or_else(|_| value.replace(',', ".").parse::<f64>())
        .ok()
        .filter(|h| h.is_finite())
        .unwrap_or(0.0)
}
