//! ワークシートのメモリ上表現
//!
//! シート名 + 0始まりの (行, 列) で値を参照する疎なグリッド。
//! 読み込み・保存は呼び出し側（umya-spreadsheet）が担当する。

use crate::coords::CellRef;
use regex::Regex;
use std::collections::BTreeMap;

/// セルの値
#[derive(Debug, Clone, PartialEq, Default)]
pub enum CellValue {
    #[default]
    Empty,
    Text(String),
    Number(f64),
    /// 数式（先頭の "=" なし）とキャッシュ済みの表示値
    Formula { formula: String, cached: String },
}

impl CellValue {
    pub fn is_empty(&self) -> bool {
        match self {
            CellValue::Empty => true,
            CellValue::Text(s) => s.is_empty(),
            _ => false,
        }
    }

    /// 表示文字列（整数は小数点なし）
    pub fn display(&self) -> String {
        match self {
            CellValue::Empty => String::new(),
            CellValue::Text(s) => s.clone(),
            CellValue::Number(n) => format_number(*n),
            CellValue::Formula { cached, .. } => cached.clone(),
        }
    }

    /// 数値として解釈（数値でなければNone）
    pub fn as_number(&self) -> Option<f64> {
        match self {
            CellValue::Number(n) => Some(*n),
            CellValue::Text(s) => s.trim().parse().ok(),
            CellValue::Formula { cached, .. } => cached.trim().parse().ok(),
            _ => None,
        }
    }
}

pub fn format_number(n: f64) -> String {
    if n.fract() == 0.0 && n.abs() < 1e15 {
        format!("{}", n as i64)
    } else {
        format!("{}", n)
    }
}

/// 1枚のワークシート
#[derive(Debug, Clone, Default)]
pub struct Sheet {
    pub name: String,
    cells: BTreeMap<(u32, u32), CellValue>,
}

static EMPTY: CellValue = CellValue::Empty;

impl Sheet {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            cells: BTreeMap::new(),
        }
    }

    pub fn get(&self, row: u32, col: u32) -> &CellValue {
        self.cells.get(&(row, col)).unwrap_or(&EMPTY)
    }

    pub fn get_ref(&self, cell: &CellRef) -> &CellValue {
        self.get(cell.row_index(), cell.column_index())
    }

    pub fn set(&mut self, row: u32, col: u32, value: CellValue) {
        if value == CellValue::Empty {
            self.cells.remove(&(row, col));
        } else {
            self.cells.insert((row, col), value);
        }
    }

    pub fn set_ref(&mut self, cell: &CellRef, value: CellValue) {
        self.set(cell.row_index(), cell.column_index(), value);
    }

    /// 値のあるセルを行優先で列挙
    pub fn cells(&self) -> impl Iterator<Item = (u32, u32, &CellValue)> {
        self.cells.iter().map(|(&(row, col), value)| (row, col, value))
    }

    /// 行内で最後に値のある列の次の列番号（空行は0）
    pub fn row_width(&self, row: u32) -> u32 {
        self.cells
            .range((row, 0)..=(row, u32::MAX))
            .filter(|(_, v)| !v.is_empty())
            .map(|(&(_, col), _)| col + 1)
            .max()
            .unwrap_or(0)
    }

    /// 表示文字列が完全一致するセル（前後の空白は無視）
    pub fn search_text(&self, needle: &str) -> Vec<CellRef> {
        let needle = needle.trim();
        self.cells()
            .filter(|(_, _, v)| v.display().trim() == needle)
            .map(|(row, col, _)| CellRef::from_indices(row, col))
            .collect()
    }

    /// 表示文字列が正規表現に一致するセル
    pub fn search_regex(&self, re: &Regex) -> Vec<CellRef> {
        self.cells()
            .filter(|(_, _, v)| !v.is_empty() && re.is_match(&v.display()))
            .map(|(row, col, _)| CellRef::from_indices(row, col))
            .collect()
    }
}
