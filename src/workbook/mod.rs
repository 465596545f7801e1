//! 出力ワークブック（Auslastung）の読み込み・保存
//!
//! umya-spreadsheetでブック全体を保持し、検索用に各シートの値を
//! メモリ上のグリッドへ写す。書き込みはグリッドとブックの両方に反映し、
//! 保存時は読み込んだブックをそのまま書き出すため、列幅・書式・
//! 結合セルは変更したセル以外そのまま残る。

use crate::config::SheetTarget;
use crate::error::{AuslastungError, Result};
use auslastung_common::{CellRef, CellValue, Sheet};
use std::path::{Path, PathBuf};
use umya_spreadsheet::{Cell, Spreadsheet};

/// 読み書きできる拡張子（大文字小文字を区別しない）
pub const WORKBOOK_EXTENSIONS: [&str; 2] = ["xlsx", "xlsm"];

/// 出力ワークブック
#[derive(Debug, Clone)]
pub struct Workbook {
    pub path: PathBuf,
    book: Spreadsheet,
    sheets: Vec<Sheet>,
    changed: usize,
}

impl Workbook {
    /// ファイルから全シートを読み込む
    pub fn open(path: &Path) -> Result<Self> {
        let open_error = |message: String| AuslastungError::WorkbookOpen {
            path: path.display().to_string(),
            message,
        };

        check_extension(path).map_err(open_error)?;
        if !path.exists() {
            return Err(open_error("file does not exist".into()));
        }

        let book = umya_spreadsheet::reader::xlsx::read(path).map_err(|e| open_error(e.to_string()))?;
        let mut sheets = Vec::new();

        for worksheet in book.get_sheet_collection() {
            let mut sheet = Sheet::new(worksheet.get_name());
            for cell in worksheet.get_cell_collection() {
                let value = cell_value(cell);
                if value.is_empty() {
                    continue;
                }
                let coordinate = cell.get_coordinate().get_coordinate();
                let cell_ref = CellRef::parse(&coordinate).map_err(|source| AuslastungError::Coordinate {
                    sheet: sheet.name.clone(),
                    source,
                })?;
                sheet.set_ref(&cell_ref, value);
            }

            log::debug!("loaded sheet {} ({} cells)", sheet.name, sheet.cells().count());
            sheets.push(sheet);
        }

        Ok(Self {
            path: path.to_path_buf(),
            book,
            sheets,
            changed: 0,
        })
    }

    /// グリッドから新しいブックを組み立てる
    #[cfg(test)]
    pub(crate) fn from_sheets(path: impl Into<PathBuf>, sheets: Vec<Sheet>) -> Self {
        let mut book = umya_spreadsheet::new_file_empty_worksheet();
        for sheet in &sheets {
            let Ok(worksheet) = book.new_sheet(sheet.name.as_str()) else {
                continue;
            };
            for (row, col, value) in sheet.cells() {
                let coordinate = CellRef::from_indices(row, col).to_string();
                store(worksheet.get_cell_mut(coordinate.as_str()), value);
            }
        }

        Self {
            path: path.into(),
            book,
            sheets,
            changed: 0,
        }
    }

    pub fn sheet_names(&self) -> Vec<&str> {
        self.sheets.iter().map(|s| s.name.as_str()).collect()
    }

    /// 書き込み先シートの位置（0始まり）
    pub fn resolve(&self, target: &SheetTarget) -> Option<usize> {
        match target {
            SheetTarget::Index(n) => {
                let index = (*n as usize).checked_sub(1)?;
                (index < self.sheets.len()).then_some(index)
            }
            SheetTarget::Name(name) => self.sheets.iter().position(|s| &s.name == name),
        }
    }

    pub fn sheet(&self, index: usize) -> Option<&Sheet> {
        self.sheets.get(index)
    }

    pub fn sheet_by_name(&self, name: &str) -> Option<&Sheet> {
        self.sheets.iter().find(|s| s.name == name)
    }

    /// セルを書き換える（グリッドとブックの両方）
    pub fn set_cell(&mut self, index: usize, cell: &CellRef, value: CellValue) {
        let Some(sheet) = self.sheets.get_mut(index) else {
            return;
        };
        if let Some(worksheet) = self.book.get_sheet_mut(&index) {
            store(worksheet.get_cell_mut(cell.to_string().as_str()), &value);
        }
        sheet.set_ref(cell, value);
        self.changed += 1;
    }

    /// 読み込み後に書き換えたセルの数
    pub fn changed_cells(&self) -> usize {
        self.changed
    }

    /// 指定パスに保存
    pub fn save_as(&self, path: &Path) -> Result<()> {
        let save_error = |message: String| AuslastungError::WorkbookSave {
            path: path.display().to_string(),
            message,
        };

        check_extension(path).map_err(save_error)?;
        umya_spreadsheet::writer::xlsx::write(&self.book, path).map_err(|e| save_error(e.to_string()))?;
        log::info!("saved workbook {} ({} cells changed)", path.display(), self.changed);
        Ok(())
    }
}

pub(crate) fn check_extension(path: &Path) -> std::result::Result<(), String> {
    let extension = path
        .extension()
        .and_then(|e| e.to_str())
        .map(str::to_lowercase)
        .unwrap_or_default();

    if WORKBOOK_EXTENSIONS.contains(&extension.as_str()) {
        Ok(())
    } else {
        Err(format!("only .xlsx and .xlsm workbooks are supported, got \"{}\"", extension))
    }
}

fn cell_value(cell: &Cell) -> CellValue {
    let cached = cell.get_value().to_string();
    let formula = cell.get_formula();
    if !formula.is_empty() {
        return CellValue::Formula {
            formula: formula.trim_start_matches('=').to_string(),
            cached,
        };
    }

    match cell.get_value_number() {
        Some(n) => CellValue::Number(n),
        None if cached.is_empty() => CellValue::Empty,
        None => CellValue::Text(cached),
    }
}

fn store(cell: &mut Cell, value: &CellValue) {
    match value {
        CellValue::Empty => {
            cell.set_value_string("");
        }
        CellValue::Text(s) => {
            cell.set_value_string(s.as_str());
        }
        CellValue::Number(n) => {
            cell.set_value_number(*n);
        }
        CellValue::Formula { formula, .. } => {
            cell.set_formula(formula.as_str());
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_extension_check() {
        assert!(check_extension(Path::new("Auslastung.xlsx")).is_ok());
        assert!(check_extension(Path::new("Auslastung.XLSM")).is_ok());
        assert!(check_extension(Path::new("Auslastung.ods")).is_err());
        assert!(check_extension(Path::new("Auslastung")).is_err());
    }

    #[test]
    fn test_set_cell_updates_grid() {
        let mut wb = Workbook::from_sheets("Auslastung.xlsx", vec![Sheet::new("Urlaub")]);
        let cell = CellRef::parse("D3").unwrap();

        wb.set_cell(0, &cell, CellValue::Number(7.5));
        wb.set_cell(4, &cell, CellValue::Number(1.0));

        assert_eq!(wb.sheet(0).unwrap().get_ref(&cell), &CellValue::Number(7.5));
        assert_eq!(wb.changed_cells(), 1);
    }

    #[test]
    fn test_resolve_targets() {
        let wb = Workbook::from_sheets(
            "Auslastung.xlsx",
            vec![Sheet::new("Kunden"), Sheet::new("Pitch")],
        );

        assert_eq!(wb.resolve(&SheetTarget::Index(2)), Some(1));
        assert_eq!(wb.resolve(&SheetTarget::Index(0)), None);
        assert_eq!(wb.resolve(&SheetTarget::Index(3)), None);
        assert_eq!(wb.resolve(&SheetTarget::Name("Kunden".into())), Some(0));
        assert_eq!(wb.sheet_names(), vec!["Kunden", "Pitch"]);
    }
}
