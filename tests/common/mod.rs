//! 統合テスト用のファイル生成ヘルパー

#![allow(dead_code)]

use rust_xlsxwriter::{Format, Workbook};
use std::path::{Path, PathBuf};

/// シート番号順のシート名（1: Kunden … 8: Überstunden）
pub const SHEET_NAMES: [&str; 8] = [
    "Kunden",
    "Pitch",
    "Leerlauf",
    "Intern",
    "Urlaub",
    "Krank",
    "Feiertage",
    "Überstunden",
];

pub const CSV_HEADER: &str =
    "Kürzel,Name,Datum,Tätigkeit,Kunde,Projekt,Jobbeschreibung,Jobnummer,Stunden";

/// A列の幅
pub const NAME_COLUMN_WIDTH: f64 = 30.0;

/// 期間ヘッダー（A1: Zeitraum, B1-C1: 過去の期間）と社員2名のワークブック
///
/// A列は幅広、A6:D6は結合セル、ヘッダーは太字。
pub fn create_auslastung(dir: &Path) -> PathBuf {
    let path = dir.join("Auslastung.xlsx");
    let mut workbook = Workbook::new();
    let bold = Format::new().set_bold();

    for name in SHEET_NAMES {
        let sheet = workbook.add_worksheet();
        sheet.set_name(name).unwrap();
        sheet.set_column_width(0, NAME_COLUMN_WIDTH).unwrap();
        sheet.write_string_with_format(0, 0, "Zeitraum", &bold).unwrap();
        sheet.write_string(0, 1, "2024-01").unwrap();
        sheet.write_string(0, 2, "2024-02").unwrap();
        sheet.write_string(1, 0, "Muster, Anna").unwrap();
        sheet.write_number(1, 1, 8.0).unwrap();
        sheet.write_string(2, 0, "Beispiel, Bernd").unwrap();
        sheet.write_formula(3, 1, "=SUM(B2:B3)").unwrap();
        sheet.merge_range(5, 0, 5, 3, "Team gesamt", &bold).unwrap();
    }

    workbook.save(&path).unwrap();
    path
}

pub fn write_csv(dir: &Path, file_name: &str, rows: &[&str]) -> PathBuf {
    let path = dir.join(file_name);
    let mut content = String::from("# Proad Export\n");
    content.push_str(CSV_HEADER);
    content.push('\n');
    for row in rows {
        content.push_str(row);
        content.push('\n');
    }
    std::fs::write(&path, content).unwrap();
    path
}
