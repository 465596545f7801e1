//! シートへの書き込み
//!
//! ## 処理フロー（カテゴリごと）
//! 1. 書き込み先シートを解決（見つからなければスキップ）
//! 2. 期間マーカー（"Zeitraum"）のセルから基準行を取得
//! 3. 基準行の最初の空セルを今回の列とし、期間ラベルを書き込む
//! 4. 社員ごとの合計を社員行の同じ列に加算して書き込む
//!
//! 既存の値には加算するため、同じ列で2回実行すると合計は2倍になる。

use crate::config::{Config, SheetTarget};
use crate::workbook::Workbook;
use auslastung_common::{
    CellRef, CellValue, Category, EmployeeLocator, EmployeeTotal, LocateError, NameOrderRegexLocator, Sheet,
};
use std::fmt;

/// 書き込み1件
#[derive(Debug, Clone, PartialEq)]
pub struct CellWrite {
    pub cell: CellRef,
    pub employee: String,
    /// 加算後の値
    pub value: f64,
}

/// シート1枚分の書き込み記録
#[derive(Debug, Clone)]
pub struct SheetWriteLog {
    pub category: Category,
    pub sheet: String,
    pub period_cell: CellRef,
    pub writes: Vec<CellWrite>,
}

/// スキップ理由
#[derive(Debug, Clone, PartialEq)]
pub enum SkipReason {
    MissingSheet(SheetTarget),
    MissingPeriodMarker(String),
    Employee(LocateError),
}

impl fmt::Display for SkipReason {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SkipReason::MissingSheet(target) => write!(f, "worksheet {} was not found", target),
            SkipReason::MissingPeriodMarker(marker) => {
                write!(f, "next free cell couldn't be determined (no \"{}\" cell)", marker)
            }
            SkipReason::Employee(e) => write!(f, "{}", e),
        }
    }
}

/// スキップした書き込み
#[derive(Debug, Clone)]
pub struct Skip {
    pub category: Category,
    pub sheet: Option<String>,
    /// シート単位のスキップで書き込む値がなければNone
    pub employee: Option<String>,
    pub hours: f64,
    pub reason: SkipReason,
}

/// 実行全体の書き込み結果
#[derive(Debug, Clone, Default)]
pub struct WriteReport {
    pub sheets: Vec<SheetWriteLog>,
    pub skips: Vec<Skip>,
}

impl WriteReport {
    pub fn write_count(&self) -> usize {
        self.sheets.iter().map(|s| s.writes.len()).sum()
    }

    /// 社員の値が書き込まれなかったスキップ
    pub fn lost_writes(&self) -> impl Iterator<Item = &Skip> {
        self.skips.iter().filter(|s| s.employee.is_some())
    }

    pub fn has_lost_writes(&self) -> bool {
        self.lost_writes().next().is_some()
    }
}

/// カテゴリ別の合計をワークブックに書き込む
pub struct SheetWriter<'a, L = NameOrderRegexLocator> {
    config: &'a Config,
    locator: L,
}

impl<'a> SheetWriter<'a> {
    pub fn new(config: &'a Config) -> Self {
        Self::with_locator(config, NameOrderRegexLocator)
    }
}

impl<'a, L: EmployeeLocator> SheetWriter<'a, L> {
    pub fn with_locator(config: &'a Config, locator: L) -> Self {
        Self { config, locator }
    }

    /// 全カテゴリを処理順に書き込む
    pub fn write_all(
        &self,
        workbook: &mut Workbook,
        totals: &[(Category, Vec<EmployeeTotal>)],
        period: &str,
    ) -> WriteReport {
        let mut report = WriteReport::default();
        println!("attempting to add values to {} sheets", totals.len());
        for (category, category_totals) in totals {
            self.write_category(workbook, *category, category_totals, period, &mut report);
        }
        report
    }

    pub fn write_category(
        &self,
        workbook: &mut Workbook,
        category: Category,
        totals: &[EmployeeTotal],
        period: &str,
        report: &mut WriteReport,
    ) {
        let target = self.config.sheet_target(category);
        let file = workbook.path.display().to_string();
        let Some(index) = workbook.resolve(&target) else {
            log::warn!("worksheet {} ({}) was not found in file {}", target, category, file);
            skip_all(report, category, None, totals, SkipReason::MissingSheet(target));
            return;
        };
        let Some(sheet) = workbook.sheet(index) else {
            return;
        };
        let sheet_name = sheet.name.clone();

        println!("adding to: {}", sheet_name);

        let Some(anchor) = sheet.search_text(&self.config.period_marker).into_iter().next() else {
            log::warn!(
                "next free cell couldn't be determined: no \"{}\" cell in sheet {}",
                self.config.period_marker,
                sheet_name
            );
            let reason = SkipReason::MissingPeriodMarker(self.config.period_marker.clone());
            skip_all(report, category, Some(sheet_name), totals, reason);
            return;
        };

        let column = next_free_column(sheet, anchor.row_index());
        let period_cell = CellRef::from_indices(anchor.row_index(), column);
        workbook.set_cell(index, &period_cell, CellValue::Text(period.to_string()));
        log::debug!("period {} written to {}!{}", period, sheet_name, period_cell);

        let mut sheet_log = SheetWriteLog {
            category,
            sheet: sheet_name.clone(),
            period_cell: period_cell.clone(),
            writes: Vec::new(),
        };

        for total in totals {
            let Some(sheet) = workbook.sheet(index) else {
                break;
            };
            match self.employee_cell(sheet, &period_cell.column, total) {
                Ok(write) => {
                    workbook.set_cell(index, &write.cell, CellValue::Number(write.value));
                    sheet_log.writes.push(write);
                }
                Err(e) => {
                    log::warn!("{} ({} h not written)", e, total.hours);
                    report.skips.push(Skip {
                        category,
                        sheet: Some(sheet_name.clone()),
                        employee: Some(total.employee.clone()),
                        hours: total.hours,
                        reason: SkipReason::Employee(e),
                    });
                }
            }
        }

        println!("{} values added", sheet_log.writes.len());
        report.sheets.push(sheet_log);
    }

    /// 社員行の対象セルと加算後の値（数値でない既存値は0扱い）
    fn employee_cell(
        &self,
        sheet: &Sheet,
        column: &str,
        total: &EmployeeTotal,
    ) -> Result<CellWrite, LocateError> {
        let row = self.locator.locate(sheet, &total.employee)?;
        let cell = CellRef {
            column: column.to_string(),
            row,
        };

        let current = sheet.get_ref(&cell).as_number().unwrap_or(0.0);
        Ok(CellWrite {
            value: current + total.hours,
            cell,
            employee: total.employee.clone(),
        })
    }
}

/// 基準行で最初の空セルの列（0始まり）
pub fn next_free_column(sheet: &Sheet, row: u32) -> u32 {
    let width = sheet.row_width(row);
    (0..width)
        .find(|&col| sheet.get(row, col).is_empty())
        .unwrap_or(width)
}

fn skip_all(
    report: &mut WriteReport,
    category: Category,
    sheet: Option<String>,
    totals: &[EmployeeTotal],
    reason: SkipReason,
) {
    if totals.is_empty() {
        report.skips.push(Skip {
            category,
            sheet,
            employee: None,
            hours: 0.0,
            reason,
        });
        return;
    }

    for total in totals {
        report.skips.push(Skip {
            category,
            sheet: sheet.clone(),
            employee: Some(total.employee.clone()),
            hours: total.hours,
            reason: reason.clone(),
        });
    }
}
