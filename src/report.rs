//! 端末向けのレポート出力
//!
//! 表はすべて文字列として組み立て、呼び出し側で出力する。

use crate::writer::{SheetWriteLog, WriteReport};
use auslastung_common::{classifier, Category, Record};

/// 列幅の最小値と列間の余白
const MIN_WIDTH: usize = 10;
const PADDING: usize = 6;

/// 左詰めの簡易テーブル
#[derive(Debug, Default)]
pub struct Table {
    rows: Vec<Vec<String>>,
}

impl Table {
    pub fn new<S: ToString>(header: &[S]) -> Self {
        Self {
            rows: vec![header.iter().map(|h| h.to_string()).collect()],
        }
    }

    pub fn add_row<S: ToString>(&mut self, row: &[S]) {
        self.rows.push(row.iter().map(|c| c.to_string()).collect());
    }

    /// ヘッダーを除いた行数
    pub fn len(&self) -> usize {
        self.rows.len().saturating_sub(1)
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    pub fn render(&self) -> String {
        let columns = self.rows.iter().map(|r| r.len()).max().unwrap_or(0);
        let widths: Vec<usize> = (0..columns)
            .map(|i| {
                self.rows
                    .iter()
                    .filter_map(|r| r.get(i))
                    .map(|c| c.chars().count())
                    .max()
                    .unwrap_or(0)
                    .max(MIN_WIDTH)
            })
            .collect();

        let mut out = String::new();
        for row in &self.rows {
            let mut line = String::new();
            for (i, cell) in row.iter().enumerate() {
                if i + 1 == row.len() {
                    line.push_str(cell);
                } else {
                    let pad = widths[i] + PADDING - cell.chars().count();
                    line.push_str(cell);
                    line.push_str(&" ".repeat(pad));
                }
            }
            out.push_str(line.trim_end());
            out.push('\n');
        }
        out
    }
}

fn hours(value: f64) -> String {
    format!("{:.2}", value)
}

/// カテゴリごとの Employee | Hours 表（略称で表示）
pub fn category_tables(records: &[Record]) -> String {
    let mut out = String::new();
    for category in Category::ALL {
        let mut table = Table::new(&["Employee", "Hours"]);
        for record in records.iter().filter(|r| r.is_in(category)) {
            table.add_row(&[record.short_name.clone(), hours(record.hours)]);
        }
        out.push('\n');
        out.push_str(category.label());
        out.push('\n');
        out.push_str(&table.render());
    }
    out
}

/// 明示ルールに一致しなかったレコード
pub fn unregistered_table(records: &[Record]) -> Option<String> {
    let mut table = Table::new(&["Employee", "Job", "Description", "Hours", "Category"]);
    for record in classifier::unregistered(records) {
        table.add_row(&[
            record.full_name.clone(),
            record.job_code.clone(),
            record.description.clone(),
            hours(record.hours),
            record.category.map(|c| c.to_string()).unwrap_or_default(),
        ]);
    }
    (!table.is_empty()).then(|| table.render())
}

/// シートごとの Coords | Name | Value 表
pub fn write_log_table(log: &SheetWriteLog) -> String {
    let mut table = Table::new(&["Coords", "Name", "Value"]);
    for write in &log.writes {
        table.add_row(&[write.cell.to_string(), write.employee.clone(), hours(write.value)]);
    }
    format!("{} (period {})\n{}", log.sheet, log.period_cell, table.render())
}

/// スキップした書き込みの一覧
pub fn skip_summary(report: &WriteReport) -> Option<String> {
    if report.skips.is_empty() {
        return None;
    }

    let mut table = Table::new(&["Category", "Sheet", "Employee", "Hours", "Reason"]);
    for skip in &report.skips {
        table.add_row(&[
            skip.category.to_string(),
            skip.sheet.clone().unwrap_or_else(|| "-".into()),
            skip.employee.clone().unwrap_or_else(|| "-".into()),
            hours(skip.hours),
            skip.reason.to_string(),
        ]);
    }
    Some(table.render())
}

pub fn print_category_tables(records: &[Record]) {
    print!("{}", category_tables(records));
}

pub fn print_unregistered(records: &[Record]) {
    println!("not registered records:");
    if let Some(table) = unregistered_table(records) {
        print!("{}", table);
    }
}

pub fn print_write_log(report: &WriteReport) {
    for log in &report.sheets {
        println!();
        print!("{}", write_log_table(log));
    }
}

pub fn print_skip_summary(report: &WriteReport) {
    if let Some(table) = skip_summary(report) {
        println!("\n⚠ {} writes skipped:", report.skips.len());
        print!("{}", table);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::writer::{CellWrite, Skip, SkipReason};
    use auslastung_common::CellRef;

    fn record(short: &str, category: Category, registered: bool, hours: f64) -> Record {
        Record {
            short_name: short.to_string(),
            full_name: format!("{} Name", short),
            job_code: "KUND-1".to_string(),
            hours,
            category: Some(category),
            registered,
            ..Default::default()
        }
    }

    #[test]
    fn test_table_alignment() {
        let mut table = Table::new(&["Employee", "Hours"]);
        table.add_row(&["AM", "8.00"]);
        let rendered = table.render();
        let lines: Vec<&str> = rendered.lines().collect();

        assert_eq!(lines[0], format!("Employee{}Hours", " ".repeat(8)));
        assert_eq!(lines[1], format!("AM{}8.00", " ".repeat(14)));
    }

    #[test]
    fn test_category_tables_list_every_category() {
        let records = vec![record("AM", Category::Vacation, true, 4.5)];
        let out = category_tables(&records);

        for category in Category::ALL {
            assert!(out.contains(category.label()));
        }
        assert!(out.contains("4.50"));
    }

    #[test]
    fn test_unregistered_only_fallback_records() {
        let records = vec![
            record("AM", Category::Vacation, true, 8.0),
            record("BB", Category::Customer, false, 2.0),
        ];

        let out = unregistered_table(&records).unwrap();
        assert!(out.contains("BB Name"));
        assert!(!out.contains("AM Name"));
    }

    #[test]
    fn test_unregistered_empty() {
        let records = vec![record("AM", Category::Vacation, true, 8.0)];
        assert!(unregistered_table(&records).is_none());
    }

    #[test]
    fn test_write_log_table() {
        let log = SheetWriteLog {
            category: Category::Vacation,
            sheet: "Urlaub".into(),
            period_cell: CellRef::parse("D2").unwrap(),
            writes: vec![CellWrite {
                cell: CellRef::parse("D3").unwrap(),
                employee: "Anna Muster".into(),
                value: 8.0,
            }],
        };

        let out = write_log_table(&log);
        assert!(out.starts_with("Urlaub (period D2)"));
        assert!(out.contains("D3"));
        assert!(out.contains("8.00"));
    }

    #[test]
    fn test_skip_summary() {
        assert!(skip_summary(&WriteReport::default()).is_none());

        let report = WriteReport {
            sheets: vec![],
            skips: vec![Skip {
                category: Category::Sick,
                sheet: Some("Krank".into()),
                employee: Some("Anna Muster".into()),
                hours: 8.0,
                reason: SkipReason::MissingPeriodMarker("Zeitraum".into()),
            }],
        };
        let out = skip_summary(&report).unwrap();
        assert!(out.contains("Krank"));
        assert!(out.contains("Zeitraum"));
    }
}
