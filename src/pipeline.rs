//! 一括処理
//!
//! ## 処理フロー
//! 1. Proad-Exportを読み込み（フリーランサー除外）
//! 2. 分類
//! 3. ワークブックを開き、カテゴリごとに集計して書き込み
//! 4. 保存（dont_save指定時は保存しない）
//!
//! 終了コード: 0 = 全件書き込み, 2 = 社員の値をスキップ, 1 = 致命的エラー（anyhow経由）

use crate::config::Config;
use crate::error::{AuslastungError, Result};
use crate::proad;
use crate::report;
use crate::workbook::{self, Workbook};
use crate::writer::{SheetWriter, WriteReport};
use auslastung_common::{aggregate_all, classify, ClassificationSummary, Record};
use std::path::PathBuf;
use std::process::ExitCode;

/// 社員の値を1件以上書き込めなかったときの終了コード
pub const EXIT_SKIPPED_WRITES: u8 = 2;

/// 実行オプション
#[derive(Debug, Clone)]
pub struct RunOptions {
    pub excel_path: PathBuf,
    pub proad_path: PathBuf,
    /// Noneなら保存しない
    pub save_path: Option<PathBuf>,
    pub period: String,
    /// 表を端末に出力
    pub log: bool,
}

/// 実行結果
#[derive(Debug)]
pub struct RunOutcome {
    pub records: Vec<Record>,
    pub summary: ClassificationSummary,
    pub report: WriteReport,
    pub saved_to: Option<PathBuf>,
}

pub fn run(options: &RunOptions, config: &Config) -> Result<RunOutcome> {
    if let Some(path) = &options.save_path {
        workbook::check_extension(path).map_err(|message| AuslastungError::WorkbookSave {
            path: path.display().to_string(),
            message,
        })?;
    }

    println!("[1/4] reading {}", options.proad_path.display());
    let mut records = proad::read_proad_file(&options.proad_path, &config.rules)?;
    println!("✔ {} records\n", records.len());

    println!("[2/4] classifying records");
    let summary = classify(&mut records, &config.rules);
    report::print_unregistered(&records);
    if options.log {
        report::print_category_tables(&records);
    }
    println!("✔ {} records classified ({} by fallback)\n", summary.total(), summary.fallback_count);

    println!("[3/4] writing to {}", options.excel_path.display());
    let mut workbook = Workbook::open(&options.excel_path)?;
    let totals = aggregate_all(&records);
    let write_report = SheetWriter::new(config).write_all(&mut workbook, &totals, &options.period);
    if options.log {
        report::print_write_log(&write_report);
    }
    println!("✔ {} values written, period: {}\n", write_report.write_count(), options.period);

    let saved_to = match &options.save_path {
        Some(path) => {
            println!("[4/4] saving {}", path.display());
            workbook.save_as(path)?;
            Some(path.clone())
        }
        None => {
            println!("[4/4] changes not saved (dont_save)");
            None
        }
    };

    Ok(RunOutcome {
        records,
        summary,
        report: write_report,
        saved_to,
    })
}

/// 書き込み結果から終了コードを決める
pub fn exit_code(report: &WriteReport) -> ExitCode {
    if report.has_lost_writes() {
        ExitCode::from(EXIT_SKIPPED_WRITES)
    } else {
        ExitCode::SUCCESS
    }
}
