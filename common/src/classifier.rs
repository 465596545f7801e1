//! レコード分類モジュール
//!
//! ## 処理フロー
//! 1. Stage1: 明示ルール（Pitchキーワード → 固定ジョブ番号）。後のルールが上書きする
//! 2. Stage2: 未分類のレコードを Intern（ジョブ番号に目印を含む）か Customer に振り分け
//!
//! Stage1に一致しなかったレコードは `registered == false` のまま残り、
//! レポートで「not registered」として表示される。

use crate::rules::ClassificationRules;
use crate::types::{Category, Record};
use std::collections::BTreeMap;

/// 分類結果の統計
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ClassificationSummary {
    /// カテゴリごとの件数
    pub per_category: BTreeMap<Category, usize>,
    /// Stage2のみで分類された件数
    pub fallback_count: usize,
}

impl ClassificationSummary {
    pub fn count(&self, category: Category) -> usize {
        self.per_category.get(&category).copied().unwrap_or(0)
    }

    pub fn total(&self) -> usize {
        self.per_category.values().sum()
    }
}

/// 全レコードを分類する（カテゴリをその場で設定）
pub fn classify(records: &mut [Record], rules: &ClassificationRules) -> ClassificationSummary {
    for record in records.iter_mut() {
        if let Some(category) = explicit_category(record, rules) {
            record.category = Some(category);
            record.registered = true;
        }
    }

    let mut summary = ClassificationSummary::default();
    for record in records.iter_mut() {
        if record.category.is_none() {
            record.category = Some(fallback_category(record, rules));
            summary.fallback_count += 1;
        }
        if let Some(category) = record.category {
            *summary.per_category.entry(category).or_insert(0) += 1;
        }
    }

    summary
}

/// Stage1: 一致した最後のルールのカテゴリ
fn explicit_category(record: &Record, rules: &ClassificationRules) -> Option<Category> {
    let job_code_rules = [
        (rules.vacation_job_code.as_str(), Category::Vacation),
        (rules.sick_job_code.as_str(), Category::Sick),
        (rules.no_work_job_code.as_str(), Category::NoWork),
        (rules.overtime_job_code.as_str(), Category::Overtime),
    ];

    let mut category = None;

    if contains_ignore_case(&record.description, &rules.pitch_keyword) {
        category = Some(Category::Pitch);
    }

    for (code, rule_category) in job_code_rules {
        if record.job_code == code {
            category = Some(rule_category);
        }
    }

    category
}

/// Stage2: 社内ジョブかそれ以外
fn fallback_category(record: &Record, rules: &ClassificationRules) -> Category {
    if record.job_code.contains(rules.intern_marker.as_str()) {
        Category::Intern
    } else {
        Category::Customer
    }
}

fn contains_ignore_case(haystack: &str, needle: &str) -> bool {
    if needle.is_empty() {
        return false;
    }
    haystack.to_uppercase().contains(&needle.to_uppercase())
}

/// 明示ルールに一致しなかったレコード
pub fn unregistered(records: &[Record]) -> impl Iterator<Item = &Record> {
    records.iter().filter(|r| !r.registered)
}
