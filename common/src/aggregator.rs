//! カテゴリ別の社員ごと時間集計

use crate::types::{Category, Record};
use serde::Serialize;

/// 社員ごとの合計時間
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct EmployeeTotal {
    pub employee: String,
    pub hours: f64,
}

/// 指定カテゴリの時間を社員（フルネーム）ごとに合計する
///
/// 順序は入力中の初出順。
pub fn aggregate(records: &[Record], category: Category) -> Vec<EmployeeTotal> {
    let mut totals: Vec<EmployeeTotal> = Vec::new();

    for record in records.iter().filter(|r| r.is_in(category)) {
        match totals.iter_mut().find(|t| t.employee == record.full_name) {
            Some(total) => total.hours += record.hours,
            None => totals.push(EmployeeTotal {
                employee: record.full_name.clone(),
                hours: record.hours,
            }),
        }
    }

    totals
}

/// 全カテゴリを処理順に集計
pub fn aggregate_all(records: &[Record]) -> Vec<(Category, Vec<EmployeeTotal>)> {
    Category::ALL
        .iter()
        .map(|&category| (category, aggregate(records, category)))
        .collect()
}
