//! Proadレコードとカテゴリの型定義
//!
//! - Category: 出力ワークブックのシートに対応する分類
//! - Record: Proad-Exportの1行

use serde::{Deserialize, Serialize};
use std::fmt;

/// レコードの分類（不在・業務区分）
///
/// 各カテゴリは出力ワークブックの1シートに対応する。
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum Category {
    Overtime,
    NoWork,
    Sick,
    Vacation,
    Intern,
    Customer,
    Pitch,
    #[serde(rename = "holidays", alias = "holiday")]
    Holiday,
}

/// カテゴリ → シート番号・ラベルの対応表
const CATEGORY_TABLE: [(Category, u32, &str); 8] = [
    (Category::Customer, 1, "customer"),
    (Category::Pitch, 2, "pitch"),
    (Category::NoWork, 3, "noWork"),
    (Category::Intern, 4, "intern"),
    (Category::Vacation, 5, "vacation"),
    (Category::Sick, 6, "sick"),
    (Category::Holiday, 7, "holidays"),
    (Category::Overtime, 8, "overtime"),
];

impl Category {
    /// 書き込み・レポートの処理順
    pub const ALL: [Category; 8] = [
        Category::Overtime,
        Category::NoWork,
        Category::Sick,
        Category::Vacation,
        Category::Intern,
        Category::Customer,
        Category::Pitch,
        Category::Holiday,
    ];

    /// 既定のシート番号（ワークブック内の1始まりの位置）
    pub fn sheet_code(self) -> u32 {
        CATEGORY_TABLE
            .iter()
            .find(|(c, _, _)| *c == self)
            .map(|(_, code, _)| *code)
            .unwrap_or_default()
    }

    pub fn label(self) -> &'static str {
        CATEGORY_TABLE
            .iter()
            .find(|(c, _, _)| *c == self)
            .map(|(_, _, label)| *label)
            .unwrap_or("")
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.label())
    }
}

impl std::str::FromStr for Category {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let lower = s.trim().to_lowercase();
        CATEGORY_TABLE
            .iter()
            .find(|(_, _, label)| label.to_lowercase() == lower)
            .map(|(category, _, _)| *category)
            .or(if lower == "holiday" { Some(Category::Holiday) } else { None })
            .ok_or_else(|| format!("Unknown category: {}", s))
    }
}

/// Proad-Exportの1行
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Record {
    /// 社員の略称（列0）
    pub short_name: String,
    /// 社員のフルネーム（列1）
    pub full_name: String,
    /// 作業内容（列3）
    pub activity: String,
    /// ジョブの説明（列6）
    pub description: String,
    /// ジョブ番号（列7）
    pub job_code: String,
    /// 作業時間（列8）
    pub hours: f64,
    /// 分類結果（分類前はNone）
    #[serde(default)]
    pub category: Option<Category>,
    /// Stage1の明示ルールに一致したか
    #[serde(default)]
    pub registered: bool,
}

impl Record {
    pub fn is_in(&self, category: Category) -> bool {
        self.category == Some(category)
    }
}
