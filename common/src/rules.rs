//! 分類ルール定義
//!
//! ジョブ番号・キーワード・除外リストをまとめた設定。
//! 既定値はProadの固定ジョブ番号に一致する。

use serde::{Deserialize, Serialize};

/// 分類ルール
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ClassificationRules {
    /// 休暇のジョブ番号
    #[serde(default = "default_vacation")]
    pub vacation_job_code: String,
    /// 病欠のジョブ番号
    #[serde(default = "default_sick")]
    pub sick_job_code: String,
    /// 業務なしのジョブ番号
    #[serde(default = "default_no_work")]
    pub no_work_job_code: String,
    /// 残業のジョブ番号
    #[serde(default = "default_overtime")]
    pub overtime_job_code: String,
    /// Pitch判定キーワード（大文字小文字を区別しない）
    #[serde(default = "default_pitch")]
    pub pitch_keyword: String,
    /// 社内ジョブの目印
    #[serde(default = "default_intern")]
    pub intern_marker: String,
    /// 集計から除外するフリーランサー（フルネーム）
    #[serde(default = "default_freelancers")]
    pub freelancers: Vec<String>,
}

fn default_vacation() -> String {
    "SEIN-0001-0012".into()
}

fn default_sick() -> String {
    "SEIN-0001-0015".into()
}

fn default_no_work() -> String {
    "SEIN-0001-0113".into()
}

fn default_overtime() -> String {
    "SEIN-0001-0137".into()
}

fn default_pitch() -> String {
    "pitch".into()
}

fn default_intern() -> String {
    "SEIN".into()
}

fn default_freelancers() -> Vec<String> {
    vec!["Tina Botz".into()]
}

impl Default for ClassificationRules {
    fn default() -> Self {
        Self {
            vacation_job_code: default_vacation(),
            sick_job_code: default_sick(),
            no_work_job_code: default_no_work(),
            overtime_job_code: default_overtime(),
            pitch_keyword: default_pitch(),
            intern_marker: default_intern(),
            freelancers: default_freelancers(),
        }
    }
}

impl ClassificationRules {
    /// フリーランサーかどうか（フルネームの完全一致）
    pub fn is_excluded(&self, full_name: &str) -> bool {
        self.freelancers.iter().any(|f| f == full_name)
    }
}
