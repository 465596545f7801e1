//! 設定ファイル
//!
//! `--config` → `~/.config/auslastung/config.json` → 組み込み既定値 の順に解決する。

use crate::error::{AuslastungError, Result};
use auslastung_common::{Category, ClassificationRules};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::path::{Path, PathBuf};

/// 期間マーカーの既定値
pub const DEFAULT_PERIOD_MARKER: &str = "Zeitraum";

/// カテゴリの書き込み先シート
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum SheetTarget {
    /// ワークブック内の1始まりの位置
    Index(u32),
    /// シート名
    Name(String),
}

impl std::fmt::Display for SheetTarget {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            SheetTarget::Index(i) => write!(f, "#{}", i),
            SheetTarget::Name(name) => write!(f, "{}", name),
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Config {
    #[serde(default)]
    pub rules: ClassificationRules,
    /// 指定のないカテゴリは既定のシート番号
    #[serde(default)]
    pub sheets: BTreeMap<Category, SheetTarget>,
    #[serde(default = "default_period_marker")]
    pub period_marker: String,
}

fn default_period_marker() -> String {
    DEFAULT_PERIOD_MARKER.into()
}

impl Default for Config {
    fn default() -> Self {
        Self {
            rules: ClassificationRules::default(),
            sheets: BTreeMap::new(),
            period_marker: default_period_marker(),
        }
    }
}

impl Config {
    /// 明示パス → ユーザー設定 → 既定値
    pub fn load(explicit: Option<&Path>) -> Result<Self> {
        if let Some(path) = explicit {
            if !path.exists() {
                return Err(AuslastungError::FileNotFound(path.display().to_string()));
            }
            return Self::from_file(path);
        }

        match Self::config_path() {
            Some(path) if path.exists() => Self::from_file(&path),
            _ => Ok(Self::default()),
        }
    }

    pub fn from_file(path: &Path) -> Result<Self> {
        log::debug!("loading config from {}", path.display());
        let content = std::fs::read_to_string(path)?;
        Self::from_json(&content).map_err(|e| {
            AuslastungError::Config(format!("{}: {}", path.display(), e))
        })
    }

    pub fn from_json(json: &str) -> Result<Self> {
        let config: Config = serde_json::from_str(json)?;
        if config.period_marker.trim().is_empty() {
            return Err(AuslastungError::Config("periodMarker must not be empty".into()));
        }
        if let Some((category, _)) = config
            .sheets
            .iter()
            .find(|(_, target)| **target == SheetTarget::Index(0))
        {
            return Err(AuslastungError::Config(format!(
                "sheets.{}: sheet positions start at 1",
                category.label()
            )));
        }
        Ok(config)
    }

    pub fn config_path() -> Option<PathBuf> {
        dirs::home_dir().map(|home| home.join(".config").join("auslastung").join("config.json"))
    }

    /// カテゴリの書き込み先
    pub fn sheet_target(&self, category: Category) -> SheetTarget {
        self.sheets
            .get(&category)
            .cloned()
            .unwrap_or(SheetTarget::Index(category.sheet_code()))
    }
}
