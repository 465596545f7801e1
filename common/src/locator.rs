//! 社員行の検索
//!
//! 社員名 → シート内の一意な行番号。見つからない・複数ある場合はエラー。
//! 名前照合の方法は `EmployeeLocator` で差し替え可能。

use crate::coords::CellRef;
use crate::grid::Sheet;
use regex::Regex;
use thiserror::Error;

/// 社員行の検索エラー
#[derive(Error, Debug, Clone, PartialEq)]
pub enum LocateError {
    #[error("{employee} not found in sheet {sheet}")]
    NotFound { employee: String, sheet: String },

    #[error("{employee} exists more than once in sheet {sheet}: {}", format_cells(.matches))]
    Ambiguous {
        employee: String,
        sheet: String,
        matches: Vec<CellRef>,
    },

    #[error("cannot build a name search for {0:?} (first and last name required)")]
    InvalidName(String),
}

fn format_cells(cells: &[CellRef]) -> String {
    cells.iter().map(|c| c.to_string()).collect::<Vec<_>>().join(", ")
}

/// 社員名からシートの行を特定する
pub trait EmployeeLocator {
    /// 1始まりの行番号を返す
    fn locate(&self, sheet: &Sheet, employee: &str) -> Result<u32, LocateError>;
}

/// 姓名の順序を問わない正規表現による検索
///
/// "Anna Muster" は "Anna Muster" にも "Muster, Anna" にも一致する。
#[derive(Debug, Clone, Copy, Default)]
pub struct NameOrderRegexLocator;

impl NameOrderRegexLocator {
    /// 最初と最後の単語から検索パターンを組み立てる
    pub fn pattern(employee: &str) -> Result<Regex, LocateError> {
        let tokens: Vec<&str> = employee.split_whitespace().collect();
        if tokens.len() < 2 {
            return Err(LocateError::InvalidName(employee.to_string()));
        }
        let first = regex::escape(tokens[0]);
        let last = regex::escape(tokens[tokens.len() - 1]);

        Regex::new(&format!("({first}).*({last})|({last}).*({first})"))
            .map_err(|_| LocateError::InvalidName(employee.to_string()))
    }
}

impl EmployeeLocator for NameOrderRegexLocator {
    fn locate(&self, sheet: &Sheet, employee: &str) -> Result<u32, LocateError> {
        let re = Self::pattern(employee)?;
        let mut matches = sheet.search_regex(&re);

        match matches.len() {
            0 => Err(LocateError::NotFound {
                employee: employee.to_string(),
                sheet: sheet.name.clone(),
            }),
            1 => Ok(matches.remove(0).row),
            _ => Err(LocateError::Ambiguous {
                employee: employee.to_string(),
                sheet: sheet.name.clone(),
                matches,
            }),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::grid::CellValue;

    fn sheet_with(names: &[(u32, u32, &str)]) -> Sheet {
        let mut sheet = Sheet::new("Urlaub");
        for &(row, col, name) in names {
            sheet.set(row, col, CellValue::Text(name.to_string()));
        }
        sheet
    }

    #[test]
    fn test_matches_last_first_order() {
        let sheet = sheet_with(&[(4, 0, "Muster, Anna"), (5, 0, "Beispiel, Bernd")]);
        assert_eq!(NameOrderRegexLocator.locate(&sheet, "Anna Muster"), Ok(5));
    }

    #[test]
    fn test_matches_first_last_order() {
        let sheet = sheet_with(&[(9, 1, "Bernd Beispiel")]);
        assert_eq!(NameOrderRegexLocator.locate(&sheet, "Bernd Beispiel"), Ok(10));
    }

    #[test]
    fn test_not_found() {
        let sheet = sheet_with(&[(4, 0, "Muster, Anna")]);
        let err = NameOrderRegexLocator.locate(&sheet, "Carla Clausen").unwrap_err();
        assert!(matches!(err, LocateError::NotFound { .. }));
    }

    #[test]
    fn test_ambiguous_overlapping_names() {
        let sheet = sheet_with(&[(4, 0, "Muster, Anna"), (7, 0, "Mustermann, Anna")]);
        let err = NameOrderRegexLocator.locate(&sheet, "Anna Muster").unwrap_err();

        match err {
            LocateError::Ambiguous { matches, .. } => {
                let cells: Vec<String> = matches.iter().map(|c| c.to_string()).collect();
                assert_eq!(cells, vec!["A5", "A8"]);
            }
            other => panic!("expected ambiguity, got {:?}", other),
        }
    }

    #[test]
    fn test_middle_name_uses_outer_tokens() {
        let sheet = sheet_with(&[(2, 0, "Muster, Anna Lena")]);
        assert_eq!(NameOrderRegexLocator.locate(&sheet, "Anna Lena Muster"), Ok(3));
    }

    #[test]
    fn test_special_characters_are_escaped() {
        let sheet = sheet_with(&[(0, 0, "O.Brien, Sean"), (1, 0, "OxBrien, Sean")]);
        assert_eq!(NameOrderRegexLocator.locate(&sheet, "Sean O.Brien"), Ok(1));
    }

    #[test]
    fn test_single_token_name() {
        let sheet = sheet_with(&[(0, 0, "Anna")]);
        let err = NameOrderRegexLocator.locate(&sheet, "Anna").unwrap_err();
        assert_eq!(err, LocateError::InvalidName("Anna".to_string()));
    }

    #[test]
    fn test_error_messages() {
        let err = LocateError::Ambiguous {
            employee: "Anna Muster".into(),
            sheet: "Urlaub".into(),
            matches: vec![CellRef::parse("A5").unwrap(), CellRef::parse("A8").unwrap()],
        };
        assert_eq!(
            err.to_string(),
            "Anna Muster exists more than once in sheet Urlaub: A5, A8"
        );
    }
}
