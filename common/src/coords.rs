//! セル座標（"AB12" 形式）の変換

use regex::Regex;
use std::fmt;
use thiserror::Error;

/// 座標文字列として解釈できない値
#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[error("invalid cell coordinate: {0}")]
pub struct InvalidCoordinate(pub String);

/// セル座標（列文字 + 1始まりの行番号）
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct CellRef {
    pub column: String,
    pub row: u32,
}

impl CellRef {
    /// 0始まりの (行, 列) から生成
    pub fn from_indices(row: u32, col: u32) -> Self {
        Self {
            column: column_name(col),
            row: row + 1,
        }
    }

    /// "B7" のような座標文字列を解析
    pub fn parse(coord: &str) -> Result<Self, InvalidCoordinate> {
        lazy_static::lazy_static! {
            static ref COORD_RE: Regex = Regex::new(r"^\$?([A-Za-z]{1,3})\$?([0-9]+)$").unwrap();
        }

        let caps = COORD_RE
            .captures(coord.trim())
            .ok_or_else(|| InvalidCoordinate(coord.to_string()))?;

        let row: u32 = caps[2]
            .parse()
            .map_err(|_| InvalidCoordinate(coord.to_string()))?;
        if row == 0 {
            return Err(InvalidCoordinate(coord.to_string()));
        }

        Ok(Self {
            column: caps[1].to_uppercase(),
            row,
        })
    }

    /// 0始まりの列番号
    pub fn column_index(&self) -> u32 {
        column_index(&self.column).unwrap_or(0)
    }

    /// 0始まりの行番号
    pub fn row_index(&self) -> u32 {
        self.row - 1
    }
}

impl fmt::Display for CellRef {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{}", self.column, self.row)
    }
}

/// 0始まりの列番号 → 列文字（0 → "A", 26 → "AA"）
pub fn column_name(index: u32) -> String {
    let mut name = Vec::new();
    let mut n = index + 1;
    while n > 0 {
        let rem = (n - 1) % 26;
        name.push(b'A' + rem as u8);
        n = (n - 1) / 26;
    }
    name.reverse();
    String::from_utf8_lossy(&name).into_owned()
}

/// 列文字 → 0始まりの列番号
pub fn column_index(name: &str) -> Option<u32> {
    if name.is_empty() {
        return None;
    }
    let mut index: u32 = 0;
    for ch in name.chars() {
        if !ch.is_ascii_alphabetic() {
            return None;
        }
        let value = (ch.to_ascii_uppercase() as u8 - b'A') as u32 + 1;
        index = index.checked_mul(26)?.checked_add(value)?;
    }
    Some(index - 1)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse() {
        let cell = CellRef::parse("B7").unwrap();
        assert_eq!(cell.column, "B");
        assert_eq!(cell.row, 7);
        assert_eq!(cell.column_index(), 1);
        assert_eq!(cell.row_index(), 6);
    }

    #[test]
    fn test_parse_lowercase_and_absolute() {
        assert_eq!(CellRef::parse("ab12").unwrap().to_string(), "AB12");
        assert_eq!(CellRef::parse("$C$3").unwrap().to_string(), "C3");
    }

    #[test]
    fn test_parse_invalid() {
        for input in ["", "12", "AB", "A0", "12AB", "A-1"] {
            assert!(CellRef::parse(input).is_err(), "should reject {:?}", input);
        }
    }

    #[test]
    fn test_invalid_coordinate_display() {
        let err = CellRef::parse("12AB").unwrap_err();
        assert_eq!(err, InvalidCoordinate("12AB".to_string()));
        assert_eq!(err.to_string(), "invalid cell coordinate: 12AB");
    }

    #[test]
    fn test_column_names() {
        assert_eq!(column_name(0), "A");
        assert_eq!(column_name(25), "Z");
        assert_eq!(column_name(26), "AA");
        assert_eq!(column_name(27), "AB");
        assert_eq!(column_name(701), "ZZ");
        assert_eq!(column_name(702), "AAA");
    }

    #[test]
    fn test_column_index() {
        assert_eq!(column_index("A"), Some(0));
        assert_eq!(column_index("z"), Some(25));
        assert_eq!(column_index("AA"), Some(26));
        assert_eq!(column_index("ZZ"), Some(701));
        assert_eq!(column_index(""), None);
        assert_eq!(column_index("A1"), None);
    }

    #[test]
    fn test_from_indices() {
        assert_eq!(CellRef::from_indices(0, 0).to_string(), "A1");
        assert_eq!(CellRef::from_indices(9, 27).to_string(), "AB10");
    }
}
