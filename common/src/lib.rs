//! Auslastung Common Library
//!
//! Proad-Exportの分類・集計と、ワークシート上の社員検索。
//! ファイル入出力は含まない。

pub mod types;
pub mod rules;
pub mod classifier;
pub mod aggregator;
pub mod coords;
pub mod grid;
pub mod locator;

pub use types::{Category, Record};
pub use rules::ClassificationRules;
pub use classifier::{classify, unregistered, ClassificationSummary};
pub use aggregator::{aggregate, aggregate_all, EmployeeTotal};
pub use coords::{column_index, column_name, CellRef, InvalidCoordinate};
pub use grid::{CellValue, Sheet};
pub use locator::{EmployeeLocator, LocateError, NameOrderRegexLocator};
