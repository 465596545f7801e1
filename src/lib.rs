pub mod cli;
pub mod config;
pub mod error;
pub mod pipeline;
pub mod proad;
pub mod report;
pub mod workbook;
pub mod writer;
