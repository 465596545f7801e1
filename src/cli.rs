use clap::Parser;
use std::path::{Path, PathBuf};

#[derive(Parser, Debug)]
#[command(name = "auslastung")]
#[command(about = "füllt automatisch die Excel-Datei Auslastung mit dem Proad-Export aus", long_about = None)]
pub struct Cli {
    /// Pfad zu der Excel-Datei
    #[arg(short = 'e', long = "excelPath", required = true)]
    pub excel_path: PathBuf,

    /// Pfad zu der Proad-Datei (.csv oder .xlsx)
    #[arg(short = 'p', long = "proadPath", required = true)]
    pub proad_path: PathBuf,

    /// ein anderer Speicherort für die Excel-Datei
    #[arg(short = 'd', long = "destPath")]
    pub dest_path: Option<PathBuf>,

    /// Zeitraum der Proad-Datei. Falls nicht angegeben, wird der Name der Proad-Datei verwendet
    #[arg(short = 'z', long = "period", visible_alias = "Zeitraum")]
    pub period: Option<String>,

    /// die Änderungen werden nicht gespeichert
    #[arg(short = 's', long = "dont_save", visible_alias = "dont_safe")]
    pub dont_save: bool,

    /// schreibt die Datensätze in das Terminal
    #[arg(short = 'l', long)]
    pub log: bool,

    /// Konfigurationsdatei (JSON)
    #[arg(long)]
    pub config: Option<PathBuf>,

    /// ausführliche Diagnoseausgabe
    #[arg(short, long)]
    pub verbose: bool,
}

impl Cli {
    /// 期間ラベル（未指定ならProadファイル名から拡張子を除いたもの）
    pub fn period_label(&self) -> String {
        match &self.period {
            Some(p) if !p.trim().is_empty() => p.clone(),
            _ => period_from_path(&self.proad_path),
        }
    }

    /// 保存先（destPath優先）
    pub fn save_path(&self) -> &Path {
        self.dest_path.as_deref().unwrap_or(&self.excel_path)
    }
}

pub fn period_from_path(path: &Path) -> String {
    path.file_stem()
        .map(|s| s.to_string_lossy().to_string())
        .unwrap_or_default()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_required_flags() {
        assert!(Cli::try_parse_from(["auslastung", "-e", "a.xlsx"]).is_err());
        assert!(Cli::try_parse_from(["auslastung", "-p", "b.csv"]).is_err());
    }

    #[test]
    fn test_period_defaults_to_file_stem() {
        let cli = Cli::try_parse_from(["auslastung", "-e", "a.xlsx", "-p", "/tmp/2024-03.csv"]).unwrap();
        assert_eq!(cli.period_label(), "2024-03");
        assert_eq!(cli.save_path(), Path::new("a.xlsx"));
        assert!(!cli.dont_save);
    }

    #[test]
    fn test_explicit_flags() {
        let cli = Cli::try_parse_from([
            "auslastung", "--excelPath", "a.xlsx", "--proadPath", "b.csv",
            "-d", "c.xlsx", "-z", "März 2024", "--dont_safe", "-l",
        ])
        .unwrap();
        assert_eq!(cli.period_label(), "März 2024");
        assert_eq!(cli.save_path(), Path::new("c.xlsx"));
        assert!(cli.dont_save);
        assert!(cli.log);
    }
}
