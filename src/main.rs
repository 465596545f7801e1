use anyhow::Context;
use clap::Parser;
use proad_auslastung::{cli, config, pipeline, report};
use cli::Cli;
use config::Config;
use pipeline::RunOptions;
use std::process::ExitCode;

fn main() -> anyhow::Result<ExitCode> {
    let cli = Cli::parse();

    let default_level = if cli.verbose { "debug" } else { "warn" };
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(default_level))
        .format_timestamp(None)
        .init();

    let config = Config::load(cli.config.as_deref()).context("loading configuration")?;

    let options = RunOptions {
        excel_path: cli.excel_path.clone(),
        proad_path: cli.proad_path.clone(),
        save_path: (!cli.dont_save).then(|| cli.save_path().to_path_buf()),
        period: cli.period_label(),
        log: cli.log,
    };

    println!("📊 auslastung - Proad → Excel\n");
    let outcome = pipeline::run(&options, &config)?;

    report::print_skip_summary(&outcome.report);

    if outcome.report.has_lost_writes() {
        println!("\n⚠ Done with skipped writes");
    } else {
        println!("\n✅ Done");
    }
    Ok(pipeline::exit_code(&outcome.report))
}
