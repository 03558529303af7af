use clap::Parser;
use semester_calendar::app::runner;
use semester_calendar::utils::logger;
use semester_calendar::{registry, CliConfig};
use std::process::ExitCode;

fn main() -> ExitCode {
    let config = CliConfig::parse();

    // 初始化日誌
    logger::init_cli_logger(config.verbose, config.log_json);

    tracing::info!("Starting semester-calendar");
    if config.verbose {
        tracing::debug!("CLI config: {:?}", config);
    }

    let report = runner::run(&config, registry::global());
    print!("{}", report.stdout);
    eprint!("{}", report.stderr);

    ExitCode::from(report.exit_code)
}
