use clap::Parser;
use env_report::utils::logger;
use env_report::{CliConfig, EnvironmentReporter, ProcessHost};

fn main() {
    let config = CliConfig::parse();

    logger::init_cli_logger();

    if !config.ignored.is_empty() {
        tracing::debug!("ignoring extra arguments: {:?}", config.ignored);
    }

    let reporter = EnvironmentReporter::new(ProcessHost::new());
    let stdout = std::io::stdout();

    if let Err(e) = reporter.run(&mut stdout.lock()) {
        tracing::error!("❌ Report failed: {}", e);
        eprintln!("❌ {}", e.user_friendly_message());
        std::process::exit(e.exit_code());
    }
}
