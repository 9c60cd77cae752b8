use blocknav_bin::cli::Cli;
use blocknav_log::LogConfig;
use clap::Parser;

fn main() {
    let cli = Cli::parse();

    let log_guard = match blocknav_log::init(LogConfig {
        log_file_path: cli.log_file.clone(),
    }) {
        Ok(guard) => {
            tracing::debug!(log_file = %guard.log_file.display(), "logging initialized");
            Some(guard)
        },
        Err(e) => {
            eprintln!("Warning: Failed to initialize logging: {e}");
            None
        },
    };

    let result = blocknav_bin::run(cli);
    if let Err(e) = &result {
        tracing::error!("{e:#}");
        eprintln!("Error: {e:#}");
    }

    // Flush the log file before exiting
    drop(log_guard);
    if result.is_err() {
        std::process::exit(1);
    }
}
