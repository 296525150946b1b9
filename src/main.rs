use clap::Parser;
use kalkulator::Tab;
use kalkulator::core::config::{self, CliOverrides, KalkulatorConfig, LoadedConfig};
use kalkulator::core::converter::Category;
use simplelog::{ConfigBuilder, LevelFilter, WriteLogger};
use std::fs::File;
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "kalkulator", about = "Calculator and unit converter for the terminal")]
struct Args {
    /// Screen to open on startup
    #[arg(short, long, value_enum)]
    tab: Option<Tab>,

    /// Initial converter category
    #[arg(short, long, value_enum)]
    category: Option<Category>,

    /// Where to write the log
    #[arg(long, default_value = "kalkulator.log")]
    log_file: PathBuf,

    /// Log level (off, error, warn, info, debug, trace)
    #[arg(long)]
    log_level: Option<LevelFilter>,
}

fn main() -> std::io::Result<()> {
    let args = Args::parse();

    // The logger needs the resolved level, so config loads first and its
    // outcome is logged once the logger is up.
    let loaded = config::load_config();
    let defaults = KalkulatorConfig::default();
    let file_config = match &loaded {
        Ok(LoadedConfig::File(config, _)) => config,
        _ => &defaults,
    };
    let resolved = config::resolve(
        file_config,
        CliOverrides {
            tab: args.tab,
            category: args.category,
            log_level: args.log_level,
        },
    );

    // Initialize file logger - stdout belongs to the TUI
    let log_config = ConfigBuilder::new().set_time_format_rfc3339().build();
    if let Ok(log_file) = File::create(&args.log_file) {
        let _ = WriteLogger::init(resolved.log_level, log_config, log_file);
    }

    match loaded {
        Ok(LoadedConfig::File(file_config, path)) => {
            log::info!("Loaded config from {}", path.display());
            if let Some(level) = config::invalid_log_level(&file_config) {
                log::warn!(
                    "Ignoring unknown log_level {:?} in {}; using {}",
                    level,
                    path.display(),
                    resolved.log_level
                );
            }
        }
        Ok(LoadedConfig::Generated(path)) => {
            log::info!("Generated default config at {}", path.display())
        }
        Ok(LoadedConfig::NoHome) => log::warn!("No home directory; using default config"),
        Err(e) => log::warn!("Failed to load config, using defaults: {}", e),
    }
    log::info!(
        "Kalkulator starting on {} tab (category: {}, history limit: {})",
        resolved.tab.label(),
        resolved.category.label(),
        resolved.history_limit
    );

    kalkulator::tui::run(resolved)
}
