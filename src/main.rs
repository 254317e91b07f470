use atrium::LogLevel;
use atrium::core::config;
use atrium::tui;
use clap::Parser;
use simplelog::{ConfigBuilder, WriteLogger};
use std::fs::File;

#[derive(Parser)]
#[command(name = "atrium", about = "Terminal application shell with location-based view routing")]
struct Args {
    /// Location path to mount at (overrides config start_path)
    #[arg(short, long)]
    path: Option<String>,

    /// File logger verbosity
    #[arg(long, default_value_t, value_enum)]
    log_level: LogLevel,
}

fn main() -> std::io::Result<()> {
    let args = Args::parse();

    // Startup config errors are fatal: nothing can be mounted sensibly on a
    // malformed config, so report and stop.
    let loaded = match config::load_config() {
        Ok(c) => c,
        Err(e) => {
            eprintln!("atrium: cannot read configuration: {e}");
            std::process::exit(1);
        }
    };
    let resolved = config::resolve(&loaded, args.path.as_deref());

    // Initialize file logger - writes to the configured file in the current directory
    let log_config = ConfigBuilder::new().set_time_format_rfc3339().build();
    if let Ok(log_file) = File::create(&resolved.log_file) {
        let _ = WriteLogger::init(args.log_level.to_filter(), log_config, log_file);
    }

    log::info!("Atrium starting up at {}", resolved.start_path);

    // A terminal we cannot acquire is the fatal mount failure: nothing was
    // rendered, so just surface the diagnostic.
    if let Err(e) = tui::run(resolved) {
        log::error!("Failed to mount the terminal UI: {e}");
        eprintln!("atrium: failed to mount the terminal UI: {e}");
        return Err(e);
    }
    Ok(())
}
