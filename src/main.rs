//! Main application entry point (CLI binary).
//!
//! This is a thin wrapper around the `geolocator` library that handles:
//! - Command-line argument parsing
//! - Environment variable loading (.env file)
//! - Logger initialization
//! - User-facing output formatting
//!
//! All lookup functionality is implemented in the library crate.

use anyhow::{Context, Result};
use clap::Parser;
use log::{error, trace};
use std::process;

use geolocator::app::format_location;
use geolocator::initialization::init_logger_with;
use geolocator::{Config, GeoLocator, Opt};

#[tokio::main]
async fn main() -> Result<()> {
    // Load environment variables (e.g. RUST_LOG) from a .env file, trying the
    // current directory first and then the executable's directory
    if dotenvy::dotenv().is_err() {
        if let Ok(exe_path) = std::env::current_exe() {
            if let Some(exe_dir) = exe_path.parent() {
                let env_path = exe_dir.join(".env");
                if env_path.exists() {
                    let _ = dotenvy::from_path(&env_path);
                }
            }
        }
    }

    let opt = Opt::parse();

    init_logger_with(opt.log_level.clone().map(Into::into), opt.log_format.clone())
        .context("Failed to initialize logger")?;
    trace!("Command line arguments: {:?}", opt);

    let locator =
        GeoLocator::with_config(&Config::from(&opt)).context("Failed to initialize HTTP client")?;

    match locator.locate(opt.target.as_deref()).await {
        Ok(location) => {
            let rendered =
                format_location(&location, opt.output).context("Failed to format location")?;
            println!("{}", rendered);
            Ok(())
        }
        Err(e) => {
            let report = e.report();
            error!("Lookup failed ({}): {}", e.kind(), report);
            eprintln!("geolocator error: {}", report);
            process::exit(e.kind().exit_code());
        }
    }
}
