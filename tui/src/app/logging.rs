use std::{env, fs::File};

use anyhow::{Context, Result};

const DEFAULT_LOG_PATH: &str = "sketch.log";
const LOG_PATH_ENV: &str = "SKETCH_LOG";

/// Sets up `env_logger` when `RUST_LOG` is present.
///
/// The terminal belongs to the UI, so records go to a file instead of stderr.
///
/// # Errors
/// Returns an error if the log file cannot be created.
pub fn init() -> Result<()> {
    if env::var_os("RUST_LOG").is_none() {
        return Ok(());
    }

    let path = env::var(LOG_PATH_ENV).unwrap_or_else(|_| DEFAULT_LOG_PATH.to_string());
    let file = File::create(&path).with_context(|| format!("cannot create log file '{path}'"))?;

    env_logger::Builder::from_default_env()
        .target(env_logger::Target::Pipe(Box::new(file)))
        .init();

    Ok(())
}
