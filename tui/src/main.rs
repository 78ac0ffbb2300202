use std::env;

use anyhow::{anyhow, Result};

mod app;
mod config;
mod state;
mod ui;

const CONFIG_ENV: &str = "SKETCH_CONFIG";

fn main() -> Result<()> {
    app::logging::init()?;

    let path = env::args().nth(1).or_else(|| env::var(CONFIG_ENV).ok());
    let draft = match path {
        Some(path) => config::json::load_sketch(&path).map_err(|e| anyhow!(e))?,
        None => config::model::SketchDraft::default(),
    };
    let config = config::builder::build(&draft).map_err(|e| anyhow!(e))?;

    app::run::run(config)
}
