use std::fs::OpenOptions;
use std::path::Path;

use anyhow::Context;
use env_logger::{Builder, Env, Target};

pub const ENV_FILTER: &str = "AUTOPARSE_LOG";

/// Send `log` records to `path`. The terminal belongs to the UI, so without a
/// file nothing is logged.
pub fn init(path: Option<&Path>) -> anyhow::Result<()> {
    let Some(path) = path else {
        return Ok(());
    };
    let file = OpenOptions::new()
        .create(true)
        .append(true)
        .open(path)
        .with_context(|| format!("opening log file {}", path.display()))?;

    Builder::from_env(Env::default().filter_or(ENV_FILTER, "info"))
        .target(Target::Pipe(Box::new(file)))
        .format_timestamp_millis()
        .try_init()
        .context("installing logger")?;
    log::info!("logging to {}", path.display());
    Ok(())
}
