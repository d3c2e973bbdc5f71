use anyhow::{Context, Result};
use log::LevelFilter;
use simple_logger::SimpleLogger;

/// `verbose` forces debug output whatever the configured level.
pub fn init(level: &str, verbose: bool) -> Result<()> {
    let level = if verbose {
        LevelFilter::Debug
    } else {
        level
            .parse::<LevelFilter>()
            .with_context(|| format!("Invalid log level {}", level))?
    };

    SimpleLogger::new()
        .with_level(level)
        .with_module_level("hyper", LevelFilter::Warn)
        .with_module_level("reqwest", LevelFilter::Warn)
        .init()?;

    Ok(())
}
