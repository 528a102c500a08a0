use anyhow::Result;
use log::Level;
use simple_logger::init_with_level;

/// Logs go to stderr so stdout only ever carries the deployment result.
pub fn init(level: Level) -> Result<()> {
    init_with_level(level)?;

    Ok(())
}
