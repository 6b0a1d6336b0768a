use crate::config::Config;
use anyhow::Result;

pub fn run() -> Result<()> {
    let path = Config::default().save()?;
    eprintln!("Wrote default configuration to {}", path.display());
    Ok(())
}
