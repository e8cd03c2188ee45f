use crate::config::{Config, ConfigSource};
use anyhow::Result;

pub fn handle(source: &ConfigSource, config: &Config) -> Result<()> {
    match source.path() {
        Some(path) if path.exists() => println!("# loaded from {}", path.display()),
        Some(path) => println!("# defaults ({} not found)", path.display()),
        None => println!("# defaults (no config directory)"),
    }
    print!("{}", config.to_toml()?);
    Ok(())
}
