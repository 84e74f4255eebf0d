use std::path::Path;

use crate::config::Config;

pub fn cmd_init(path: &Path) -> anyhow::Result<()> {
    if Config::create_default_if_missing(path)? {
        println!("Created default config file: {}", path.display());
        println!("Set kinopoisk.api_key (or KINOPOISK_API_KEY) before running a lookup.");
    } else {
        println!("Config file already exists: {}", path.display());
    }
    Ok(())
}
