//! Configuration commands.

use crate::config;

/// Check API key and config file status
pub fn cmd_check() -> anyhow::Result<()> {
    println!("Checking plant-scout setup...\n");

    match config::config_path() {
        Some(path) if path.exists() => println!("✓ Config file: {:?}", path),
        Some(path) => println!("✗ Config file: not found (would be {:?})", path),
        None => println!("✗ Config directory could not be determined"),
    }

    let config = config::load();

    println!();
    println!("API Keys:");
    if std::env::var("PLANT_ID_API_KEY").is_ok() {
        println!("✓ PLANT_ID_API_KEY: set");
    } else if config.credentials.plant_id_api_key.is_some() {
        println!("✓ plant_id_api_key: stored in config");
    } else {
        println!("✗ Plant.id API key: not set");
        println!("  Get one at: https://web.plant.id");
    }

    println!();
    println!("Identification:");
    println!("  language: {}", config.identification.language);
    println!("  offline:  {}", config.identification.offline);

    Ok(())
}

/// Update the stored configuration with any provided values
pub fn cmd_configure(
    api_key: Option<&str>,
    language: Option<&str>,
    offline: Option<bool>,
) -> anyhow::Result<()> {
    if api_key.is_none() && language.is_none() && offline.is_none() {
        println!("Nothing to change. Pass --api-key, --language, or --offline.");
        return Ok(());
    }

    let mut config = config::load();

    if let Some(key) = api_key {
        config.credentials.plant_id_api_key = Some(key.to_string());
        println!("Set API key.");
    }
    if let Some(language) = language {
        config.identification.language = language.to_string();
        println!("Set language to {:?}.", language);
    }
    if let Some(offline) = offline {
        config.identification.offline = offline;
        println!("Set offline mode to {}.", offline);
    }

    config::save(&config)?;
    Ok(())
}
