//! `tutorlab config`: configuration management commands.

use tutorlab_config::AppConfig;

pub async fn validate() -> Result<(), Box<dyn std::error::Error>> {
    println!("🔍 Validating configuration...");

    match AppConfig::load() {
        Ok(config) => {
            println!("   ✅ Config parsed successfully");

            let registry = super::registry(&config);
            let unknown: Vec<&String> = config
                .tools
                .enabled
                .iter()
                .filter(|name| registry.get(name.trim()).is_none())
                .collect();

            if unknown.is_empty() && !registry.is_empty() {
                println!("   ✅ All checks passed");
            } else {
                println!();
                for name in &unknown {
                    println!("   ⚠️  Unknown tool '{name}' in [tools] enabled");
                }
                if registry.is_empty() {
                    println!("   ⚠️  No tools enabled");
                }
            }

            println!();
            println!("   Log level:  {}", config.logging.level);
            println!("   Log format: {}", config.logging.format);
            println!("   Tools:      {}", registry.names().join(", "));
        }
        Err(e) => {
            println!("   ❌ Config error: {e}");
            return Err(e.into());
        }
    }

    Ok(())
}

pub async fn show() -> Result<(), Box<dyn std::error::Error>> {
    let config = AppConfig::load().map_err(|e| format!("Failed to load config: {e}"))?;
    let toml_str = toml::to_string_pretty(&config)?;
    println!("{toml_str}");
    Ok(())
}

pub async fn path() -> Result<(), Box<dyn std::error::Error>> {
    println!("{}", AppConfig::config_path().display());
    Ok(())
}
