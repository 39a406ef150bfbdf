//! `tutorlab tools`: print the enabled tool definitions.

use tutorlab_config::AppConfig;

pub async fn run() -> Result<(), Box<dyn std::error::Error>> {
    let config = AppConfig::load().map_err(|e| format!("Failed to load config: {e}"))?;
    let registry = super::registry(&config);

    if registry.is_empty() {
        eprintln!("⚠️  No tools enabled. Check [tools] enabled in {}", AppConfig::config_path().display());
    }

    println!("{}", super::render(&registry.definitions(), config.tools.pretty_output)?);
    Ok(())
}
