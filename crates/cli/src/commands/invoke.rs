//! `tutorlab invoke`: run a single tool call.

use tutorlab_config::AppConfig;
use tutorlab_core::Error;
use tutorlab_core::tool::ToolCall;

pub async fn run(tool: String, args: String) -> Result<(), Box<dyn std::error::Error>> {
    let config = AppConfig::load().map_err(|e| format!("Failed to load config: {e}"))?;
    let registry = super::registry(&config);

    let arguments: serde_json::Value = serde_json::from_str(&args).map_err(Error::from)?;

    let call = ToolCall {
        id: "cli".into(),
        name: tool,
        arguments,
    };

    // Engine failures print normally; only rejected calls exit non-zero.
    let result = registry.execute(&call).await.map_err(Error::from)?;
    println!("{}", super::render(&result, config.tools.pretty_output)?);
    Ok(())
}
