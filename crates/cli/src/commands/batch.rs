//! `tutorlab batch`: run newline-delimited tool calls.
//!
//! Every non-blank input line yields exactly one compact `ToolResult`
//! line on stdout. A line that cannot be parsed or dispatched yields a
//! rejected result and processing continues.

use std::path::PathBuf;
use tokio::io::{AsyncBufRead, AsyncBufReadExt, AsyncWrite, AsyncWriteExt, BufReader};
use tutorlab_config::AppConfig;
use tutorlab_core::Result;
use tutorlab_core::tool::{ToolCall, ToolRegistry, ToolResult};

pub async fn run(input: Option<PathBuf>) -> std::result::Result<(), Box<dyn std::error::Error>> {
    let config = AppConfig::load().map_err(|e| format!("Failed to load config: {e}"))?;
    let registry = super::registry(&config);
    let mut stdout = tokio::io::stdout();

    let processed = match input {
        Some(path) => {
            let file = tokio::fs::File::open(&path)
                .await
                .map_err(|e| format!("Failed to open {}: {e}", path.display()))?;
            process(&registry, BufReader::new(file), &mut stdout).await?
        }
        None => process(&registry, BufReader::new(tokio::io::stdin()), &mut stdout).await?,
    };

    tracing::info!(calls = processed, "Batch complete");
    Ok(())
}

/// Dispatch every call read from `reader`, writing one result per line.
/// Returns the number of calls processed.
pub async fn process<R, W>(registry: &ToolRegistry, reader: R, out: &mut W) -> Result<usize>
where
    R: AsyncBufRead + Unpin,
    W: AsyncWrite + Unpin,
{
    let mut lines = reader.lines();
    let mut line_no = 0usize;
    let mut processed = 0usize;

    while let Some(line) = lines.next_line().await? {
        line_no += 1;
        if line.trim().is_empty() {
            continue;
        }

        let result = dispatch(registry, line_no, &line).await;
        let encoded = serde_json::to_string(&result)?;
        out.write_all(encoded.as_bytes()).await?;
        out.write_all(b"\n").await?;
        processed += 1;
    }

    out.flush().await?;
    Ok(processed)
}

async fn dispatch(registry: &ToolRegistry, line_no: usize, line: &str) -> ToolResult {
    let call: ToolCall = match serde_json::from_str(line) {
        Ok(call) => call,
        Err(e) => {
            tracing::warn!(line = line_no, error = %e, "Skipping malformed tool call");
            return ToolResult::rejected("", format!("Invalid tool call on line {line_no}: {e}"));
        }
    };

    match registry.execute(&call).await {
        Ok(result) => result,
        Err(e) => {
            tracing::warn!(line = line_no, tool = %call.name, error = %e, "Tool call rejected");
            ToolResult::rejected(call.id, e.to_string())
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    async fn run_batch(input: &str) -> (usize, Vec<serde_json::Value>) {
        let registry = tutorlab_tools::default_registry();
        let mut out = Vec::new();
        let count = process(&registry, input.as_bytes(), &mut out).await.unwrap();
        let results = String::from_utf8(out)
            .unwrap()
            .lines()
            .map(|l| serde_json::from_str(l).unwrap())
            .collect();
        (count, results)
    }

    #[tokio::test]
    async fn one_result_per_call() {
        let input = r#"{"id": "a", "name": "calculator", "arguments": {"operation": "add", "numbers": [1, 2]}}

{"id": "b", "name": "physics_constants_lookup", "arguments": {"constant_name": "speed_of_light"}}
"#;
        let (count, results) = run_batch(input).await;
        assert_eq!(count, 2);
        assert_eq!(results[0]["call_id"], "a");
        assert_eq!(results[0]["data"]["result"], 3.0);
        assert_eq!(results[1]["call_id"], "b");
        assert_eq!(results[1]["success"], true);
    }

    #[tokio::test]
    async fn malformed_line_does_not_stop_the_batch() {
        let input = "not json\n{\"id\": \"ok\", \"name\": \"calculator\", \"arguments\": {\"operation\": \"average\", \"numbers\": [2, 6]}}\n";
        let (count, results) = run_batch(input).await;
        assert_eq!(count, 2);
        assert_eq!(results[0]["success"], false);
        assert!(results[0]["output"].as_str().unwrap().contains("line 1"));
        assert_eq!(results[1]["data"]["result"], 4.0);
    }

    #[tokio::test]
    async fn unknown_tool_and_bad_arguments_are_rejected() {
        let input = r#"{"id": "x", "name": "shell", "arguments": {}}
{"id": "y", "name": "physics_calc", "arguments": {"mass": 1}}
"#;
        let (_, results) = run_batch(input).await;
        assert_eq!(results[0]["call_id"], "x");
        assert!(results[0]["data"]["error"].as_str().unwrap().contains("not found"));
        assert_eq!(results[1]["call_id"], "y");
        assert!(results[1]["output"].as_str().unwrap().contains("law"));
    }

    #[tokio::test]
    async fn memo_state_persists_across_lines() {
        let input = r#"{"name": "memorize_list", "arguments": {"key": "topics", "value": "optics"}}
{"name": "forget", "arguments": {"key": "topics", "value": "optics"}}
"#;
        let (_, results) = run_batch(input).await;
        assert_eq!(results[0]["data"]["status"], "Stored \"topics\": \"optics\"");
        assert_eq!(results[1]["data"]["status"], "Removed \"topics\": \"optics\"");
    }
}
