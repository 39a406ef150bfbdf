//! Physics formula tool: resolves a law against supplied quantities.
//!
//! Quantities may be nested under `parameters` or passed as top-level
//! keyword arguments; both are merged, and a top-level value wins over
//! the nested one for the same key. Nested values must be numeric. A
//! top-level value that is not a number is not a quantity and is skipped.

use async_trait::async_trait;
use serde_json::Value;
use std::collections::BTreeMap;
use tutorlab_core::error::ToolError;
use tutorlab_core::tool::{Tool, ToolResult};
use tutorlab_science::laws;

use crate::{failed, to_data};

/// Argument keys that are not physical quantities.
const RESERVED: [&str; 3] = ["law", "info_only", "parameters"];

pub struct PhysicsCalcTool;

#[async_trait]
impl Tool for PhysicsCalcTool {
    fn name(&self) -> &str {
        "physics_calc"
    }

    fn description(&self) -> &str {
        "Solve a physics law for its missing quantity, or explain the law. \
         Multi-directional laws (ohms_law, wave_equation, ideal_gas_law) compute whichever \
         quantity is omitted. Call with info_only=true, or with no quantities, to get the \
         law's formula, parameters, and the phenomena it explains."
    }

    fn parameters_schema(&self) -> Value {
        serde_json::json!({
            "type": "object",
            "properties": {
                "law": {
                    "type": "string",
                    "enum": laws::names(),
                    "description": "The law to apply, e.g. 'ohms_law'. Common aliases such as 'force' are accepted."
                },
                "info_only": {
                    "type": "boolean",
                    "description": "Return the law's description instead of solving it",
                    "default": false
                },
                "parameters": {
                    "type": "object",
                    "additionalProperties": { "type": ["number", "string"] },
                    "description": "Known quantities by name or symbol, e.g. {\"voltage\": 12, \"current\": 2}"
                }
            },
            "required": ["law"],
            "additionalProperties": { "type": ["number", "string", "boolean", "object"] }
        })
    }

    async fn execute(&self, arguments: Value) -> Result<ToolResult, ToolError> {
        let law = arguments["law"]
            .as_str()
            .ok_or_else(|| ToolError::InvalidArguments("Missing 'law' argument".into()))?;

        let info_only = match &arguments["info_only"] {
            Value::Null => false,
            Value::Bool(flag) => *flag,
            _ => {
                return Err(ToolError::InvalidArguments("'info_only' must be a boolean".into()));
            }
        };

        let parameters = collect_parameters(&arguments)?;

        match laws::resolve(law, &parameters, info_only) {
            Ok(resolution) => Ok(ToolResult::success(to_data(self.name(), &resolution)?)),
            Err(e) => Ok(failed(self.name(), e.into())),
        }
    }
}

/// Merge nested `parameters` with top-level keyword quantities.
fn collect_parameters(arguments: &Value) -> Result<BTreeMap<String, f64>, ToolError> {
    let mut merged = BTreeMap::new();

    match &arguments["parameters"] {
        Value::Null => {}
        Value::Object(nested) => {
            for (key, value) in nested {
                if value.is_null() {
                    continue;
                }
                let number = quantity(value).ok_or_else(|| {
                    ToolError::InvalidArguments(format!("Parameter '{key}' must be a number, got {value}"))
                })?;
                merged.insert(key.clone(), number);
            }
        }
        _ => {
            return Err(ToolError::InvalidArguments("'parameters' must be an object".into()));
        }
    }

    if let Value::Object(top) = arguments {
        for (key, value) in top {
            if RESERVED.contains(&key.as_str()) || value.is_null() {
                continue;
            }
            match quantity(value) {
                Some(number) => {
                    merged.insert(key.clone(), number);
                }
                None => tracing::debug!(key = %key, "Skipping non-numeric keyword argument"),
            }
        }
    }

    Ok(merged)
}

fn quantity(value: &Value) -> Option<f64> {
    match value {
        Value::Number(n) => n.as_f64(),
        Value::String(s) => s.trim().parse::<f64>().ok(),
        _ => None,
    }
}
