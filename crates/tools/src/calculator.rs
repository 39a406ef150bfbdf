//! Calculator tool: n-ary arithmetic over a list of operands.
//!
//! Operands may be JSON numbers or numeric strings. The arithmetic
//! engine does the work; this adapter only checks the argument shape.

use async_trait::async_trait;
use serde_json::Value;
use tutorlab_core::error::ToolError;
use tutorlab_core::tool::{Tool, ToolResult};
use tutorlab_science::arithmetic::{self, Operation};

use crate::{failed, to_data};

pub struct CalculatorTool;

#[async_trait]
impl Tool for CalculatorTool {
    fn name(&self) -> &str {
        "calculator"
    }

    fn description(&self) -> &str {
        "Apply an arithmetic operation (add, subtract, multiply, divide, power, average, max, min) \
         to a list of numbers. Returns the result with a step-by-step explanation."
    }

    fn parameters_schema(&self) -> Value {
        serde_json::json!({
            "type": "object",
            "properties": {
                "operation": {
                    "type": "string",
                    "enum": Operation::names(),
                    "description": "The operation to apply, e.g. 'divide'"
                },
                "numbers": {
                    "type": "array",
                    "items": { "type": ["number", "string"] },
                    "description": "Operands in order, e.g. [12, 4, 3]. Numeric strings are accepted."
                }
            },
            "required": ["operation", "numbers"]
        })
    }

    async fn execute(&self, arguments: Value) -> Result<ToolResult, ToolError> {
        let operation = arguments["operation"]
            .as_str()
            .ok_or_else(|| ToolError::InvalidArguments("Missing 'operation' argument".into()))?;

        let numbers: &[Value] = match &arguments["numbers"] {
            Value::Array(items) => items,
            Value::Null => &[],
            _ => {
                return Err(ToolError::InvalidArguments(
                    "'numbers' must be an array of numbers".into(),
                ));
            }
        };

        match arithmetic::calculate(operation, numbers) {
            Ok(computation) => Ok(ToolResult::success(to_data(self.name(), &computation)?)),
            Err(e) => Ok(failed(self.name(), e.into())),
        }
    }
}
