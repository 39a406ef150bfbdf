//! Physical constants lookup tool.

use async_trait::async_trait;
use serde_json::Value;
use tutorlab_core::error::ToolError;
use tutorlab_core::tool::{Tool, ToolResult};
use tutorlab_science::constants::{self, Category};

use crate::{failed, to_data};

pub struct ConstantsLookupTool;

#[async_trait]
impl Tool for ConstantsLookupTool {
    fn name(&self) -> &str {
        "physics_constants_lookup"
    }

    fn description(&self) -> &str {
        "Look up CODATA physical constants with value, units, symbol, and uncertainty. \
         Give a constant name for one constant, a category to list its constants, \
         or nothing for an overview of the whole catalog."
    }

    fn parameters_schema(&self) -> Value {
        serde_json::json!({
            "type": "object",
            "properties": {
                "constant_name": {
                    "type": "string",
                    "description": "Constant name, e.g. 'speed_of_light' or 'Planck Constant'. Partial names return candidates."
                },
                "category": {
                    "type": "string",
                    "enum": Category::names(),
                    "description": "Category to list. When given, constant_name is ignored."
                }
            }
        })
    }

    async fn execute(&self, arguments: Value) -> Result<ToolResult, ToolError> {
        let name = optional_str(&arguments, "constant_name")?;
        let category = optional_str(&arguments, "category")?;

        match constants::lookup(name, category) {
            Ok(found) => Ok(ToolResult::success(to_data(self.name(), &found)?)),
            Err(e) => Ok(failed(self.name(), e.into())),
        }
    }
}

fn optional_str<'a>(arguments: &'a Value, key: &str) -> Result<Option<&'a str>, ToolError> {
    match &arguments[key] {
        Value::Null => Ok(None),
        Value::String(s) => Ok(Some(s.as_str())),
        _ => Err(ToolError::InvalidArguments(format!("'{key}' must be a string"))),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn exact_constant() {
        let result = ConstantsLookupTool
            .execute(serde_json::json!({"constant_name": "Speed of Light"}))
            .await
            .unwrap();

        assert!(result.success);
        let data = result.data.unwrap();
        assert_eq!(data["constant"], "speed_of_light");
        assert_eq!(data["value"], 299_792_458.0);
        assert_eq!(data["uncertainty"], "exact (defined)");
    }

    #[tokio::test]
    async fn category_listing() {
        let result = ConstantsLookupTool
            .execute(serde_json::json!({"category": "earth"}))
            .await
            .unwrap();

        let data = result.data.unwrap();
        assert_eq!(data["category"], "earth");
        assert_eq!(data["count"], 3);
    }

    #[tokio::test]
    async fn overview_without_arguments() {
        let result = ConstantsLookupTool.execute(serde_json::json!({})).await.unwrap();

        assert!(result.success);
        assert_eq!(result.data.unwrap()["total_constants"], 24);
    }

    #[tokio::test]
    async fn partial_match_returns_candidates() {
        let result = ConstantsLookupTool
            .execute(serde_json::json!({"constant_name": "planck"}))
            .await
            .unwrap();

        assert!(!result.success);
        let data = result.data.unwrap();
        assert_eq!(data["kind"], "partial_match");
        assert_eq!(data["search_term"], "planck");
        assert_eq!(data["partial_matches"].as_array().unwrap().len(), 2);
    }

    #[tokio::test]
    async fn unknown_constant() {
        let result = ConstantsLookupTool
            .execute(serde_json::json!({"constant_name": "nonexistent_constant"}))
            .await
            .unwrap();

        let data = result.data.unwrap();
        assert_eq!(data["kind"], "unknown_constant");
        assert_eq!(data["total_available"], 24);
        assert!(data["suggestion"].is_string());
    }

    #[tokio::test]
    async fn non_string_name_is_invalid_arguments() {
        let err = ConstantsLookupTool
            .execute(serde_json::json!({"constant_name": 42}))
            .await
            .unwrap_err();
        assert!(matches!(err, ToolError::InvalidArguments(_)));
    }
}
