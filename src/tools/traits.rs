//! Tool trait definitions.

use std::sync::Arc;

use async_trait::async_trait;
use rmcp::model::JsonObject;
use schemars::JsonSchema;
use serde_json::Value;

use crate::error::Result;

/// Core tool trait for everything the server exposes.
#[async_trait]
pub trait Tool: Send + Sync {
    fn name(&self) -> &str;
    fn description(&self) -> &str;
    fn input_schema(&self) -> JsonObject;

    /// Run the tool, returning the text report on success.
    async fn call(&self, input: Value) -> Result<String>;

    fn definition(&self) -> rmcp::model::Tool {
        rmcp::model::Tool::new(
            self.name().to_string(),
            self.description().to_string(),
            Arc::new(self.input_schema()),
        )
    }
}

/// Schema-based tool trait with a typed input.
///
/// The declared input schema is derived from `Input` via schemars, so the
/// contract advertised to callers and the type the handler receives cannot
/// drift apart. `parse` owns argument validation.
#[async_trait]
pub trait SchemaTool: Send + Sync {
    type Input: JsonSchema + Send;
    const NAME: &'static str;
    const DESCRIPTION: &'static str;

    fn parse(input: &Value) -> Result<Self::Input>;

    async fn handle(&self, input: Self::Input) -> Result<String>;

    fn input_schema() -> JsonObject {
        let schema = schemars::schema_for!(Self::Input);
        let mut obj = match serde_json::to_value(schema) {
            Ok(Value::Object(obj)) => obj,
            _ => JsonObject::new(),
        };

        obj.remove("$schema");
        obj.remove("title");
        obj.entry("type")
            .or_insert_with(|| Value::String("object".to_string()));
        obj.entry("properties")
            .or_insert_with(|| Value::Object(JsonObject::new()));

        obj
    }
}

#[async_trait]
impl<T: SchemaTool + 'static> Tool for T {
    fn name(&self) -> &str {
        T::NAME
    }

    fn description(&self) -> &str {
        T::DESCRIPTION
    }

    fn input_schema(&self) -> JsonObject {
        T::input_schema()
    }

    async fn call(&self, input: Value) -> Result<String> {
        let typed = T::parse(&input)?;
        SchemaTool::handle(self, typed).await
    }
}
