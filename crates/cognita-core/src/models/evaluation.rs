use serde::{Deserialize, Serialize};
use ts_rs::TS;
use uuid::Uuid;

use crate::error::CoreError;

#[derive(Debug, Clone, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct Evaluation {
    pub id: Uuid,
    pub worker_id: Uuid,
    pub battery_id: String,
    pub date_administered: jiff::civil::Date,
    /// Raw scores keyed by indicator id, as returned by the conversion
    /// backend. Values may be numbers, numeric strings, or garbage.
    pub scores: serde_json::Value,
    pub notes: Option<String>,
    pub source_file_id: Option<Uuid>,
    pub created_at: jiff::Timestamp,
    pub updated_at: jiff::Timestamp,
}

impl Evaluation {
    /// Scores keyed by indicator id. The backend stores them as a JSON
    /// object; any other shape is a malformed payload.
    pub fn scores_map(&self) -> Result<&serde_json::Map<String, serde_json::Value>, CoreError> {
        self.scores
            .as_object()
            .ok_or_else(|| CoreError::MalformedScores(json_type_name(&self.scores)))
    }
}

fn json_type_name(value: &serde_json::Value) -> &'static str {
    match value {
        serde_json::Value::Null => "null",
        serde_json::Value::Bool(_) => "bool",
        serde_json::Value::Number(_) => "number",
        serde_json::Value::String(_) => "string",
        serde_json::Value::Array(_) => "array",
        serde_json::Value::Object(_) => "object",
    }
}
