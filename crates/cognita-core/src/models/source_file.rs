use serde::{Deserialize, Serialize};
use ts_rs::TS;
use uuid::Uuid;

/// An uploaded PDF or Excel source document and its server-side conversion
/// lifecycle.
#[derive(Debug, Clone, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct SourceFile {
    pub id: Uuid,
    pub worker_id: Uuid,
    pub filename: String,
    pub kind: SourceFileKind,
    pub status: SourceFileStatus,
    pub created_at: jiff::Timestamp,
    pub updated_at: jiff::Timestamp,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, TS)]
#[serde(rename_all = "snake_case")]
#[ts(export)]
pub enum SourceFileKind {
    Pdf,
    Excel,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, TS)]
#[serde(rename_all = "snake_case")]
#[ts(export)]
pub enum SourceFileStatus {
    Uploaded,
    Converting,
    Converted,
    Failed,
}
