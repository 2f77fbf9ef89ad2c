use serde::{Deserialize, Serialize};
use ts_rs::TS;
use uuid::Uuid;

#[derive(Debug, Clone, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct Worker {
    pub id: Uuid,
    pub full_name: String,
    /// National identity document number, as printed.
    pub document_id: String,
    pub position: String,
    pub email: Option<String>,
    pub created_at: jiff::Timestamp,
    pub updated_at: jiff::Timestamp,
}
