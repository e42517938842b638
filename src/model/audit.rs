use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

#[derive(Serialize, Deserialize, ToSchema, Debug, Clone)]
pub struct AuditLogDto {
    pub id: i32,
    pub category: String,
    pub description: String,
    pub actor_kind: String,
    pub actor_id: i32,
    pub created_at: DateTime<Utc>,
}
