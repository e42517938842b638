use chrono::Utc;
use sea_orm::{
    ActiveModelTrait, ActiveValue, DatabaseConnection, DbErr, EntityTrait, QueryOrder,
};

use crate::server::model::audit::RecordAuditParams;

pub struct AuditLogRepository<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> AuditLogRepository<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    pub async fn create(&self, params: RecordAuditParams) -> Result<entity::audit_log::Model, DbErr> {
        entity::audit_log::ActiveModel {
            category: ActiveValue::Set(params.category.as_str().to_string()),
            description: ActiveValue::Set(params.description),
            actor_kind: ActiveValue::Set(params.actor.kind.as_str().to_string()),
            actor_id: ActiveValue::Set(params.actor.id),
            created_at: ActiveValue::Set(Utc::now()),
            ..Default::default()
        }
        .insert(self.db)
        .await
    }

    /// Gets all entries, newest first.
    pub async fn get_all(&self) -> Result<Vec<entity::audit_log::Model>, DbErr> {
        entity::prelude::AuditLog::find()
            .order_by_desc(entity::audit_log::Column::CreatedAt)
            .order_by_desc(entity::audit_log::Column::Id)
            .all(self.db)
            .await
    }

    pub async fn find_by_id(&self, id: i32) -> Result<Option<entity::audit_log::Model>, DbErr> {
        entity::prelude::AuditLog::find_by_id(id).one(self.db).await
    }
}
