//! Audit log.

use sea_orm::DatabaseConnection;

use crate::server::{
    data::audit_log::AuditLogRepository,
    error::AppError,
    model::audit::{AuditLog, RecordAuditParams},
};

pub struct AuditService<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> AuditService<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    pub async fn record(&self, params: RecordAuditParams) -> Result<AuditLog, AppError> {
        let entry = AuditLogRepository::new(self.db).create(params).await?;

        AuditLog::from_entity(entry)
    }

    /// Records an entry on a background task.
    ///
    /// The calling request never waits on or fails because of the audit write;
    /// failures are only logged.
    pub fn record_detached(db: &DatabaseConnection, params: RecordAuditParams) {
        let db = db.clone();

        tokio::spawn(async move {
            let description = params.description.clone();
            if let Err(e) = AuditService::new(&db).record(params).await {
                tracing::warn!("Failed to record audit entry '{}': {}", description, e);
            }
        });
    }

    pub async fn get_all(&self) -> Result<Vec<AuditLog>, AppError> {
        let entries = AuditLogRepository::new(self.db).get_all().await?;

        entries.into_iter().map(AuditLog::from_entity).collect()
    }

    pub async fn get_by_id(&self, id: i32) -> Result<AuditLog, AppError> {
        let entry = AuditLogRepository::new(self.db)
            .find_by_id(id)
            .await?
            .ok_or_else(|| AppError::NotFound("Log entry not found".to_string()))?;

        AuditLog::from_entity(entry)
    }
}
