//! Audit log domain models.

use chrono::{DateTime, Utc};

use crate::{
    model::audit::AuditLogDto,
    server::error::{internal::InternalError, AppError},
};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AuditCategory {
    Create,
    Read,
    Update,
    Delete,
    Login,
}

impl AuditCategory {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Create => "CREATE",
            Self::Read => "READ",
            Self::Update => "UPDATE",
            Self::Delete => "DELETE",
            Self::Login => "LOGIN",
        }
    }
}

/// Which account table an audit actor id refers to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ActorKind {
    User,
    Guest,
}

impl ActorKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::User => "USER",
            Self::Guest => "GUEST",
        }
    }

    fn parse(value: &str) -> Option<Self> {
        match value {
            "USER" => Some(Self::User),
            "GUEST" => Some(Self::Guest),
            _ => None,
        }
    }
}

/// The account an audited action is attributed to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Actor {
    pub kind: ActorKind,
    pub id: i32,
}

#[derive(Debug, Clone, PartialEq)]
pub struct AuditLog {
    pub id: i32,
    pub category: String,
    pub description: String,
    pub actor: Actor,
    pub created_at: DateTime<Utc>,
}

impl AuditLog {
    pub fn from_entity(entity: entity::audit_log::Model) -> Result<Self, AppError> {
        let kind =
            ActorKind::parse(&entity.actor_kind).ok_or_else(|| InternalError::UnknownStoredValue {
                field: "audit_log.actor_kind",
                value: entity.actor_kind.clone(),
            })?;

        Ok(Self {
            id: entity.id,
            category: entity.category,
            description: entity.description,
            actor: Actor {
                kind,
                id: entity.actor_id,
            },
            created_at: entity.created_at,
        })
    }

    pub fn into_dto(self) -> AuditLogDto {
        AuditLogDto {
            id: self.id,
            category: self.category,
            description: self.description,
            actor_kind: self.actor.kind.as_str().to_string(),
            actor_id: self.actor.id,
            created_at: self.created_at,
        }
    }
}

/// A new audit entry.
#[derive(Debug, Clone)]
pub struct RecordAuditParams {
    pub category: AuditCategory,
    pub description: String,
    pub actor: Actor,
}
