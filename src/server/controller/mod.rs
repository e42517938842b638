//! HTTP request handlers.
//!
//! Controllers check access with `AuthGuard`, convert DTOs into domain parameters,
//! call a service and convert the result back into a DTO. Mutations and logins are
//! recorded in the audit log without waiting on the write.

pub mod amenity;
pub mod audit;
pub mod auth;
pub mod guest;
pub mod payment;
pub mod reservation;
pub mod room;
pub mod room_type;
pub mod user;

use crate::server::{
    model::audit::{Actor, AuditCategory, RecordAuditParams},
    service::audit::AuditService,
    state::AppState,
};

pub(crate) fn audit(state: &AppState, actor: Actor, category: AuditCategory, description: String) {
    AuditService::record_detached(
        &state.db,
        RecordAuditParams {
            category,
            description,
            actor,
        },
    );
}
