use crate::server::data::user::UserRepository;
use entity::prelude::*;
use sea_orm::DbErr;
use test_utils::{builder::TestBuilder, factory};

mod admin_exists;
mod contact_taken_by_other;
mod delete;
mod email_or_phone_taken;
mod set_status;
