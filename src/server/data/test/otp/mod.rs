use crate::server::data::otp::OtpRepository;
use chrono::{Duration, Utc};
use entity::prelude::*;
use sea_orm::{DbErr, EntityTrait, PaginatorTrait};
use test_utils::builder::TestBuilder;

mod delete_expired;
mod upsert;
