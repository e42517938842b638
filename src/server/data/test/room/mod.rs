use crate::server::{
    data::room::RoomRepository,
    model::room::{RoomStatus, UpdateRoomParams},
};
use sea_orm::{DbErr, TransactionTrait};
use test_utils::{builder::TestBuilder, factory};

mod get_by_status_with_type;
mod lock;
mod reservation_count;
mod update;
