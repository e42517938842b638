use crate::server::data::room_type::RoomTypeRepository;
use sea_orm::DbErr;
use test_utils::{builder::TestBuilder, factory};

mod get_amenities_for;
mod link_amenity;
