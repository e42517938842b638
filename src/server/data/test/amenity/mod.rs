use crate::server::data::{amenity::AmenityRepository, room_type::RoomTypeRepository};
use sea_orm::DbErr;
use test_utils::{builder::TestBuilder, factory};
