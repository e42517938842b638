//! Room type data repository, including the room type ↔ amenity junction.

use chrono::Utc;
use sea_orm::{
    ActiveModelTrait, ActiveValue, ColumnTrait, ConnectionTrait, DbErr, EntityTrait,
    PaginatorTrait, QueryFilter, QueryOrder,
};
use std::collections::HashMap;

use crate::server::model::room_type::{CreateRoomTypeParams, UpdateRoomTypeParams};

pub struct RoomTypeRepository<'a, C: ConnectionTrait> {
    db: &'a C,
}

impl<'a, C: ConnectionTrait> RoomTypeRepository<'a, C> {
    pub fn new(db: &'a C) -> Self {
        Self { db }
    }

    pub async fn create(
        &self,
        params: CreateRoomTypeParams,
    ) -> Result<entity::room_type::Model, DbErr> {
        entity::room_type::ActiveModel {
            name: ActiveValue::Set(params.name),
            description: ActiveValue::Set(params.description),
            created_at: ActiveValue::Set(Utc::now()),
            ..Default::default()
        }
        .insert(self.db)
        .await
    }

    pub async fn find_by_id(&self, id: i32) -> Result<Option<entity::room_type::Model>, DbErr> {
        entity::prelude::RoomType::find_by_id(id).one(self.db).await
    }

    pub async fn find_by_name(
        &self,
        name: &str,
    ) -> Result<Option<entity::room_type::Model>, DbErr> {
        entity::prelude::RoomType::find()
            .filter(entity::room_type::Column::Name.eq(name))
            .one(self.db)
            .await
    }

    pub async fn get_all(&self) -> Result<Vec<entity::room_type::Model>, DbErr> {
        entity::prelude::RoomType::find()
            .order_by_asc(entity::room_type::Column::Name)
            .all(self.db)
            .await
    }

    /// Applies the provided fields to a room type.
    ///
    /// # Returns
    /// - `Ok(Some(Model))` - Updated room type
    /// - `Ok(None)` - No room type with that id
    pub async fn update(
        &self,
        params: UpdateRoomTypeParams,
    ) -> Result<Option<entity::room_type::Model>, DbErr> {
        let Some(existing) = self.find_by_id(params.id).await? else {
            return Ok(None);
        };

        let mut active: entity::room_type::ActiveModel = existing.into();
        if let Some(name) = params.name {
            active.name = ActiveValue::Set(name);
        }
        if let Some(description) = params.description {
            active.description = ActiveValue::Set(Some(description));
        }

        Ok(Some(active.update(self.db).await?))
    }

    /// Deletes a room type and its amenity links.
    ///
    /// # Returns
    /// - `Ok(true)` - Room type deleted
    /// - `Ok(false)` - No room type with that id
    pub async fn delete(&self, id: i32) -> Result<bool, DbErr> {
        entity::prelude::RoomTypeAmenity::delete_many()
            .filter(entity::room_type_amenity::Column::RoomTypeId.eq(id))
            .exec(self.db)
            .await?;

        let result = entity::prelude::RoomType::delete_by_id(id)
            .exec(self.db)
            .await?;

        Ok(result.rows_affected > 0)
    }

    /// Counts the rooms assigned to a room type.
    pub async fn room_count(&self, room_type_id: i32) -> Result<u64, DbErr> {
        entity::prelude::Room::find()
            .filter(entity::room::Column::RoomTypeId.eq(room_type_id))
            .count(self.db)
            .await
    }

    /// Gets the amenities of a single room type ordered by name.
    pub async fn get_amenities(
        &self,
        room_type_id: i32,
    ) -> Result<Vec<entity::amenity::Model>, DbErr> {
        let mut amenities = self.get_amenities_for(&[room_type_id]).await?;

        Ok(amenities.remove(&room_type_id).unwrap_or_default())
    }

    /// Gets the amenities of several room types in two queries.
    ///
    /// # Arguments
    /// - `room_type_ids` - Room types to load amenities for
    ///
    /// # Returns
    /// - `Ok(HashMap)` - Amenities keyed by room type id, ordered by name. Room types
    ///   without amenities are absent from the map.
    /// - `Err(DbErr)` - Database error
    pub async fn get_amenities_for(
        &self,
        room_type_ids: &[i32],
    ) -> Result<HashMap<i32, Vec<entity::amenity::Model>>, DbErr> {
        if room_type_ids.is_empty() {
            return Ok(HashMap::new());
        }

        let links = entity::prelude::RoomTypeAmenity::find()
            .filter(
                entity::room_type_amenity::Column::RoomTypeId.is_in(room_type_ids.iter().copied()),
            )
            .all(self.db)
            .await?;

        if links.is_empty() {
            return Ok(HashMap::new());
        }

        let amenities: HashMap<i32, entity::amenity::Model> = entity::prelude::Amenity::find()
            .filter(entity::amenity::Column::Id.is_in(links.iter().map(|l| l.amenity_id)))
            .order_by_asc(entity::amenity::Column::Name)
            .all(self.db)
            .await?
            .into_iter()
            .map(|a| (a.id, a))
            .collect();

        let mut by_room_type: HashMap<i32, Vec<entity::amenity::Model>> = HashMap::new();
        for link in links {
            if let Some(amenity) = amenities.get(&link.amenity_id) {
                by_room_type
                    .entry(link.room_type_id)
                    .or_default()
                    .push(amenity.clone());
            }
        }
        for list in by_room_type.values_mut() {
            list.sort_by(|a, b| a.name.cmp(&b.name));
        }

        Ok(by_room_type)
    }

    /// Checks whether an amenity is linked to a room type.
    pub async fn is_linked(&self, room_type_id: i32, amenity_id: i32) -> Result<bool, DbErr> {
        let link = entity::prelude::RoomTypeAmenity::find_by_id((room_type_id, amenity_id))
            .one(self.db)
            .await?;

        Ok(link.is_some())
    }

    pub async fn link_amenity(&self, room_type_id: i32, amenity_id: i32) -> Result<(), DbErr> {
        entity::room_type_amenity::ActiveModel {
            room_type_id: ActiveValue::Set(room_type_id),
            amenity_id: ActiveValue::Set(amenity_id),
        }
        .insert(self.db)
        .await?;

        Ok(())
    }

    /// Removes an amenity link.
    ///
    /// # Returns
    /// - `Ok(true)` - Link removed
    /// - `Ok(false)` - The amenity was not linked
    pub async fn unlink_amenity(&self, room_type_id: i32, amenity_id: i32) -> Result<bool, DbErr> {
        let result = entity::prelude::RoomTypeAmenity::delete_by_id((room_type_id, amenity_id))
            .exec(self.db)
            .await?;

        Ok(result.rows_affected > 0)
    }
}
