use chrono::Utc;
use sea_orm::{
    ActiveModelTrait, ActiveValue, ColumnTrait, DatabaseConnection, DbErr, EntityTrait,
    QueryFilter, QueryOrder,
};

use crate::server::model::amenity::{CreateAmenityParams, UpdateAmenityParams};

pub struct AmenityRepository<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> AmenityRepository<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    pub async fn create(
        &self,
        params: CreateAmenityParams,
    ) -> Result<entity::amenity::Model, DbErr> {
        entity::amenity::ActiveModel {
            name: ActiveValue::Set(params.name),
            description: ActiveValue::Set(params.description),
            created_at: ActiveValue::Set(Utc::now()),
            ..Default::default()
        }
        .insert(self.db)
        .await
    }

    pub async fn find_by_id(&self, id: i32) -> Result<Option<entity::amenity::Model>, DbErr> {
        entity::prelude::Amenity::find_by_id(id).one(self.db).await
    }

    pub async fn find_by_name(&self, name: &str) -> Result<Option<entity::amenity::Model>, DbErr> {
        entity::prelude::Amenity::find()
            .filter(entity::amenity::Column::Name.eq(name))
            .one(self.db)
            .await
    }

    pub async fn get_all(&self) -> Result<Vec<entity::amenity::Model>, DbErr> {
        entity::prelude::Amenity::find()
            .order_by_asc(entity::amenity::Column::Name)
            .all(self.db)
            .await
    }

    /// Applies the provided fields to an amenity.
    ///
    /// # Returns
    /// - `Ok(Some(Model))` - Updated amenity
    /// - `Ok(None)` - No amenity with that id
    pub async fn update(
        &self,
        params: UpdateAmenityParams,
    ) -> Result<Option<entity::amenity::Model>, DbErr> {
        let Some(existing) = self.find_by_id(params.id).await? else {
            return Ok(None);
        };

        let mut active: entity::amenity::ActiveModel = existing.into();
        if let Some(name) = params.name {
            active.name = ActiveValue::Set(name);
        }
        if let Some(description) = params.description {
            active.description = ActiveValue::Set(Some(description));
        }

        Ok(Some(active.update(self.db).await?))
    }

    /// Deletes an amenity; its room type links are removed by cascade.
    ///
    /// # Returns
    /// - `Ok(true)` - Amenity deleted
    /// - `Ok(false)` - No amenity with that id
    pub async fn delete(&self, id: i32) -> Result<bool, DbErr> {
        entity::prelude::RoomTypeAmenity::delete_many()
            .filter(entity::room_type_amenity::Column::AmenityId.eq(id))
            .exec(self.db)
            .await?;

        let result = entity::prelude::Amenity::delete_by_id(id)
            .exec(self.db)
            .await?;

        Ok(result.rows_affected > 0)
    }
}
