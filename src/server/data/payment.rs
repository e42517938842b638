use chrono::Utc;
use sea_orm::{
    sea_query::Expr, ActiveModelTrait, ActiveValue, ColumnTrait, ConnectionTrait, DbErr,
    EntityTrait, QueryFilter, QueryOrder,
};

use crate::server::model::payment::PaymentStatus;

pub struct PaymentRepository<'a, C: ConnectionTrait> {
    db: &'a C,
}

impl<'a, C: ConnectionTrait> PaymentRepository<'a, C> {
    pub fn new(db: &'a C) -> Self {
        Self { db }
    }

    /// Inserts a payment for a reservation, timestamped now.
    pub async fn create(
        &self,
        reservation_id: i32,
        transaction_ref: String,
        amount: f64,
        status: PaymentStatus,
    ) -> Result<entity::payment::Model, DbErr> {
        entity::payment::ActiveModel {
            reservation_id: ActiveValue::Set(reservation_id),
            transaction_ref: ActiveValue::Set(transaction_ref),
            amount: ActiveValue::Set(amount),
            status: ActiveValue::Set(status.as_str().to_string()),
            transaction_date: ActiveValue::Set(Utc::now()),
            ..Default::default()
        }
        .insert(self.db)
        .await
    }

    pub async fn find_by_id(&self, id: i32) -> Result<Option<entity::payment::Model>, DbErr> {
        entity::prelude::Payment::find_by_id(id).one(self.db).await
    }

    /// Gets all payments, newest first.
    pub async fn get_all(&self) -> Result<Vec<entity::payment::Model>, DbErr> {
        entity::prelude::Payment::find()
            .order_by_desc(entity::payment::Column::TransactionDate)
            .order_by_desc(entity::payment::Column::Id)
            .all(self.db)
            .await
    }

    pub async fn get_by_reservation(
        &self,
        reservation_id: i32,
    ) -> Result<Vec<entity::payment::Model>, DbErr> {
        entity::prelude::Payment::find()
            .filter(entity::payment::Column::ReservationId.eq(reservation_id))
            .order_by_asc(entity::payment::Column::Id)
            .all(self.db)
            .await
    }

    /// Sets the status of a payment.
    ///
    /// # Returns
    /// - `Ok(true)` - Payment updated
    /// - `Ok(false)` - No payment with that id
    pub async fn set_status(&self, id: i32, status: PaymentStatus) -> Result<bool, DbErr> {
        let result = entity::prelude::Payment::update_many()
            .col_expr(entity::payment::Column::Status, Expr::value(status.as_str()))
            .filter(entity::payment::Column::Id.eq(id))
            .exec(self.db)
            .await?;

        Ok(result.rows_affected > 0)
    }
}
