//! Payment factory.

use crate::factory::helpers::next_id;
use chrono::Utc;
use sea_orm::{ActiveModelTrait, ActiveValue, DatabaseConnection, DbErr};

pub struct PaymentFactory<'a> {
    db: &'a DatabaseConnection,
    reservation_id: i32,
    transaction_ref: String,
    amount: f64,
    status: String,
}

impl<'a> PaymentFactory<'a> {
    /// Defaults: unique transaction reference, amount 200.00, status `PENDING`.
    pub fn new(db: &'a DatabaseConnection, reservation_id: i32) -> Self {
        Self {
            db,
            reservation_id,
            transaction_ref: format!("txn-{}", next_id()),
            amount: 200.0,
            status: "PENDING".to_string(),
        }
    }

    pub fn amount(mut self, amount: f64) -> Self {
        self.amount = amount;
        self
    }

    /// Sets the status: `PENDING`, `PAID` or `FAILED`.
    pub fn status(mut self, status: impl Into<String>) -> Self {
        self.status = status.into();
        self
    }

    pub async fn build(self) -> Result<entity::payment::Model, DbErr> {
        entity::payment::ActiveModel {
            reservation_id: ActiveValue::Set(self.reservation_id),
            transaction_ref: ActiveValue::Set(self.transaction_ref),
            amount: ActiveValue::Set(self.amount),
            status: ActiveValue::Set(self.status),
            transaction_date: ActiveValue::Set(Utc::now()),
            ..Default::default()
        }
        .insert(self.db)
        .await
    }
}

pub async fn create_payment(
    db: &DatabaseConnection,
    reservation_id: i32,
) -> Result<entity::payment::Model, DbErr> {
    PaymentFactory::new(db, reservation_id).build().await
}
