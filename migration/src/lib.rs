pub use sea_orm_migration::prelude::*;

mod m20261019_000001_create_user_table;
mod m20261019_000002_create_guest_table;
mod m20261019_000003_create_room_type_table;
mod m20261019_000004_create_amenity_table;
mod m20261019_000005_create_room_type_amenity_table;
mod m20261019_000006_create_room_table;
mod m20261019_000007_create_reservation_table;
mod m20261019_000008_create_payment_table;
mod m20261019_000009_create_otp_table;
mod m20261019_000010_create_audit_log_table;

pub struct Migrator;

#[async_trait::async_trait]
impl MigratorTrait for Migrator {
    fn migrations() -> Vec<Box<dyn MigrationTrait>> {
        vec![
            Box::new(m20261019_000001_create_user_table::Migration),
            Box::new(m20261019_000002_create_guest_table::Migration),
            Box::new(m20261019_000003_create_room_type_table::Migration),
            Box::new(m20261019_000004_create_amenity_table::Migration),
            Box::new(m20261019_000005_create_room_type_amenity_table::Migration),
            Box::new(m20261019_000006_create_room_table::Migration),
            Box::new(m20261019_000007_create_reservation_table::Migration),
            Box::new(m20261019_000008_create_payment_table::Migration),
            Box::new(m20261019_000009_create_otp_table::Migration),
            Box::new(m20261019_000010_create_audit_log_table::Migration),
        ]
    }
}
