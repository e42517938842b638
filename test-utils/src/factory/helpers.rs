//! Shared helpers for the factories.

use sea_orm::{DatabaseConnection, DbErr};

static COUNTER: std::sync::atomic::AtomicU64 = std::sync::atomic::AtomicU64::new(1);

/// Next value of a process-wide counter, used to build unique column values.
pub fn next_id() -> u64 {
    COUNTER.fetch_add(1, std::sync::atomic::Ordering::SeqCst)
}

/// Creates a room type and an `AVAILABLE` room of that type priced at 100.00.
///
/// # Returns
/// - `Ok((room_type, room))` - Created rows
/// - `Err(DbErr)` - Database error during creation
pub async fn create_room_with_type(
    db: &DatabaseConnection,
) -> Result<(entity::room_type::Model, entity::room::Model), DbErr> {
    let room_type = crate::factory::room_type::create_room_type(db).await?;
    let room = crate::factory::room::create_room(db, room_type.id).await?;

    Ok((room_type, room))
}

/// Creates a room, an active guest and a `PENDING` reservation between them.
///
/// The reservation uses the `ReservationFactory` default dates.
///
/// # Returns
/// - `Ok((room, guest, reservation))` - Created rows
/// - `Err(DbErr)` - Database error during creation
pub async fn create_reservation_with_dependencies(
    db: &DatabaseConnection,
) -> Result<
    (
        entity::room::Model,
        entity::guest::Model,
        entity::reservation::Model,
    ),
    DbErr,
> {
    let (_, room) = create_room_with_type(db).await?;
    let guest = crate::factory::guest::create_guest(db).await?;
    let reservation = crate::factory::reservation::create_reservation(db, room.id, guest.id).await?;

    Ok((room, guest, reservation))
}
