use entity::prelude::*;
use sea_orm::{sea_query::TableCreateStatement, EntityTrait, Schema};

use crate::{context::TestContext, error::TestError};

/// Builder for test contexts backed by an in-memory SQLite database.
///
/// Add the entity tables a test needs, then call `build()`.
///
/// # Example
///
/// ```rust,ignore
/// use test_utils::builder::TestBuilder;
/// use entity::prelude::{RoomType, Room};
///
/// let test = TestBuilder::new()
///     .with_table(RoomType)
///     .with_table(Room)
///     .build()
///     .await?;
/// ```
pub struct TestBuilder {
    /// CREATE TABLE statements, executed in insertion order.
    tables: Vec<TableCreateStatement>,
    /// Pool size of a file-backed database. In-memory when unset.
    file_connections: Option<u32>,
}

impl Default for TestBuilder {
    fn default() -> Self {
        Self::new()
    }
}

impl TestBuilder {
    pub fn new() -> Self {
        Self {
            tables: Vec::new(),
            file_connections: None,
        }
    }

    /// Uses a temporary SQLite file with a pool of `max_connections` instead of
    /// the single-connection in-memory database.
    ///
    /// Needed by tests whose transactions must overlap in time.
    pub fn with_file_database(mut self, max_connections: u32) -> Self {
        self.file_connections = Some(max_connections);
        self
    }

    /// Adds an entity table to the schema.
    ///
    /// Foreign keys declared on the entity are part of the generated statement, so
    /// referenced tables must be added first.
    ///
    /// # Arguments
    /// - `entity` - SeaORM entity to create a table for
    ///
    /// # Returns
    /// - `Self` - Builder instance for method chaining
    pub fn with_table<E: EntityTrait>(mut self, entity: E) -> Self {
        let schema = Schema::new(sea_orm::DbBackend::Sqlite);
        self.tables.push(schema.create_table_from_entity(entity));
        self
    }

    /// Adds the room catalog tables: RoomType, Amenity, RoomTypeAmenity and Room.
    pub fn with_catalog_tables(self) -> Self {
        self.with_table(RoomType)
            .with_table(Amenity)
            .with_table(RoomTypeAmenity)
            .with_table(Room)
    }

    /// Adds every table of the booking schema in dependency order:
    /// - User, Guest
    /// - RoomType, Amenity, RoomTypeAmenity, Room
    /// - Reservation, Payment
    /// - Otp, AuditLog
    ///
    /// # Example
    ///
    /// ```rust,ignore
    /// let test = TestBuilder::new()
    ///     .with_booking_tables()
    ///     .build()
    ///     .await?;
    /// ```
    pub fn with_booking_tables(self) -> Self {
        self.with_table(User)
            .with_table(Guest)
            .with_catalog_tables()
            .with_table(Reservation)
            .with_table(Payment)
            .with_table(Otp)
            .with_table(AuditLog)
    }

    /// Connects to a fresh database and creates the configured tables.
    ///
    /// # Returns
    /// - `Ok(TestContext)` - Context with the schema in place
    /// - `Err(TestError::Io)` - Temporary directory for a file database failed
    /// - `Err(TestError::Database)` - Connection or table creation failed
    pub async fn build(self) -> Result<TestContext, TestError> {
        let mut context = match self.file_connections {
            Some(max_connections) => TestContext::on_disk(max_connections).await?,
            None => TestContext::new(),
        };

        context.with_tables(self.tables).await?;

        Ok(context)
    }
}
