use entity::prelude::*;
use sea_orm::{sea_query::TableCreateStatement, EntityTrait, Schema};

use crate::{context::TestContext, error::TestError};

/// Builder for creating test contexts with customizable database schemas.
///
/// Provides a fluent interface for configuring test environments with in-memory SQLite
/// databases. Use the builder pattern to add entity tables, then call `build()` to
/// create the configured test context.
///
/// # Example
///
/// ```rust,ignore
/// use test_utils::builder::TestBuilder;
/// use entity::prelude::{Guild, UserProfile};
///
/// let test = TestBuilder::new()
///     .with_table(UserProfile)
///     .with_table(Guild)
///     .build()
///     .await?;
/// ```
#[derive(Default)]
pub struct TestBuilder {
    /// CREATE TABLE statements executed in insertion order during `build()`.
    tables: Vec<TableCreateStatement>,
}

impl TestBuilder {
    /// Creates a new test builder with no tables configured.
    ///
    /// # Returns
    /// - New `TestBuilder` instance with empty table configuration
    pub fn new() -> Self {
        Self { tables: Vec::new() }
    }

    /// Adds an entity table to the test database schema.
    ///
    /// Generates a CREATE TABLE statement from the provided SeaORM entity using SQLite
    /// backend syntax. Tables should be added in dependency order (tables with foreign
    /// keys after the tables they reference).
    ///
    /// # Arguments
    /// - `entity` - SeaORM entity implementing `EntityTrait` to create a table for
    ///
    /// # Returns
    /// - `Self` - Builder instance for method chaining
    pub fn with_table<E: EntityTrait>(mut self, entity: E) -> Self {
        let schema = Schema::new(sea_orm::DbBackend::Sqlite);
        self.tables.push(schema.create_table_from_entity(entity));
        self
    }

    /// Adds the tables required for guild membership operations.
    ///
    /// Adds, in dependency order:
    /// - UserProfile
    /// - Guild
    /// - GuildMember
    ///
    /// # Returns
    /// - `Self` - Builder instance for method chaining
    pub fn with_membership_tables(self) -> Self {
        self.with_table(UserProfile)
            .with_table(Guild)
            .with_table(GuildMember)
    }

    /// Adds every table, including the permission catalog and assignment tables.
    ///
    /// Equivalent to `with_membership_tables()` followed by Permission,
    /// GuildRolePermission and GuildUserPermission. The permission catalog starts
    /// empty; use `factory::permission` to insert keys.
    ///
    /// # Returns
    /// - `Self` - Builder instance for method chaining
    pub fn with_permission_tables(self) -> Self {
        self.with_membership_tables()
            .with_table(Permission)
            .with_table(GuildRolePermission)
            .with_table(GuildUserPermission)
    }

    /// Builds and initializes the test context with configured tables.
    ///
    /// # Returns
    /// - `Ok(TestContext)` - Initialized test context with database and tables ready
    /// - `Err(TestError::Database)` - Failed to connect to database or create tables
    pub async fn build(self) -> Result<TestContext, TestError> {
        let mut setup = TestContext::new();

        setup.with_tables(self.tables).await?;

        Ok(setup)
    }
}
