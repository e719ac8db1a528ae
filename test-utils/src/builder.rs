use entity::prelude::*;
use sea_orm::{sea_query::TableCreateStatement, DatabaseBackend, EntityTrait, Schema};

use crate::{context::TestContext, error::TestError};

/// Builder for creating test contexts with customizable database schemas.
///
/// Provides a fluent interface for configuring test environments with in-memory
/// SQLite databases. Use the builder pattern to add entity tables, then call
/// `build()` to create the configured test context.
///
/// # Example
///
/// ```rust,ignore
/// use test_utils::builder::TestBuilder;
/// use entity::prelude::{Gym, Student};
///
/// let test = TestBuilder::new()
///     .with_table(Gym)
///     .with_table(Student)
///     .build()
///     .await?;
/// ```
pub struct TestBuilder {
    /// CREATE TABLE statements to execute during database setup.
    ///
    /// Each statement is generated from an entity model using SeaORM's schema
    /// builder. Statements are executed in the order they were added.
    tables: Vec<TableCreateStatement>,
}

impl TestBuilder {
    /// Creates a new test builder with no tables configured.
    pub fn new() -> Self {
        Self { tables: Vec::new() }
    }

    /// Adds an entity table to the test database schema.
    ///
    /// Generates a CREATE TABLE statement from the provided SeaORM entity using
    /// SQLite backend syntax. Tables should be added in dependency order (tables
    /// with foreign keys after their referenced tables).
    ///
    /// # Arguments
    /// - `entity` - SeaORM entity to generate the table from
    ///
    /// # Returns
    /// - `Self` - Builder instance for method chaining
    pub fn with_table<E: EntityTrait>(mut self, entity: E) -> Self {
        let schema = Schema::new(DatabaseBackend::Sqlite);
        self.tables.push(schema.create_table_from_entity(entity));
        self
    }

    /// Adds all tables required for enrollment operations.
    ///
    /// This convenience method adds the following tables in dependency order:
    /// - Gym
    /// - User
    /// - Student
    /// - Plan
    /// - Enrollment
    ///
    /// Use this when testing enrollment-related functionality. For help-order or
    /// check-in tests, use `with_gym_tables()`.
    ///
    /// # Returns
    /// - `Self` - Builder instance for method chaining
    pub fn with_enrollment_tables(self) -> Self {
        self.with_table(Gym)
            .with_table(User)
            .with_table(Student)
            .with_table(Plan)
            .with_table(Enrollment)
    }

    /// Adds every table in the schema.
    ///
    /// Equivalent to `with_enrollment_tables()` plus the check-in and help-order
    /// tables. Use this for tests that span the whole domain.
    ///
    /// # Returns
    /// - `Self` - Builder instance for method chaining
    pub fn with_gym_tables(self) -> Self {
        self.with_enrollment_tables()
            .with_table(CheckIn)
            .with_table(HelpOrder)
    }

    /// Builds and initializes the test context with configured tables.
    ///
    /// Creates an in-memory SQLite database connection and executes all CREATE
    /// TABLE statements that were added via `with_table()`.
    ///
    /// # Returns
    /// - `Ok(TestContext)` - Fully initialized test context with tables ready
    /// - `Err(TestError::Database)` - Failed to connect or create tables
    pub async fn build(self) -> Result<TestContext, TestError> {
        let mut setup = TestContext::new();

        setup.with_tables(self.tables).await?;

        Ok(setup)
    }
}

impl Default for TestBuilder {
    fn default() -> Self {
        Self::new()
    }
}
