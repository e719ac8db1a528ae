//! Factory methods for creating test data.
//!
//! Each entity has its own factory module with both a `Factory` struct for
//! customization and a `create_*` convenience function for quick default
//! creation. Factories automatically handle foreign key dependencies where a
//! parent id is required, making tests concise.
//!
//! # Basic Usage
//!
//! ```rust,ignore
//! use test_utils::factory;
//!
//! #[tokio::test]
//! async fn test_example() -> Result<(), sea_orm::DbErr> {
//!     let db = /* ... */;
//!
//!     // Create with defaults
//!     let gym = factory::gym::create_gym(&db).await?;
//!     let student = factory::student::create_student(&db, gym.id).await?;
//!
//!     // Create a fully enrolled student in one call
//!     let (gym, student, plan, enrollment) =
//!         factory::helpers::create_enrolled_student(&db).await?;
//!
//!     Ok(())
//! }
//! ```
//!
//! # Customization
//!
//! Use the factory builders for custom values:
//!
//! ```rust,ignore
//! let student = factory::student::StudentFactory::new(&db, gym.id)
//!     .name("Ringo Deathstarr")
//!     .email("ringo@example.com")
//!     .build()
//!     .await?;
//! ```

pub mod check_in;
pub mod enrollment;
pub mod gym;
pub mod help_order;
pub mod helpers;
pub mod plan;
pub mod student;
pub mod user;

// Re-export commonly used factory functions for concise usage
pub use check_in::create_check_in;
pub use enrollment::create_enrollment;
pub use gym::create_gym;
pub use help_order::create_help_order;
pub use plan::create_plan;
pub use student::create_student;
pub use user::create_user;
