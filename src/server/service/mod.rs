//! Business logic layer.
//!
//! Services sit between controllers and repositories: they validate input,
//! enforce gym-ownership rules, derive enrollment terms, and enqueue
//! notification jobs. Controllers never touch repositories directly for
//! anything beyond what the auth guard needs.

pub mod check_in;
pub mod enrollment;
pub mod gym;
pub mod help_order;
pub mod plan;
pub mod session;
pub mod student;
pub mod token;
pub mod user;
