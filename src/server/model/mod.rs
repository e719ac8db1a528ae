//! Domain models and per-operation parameter types.
//!
//! Repositories convert entity models into these at the data boundary; services
//! and controllers never see SeaORM models directly.

pub mod auth;
pub mod check_in;
pub mod enrollment;
pub mod gym;
pub mod help_order;
pub mod plan;
pub mod student;
pub mod user;
