//! Serde DTOs shared between the HTTP surface and API consumers.

pub mod api;
pub mod check_in;
pub mod enrollment;
pub mod gym;
pub mod help_order;
pub mod plan;
pub mod session;
pub mod student;
pub mod user;
