//! HTTP handlers.
//!
//! Controllers stay thin: authenticate via the auth guard where required,
//! convert DTOs to params, call the matching service, and convert the result
//! back to a DTO. All error mapping lives on `AppError`.

pub mod check_in;
pub mod enrollment;
pub mod gym;
pub mod help_order;
pub mod plan;
pub mod session;
pub mod student;
pub mod user;
