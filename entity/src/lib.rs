pub mod check_in;
pub mod enrollment;
pub mod gym;
pub mod help_order;
pub mod plan;
pub mod prelude;
pub mod student;
pub mod user;
