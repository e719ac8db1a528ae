mod check_in;
mod enrollment;
mod gym;
mod help_order;
mod plan;
mod student;
mod user;
