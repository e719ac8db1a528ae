pub use super::check_in::Entity as CheckIn;
pub use super::enrollment::Entity as Enrollment;
pub use super::gym::Entity as Gym;
pub use super::help_order::Entity as HelpOrder;
pub use super::plan::Entity as Plan;
pub use super::student::Entity as Student;
pub use super::user::Entity as User;
