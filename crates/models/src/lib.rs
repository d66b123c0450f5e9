pub mod gpa;
pub mod role;
