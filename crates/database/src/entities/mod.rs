pub mod advisors;
pub mod course_enrollments;
pub mod courses;
pub mod instructors;
pub mod staff;
pub mod students;
pub mod users;
