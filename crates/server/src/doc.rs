use crate::routes::{advisor, auth, course, health, instructor, staff, student, user};
use utoipa::OpenApi;

/// API Documentation
#[derive(OpenApi)]
#[openapi(
    paths(
        health::health,
        auth::login,
        user::list_users,
        user::get_user,
        user::create_user,
        user::update_user,
        user::delete_user,
        student::list_students,
        student::get_student,
        student::create_student,
        student::update_student,
        student::delete_student,
        student::enroll,
        student::unenroll,
        advisor::list_advisors,
        advisor::list_advisor_students,
        advisor::create_advisor,
        advisor::update_advisor,
        advisor::delete_advisor,
        instructor::list_instructors,
        instructor::get_instructor,
        instructor::list_instructor_courses,
        instructor::list_instructor_students,
        instructor::create_instructor,
        instructor::update_instructor,
        instructor::delete_instructor,
        staff::list_staff,
        staff::create_staff,
        staff::update_staff,
        staff::delete_staff,
        course::list_courses,
        course::create_course,
        course::update_course,
        course::delete_course
    ),
    tags(
        (name = "Health", description = "Service liveness"),
        (name = "Authentication", description = "Username and password login"),
        (name = "Users", description = "User accounts and their profiles"),
        (name = "Students", description = "Students and their enrollments"),
        (name = "Advisors", description = "Advisors and their advisees"),
        (name = "Instructors", description = "Instructors and the courses they teach"),
        (name = "Staff", description = "Administrative staff"),
        (name = "Courses", description = "Course catalogue"),
    ),
    info(
        title = "University Records API",
        version = "1.0.0",
        description = "Users, students, instructors, advisors, staff, courses, and enrollments",
        license(
            name = "MIT OR Apache-2.0",
        )
    )
)]
pub struct ApiDoc;

#[cfg(test)]
mod tests {
    use super::ApiDoc;
    use utoipa::OpenApi;

    #[test]
    fn documents_every_route_family() {
        let doc = ApiDoc::openapi();
        let paths = &doc.paths.paths;

        for path in [
            "/health",
            "/api/login",
            "/api/user/{id}",
            "/api/students/{id}/courses/{courseId}",
            "/api/instructors/{id}/students",
            "/api/advisors/{id}/students",
            "/api/staff/{id}",
            "/api/courses/{id}",
        ] {
            assert!(paths.contains_key(path), "missing {path}");
        }
    }
}
