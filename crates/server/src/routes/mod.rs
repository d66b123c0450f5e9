pub mod advisor;
pub mod auth;
pub mod course;
pub mod health;
pub mod instructor;
pub mod staff;
pub mod student;
pub mod user;

use axum::{
    Router,
    routing::{delete, get, post, put},
};

use crate::state::AppState;

/// Every API route, without documentation or middleware
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/health", get(health::health))
        .route("/api/login", post(auth::login))
        .route("/api/users", get(user::list_users).post(user::create_user))
        .route(
            "/api/users/{id}",
            put(user::update_user).delete(user::delete_user),
        )
        .route("/api/user/{id}", get(user::get_user))
        .route(
            "/api/students",
            get(student::list_students).post(student::create_student),
        )
        .route(
            "/api/students/{id}",
            get(student::get_student)
                .put(student::update_student)
                .delete(student::delete_student),
        )
        .route("/api/students/{id}/courses", post(student::enroll))
        .route(
            "/api/students/{id}/courses/{courseId}",
            delete(student::unenroll),
        )
        .route(
            "/api/advisors",
            get(advisor::list_advisors).post(advisor::create_advisor),
        )
        .route(
            "/api/advisors/{id}",
            put(advisor::update_advisor).delete(advisor::delete_advisor),
        )
        .route(
            "/api/advisors/{id}/students",
            get(advisor::list_advisor_students),
        )
        .route(
            "/api/instructors",
            get(instructor::list_instructors).post(instructor::create_instructor),
        )
        .route(
            "/api/instructors/{id}",
            get(instructor::get_instructor)
                .put(instructor::update_instructor)
                .delete(instructor::delete_instructor),
        )
        .route(
            "/api/instructors/{id}/courses",
            get(instructor::list_instructor_courses),
        )
        .route(
            "/api/instructors/{id}/students",
            get(instructor::list_instructor_students),
        )
        .route("/api/staff", get(staff::list_staff).post(staff::create_staff))
        .route(
            "/api/staff/{id}",
            put(staff::update_staff).delete(staff::delete_staff),
        )
        .route(
            "/api/courses",
            get(course::list_courses).post(course::create_course),
        )
        .route(
            "/api/courses/{id}",
            put(course::update_course).delete(course::delete_course),
        )
}
