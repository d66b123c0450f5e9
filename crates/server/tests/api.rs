mod common;

use axum::http::{Method, StatusCode};
use common::{get, seeded_app, send};
use serde_json::json;

#[tokio::test]
async fn health_reports_ok() {
    let app = seeded_app().await;

    let (status, body) = get(&app, "/health").await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body, json!("OK"));
}

#[tokio::test]
async fn openapi_document_is_served() {
    let app = seeded_app().await;

    let (status, body) = get(&app, "/api-docs/openapi.json").await;

    assert_eq!(status, StatusCode::OK);
    assert!(body["paths"]["/api/login"].is_object());
}

#[tokio::test]
async fn every_documented_operation_is_routed() {
    let app = seeded_app().await;
    let (_, doc) = get(&app, "/api-docs/openapi.json").await;
    let paths = doc["paths"].as_object().expect("paths object");

    for (template, item) in paths {
        let uri = template
            .split('/')
            .map(|segment| if segment.starts_with('{') { "999" } else { segment })
            .collect::<Vec<_>>()
            .join("/");

        let methods = item.as_object().expect("path item").keys();
        for method in methods.filter(|key| ["get", "post", "put", "delete"].contains(&key.as_str())) {
            let method = Method::from_bytes(method.to_uppercase().as_bytes()).expect("method");
            let body = matches!(method, Method::POST | Method::PUT).then(|| json!({}));

            let (status, body) = send(&app, method.clone(), &uri, body).await;

            assert_ne!(status, StatusCode::METHOD_NOT_ALLOWED, "{method} {template}");
            if status == StatusCode::NOT_FOUND {
                assert!(body["error"].is_string(), "{method} {template} is not routed");
            }
        }
    }
}

#[tokio::test]
async fn login_returns_user_without_password() {
    let app = seeded_app().await;

    let (status, body) = send(
        &app,
        Method::POST,
        "/api/login",
        Some(json!({"username": "jdoe", "password": "password123"})),
    )
    .await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(
        body,
        json!({
            "id": 10,
            "name": "Prof. John Doe",
            "role": "instructor",
            "email": "jdoe@university.edu"
        })
    );
}

#[tokio::test]
async fn login_rejects_wrong_password_and_unknown_user() {
    let app = seeded_app().await;

    for credentials in [
        json!({"username": "jdoe", "password": "wrong"}),
        json!({"username": "nobody", "password": "password123"}),
    ] {
        let (status, body) = send(&app, Method::POST, "/api/login", Some(credentials)).await;

        assert_eq!(status, StatusCode::UNAUTHORIZED);
        assert_eq!(body, json!({"error": "Invalid credentials"}));
    }
}

#[tokio::test]
async fn malformed_login_body_is_a_bad_request() {
    let app = seeded_app().await;

    let (status, body) = send(&app, Method::POST, "/api/login", Some(json!({"username": 1}))).await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert!(body["error"].is_string());
}

#[tokio::test]
async fn user_list_never_exposes_passwords() {
    let app = seeded_app().await;

    let (status, body) = get(&app, "/api/users").await;

    assert_eq!(status, StatusCode::OK);
    let users = body.as_array().expect("array");
    assert_eq!(users.len(), 7);
    for user in users {
        assert!(user.get("password").is_none());
    }
}

#[tokio::test]
async fn user_profile_has_all_four_keys() {
    let app = seeded_app().await;

    let (status, body) = get(&app, "/api/user/30").await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["username"], "jsmith");
    assert!(body.get("password").is_none());
    assert!(body["Student"].is_null());
    assert!(body["Instructor"].is_null());
    assert!(body["Staff"].is_null());
    assert_eq!(body["Advisor"]["department"], "Computer Science");
    assert_eq!(body["Advisor"]["students"].as_array().map(Vec::len), Some(2));
}

#[tokio::test]
async fn missing_user_profile_is_not_found() {
    let app = seeded_app().await;

    let (status, body) = get(&app, "/api/user/999").await;

    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(body, json!({"error": "User not found"}));
}

#[tokio::test]
async fn malformed_path_id_is_a_bad_request() {
    let app = seeded_app().await;

    let (status, body) = get(&app, "/api/user/abc").await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert!(body["error"].is_string());
}

#[tokio::test]
async fn student_detail_recomputes_gpa_by_user_id() {
    let app = seeded_app().await;

    let (status, body) = get(&app, "/api/students/1").await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["userId"], 1);
    assert_eq!(body["gpa"], json!(3.8));
    assert_eq!(body["user"]["name"], "Alice Johnson");
    assert_eq!(body["enrollments"].as_array().map(Vec::len), Some(2));
    assert_eq!(body["enrollments"][0]["course"]["name"], "Advanced Database Systems");
}

#[tokio::test]
async fn student_list_keeps_stored_gpa_and_advisor() {
    let app = seeded_app().await;

    let (status, body) = get(&app, "/api/students").await;

    assert_eq!(status, StatusCode::OK);
    let bob = body
        .as_array()
        .and_then(|students| students.iter().find(|s| s["userId"] == 2))
        .expect("Bob is listed");
    assert_eq!(bob["gpa"], json!(3.5));
    assert_eq!(bob["advisor"]["user"]["username"], "jsmith");
}

#[tokio::test]
async fn creating_a_student_nests_the_profile() {
    let app = seeded_app().await;

    let (status, body) = send(
        &app,
        Method::POST,
        "/api/students",
        Some(json!({
            "name": "Carol Diaz",
            "username": "cdiaz",
            "password": "secret",
            "email": "cdiaz@university.edu",
            "major": "Mathematics",
            "enrollmentYear": 2024,
            "advisorId": 1
        })),
    )
    .await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["role"], "student");
    assert!(body.get("password").is_none());
    assert_eq!(body["Student"]["major"], "Mathematics");
    assert_eq!(body["Student"]["advisorId"], 1);

    let user_id = body["id"].as_i64().expect("id");
    let (status, _) = get(&app, &format!("/api/students/{user_id}")).await;
    assert_eq!(status, StatusCode::OK);
}

#[tokio::test]
async fn duplicate_username_conflicts() {
    let app = seeded_app().await;

    let (status, body) = send(
        &app,
        Method::POST,
        "/api/users",
        Some(json!({
            "name": "Another Alice",
            "username": "ajohnson",
            "password": "x",
            "email": "other@university.edu",
            "role": "staff"
        })),
    )
    .await;

    assert_eq!(status, StatusCode::CONFLICT);
    assert_eq!(body, json!({"error": "Unique constraint violated"}));
}

#[tokio::test]
async fn updating_a_student_changes_both_rows() {
    let app = seeded_app().await;

    let (status, body) = send(
        &app,
        Method::PUT,
        "/api/students/2",
        Some(json!({"major": "Physics", "email": "bob@university.edu"})),
    )
    .await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["major"], "Physics");
    assert_eq!(body["user"]["email"], "bob@university.edu");
    assert_eq!(body["user"]["username"], "bwilson");
}

#[tokio::test]
async fn null_advisor_clears_it_and_missing_advisor_keeps_it() {
    let app = seeded_app().await;

    let (status, body) = send(
        &app,
        Method::PUT,
        "/api/students/1",
        Some(json!({"major": "Statistics"})),
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["advisorId"], 1);

    let (status, body) = send(
        &app,
        Method::PUT,
        "/api/students/1",
        Some(json!({"advisorId": null})),
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    assert!(body["advisorId"].is_null());
    assert_eq!(body["major"], "Statistics");

    let (_, body) = get(&app, "/api/advisors/1/students").await;
    assert_eq!(body.as_array().map(Vec::len), Some(1));
}

#[tokio::test]
async fn deleting_missing_rows_is_not_found() {
    let app = seeded_app().await;

    for (uri, message) in [
        ("/api/students/999", "Student not found"),
        ("/api/advisors/999", "Advisor not found"),
        ("/api/instructors/999", "Instructor not found"),
        ("/api/staff/999", "Staff not found"),
        ("/api/courses/999", "Course not found"),
        ("/api/users/999", "User not found"),
    ] {
        let (status, body) = send(&app, Method::DELETE, uri, None).await;

        assert_eq!(status, StatusCode::NOT_FOUND, "{uri}");
        assert_eq!(body, json!({"error": message}));
    }
}

#[tokio::test]
async fn deleting_a_student_removes_its_user() {
    let app = seeded_app().await;

    let (status, body) = send(&app, Method::DELETE, "/api/students/1", None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body, json!({"message": "Student deleted successfully"}));

    let (status, _) = get(&app, "/api/user/1").await;
    assert_eq!(status, StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn enrollment_lifecycle() {
    let app = seeded_app().await;

    let (status, body) = send(
        &app,
        Method::POST,
        "/api/students/1/courses",
        Some(json!({"courseId": 3})),
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["studentId"], 1);
    assert_eq!(body["courseId"], 3);
    assert!(body["grade"].is_null());

    let (status, body) = send(
        &app,
        Method::POST,
        "/api/students/1/courses",
        Some(json!({"courseId": 3})),
    )
    .await;
    assert_eq!(status, StatusCode::CONFLICT);
    assert_eq!(body, json!({"error": "Unique constraint violated"}));

    let (status, body) = send(&app, Method::DELETE, "/api/students/1/courses/3", None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body, json!({"message": "Enrollment deleted successfully"}));

    let (status, body) = send(&app, Method::DELETE, "/api/students/1/courses/3", None).await;
    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(body, json!({"error": "Enrollment not found"}));
}

#[tokio::test]
async fn instructor_students_are_listed_once_each() {
    let app = seeded_app().await;

    // Alice now takes two of Prof. Doe's courses
    let (status, _) = send(
        &app,
        Method::POST,
        "/api/students/1/courses",
        Some(json!({"courseId": 3})),
    )
    .await;
    assert_eq!(status, StatusCode::OK);

    let (status, body) = get(&app, "/api/instructors/10/students").await;

    assert_eq!(status, StatusCode::OK);
    let mut user_ids: Vec<i64> = body
        .as_array()
        .expect("array")
        .iter()
        .filter_map(|student| student["userId"].as_i64())
        .collect();
    user_ids.sort_unstable();
    assert_eq!(user_ids, [1, 2]);
    assert!(body[0]["courseName"].is_string());
}

#[tokio::test]
async fn instructor_routes_use_their_documented_ids() {
    let app = seeded_app().await;

    let (status, body) = get(&app, "/api/instructors/11").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["id"], 2);
    assert_eq!(body["courses"][0]["name"], "Software Engineering Principles");
    assert_eq!(body["courses"][0]["enrollments"].as_array().map(Vec::len), Some(2));

    let (status, body) = get(&app, "/api/instructors/1/courses").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body.as_array().map(Vec::len), Some(2));

    let (status, body) = get(&app, "/api/instructors/1/students").await;
    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(body, json!({"error": "Instructor not found"}));
}

#[tokio::test]
async fn instructor_with_courses_cannot_be_deleted() {
    let app = seeded_app().await;

    let (status, body) = send(&app, Method::DELETE, "/api/instructors/1", None).await;

    assert_eq!(status, StatusCode::CONFLICT);
    assert_eq!(body, json!({"error": "Foreign key constraint violated"}));

    let (status, _) = get(&app, "/api/instructors/10").await;
    assert_eq!(status, StatusCode::OK);
}

#[tokio::test]
async fn instructor_without_courses_can_be_deleted() {
    let app = seeded_app().await;

    let (status, body) = send(
        &app,
        Method::POST,
        "/api/instructors",
        Some(json!({
            "name": "Dr. Ken Adams",
            "username": "kadams",
            "password": "secret",
            "email": "kadams@university.edu",
            "specialization": "Compilers",
            "officeHours": "Fri 10-12am"
        })),
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    let instructor_id = body["Instructor"]["id"].as_i64().expect("instructor id");

    let (status, body) =
        send(&app, Method::DELETE, &format!("/api/instructors/{instructor_id}"), None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body, json!({"message": "Instructor deleted successfully"}));
}

#[tokio::test]
async fn advisor_students_are_listed_with_enrollments() {
    let app = seeded_app().await;

    let (status, body) = get(&app, "/api/advisors/1/students").await;

    assert_eq!(status, StatusCode::OK);
    let students = body.as_array().expect("array");
    assert_eq!(students.len(), 2);
    assert!(students.iter().all(|s| s["enrollments"].as_array().map(Vec::len) == Some(2)));
}

#[tokio::test]
async fn courses_are_listed_with_instructor_users() {
    let app = seeded_app().await;

    let (status, body) = get(&app, "/api/courses").await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body.as_array().map(Vec::len), Some(3));
    assert_eq!(body[0]["instructor"]["user"]["name"], "Prof. John Doe");
}

#[tokio::test]
async fn course_with_unknown_instructor_conflicts() {
    let app = seeded_app().await;

    let (status, body) = send(
        &app,
        Method::POST,
        "/api/courses",
        Some(json!({
            "name": "Compilers",
            "credits": 4,
            "department": "Computer Science",
            "instructorId": 99
        })),
    )
    .await;

    assert_eq!(status, StatusCode::CONFLICT);
    assert_eq!(body, json!({"error": "Foreign key constraint violated"}));
}

#[tokio::test]
async fn course_update_returns_course_with_instructor() {
    let app = seeded_app().await;

    let (status, body) = send(
        &app,
        Method::PUT,
        "/api/courses/3",
        Some(json!({"credits": 3, "instructorId": 2})),
    )
    .await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["name"], "Data Structures");
    assert_eq!(body["credits"], 3);
    assert_eq!(body["instructor"]["id"], 2);
}

#[tokio::test]
async fn staff_crud() {
    let app = seeded_app().await;

    let (status, body) = send(
        &app,
        Method::POST,
        "/api/staff",
        Some(json!({
            "name": "Dana Lee",
            "username": "dlee",
            "password": "secret",
            "email": "dlee@university.edu",
            "department": "Admissions"
        })),
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["role"], "staff");
    let staff_id = body["Staff"]["id"].as_i64().expect("staff id");

    let (status, body) = send(
        &app,
        Method::PUT,
        &format!("/api/staff/{staff_id}"),
        Some(json!({"department": "Financial Aid"})),
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["department"], "Financial Aid");
    assert_eq!(body["user"]["username"], "dlee");

    let (_, body) = get(&app, "/api/staff").await;
    assert_eq!(body.as_array().map(Vec::len), Some(3));

    let (status, body) = send(&app, Method::DELETE, &format!("/api/staff/{staff_id}"), None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body, json!({"message": "Staff deleted successfully"}));
}
