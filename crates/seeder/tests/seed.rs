use database::{
    entities::{advisors, course_enrollments, courses, instructors, staff, students, users},
    services::{instructor::InstructorService, student::StudentService},
};
use migration::{Migrator, MigratorTrait};
use sea_orm::{ConnectOptions, Database, DatabaseConnection, EntityTrait, PaginatorTrait};

async fn setup() -> DatabaseConnection {
    let mut options = ConnectOptions::new("sqlite::memory:");
    options.max_connections(1).sqlx_logging(false);

    let db = Database::connect(options)
        .await
        .expect("Failed to open in-memory database");
    Migrator::up(&db, None).await.expect("Failed to migrate");
    db
}

async fn counts(db: &DatabaseConnection) -> [u64; 7] {
    [
        users::Entity::find().count(db).await.unwrap(),
        advisors::Entity::find().count(db).await.unwrap(),
        instructors::Entity::find().count(db).await.unwrap(),
        staff::Entity::find().count(db).await.unwrap(),
        courses::Entity::find().count(db).await.unwrap(),
        students::Entity::find().count(db).await.unwrap(),
        course_enrollments::Entity::find().count(db).await.unwrap(),
    ]
}

#[tokio::test]
async fn seeds_the_fixture_graph() {
    let db = setup().await;
    seeder::seed(&db).await.expect("Failed to seed");

    assert_eq!(counts(&db).await, [7, 1, 2, 2, 3, 2, 4]);

    let advisor_user = users::Entity::find_by_id(30).one(&db).await.unwrap().unwrap();
    assert_eq!(advisor_user.username, "jsmith");
    assert_eq!(advisor_user.email, "jsmith@university.edu");
}

#[tokio::test]
async fn reseeding_replaces_rather_than_duplicates() {
    let db = setup().await;
    seeder::seed(&db).await.expect("Failed to seed");
    let first = users::Entity::find().all(&db).await.unwrap();

    seeder::seed(&db).await.expect("Failed to reseed");
    let second = users::Entity::find().all(&db).await.unwrap();

    assert_eq!(first, second);
    assert_eq!(counts(&db).await, [7, 1, 2, 2, 3, 2, 4]);
}

#[tokio::test]
async fn seeded_student_gpa_is_three_point_eight() {
    let db = setup().await;
    seeder::seed(&db).await.expect("Failed to seed");

    let alice = StudentService::find_by_user_id(&db, 1)
        .await
        .unwrap()
        .expect("Alice should be seeded");

    assert_eq!(alice.user.name, "Alice Johnson");
    assert_eq!(alice.gpa(), 3.8);
}

#[tokio::test]
async fn prof_doe_teaches_both_seeded_students_once_each() {
    let db = setup().await;
    seeder::seed(&db).await.expect("Failed to seed");

    let students = InstructorService::students_of(&db, 10)
        .await
        .unwrap()
        .expect("Prof. Doe should be seeded");

    let names: Vec<&str> = students.iter().map(|s| s.user.name.as_str()).collect();
    assert_eq!(names, vec!["Alice Johnson", "Bob Wilson"]);
}

#[tokio::test]
async fn wipe_empties_every_table() {
    let db = setup().await;
    seeder::seed(&db).await.expect("Failed to seed");

    seeder::wipe(&db).await.expect("Failed to wipe");

    assert_eq!(counts(&db).await, [0; 7]);
}
