use sea_orm_migration::prelude::*;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        // Index on students.advisor_id for the advisor roster
        manager
            .create_index(
                Index::create()
                    .name("idx_students_advisor_id")
                    .table(Students::Table)
                    .col(Students::AdvisorId)
                    .to_owned(),
            )
            .await?;

        // Index on courses.instructor_id for per-instructor course lists
        manager
            .create_index(
                Index::create()
                    .name("idx_courses_instructor_id")
                    .table(Courses::Table)
                    .col(Courses::InstructorId)
                    .to_owned(),
            )
            .await?;

        // The unique (student_id, course_id) index already covers lookups by student
        manager
            .create_index(
                Index::create()
                    .name("idx_course_enrollments_course_id")
                    .table(CourseEnrollments::Table)
                    .col(CourseEnrollments::CourseId)
                    .to_owned(),
            )
            .await?;

        Ok(())
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        // Drop indexes in reverse order
        manager
            .drop_index(
                Index::drop()
                    .name("idx_course_enrollments_course_id")
                    .table(CourseEnrollments::Table)
                    .to_owned(),
            )
            .await?;

        manager
            .drop_index(
                Index::drop()
                    .name("idx_courses_instructor_id")
                    .table(Courses::Table)
                    .to_owned(),
            )
            .await?;

        manager
            .drop_index(
                Index::drop()
                    .name("idx_students_advisor_id")
                    .table(Students::Table)
                    .to_owned(),
            )
            .await?;

        Ok(())
    }
}

#[derive(Iden)]
enum Students {
    Table,
    AdvisorId,
}

#[derive(Iden)]
enum Courses {
    Table,
    InstructorId,
}

#[derive(Iden)]
enum CourseEnrollments {
    Table,
    CourseId,
}
