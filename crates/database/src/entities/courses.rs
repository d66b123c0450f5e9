use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};

#[derive(Clone, Debug, PartialEq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "courses")]
#[serde(rename_all = "camelCase")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,
    pub name: String,
    pub credits: i32, // GPA weight
    pub department: String,
    pub instructor_id: i32,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(
        belongs_to = "super::instructors::Entity",
        from = "Column::InstructorId",
        to = "super::instructors::Column::Id",
        on_delete = "Restrict"
    )]
    Instructor,
    #[sea_orm(has_many = "super::course_enrollments::Entity")]
    Enrollments,
}

impl Related<super::instructors::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Instructor.def()
    }
}

impl Related<super::course_enrollments::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Enrollments.def()
    }
}

// Many-to-many relationship with students
impl Related<super::students::Entity> for Entity {
    fn to() -> RelationDef {
        super::course_enrollments::Relation::Student.def()
    }

    fn via() -> Option<RelationDef> {
        Some(super::course_enrollments::Relation::Course.def().rev())
    }
}

impl ActiveModelBehavior for ActiveModel {}
