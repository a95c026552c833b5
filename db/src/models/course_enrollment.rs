use chrono::{DateTime, Utc};
use sea_orm::entity::prelude::*;
use sea_orm::{ActiveModelTrait, ConnectionTrait, DbErr, QueryFilter, Set};
use serde::{Deserialize, Serialize};

#[derive(Clone, Debug, PartialEq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "course_enrollments")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i64,
    pub course_id: i64,
    pub student_id: i64,
    pub enrolled_at: DateTime<Utc>,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(
        belongs_to = "super::course::Entity",
        from = "Column::CourseId",
        to = "super::course::Column::Id"
    )]
    Course,
    #[sea_orm(
        belongs_to = "super::profile::Entity",
        from = "Column::StudentId",
        to = "super::profile::Column::Id"
    )]
    Student,
}

impl Related<super::course::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Course.def()
    }
}

impl Related<super::profile::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Student.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}

impl Model {
    pub async fn enroll<C>(db: &C, course_id: i64, student_id: i64) -> Result<Self, DbErr>
    where
        C: ConnectionTrait,
    {
        ActiveModel {
            course_id: Set(course_id),
            student_id: Set(student_id),
            enrolled_at: Set(Utc::now()),
            ..Default::default()
        }
        .insert(db)
        .await
    }

    pub async fn for_courses<C>(db: &C, course_ids: Vec<i64>) -> Result<Vec<Self>, DbErr>
    where
        C: ConnectionTrait,
    {
        if course_ids.is_empty() {
            return Ok(Vec::new());
        }
        Entity::find()
            .filter(Column::CourseId.is_in(course_ids))
            .all(db)
            .await
    }

    pub async fn for_student<C>(db: &C, student_id: i64) -> Result<Vec<Self>, DbErr>
    where
        C: ConnectionTrait,
    {
        Entity::find()
            .filter(Column::StudentId.eq(student_id))
            .all(db)
            .await
    }
}
