use chrono::{DateTime, Utc};
use sea_orm::entity::prelude::*;
use sea_orm::{ActiveModelTrait, ConnectionTrait, DbErr, QueryFilter, QueryOrder, Set};
use serde::{Deserialize, Serialize};

/// One scheduled meeting of a course.
#[derive(Clone, Debug, PartialEq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "class_sessions")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i64,
    pub course_id: i64,
    pub starts_at: DateTime<Utc>,
    pub room: Option<String>,
    pub qr_code: Option<String>,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(
        belongs_to = "super::course::Entity",
        from = "Column::CourseId",
        to = "super::course::Column::Id"
    )]
    Course,
    #[sea_orm(has_many = "super::attendance_record::Entity")]
    Records,
}

impl Related<super::course::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Course.def()
    }
}

impl Related<super::attendance_record::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Records.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}

impl Model {
    pub async fn create<C>(
        db: &C,
        course_id: i64,
        starts_at: DateTime<Utc>,
        room: Option<&str>,
        qr_code: Option<&str>,
    ) -> Result<Self, DbErr>
    where
        C: ConnectionTrait,
    {
        ActiveModel {
            course_id: Set(course_id),
            starts_at: Set(starts_at),
            room: Set(room.map(str::to_owned)),
            qr_code: Set(qr_code.map(str::to_owned)),
            ..Default::default()
        }
        .insert(db)
        .await
    }

    /// Sessions of the given courses, oldest first.
    pub async fn for_courses<C>(db: &C, course_ids: Vec<i64>) -> Result<Vec<Self>, DbErr>
    where
        C: ConnectionTrait,
    {
        if course_ids.is_empty() {
            return Ok(Vec::new());
        }
        Entity::find()
            .filter(Column::CourseId.is_in(course_ids))
            .order_by_asc(Column::StartsAt)
            .all(db)
            .await
    }
}
