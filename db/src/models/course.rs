use chrono::{DateTime, Utc};
use sea_orm::entity::prelude::*;
use sea_orm::{ActiveModelTrait, ConnectionTrait, DbErr, QueryFilter, QueryOrder, Set};
use serde::{Deserialize, Serialize};

#[derive(Clone, Debug, PartialEq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "courses")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i64,
    /// Course code, e.g. `CS301`.
    #[sea_orm(unique)]
    pub code: String,
    pub name: String,
    pub lecturer_id: i64,
    pub room: Option<String>,
    pub created_at: DateTime<Utc>,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(
        belongs_to = "super::profile::Entity",
        from = "Column::LecturerId",
        to = "super::profile::Column::Id"
    )]
    Lecturer,
    #[sea_orm(has_many = "super::class_session::Entity")]
    Sessions,
    #[sea_orm(has_many = "super::course_enrollment::Entity")]
    Enrollments,
}

impl Related<super::profile::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Lecturer.def()
    }
}

impl Related<super::class_session::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Sessions.def()
    }
}

impl Related<super::course_enrollment::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Enrollments.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}

impl Model {
    pub async fn create<C>(
        db: &C,
        code: &str,
        name: &str,
        lecturer_id: i64,
        room: Option<&str>,
    ) -> Result<Self, DbErr>
    where
        C: ConnectionTrait,
    {
        ActiveModel {
            code: Set(code.to_owned()),
            name: Set(name.to_owned()),
            lecturer_id: Set(lecturer_id),
            room: Set(room.map(str::to_owned)),
            created_at: Set(Utc::now()),
            ..Default::default()
        }
        .insert(db)
        .await
    }

    /// Courses taught by `lecturer_id`, ordered by code.
    pub async fn taught_by<C>(db: &C, lecturer_id: i64) -> Result<Vec<Self>, DbErr>
    where
        C: ConnectionTrait,
    {
        Entity::find()
            .filter(Column::LecturerId.eq(lecturer_id))
            .order_by_asc(Column::Code)
            .all(db)
            .await
    }

    /// `"Computer Networks - CS301"`
    pub fn title(&self) -> String {
        format!("{} - {}", self.name, self.code)
    }
}
