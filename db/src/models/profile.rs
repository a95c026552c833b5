use chrono::{DateTime, Utc};
use sea_orm::entity::prelude::*;
use sea_orm::{ActiveModelTrait, ConnectionTrait, DbErr, QueryFilter, QueryOrder, Set};
use serde::{Deserialize, Serialize};
use strum::{Display, EnumString};

/// A person on campus: student or lecturer.
#[derive(Clone, Debug, PartialEq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "profiles")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i64,
    pub full_name: String,
    #[sea_orm(unique)]
    pub email: String,
    /// Institution number (e.g. `UG/2023/001234`). `None` for staff.
    pub student_number: Option<String>,
    pub phone: Option<String>,
    pub department: Option<String>,
    pub role: ProfileRole,
    pub created_at: DateTime<Utc>,
}

#[derive(
    Debug, Clone, Copy, PartialEq, Eq, EnumIter, DeriveActiveEnum, Display, EnumString, Serialize, Deserialize,
)]
#[serde(rename_all = "snake_case")]
#[sea_orm(rs_type = "String", db_type = "String(StringLen::N(16))")]
#[strum(serialize_all = "lowercase", ascii_case_insensitive)]
pub enum ProfileRole {
    #[sea_orm(string_value = "student")]
    Student,

    #[sea_orm(string_value = "lecturer")]
    Lecturer,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(has_many = "super::course::Entity")]
    Courses,
    #[sea_orm(has_many = "super::course_enrollment::Entity")]
    Enrollments,
    #[sea_orm(has_many = "super::attendance_record::Entity")]
    AttendanceRecords,
}

impl Related<super::course::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Courses.def()
    }
}

impl Related<super::course_enrollment::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Enrollments.def()
    }
}

impl Related<super::attendance_record::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::AttendanceRecords.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}

/// Fields for a new profile row.
#[derive(Debug, Clone)]
pub struct NewProfile<'a> {
    pub full_name: &'a str,
    pub email: &'a str,
    pub student_number: Option<&'a str>,
    pub phone: Option<&'a str>,
    pub department: Option<&'a str>,
    pub role: ProfileRole,
}

impl Model {
    pub async fn create<C>(db: &C, new: NewProfile<'_>) -> Result<Self, DbErr>
    where
        C: ConnectionTrait,
    {
        ActiveModel {
            full_name: Set(new.full_name.to_owned()),
            email: Set(new.email.to_owned()),
            student_number: Set(new.student_number.map(str::to_owned)),
            phone: Set(new.phone.map(str::to_owned)),
            department: Set(new.department.map(str::to_owned)),
            role: Set(new.role),
            created_at: Set(Utc::now()),
            ..Default::default()
        }
        .insert(db)
        .await
    }

    /// Profiles with the given ids, ordered by name. Unknown ids are skipped.
    pub async fn find_by_ids<C>(db: &C, ids: Vec<i64>) -> Result<Vec<Self>, DbErr>
    where
        C: ConnectionTrait,
    {
        if ids.is_empty() {
            return Ok(Vec::new());
        }
        Entity::find()
            .filter(Column::Id.is_in(ids))
            .order_by_asc(Column::FullName)
            .all(db)
            .await
    }

    /// The institution number when present, otherwise the row id.
    pub fn display_number(&self) -> String {
        self.student_number
            .clone()
            .unwrap_or_else(|| self.id.to_string())
    }
}
