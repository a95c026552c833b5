use chrono::{DateTime, Utc};
use sea_orm::entity::prelude::*;
use sea_orm::{ActiveModelTrait, ConnectionTrait, DbErr, QueryFilter, QueryOrder, Set};
use serde::{Deserialize, Serialize};

/// Raw method values stored in `verification_method`.
pub const METHOD_QR_CODE: &str = "qr_code";
pub const METHOD_FACE_RECOGNITION: &str = "face_recognition";
pub const METHOD_GPS: &str = "gps";

#[derive(Clone, Debug, PartialEq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "attendance_records")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i64,
    pub session_id: i64,
    pub student_id: i64,
    pub check_in_time: DateTime<Utc>,
    pub is_verified: bool,
    #[sea_orm(column_type = "Double", nullable)]
    pub face_confidence: Option<f64>,
    pub verification_method: String,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(
        belongs_to = "super::class_session::Entity",
        from = "Column::SessionId",
        to = "super::class_session::Column::Id"
    )]
    Session,
    #[sea_orm(
        belongs_to = "super::profile::Entity",
        from = "Column::StudentId",
        to = "super::profile::Column::Id"
    )]
    Student,
}

impl Related<super::class_session::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Session.def()
    }
}

impl Related<super::profile::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Student.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}

/// Fields for a new check-in row.
#[derive(Debug, Clone)]
pub struct NewCheckIn<'a> {
    pub session_id: i64,
    pub student_id: i64,
    pub check_in_time: DateTime<Utc>,
    pub is_verified: bool,
    pub face_confidence: Option<f64>,
    pub verification_method: &'a str,
}

impl Model {
    pub async fn create<C>(db: &C, new: NewCheckIn<'_>) -> Result<Self, DbErr>
    where
        C: ConnectionTrait,
    {
        ActiveModel {
            session_id: Set(new.session_id),
            student_id: Set(new.student_id),
            check_in_time: Set(new.check_in_time),
            is_verified: Set(new.is_verified),
            face_confidence: Set(new.face_confidence),
            verification_method: Set(new.verification_method.to_owned()),
            ..Default::default()
        }
        .insert(db)
        .await
    }

    /// Records for the given sessions, newest check-in first.
    pub async fn for_sessions<C>(db: &C, session_ids: Vec<i64>) -> Result<Vec<Self>, DbErr>
    where
        C: ConnectionTrait,
    {
        if session_ids.is_empty() {
            return Ok(Vec::new());
        }
        Entity::find()
            .filter(Column::SessionId.is_in(session_ids))
            .order_by_desc(Column::CheckInTime)
            .all(db)
            .await
    }
}
