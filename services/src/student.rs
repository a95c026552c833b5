use std::collections::HashSet;

use chrono::{DateTime, Utc};
use db::models::{
    attendance_record, class_session,
    course::{self, Column as CourseCol},
    course_enrollment,
    profile::{self, ProfileRole},
};
use sea_orm::{ColumnTrait, DatabaseConnection, EntityTrait, QueryFilter, QueryOrder};
use serde::Serialize;
use store::stats::rate;

use crate::error::{ServiceError, ServiceResult};

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CourseAttendance {
    pub course_id: i64,
    pub code: String,
    pub name: String,
    pub sessions_held: usize,
    pub attended: usize,
    pub attendance_rate: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct StudentSummary {
    pub student: profile::Model,
    pub courses: Vec<CourseAttendance>,
    pub sessions_held: usize,
    pub attended: usize,
    pub missed: usize,
    pub attendance_rate: f64,
}

pub struct StudentService;

impl StudentService {
    pub async fn summary(db: &DatabaseConnection, student_id: i64) -> ServiceResult<StudentSummary> {
        Self::summary_at(db, student_id, Utc::now()).await
    }

    pub async fn summary_at(
        db: &DatabaseConnection,
        student_id: i64,
        now: DateTime<Utc>,
    ) -> ServiceResult<StudentSummary> {
        let student = profile::Entity::find_by_id(student_id)
            .one(db)
            .await?
            .filter(|p| p.role == ProfileRole::Student)
            .ok_or_else(|| ServiceError::NotFound(format!("student {student_id}")))?;

        let course_ids: Vec<i64> = course_enrollment::Model::for_student(db, student_id)
            .await?
            .into_iter()
            .map(|e| e.course_id)
            .collect();
        let courses = if course_ids.is_empty() {
            Vec::new()
        } else {
            course::Entity::find()
                .filter(CourseCol::Id.is_in(course_ids.clone()))
                .order_by_asc(CourseCol::Code)
                .all(db)
                .await?
        };

        let sessions: Vec<class_session::Model> = class_session::Model::for_courses(db, course_ids)
            .await?
            .into_iter()
            .filter(|s| s.starts_at <= now)
            .collect();
        let attended: HashSet<i64> =
            attendance_record::Model::for_sessions(db, sessions.iter().map(|s| s.id).collect())
                .await?
                .into_iter()
                .filter(|r| r.student_id == student_id)
                .map(|r| r.session_id)
                .collect();

        let per_course: Vec<CourseAttendance> = courses
            .into_iter()
            .map(|c| {
                let held: Vec<i64> = sessions
                    .iter()
                    .filter(|s| s.course_id == c.id)
                    .map(|s| s.id)
                    .collect();
                let present = held.iter().filter(|id| attended.contains(*id)).count();
                CourseAttendance {
                    course_id: c.id,
                    code: c.code,
                    name: c.name,
                    sessions_held: held.len(),
                    attended: present,
                    attendance_rate: rate(present, held.len()),
                }
            })
            .collect();

        let sessions_held: usize = per_course.iter().map(|c| c.sessions_held).sum();
        let attended: usize = per_course.iter().map(|c| c.attended).sum();

        Ok(StudentSummary {
            student,
            courses: per_course,
            sessions_held,
            attended,
            missed: sessions_held - attended,
            attendance_rate: rate(attended, sessions_held),
        })
    }
}
