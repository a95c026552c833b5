//! Everything the lecturer portal shows for one lecturer: their courses,
//! the students enrolled in them and how often each student turned up.

use std::collections::{BTreeMap, HashMap, HashSet};

use chrono::{DateTime, Utc};
use db::models::{
    attendance_record, class_session, course, course_enrollment,
    profile::{self, ProfileRole},
};
use sea_orm::{DatabaseConnection, EntityTrait};
use serde::Serialize;
use store::stats::rate;

use crate::error::{ServiceError, ServiceResult};

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct StudentAttendanceRow {
    pub student_id: i64,
    /// Institution number, or the row id when the student has none.
    pub student_number: String,
    pub name: String,
    pub email: String,
    pub phone: Option<String>,
    /// Codes of this lecturer's courses the student is enrolled in.
    pub courses: Vec<String>,
    pub sessions_held: usize,
    pub sessions_attended: usize,
    pub attendance_rate: f64,
    pub last_check_in: Option<DateTime<Utc>>,
    pub present_today: bool,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct LecturerOverview {
    pub lecturer: profile::Model,
    pub courses: Vec<course::Model>,
    /// Sessions that started at or before `generated_at`.
    pub sessions_held: usize,
    pub students: Vec<StudentAttendanceRow>,
    pub present_today: usize,
    pub today_rate: f64,
    pub average_attendance: f64,
    pub generated_at: DateTime<Utc>,
}

impl LecturerOverview {
    pub fn course_titles(&self) -> Vec<String> {
        self.courses.iter().map(course::Model::title).collect()
    }
}

pub struct LecturerService;

impl LecturerService {
    pub async fn overview(db: &DatabaseConnection, lecturer_id: i64) -> ServiceResult<LecturerOverview> {
        Self::overview_at(db, lecturer_id, Utc::now()).await
    }

    /// Builds the overview as seen at `now`. Sessions after `now` are not yet held.
    pub async fn overview_at(
        db: &DatabaseConnection,
        lecturer_id: i64,
        now: DateTime<Utc>,
    ) -> ServiceResult<LecturerOverview> {
        let lecturer = profile::Entity::find_by_id(lecturer_id)
            .one(db)
            .await?
            .filter(|p| p.role == ProfileRole::Lecturer)
            .ok_or_else(|| ServiceError::NotFound(format!("lecturer {lecturer_id}")))?;

        let courses = course::Model::taught_by(db, lecturer_id).await?;
        let course_ids: Vec<i64> = courses.iter().map(|c| c.id).collect();

        let sessions: Vec<class_session::Model> = class_session::Model::for_courses(db, course_ids.clone())
            .await?
            .into_iter()
            .filter(|s| s.starts_at <= now)
            .collect();
        let enrollments = course_enrollment::Model::for_courses(db, course_ids).await?;

        let mut student_ids: Vec<i64> = enrollments.iter().map(|e| e.student_id).collect();
        student_ids.sort_unstable();
        student_ids.dedup();
        let profiles = profile::Model::find_by_ids(db, student_ids).await?;

        let records = attendance_record::Model::for_sessions(db, sessions.iter().map(|s| s.id).collect()).await?;

        tracing::debug!(
            lecturer_id,
            courses = courses.len(),
            sessions = sessions.len(),
            students = profiles.len(),
            records = records.len(),
            "lecturer overview loaded"
        );

        let students = student_rows(&courses, &sessions, &enrollments, &profiles, &records, now);

        let present_today = students.iter().filter(|s| s.present_today).count();
        let today_rate = rate(present_today, students.len());
        let average_attendance = if students.is_empty() {
            0.0
        } else {
            let sum: f64 = students
                .iter()
                .map(|s| raw_percent(s.sessions_attended, s.sessions_held))
                .sum();
            round1(sum / students.len() as f64)
        };

        Ok(LecturerOverview {
            lecturer,
            courses,
            sessions_held: sessions.len(),
            students,
            present_today,
            today_rate,
            average_attendance,
            generated_at: now,
        })
    }
}

fn student_rows(
    courses: &[course::Model],
    sessions: &[class_session::Model],
    enrollments: &[course_enrollment::Model],
    profiles: &[profile::Model],
    records: &[attendance_record::Model],
    now: DateTime<Utc>,
) -> Vec<StudentAttendanceRow> {
    let codes: HashMap<i64, &str> = courses.iter().map(|c| (c.id, c.code.as_str())).collect();
    let session_course: HashMap<i64, i64> = sessions.iter().map(|s| (s.id, s.course_id)).collect();

    let mut held_per_course: HashMap<i64, usize> = HashMap::new();
    for s in sessions {
        *held_per_course.entry(s.course_id).or_default() += 1;
    }

    let mut enrolled: HashMap<i64, Vec<i64>> = HashMap::new();
    for e in enrollments {
        enrolled.entry(e.student_id).or_default().push(e.course_id);
    }

    // student -> (sessions attended, latest check-in)
    let mut attended: BTreeMap<i64, (HashSet<i64>, Option<DateTime<Utc>>)> = BTreeMap::new();
    for r in records {
        let entry = attended.entry(r.student_id).or_default();
        let counts = enrolled
            .get(&r.student_id)
            .zip(session_course.get(&r.session_id))
            .is_some_and(|(courses, course)| courses.contains(course));
        if counts {
            entry.0.insert(r.session_id);
        }
        if entry.1.is_none_or(|last| r.check_in_time > last) {
            entry.1 = Some(r.check_in_time);
        }
    }

    let today = now.date_naive();
    profiles
        .iter()
        .map(|p| {
            let course_ids = enrolled.get(&p.id).cloned().unwrap_or_default();
            let held = course_ids
                .iter()
                .map(|c| held_per_course.get(c).copied().unwrap_or(0))
                .sum();
            let (sessions_attended, last_check_in) = attended
                .get(&p.id)
                .map(|(set, last)| (set.len(), *last))
                .unwrap_or((0, None));

            let mut courses: Vec<String> = course_ids
                .iter()
                .filter_map(|c| codes.get(c).map(|code| code.to_string()))
                .collect();
            courses.sort();

            StudentAttendanceRow {
                student_id: p.id,
                student_number: p.display_number(),
                name: p.full_name.clone(),
                email: p.email.clone(),
                phone: p.phone.clone(),
                courses,
                sessions_held: held,
                sessions_attended,
                attendance_rate: rate(sessions_attended, held),
                last_check_in,
                present_today: last_check_in.is_some_and(|t| t.date_naive() == today),
            }
        })
        .collect()
}

fn raw_percent(part: usize, whole: usize) -> f64 {
    if whole == 0 {
        return 0.0;
    }
    part as f64 / whole as f64 * 100.0
}

fn round1(v: f64) -> f64 {
    (v * 10.0).round() / 10.0
}
