//! A small campus used by the service tests.

use chrono::{DateTime, Duration, TimeZone, Utc};
use db::models::{
    attendance_record::{self, METHOD_FACE_RECOGNITION, METHOD_GPS, METHOD_QR_CODE, NewCheckIn},
    class_session, course, course_enrollment,
    profile::{self, NewProfile, ProfileRole},
};
use sea_orm::DatabaseConnection;

pub struct Campus {
    pub lecturer: profile::Model,
    pub course: course::Model,
    pub ama: profile::Model,
    pub kojo: profile::Model,
    pub sessions: Vec<class_session::Model>,
}

/// 2025-09-10 10:00 UTC.
pub fn now() -> DateTime<Utc> {
    Utc.with_ymd_and_hms(2025, 9, 10, 10, 0, 0).unwrap()
}

/// One lecturer teaching CS301 to Ama and Kojo.
///
/// Sessions run at 09:00 on Sep 8, 9 and 10 plus one on Sep 11 that has not
/// been held yet. Ama checks in to all three held sessions, Kojo only to the
/// first.
pub async fn campus(db: &DatabaseConnection) -> Campus {
    let lecturer = profile::Model::create(
        db,
        NewProfile {
            full_name: "Dr. Sarah Johnson",
            email: "sarah.johnson@uni.edu",
            student_number: None,
            phone: None,
            department: Some("Computer Science"),
            role: ProfileRole::Lecturer,
        },
    )
    .await
    .unwrap();
    let ama = profile::Model::create(
        db,
        NewProfile {
            full_name: "Ama Osei",
            email: "ama.osei@uni.edu",
            student_number: Some("UG/2023/001234"),
            phone: Some("+233 20 000 0001"),
            department: Some("Computer Science"),
            role: ProfileRole::Student,
        },
    )
    .await
    .unwrap();
    let kojo = profile::Model::create(
        db,
        NewProfile {
            full_name: "Kojo Mensah",
            email: "kojo.mensah@uni.edu",
            student_number: None,
            phone: None,
            department: Some("Computer Science"),
            role: ProfileRole::Student,
        },
    )
    .await
    .unwrap();

    let course = course::Model::create(db, "CS301", "Computer Networks", lecturer.id, Some("Room 101"))
        .await
        .unwrap();
    course_enrollment::Model::enroll(db, course.id, ama.id).await.unwrap();
    course_enrollment::Model::enroll(db, course.id, kojo.id).await.unwrap();

    let mut sessions = Vec::new();
    for day in 8..=11 {
        let starts_at = Utc.with_ymd_and_hms(2025, 9, day, 9, 0, 0).unwrap();
        let code = format!("CS301_{day}");
        sessions.push(
            class_session::Model::create(db, course.id, starts_at, Some("Room 101"), Some(&code))
                .await
                .unwrap(),
        );
    }

    let check_in = |session: &class_session::Model,
                    student: i64,
                    minutes: i64,
                    method: &'static str,
                    face: Option<f64>| NewCheckIn {
        session_id: session.id,
        student_id: student,
        check_in_time: session.starts_at + Duration::minutes(minutes),
        is_verified: method != METHOD_QR_CODE,
        face_confidence: face,
        verification_method: method,
    };
    for new in [
        check_in(&sessions[0], ama.id, 5, METHOD_GPS, None),
        check_in(&sessions[0], kojo.id, 10, METHOD_QR_CODE, None),
        check_in(&sessions[1], ama.id, 5, METHOD_GPS, None),
        check_in(&sessions[2], ama.id, 5, METHOD_FACE_RECOGNITION, Some(93.4)),
    ] {
        attendance_record::Model::create(db, new).await.unwrap();
    }

    Campus {
        lecturer,
        course,
        ama,
        kojo,
        sessions,
    }
}
