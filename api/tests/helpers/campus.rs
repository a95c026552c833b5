use chrono::{Duration, Utc};
use db::models::{
    attendance_record::{self, METHOD_FACE_RECOGNITION, METHOD_GPS, METHOD_QR_CODE, NewCheckIn},
    class_session, course, course_enrollment,
    profile::{self, NewProfile, ProfileRole},
};
use sea_orm::DatabaseConnection;

pub struct Campus {
    pub lecturer: profile::Model,
    pub ama: profile::Model,
    pub kojo: profile::Model,
}

/// CS301 taught by Dr. Sarah Johnson to Ama and Kojo.
///
/// Three sessions were held on the previous three days and one is scheduled
/// for tomorrow. Ama attended all three, Kojo only the first.
pub async fn seed_campus(db: &DatabaseConnection) -> Campus {
    let person = |full_name, email, student_number, role| NewProfile {
        full_name,
        email,
        student_number,
        phone: None,
        department: Some("Computer Science"),
        role,
    };
    let lecturer = profile::Model::create(
        db,
        person("Dr. Sarah Johnson", "sarah.johnson@uni.edu", None, ProfileRole::Lecturer),
    )
    .await
    .unwrap();
    let ama = profile::Model::create(
        db,
        person("Ama Osei", "ama.osei@uni.edu", Some("UG/2023/001234"), ProfileRole::Student),
    )
    .await
    .unwrap();
    let kojo = profile::Model::create(
        db,
        person("Kojo Mensah", "kojo.mensah@uni.edu", None, ProfileRole::Student),
    )
    .await
    .unwrap();

    let course = course::Model::create(db, "CS301", "Computer Networks", lecturer.id, Some("Room 101"))
        .await
        .unwrap();
    course_enrollment::Model::enroll(db, course.id, ama.id).await.unwrap();
    course_enrollment::Model::enroll(db, course.id, kojo.id).await.unwrap();

    let now = Utc::now();
    let mut held = Vec::new();
    for days_ago in [3, 2, 1, -1] {
        let session = class_session::Model::create(
            db,
            course.id,
            now - Duration::days(days_ago),
            Some("Room 101"),
            None,
        )
        .await
        .unwrap();
        if days_ago > 0 {
            held.push(session);
        }
    }

    let rows = [
        (&held[0], ama.id, METHOD_GPS, None),
        (&held[0], kojo.id, METHOD_QR_CODE, None),
        (&held[1], ama.id, METHOD_GPS, None),
        (&held[2], ama.id, METHOD_FACE_RECOGNITION, Some(93.4)),
    ];
    for (i, (session, student_id, method, face)) in rows.into_iter().enumerate() {
        attendance_record::Model::create(
            db,
            NewCheckIn {
                session_id: session.id,
                student_id,
                check_in_time: session.starts_at + Duration::minutes(i as i64 + 1),
                is_verified: true,
                face_confidence: face,
                verification_method: method,
            },
        )
        .await
        .unwrap();
    }

    Campus {
        lecturer,
        ama,
        kojo,
    }
}
