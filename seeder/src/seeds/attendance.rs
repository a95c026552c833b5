use crate::seed::{SeedFuture, Seeder};
use chrono::{Duration, Utc};
use db::models::{
    attendance_record::{
        METHOD_FACE_RECOGNITION, METHOD_GPS, METHOD_QR_CODE, Model, NewCheckIn,
    },
    class_session, course_enrollment,
};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng, seq::SliceRandom};
use sea_orm::{DatabaseConnection, EntityTrait};
use std::collections::HashMap;

pub struct AttendanceSeeder;

const METHODS: [&str; 3] = [METHOD_QR_CODE, METHOD_FACE_RECOGNITION, METHOD_GPS];

impl Seeder for AttendanceSeeder {
    fn seed<'a>(&'a self, db: &'a DatabaseConnection) -> SeedFuture<'a> {
        Box::pin(async move {
            // Use a Send-compatible RNG
            let mut rng = StdRng::from_entropy();
            let now = Utc::now();

            let mut roster: HashMap<i64, Vec<i64>> = HashMap::new();
            for e in course_enrollment::Entity::find().all(db).await? {
                roster.entry(e.course_id).or_default().push(e.student_id);
            }

            let held = class_session::Entity::find()
                .all(db)
                .await?
                .into_iter()
                .filter(|s| s.starts_at <= now);

            for session in held {
                let Some(students) = roster.get(&session.course_id) else {
                    continue;
                };
                for &student_id in students {
                    // Roughly four in five turn up.
                    if !rng.gen_bool(0.8) {
                        continue;
                    }

                    let method = *METHODS.choose(&mut rng).unwrap_or(&METHOD_QR_CODE);
                    let face_confidence = (method == METHOD_FACE_RECOGNITION)
                        .then(|| (rng.gen_range(850..=999) as f64) / 10.0);
                    let late_by = Duration::seconds(rng.gen_range(0..15 * 60));

                    Model::create(
                        db,
                        NewCheckIn {
                            session_id: session.id,
                            student_id,
                            check_in_time: session.starts_at + late_by,
                            is_verified: rng.gen_bool(0.9),
                            face_confidence,
                            verification_method: method,
                        },
                    )
                    .await?;
                }
            }

            Ok(())
        })
    }
}
