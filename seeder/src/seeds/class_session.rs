use crate::seed::{SeedFuture, Seeder};
use chrono::{Datelike, Duration, TimeZone, Utc, Weekday};
use db::models::{class_session::Model, course};
use sea_orm::{DatabaseConnection, EntityTrait};

pub struct ClassSessionSeeder;

/// Weekdays covered before today.
const PAST_DAYS: i64 = 21;
const UPCOMING_DAYS: i64 = 7;

impl Seeder for ClassSessionSeeder {
    fn seed<'a>(&'a self, db: &'a DatabaseConnection) -> SeedFuture<'a> {
        Box::pin(async move {
            let courses = course::Entity::find().all(db).await?;
            let today = Utc::now().date_naive();

            for (i, c) in courses.iter().enumerate() {
                // Stagger courses through the morning.
                let hour = 8 + (i as u32 % 4) * 2;

                for offset in -PAST_DAYS..=UPCOMING_DAYS {
                    let day = today + Duration::days(offset);
                    if matches!(day.weekday(), Weekday::Sat | Weekday::Sun) {
                        continue;
                    }
                    let Some(naive) = day.and_hms_opt(hour, 0, 0) else {
                        continue;
                    };
                    let starts_at = Utc.from_utc_datetime(&naive);
                    let qr = format!("{}_{}", c.code, starts_at.timestamp_millis());

                    Model::create(db, c.id, starts_at, c.room.as_deref(), Some(&qr)).await?;
                }
            }

            Ok(())
        })
    }
}
