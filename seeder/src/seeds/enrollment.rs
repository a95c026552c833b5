use crate::seed::{SeedFuture, Seeder};
use db::models::{
    course, course_enrollment::Model,
    profile::{self, ProfileRole},
};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng, seq::SliceRandom};
use sea_orm::{ColumnTrait, DatabaseConnection, EntityTrait, QueryFilter};

pub struct EnrollmentSeeder;

impl Seeder for EnrollmentSeeder {
    fn seed<'a>(&'a self, db: &'a DatabaseConnection) -> SeedFuture<'a> {
        Box::pin(async move {
            // Use a Send-compatible RNG
            let mut rng = StdRng::from_entropy();

            let courses = course::Entity::find().all(db).await?;
            let students = profile::Entity::find()
                .filter(profile::Column::Role.eq(ProfileRole::Student))
                .all(db)
                .await?;
            if courses.is_empty() {
                return Ok(());
            }

            for student in &students {
                let count = rng.gen_range(2..=4).min(courses.len());
                let mut picked: Vec<&course::Model> =
                    courses.choose_multiple(&mut rng, count).collect();

                // Everyone takes the first course so the demo lecturer has a full class.
                if !picked.iter().any(|c| c.id == courses[0].id) {
                    picked.push(&courses[0]);
                }

                for c in picked {
                    Model::enroll(db, c.id, student.id).await?;
                }
            }

            Ok(())
        })
    }
}
