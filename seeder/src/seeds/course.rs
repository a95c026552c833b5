use crate::seed::{SeedFuture, Seeder};
use db::models::{
    course::Model,
    profile::{self, ProfileRole},
};
use sea_orm::{ColumnTrait, DatabaseConnection, DbErr, EntityTrait, QueryFilter, QueryOrder};

pub struct CourseSeeder;

const COURSES: [(&str, &str, &str); 5] = [
    ("CS301", "Computer Networks", "Room 101"),
    ("CS302", "Operating Systems", "Room 204"),
    ("CS305", "Database Systems", "Lab 2"),
    ("CS310", "Software Engineering", "Room 101"),
    ("CS320", "Computer Graphics", "Lab 1"),
];

impl Seeder for CourseSeeder {
    fn seed<'a>(&'a self, db: &'a DatabaseConnection) -> SeedFuture<'a> {
        Box::pin(async move {
            let lecturers = profile::Entity::find()
                .filter(profile::Column::Role.eq(ProfileRole::Lecturer))
                .order_by_asc(profile::Column::Id)
                .all(db)
                .await?;
            if lecturers.is_empty() {
                return Err(DbErr::RecordNotFound("no lecturers to assign courses to".into()));
            }

            for (i, (code, name, room)) in COURSES.into_iter().enumerate() {
                let lecturer = &lecturers[i % lecturers.len()];
                Model::create(db, code, name, lecturer.id, Some(room)).await?;
            }

            Ok(())
        })
    }
}
