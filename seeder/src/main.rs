use crate::seed::{Seeder, run_seeder};
use crate::seeds::{
    attendance::AttendanceSeeder, class_session::ClassSessionSeeder, course::CourseSeeder,
    enrollment::EnrollmentSeeder, profile::ProfileSeeder,
};
use colored::*;
use migration::Migrator;
use sea_orm_migration::MigratorTrait;

mod seed;
mod seeds;

#[tokio::main]
async fn main() {
    let db = match db::connect().await {
        Ok(db) => db,
        Err(err) => {
            eprintln!("{} {}", "Could not open database:".red(), err);
            std::process::exit(1);
        }
    };
    if let Err(err) = Migrator::up(&db, None).await {
        eprintln!("{} {}", "Migrations failed:".red(), err);
        std::process::exit(1);
    }

    for (seeder, name) in [
        (Box::new(ProfileSeeder) as Box<dyn Seeder + Send + Sync>, "Profile"),
        (Box::new(CourseSeeder), "Course"),
        (Box::new(EnrollmentSeeder), "CourseEnrollment"),
        (Box::new(ClassSessionSeeder), "ClassSession"),
        (Box::new(AttendanceSeeder), "AttendanceRecord"),
    ] {
        run_seeder(&*seeder, name, &db).await;
    }
}
