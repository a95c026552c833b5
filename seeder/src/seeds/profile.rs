use crate::seed::{SeedFuture, Seeder};
use db::models::profile::{Model, NewProfile, ProfileRole};
use fake::{Fake, faker::name::en::Name, faker::phone_number::en::PhoneNumber};
use sea_orm::DatabaseConnection;

pub struct ProfileSeeder;

const DEPARTMENT: &str = "Computer Science";

impl Seeder for ProfileSeeder {
    fn seed<'a>(&'a self, db: &'a DatabaseConnection) -> SeedFuture<'a> {
        Box::pin(async move {
            // Fixed lecturers
            for (name, email) in [
                ("Dr. Sarah Johnson", "sarah.johnson@uni.edu"),
                ("Prof. Kwame Asante", "kwame.asante@uni.edu"),
            ] {
                Model::create(
                    db,
                    NewProfile {
                        full_name: name,
                        email,
                        student_number: None,
                        phone: None,
                        department: Some(DEPARTMENT),
                        role: ProfileRole::Lecturer,
                    },
                )
                .await?;
            }

            // Fixed student
            Model::create(
                db,
                NewProfile {
                    full_name: "Ama Osei",
                    email: "ama.osei@uni.edu",
                    student_number: Some("UG/2023/001234"),
                    phone: Some("+233 20 000 0001"),
                    department: Some(DEPARTMENT),
                    role: ProfileRole::Student,
                },
            )
            .await?;

            // Random students
            for i in 1..=40 {
                let name: String = Name().fake();
                let email = format!("{}.{i}@uni.edu", slug(&name));
                let number = format!("UG/2023/{:06}", 1234 + i);
                let phone: String = PhoneNumber().fake();

                Model::create(
                    db,
                    NewProfile {
                        full_name: &name,
                        email: &email,
                        // A few students have not been issued a number yet.
                        student_number: (i % 10 != 0).then_some(number.as_str()),
                        phone: Some(&phone),
                        department: Some(DEPARTMENT),
                        role: ProfileRole::Student,
                    },
                )
                .await?;
            }

            Ok(())
        })
    }
}

fn slug(name: &str) -> String {
    name.split_whitespace()
        .map(|w| {
            w.chars()
                .filter(|c| c.is_ascii_alphanumeric())
                .collect::<String>()
                .to_lowercase()
        })
        .filter(|w| !w.is_empty())
        .collect::<Vec<_>>()
        .join(".")
}
