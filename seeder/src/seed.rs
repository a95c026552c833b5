use colored::*;
use futures::FutureExt;
use sea_orm::{DatabaseConnection, DbErr};
use std::io::{self, Write};
use std::pin::Pin;
use std::time::Instant;

const STATUS_COLUMN: usize = 80;

pub type SeedFuture<'a> = Pin<Box<dyn Future<Output = Result<(), DbErr>> + Send + 'a>>;

/// One table's worth of demo data. Seeders run in order, so a seeder may read
/// rows written by the ones before it.
pub trait Seeder {
    fn seed<'a>(&'a self, db: &'a DatabaseConnection) -> SeedFuture<'a>;
}

pub async fn run_seeder<S: Seeder + ?Sized>(seeder: &S, name: &str, db: &DatabaseConnection) {
    let base_msg = format!("Seeding {}", name.bold());
    let dots = ".".repeat(STATUS_COLUMN.saturating_sub(base_msg.len()));
    print!("{}{} ", base_msg, dots);
    let _ = io::stdout().flush();

    let start = Instant::now();
    match std::panic::AssertUnwindSafe(seeder.seed(db))
        .catch_unwind()
        .await
    {
        Ok(Ok(())) => {
            let time_str = format!("({:.2?})", start.elapsed()).dimmed();
            println!("{} {}", "done".green(), time_str);
        }
        Ok(Err(err)) => {
            println!("{}", "failed".red());
            eprintln!("  {}", err.to_string().red());
            std::process::exit(1);
        }
        Err(_) => {
            println!("{}", "panicked".red());
            std::process::exit(1);
        }
    }
}
