use colored::*;
use futures::FutureExt;
use sea_orm_migration::prelude::*;
use std::io::{self, Write};
use std::time::Instant;

const STATUS_COLUMN: usize = 80;

async fn connect(url: &str) -> sea_orm::DatabaseConnection {
    match sea_orm::Database::connect(url).await {
        Ok(db) => db,
        Err(e) => {
            eprintln!("{} {e}", "DB connection failed:".red());
            std::process::exit(1);
        }
    }
}

pub async fn run_all_migrations(url: &str) {
    let db = connect(url).await;

    println!("Running migrations...");
    let schema_manager = SchemaManager::new(&db);

    for migration in <crate::Migrator as MigratorTrait>::migrations() {
        run_migration(&schema_manager, migration).await;
    }
}

/// Drops every table, newest migration first.
pub async fn roll_back_all(url: &str) {
    let db = connect(url).await;

    println!("Rolling back migrations...");
    let schema_manager = SchemaManager::new(&db);

    for migration in <crate::Migrator as MigratorTrait>::migrations().into_iter().rev() {
        let label = format!("Reverting {}", migration.name().bold());
        let start = Instant::now();
        status_prefix(&label);
        report(migration.down(&schema_manager).await, start);
    }
}

async fn run_migration(schema_manager: &SchemaManager<'_>, migration: Box<dyn MigrationTrait>) {
    let label = format!("Applying {}", migration.name().bold());
    status_prefix(&label);

    let start = Instant::now();
    let result = std::panic::AssertUnwindSafe(migration.up(schema_manager))
        .catch_unwind()
        .await;

    match result {
        Ok(outcome) => report(outcome, start),
        Err(_) => {
            println!("{}", "failed".red());
            std::process::exit(1);
        }
    }
}

fn status_prefix(label: &str) {
    let dots = ".".repeat(STATUS_COLUMN.saturating_sub(label.len()));
    print!("{}{} ", label, dots);
    io::stdout().flush().ok();
}

fn report(outcome: Result<(), DbErr>, start: Instant) {
    match outcome {
        Ok(()) => {
            let time_str = format!("({:.2?})", start.elapsed()).dimmed();
            println!("{} {}", "done".green(), time_str);
        }
        Err(e) => {
            println!("{} {}", "failed".red(), e);
            std::process::exit(1);
        }
    }
}
