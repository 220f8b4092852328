// ABOUTME: The seed command: loads a set of base todo items
// ABOUTME: Developer convenience only; inserts happen in one transaction

use anyhow::Context;
use tracing::info;
use uuid::Uuid;

use crate::{db, SeedArgs};

const SEED_SUMMARIES: [&str; 4] = [
    "buy milk",
    "walk the dog",
    "write up the quarterly report",
    "book dentist appointment",
];

pub async fn run(args: SeedArgs) -> anyhow::Result<()> {
    info!("seeding database at {}", args.db_path.display());

    let pool = db::open_pool(&args.db_path)
        .await
        .context("failed to connect to database")?;

    let mut tx = pool.begin().await.context("failed to get transaction")?;

    for summary in SEED_SUMMARIES {
        sqlx::query("INSERT INTO todo_item (id, summary) VALUES (?, ?)")
            .bind(Uuid::new_v4().to_string())
            .bind(summary)
            .execute(&mut *tx)
            .await
            .with_context(|| format!("failed to insert seed item '{summary}'"))?;
    }

    tx.commit().await.context("failed to commit seed data")?;

    info!("seeded {} todo items", SEED_SUMMARIES.len());
    Ok(())
}
