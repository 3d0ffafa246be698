use anyhow::{Context, Result};
use sqlx::SqlitePool;
use std::path::Path;

use crate::models::NewPerson;
use crate::store::SqliteDirectory;

/// Run database migrations / 运行数据库迁移
pub async fn run_migrations(pool: &SqlitePool) -> Result<()> {
    sqlx::query(
        r#"
        CREATE TABLE IF NOT EXISTS people (
            id INTEGER PRIMARY KEY AUTOINCREMENT,
            first_name TEXT NOT NULL,
            prefixes TEXT NOT NULL DEFAULT '',
            last_name TEXT NOT NULL,
            first_name_lower TEXT NOT NULL,
            prefixes_lower TEXT NOT NULL DEFAULT '',
            last_name_lower TEXT NOT NULL
        )
        "#,
    )
    .execute(pool)
    .await?;

    // 迁移：旧表没有小写列，添加后用 Rust 回填
    let has_lower_columns: bool = sqlx::query_scalar::<_, i32>(
        "SELECT COUNT(*) FROM pragma_table_info('people') WHERE name = 'first_name_lower'"
    )
    .fetch_one(pool)
    .await
    .map(|count| count > 0)
    .unwrap_or(false);

    if !has_lower_columns {
        tracing::info!("Migration: Adding lowercased name columns to people");
        for column in ["first_name_lower", "prefixes_lower", "last_name_lower"] {
            sqlx::query(&format!("ALTER TABLE people ADD COLUMN {} TEXT NOT NULL DEFAULT ''", column))
                .execute(pool)
                .await?;
        }
        backfill_lower_columns(pool).await?;
    }

    // *_lower columns hold Rust `to_lowercase` output, SQLite LOWER() only folds ASCII
    // 小写列索引
    for (index, column) in [
        ("idx_people_first_name_lower", "first_name_lower"),
        ("idx_people_prefixes_lower", "prefixes_lower"),
        ("idx_people_last_name_lower", "last_name_lower"),
    ] {
        sqlx::query(&format!("CREATE INDEX IF NOT EXISTS {} ON people({})", index, column))
            .execute(pool)
            .await?;
    }

    Ok(())
}

async fn backfill_lower_columns(pool: &SqlitePool) -> Result<()> {
    let rows: Vec<(i64, String, String, String)> =
        sqlx::query_as("SELECT id, first_name, prefixes, last_name FROM people")
            .fetch_all(pool)
            .await?;

    let mut tx = pool.begin().await?;
    for (id, first_name, prefixes, last_name) in &rows {
        sqlx::query(
            "UPDATE people SET first_name_lower = ?, prefixes_lower = ?, last_name_lower = ? WHERE id = ?"
        )
        .bind(first_name.to_lowercase())
        .bind(prefixes.to_lowercase())
        .bind(last_name.to_lowercase())
        .bind(id)
        .execute(&mut *tx)
        .await?;
    }
    tx.commit().await?;

    tracing::info!("Backfilled lowercased names for {} people", rows.len());
    Ok(())
}

/// Import people from a JSON array into an empty directory / 向空通讯录导入初始人员
///
/// Returns the number of imported people. Entries failing validation are skipped.
pub async fn seed_from_file(directory: &SqliteDirectory, path: &Path) -> Result<usize> {
    let existing = directory.count().await?;
    if existing > 0 {
        tracing::info!("Directory already holds {} people, skipping seed", existing);
        return Ok(0);
    }

    let content = std::fs::read_to_string(path)
        .with_context(|| format!("Failed to read seed file {:?}", path))?;
    let people: Vec<NewPerson> = serde_json::from_str(&content)
        .with_context(|| format!("Failed to parse seed file {:?}", path))?;

    let mut imported = 0;
    for person in &people {
        if let Err(code) = person.validate() {
            tracing::warn!(
                "Skipping seed entry {} {}: {}",
                person.first_name,
                person.last_name,
                code
            );
            continue;
        }
        let record = directory.insert(person).await?;
        tracing::debug!("Seeded {} ({})", record.full_name(), record.id);
        imported += 1;
    }

    tracing::info!("Seeded {} people from {:?}", imported, path);
    Ok(imported)
}
