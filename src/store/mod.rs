//! Directory store - read access to person records / 通讯录存储
//!
//! The search engine only depends on [`DirectoryStore`]; implementations:
//! - [`SqliteDirectory`]: sqlx + SQLite, used by the server
//! - [`MemoryDirectory`]: in-process store for tests and demos

use async_trait::async_trait;

use crate::models::PersonRecord;
use crate::search::schema::{MatchPredicate, SortOrder};

pub mod memory;
pub mod sqlite;

pub use memory::MemoryDirectory;
pub use sqlite::SqliteDirectory;

/// Store-level failure, surfaced unchanged to the caller / 存储层错误
#[derive(Debug, thiserror::Error)]
pub enum StoreError {
    #[error("database error: {0}")]
    Database(#[from] sqlx::Error),
    #[error("directory unavailable: {0}")]
    Unavailable(String),
}

/// Read-only directory access / 只读通讯录接口
#[async_trait]
pub trait DirectoryStore: Send + Sync {
    /// Records matching `predicate`, ordered on first name (ties by id ascending)
    /// and truncated to `limit` / 按条件查询，按名字排序并截断
    async fn find(
        &self,
        predicate: &MatchPredicate,
        order: SortOrder,
        limit: usize,
    ) -> Result<Vec<PersonRecord>, StoreError>;

    /// Single record by id / 按 id 查询
    async fn get(&self, id: i64) -> Result<Option<PersonRecord>, StoreError>;
}
