//! Directory name search / 通讯录姓名搜索
//!
//! Pipeline / 流程：
//! phrase → [`parser::parse`] → [`NameQuery`] → [`conditions::synthesize`]
//! → ordered candidates → [`executor::execute`] → people
//!
//! The engine holds no state; every call builds its own query and candidates.
//! Character validation of the phrase happens before it reaches this module.

pub mod conditions;
pub mod executor;
pub mod parser;
pub mod schema;

pub use schema::{MatchPredicate, NameQuery, SearchOptions, SortOrder};

use crate::models::PersonRecord;
use crate::store::{DirectoryStore, StoreError};

/// Search the directory by a free-text name phrase / 按姓名搜索通讯录
///
/// An empty or missing phrase returns the directory in sort order, truncated
/// to `options.max_results`.
pub async fn search_directory(
    store: &dyn DirectoryStore,
    phrase: Option<&str>,
    options: &SearchOptions,
) -> Result<Vec<PersonRecord>, StoreError> {
    let query = parser::parse(phrase);
    let candidates = conditions::synthesize(&query);
    let fallback = conditions::fallback(&query);

    tracing::debug!("search {:?}: {} candidates", query, candidates.len());

    executor::execute(store, &candidates, fallback.as_ref(), options).await
}
