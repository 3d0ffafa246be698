//! Search executor / 搜索执行器
//!
//! Runs candidates against the store in priority order and stops at the first
//! non-empty result. A looser candidate never dilutes a precise hit. When every
//! candidate misses, the broad fallback is tried once; an empty result after
//! that is a normal outcome.

use super::schema::{MatchPredicate, SearchOptions};
use crate::models::PersonRecord;
use crate::store::{DirectoryStore, StoreError};

/// Execute candidates lazily / 按优先级依次执行候选条件
pub async fn execute(
    store: &dyn DirectoryStore,
    candidates: &[MatchPredicate],
    fallback: Option<&MatchPredicate>,
    options: &SearchOptions,
) -> Result<Vec<PersonRecord>, StoreError> {
    for (index, candidate) in candidates.iter().enumerate() {
        let hits = store
            .find(candidate, options.sort_order, options.max_results)
            .await?;
        tracing::debug!("candidate {} returned {} hits", index + 1, hits.len());
        if !hits.is_empty() {
            return Ok(hits);
        }
    }

    let Some(fallback) = fallback else {
        return Ok(Vec::new());
    };

    let hits = store
        .find(fallback, options.sort_order, options.max_results)
        .await?;
    tracing::debug!("fallback returned {} hits", hits.len());
    Ok(hits)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::search::schema::{FieldMatch, NameField, SortOrder};
    use crate::store::MemoryDirectory;
    use async_trait::async_trait;
    use parking_lot::Mutex;

    /// Store stub recording every predicate it was asked for / 记录查询的测试存储
    struct RecordingStore {
        inner: MemoryDirectory,
        queried: Mutex<Vec<MatchPredicate>>,
    }

    impl RecordingStore {
        fn new(people: Vec<PersonRecord>) -> Self {
            Self {
                inner: MemoryDirectory::with_people(people),
                queried: Mutex::new(Vec::new()),
            }
        }

        fn queried(&self) -> Vec<MatchPredicate> {
            self.queried.lock().clone()
        }
    }

    #[async_trait]
    impl DirectoryStore for RecordingStore {
        async fn find(
            &self,
            predicate: &MatchPredicate,
            order: SortOrder,
            limit: usize,
        ) -> Result<Vec<PersonRecord>, StoreError> {
            self.queried.lock().push(predicate.clone());
            self.inner.find(predicate, order, limit).await
        }

        async fn get(&self, id: i64) -> Result<Option<PersonRecord>, StoreError> {
            self.inner.get(id).await
        }
    }

    struct FailingStore;

    #[async_trait]
    impl DirectoryStore for FailingStore {
        async fn find(
            &self,
            _predicate: &MatchPredicate,
            _order: SortOrder,
            _limit: usize,
        ) -> Result<Vec<PersonRecord>, StoreError> {
            Err(StoreError::Unavailable("connection refused".to_string()))
        }

        async fn get(&self, _id: i64) -> Result<Option<PersonRecord>, StoreError> {
            Err(StoreError::Unavailable("connection refused".to_string()))
        }
    }

    fn first_name_is(name: &str) -> MatchPredicate {
        MatchPredicate::all(vec![FieldMatch::equals(NameField::FirstName, name)])
    }

    fn people() -> Vec<PersonRecord> {
        vec![
            PersonRecord::new(1, "Mick", "", "Muis"),
            PersonRecord::new(2, "Anna", "", "Mickelsen"),
        ]
    }

    #[tokio::test]
    async fn test_stops_at_first_success() {
        let store = RecordingStore::new(people());
        let candidates = vec![first_name_is("Nobody"), first_name_is("Mick"), first_name_is("Anna")];

        let hits = execute(&store, &candidates, None, &SearchOptions::default()).await.unwrap();

        assert_eq!(hits.len(), 1);
        assert_eq!(hits[0].id, 1);
        assert_eq!(store.queried(), candidates[..2].to_vec());
    }

    #[tokio::test]
    async fn test_fallback_only_after_total_miss() {
        let store = RecordingStore::new(people());
        let candidates = vec![first_name_is("Nobody")];
        let fallback = MatchPredicate::any(vec![
            FieldMatch::starts_with(NameField::FirstName, "mick"),
            FieldMatch::starts_with(NameField::LastName, "mick"),
        ]);

        let hits = execute(&store, &candidates, Some(&fallback), &SearchOptions::default())
            .await
            .unwrap();

        let ids: Vec<i64> = hits.iter().map(|p| p.id).collect();
        assert_eq!(ids, vec![2, 1]);
        assert_eq!(store.queried().len(), 2);
        assert_eq!(store.queried()[1], fallback);
    }

    #[tokio::test]
    async fn test_fallback_skipped_on_hit() {
        let store = RecordingStore::new(people());
        let candidates = vec![first_name_is("Anna")];
        let fallback = MatchPredicate::everything();

        execute(&store, &candidates, Some(&fallback), &SearchOptions::default()).await.unwrap();

        assert_eq!(store.queried(), candidates);
    }

    #[tokio::test]
    async fn test_empty_fallback_is_empty_result() {
        let store = RecordingStore::new(people());
        let candidates = vec![first_name_is("Nobody")];
        let fallback = MatchPredicate::any(vec![FieldMatch::starts_with(NameField::LastName, "zzz")]);

        let hits = execute(&store, &candidates, Some(&fallback), &SearchOptions::default())
            .await
            .unwrap();
        assert!(hits.is_empty());
    }

    #[tokio::test]
    async fn test_respects_limit_and_order() {
        let store = RecordingStore::new(people());
        let options = SearchOptions::default()
            .with_sort_order(SortOrder::Descending)
            .with_max_results(1);

        let hits = execute(&store, &[MatchPredicate::everything()], None, &options).await.unwrap();
        assert_eq!(hits.len(), 1);
        assert_eq!(hits[0].first_name, "Mick");
    }

    #[tokio::test]
    async fn test_store_failure_propagates() {
        let result = execute(&FailingStore, &[MatchPredicate::everything()], None, &SearchOptions::default()).await;
        assert!(matches!(result, Err(StoreError::Unavailable(_))));
    }
}
