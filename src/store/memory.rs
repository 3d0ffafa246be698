//! In-memory directory / 内存通讯录

use async_trait::async_trait;
use parking_lot::RwLock;

use super::{DirectoryStore, StoreError};
use crate::models::{NewPerson, PersonRecord};
use crate::search::schema::{compare_people, MatchPredicate, SortOrder};

/// Directory kept in a vector, insertion order preserved / 内存通讯录
#[derive(Default)]
pub struct MemoryDirectory {
    people: RwLock<Vec<PersonRecord>>,
}

impl MemoryDirectory {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_people(people: Vec<PersonRecord>) -> Self {
        Self { people: RwLock::new(people) }
    }

    /// Append a person, assigning the next id / 添加人员并分配 id
    pub fn insert(&self, person: NewPerson) -> PersonRecord {
        let mut people = self.people.write();
        let id = people.iter().map(|p| p.id).max().unwrap_or(0) + 1;
        let record = PersonRecord {
            id,
            first_name: person.first_name,
            prefixes: person.prefixes,
            last_name: person.last_name,
        };
        people.push(record.clone());
        record
    }

    pub fn len(&self) -> usize {
        self.people.read().len()
    }

    pub fn is_empty(&self) -> bool {
        self.people.read().is_empty()
    }
}

#[async_trait]
impl DirectoryStore for MemoryDirectory {
    async fn find(
        &self,
        predicate: &MatchPredicate,
        order: SortOrder,
        limit: usize,
    ) -> Result<Vec<PersonRecord>, StoreError> {
        let mut hits: Vec<PersonRecord> = self
            .people
            .read()
            .iter()
            .filter(|p| predicate.matches(p))
            .cloned()
            .collect();

        hits.sort_by(|a, b| compare_people(a, b, order));
        hits.truncate(limit);
        Ok(hits)
    }

    async fn get(&self, id: i64) -> Result<Option<PersonRecord>, StoreError> {
        Ok(self.people.read().iter().find(|p| p.id == id).cloned())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::search::schema::{FieldMatch, NameField};

    fn directory() -> MemoryDirectory {
        let dir = MemoryDirectory::new();
        dir.insert(NewPerson::new("mick", "", "Muis"));
        dir.insert(NewPerson::new("Anna", "de", "Vries"));
        dir.insert(NewPerson::new("Mick", "van", "Dam"));
        dir
    }

    #[tokio::test]
    async fn test_insert_assigns_sequential_ids() {
        let dir = directory();
        assert_eq!(dir.len(), 3);
        let next = dir.insert(NewPerson::new("Joep", "", "Jansen"));
        assert_eq!(next.id, 4);
    }

    #[tokio::test]
    async fn test_find_sorts_and_limits() {
        let dir = directory();
        let all = dir.find(&MatchPredicate::everything(), SortOrder::Ascending, 10).await.unwrap();
        let ids: Vec<i64> = all.iter().map(|p| p.id).collect();
        // "mick" and "Mick" compare equal, tie broken by id
        assert_eq!(ids, vec![2, 1, 3]);

        let desc = dir.find(&MatchPredicate::everything(), SortOrder::Descending, 2).await.unwrap();
        let ids: Vec<i64> = desc.iter().map(|p| p.id).collect();
        assert_eq!(ids, vec![1, 3]);
    }

    #[tokio::test]
    async fn test_find_applies_predicate() {
        let dir = directory();
        let predicate = MatchPredicate::all(vec![FieldMatch::equals(NameField::FirstName, "MICK")]);
        let hits = dir.find(&predicate, SortOrder::Ascending, 10).await.unwrap();
        assert_eq!(hits.len(), 2);
    }

    #[tokio::test]
    async fn test_get_by_id() {
        let dir = directory();
        assert_eq!(dir.get(2).await.unwrap().unwrap().last_name, "Vries");
        assert!(dir.get(99).await.unwrap().is_none());
    }
}
