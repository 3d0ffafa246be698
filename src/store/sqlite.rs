//! SQLite directory - predicates translated to LIKE queries / SQLite 通讯录
//!
//! Every name column has a `*_lower` twin written with Rust `to_lowercase`,
//! and comparisons run against those so non-ASCII names fold the same way
//! as the query value.
//!
//! - starts-with: `col_lower LIKE ? ESCAPE '\'` with `value%`
//! - equals: `col_lower = ?`
//! - `%`, `_` and `\` in values are escaped so they match literally

use async_trait::async_trait;
use sqlx::SqlitePool;

use super::{DirectoryStore, StoreError};
use crate::models::{NewPerson, PersonRecord};
use crate::search::schema::{Combinator, FieldMatch, MatchKind, MatchPredicate, SortOrder};

/// Directory backed by the `people` table / 基于 people 表的通讯录
#[derive(Clone)]
pub struct SqliteDirectory {
    db: SqlitePool,
}

impl SqliteDirectory {
    /// Use existing connection pool / 使用现有连接池
    pub fn new(db: SqlitePool) -> Self {
        Self { db }
    }

    /// Insert a person and return the stored record / 插入人员
    pub async fn insert(&self, person: &NewPerson) -> Result<PersonRecord, StoreError> {
        let result = sqlx::query(
            "INSERT INTO people (first_name, prefixes, last_name, first_name_lower, prefixes_lower, last_name_lower) \
             VALUES (?, ?, ?, ?, ?, ?)"
        )
        .bind(&person.first_name)
        .bind(&person.prefixes)
        .bind(&person.last_name)
        .bind(person.first_name.to_lowercase())
        .bind(person.prefixes.to_lowercase())
        .bind(person.last_name.to_lowercase())
        .execute(&self.db)
        .await?;

        Ok(PersonRecord {
            id: result.last_insert_rowid(),
            first_name: person.first_name.clone(),
            prefixes: person.prefixes.clone(),
            last_name: person.last_name.clone(),
        })
    }

    /// Number of people in the directory / 人员总数
    pub async fn count(&self) -> Result<i64, StoreError> {
        let total: i64 = sqlx::query_scalar("SELECT COUNT(*) FROM people")
            .fetch_one(&self.db)
            .await?;
        Ok(total)
    }
}

#[async_trait]
impl DirectoryStore for SqliteDirectory {
    async fn find(
        &self,
        predicate: &MatchPredicate,
        order: SortOrder,
        limit: usize,
    ) -> Result<Vec<PersonRecord>, StoreError> {
        let (condition, binds) = build_where(predicate);
        let direction = match order {
            SortOrder::Ascending => "ASC",
            SortOrder::Descending => "DESC",
        };
        let sql = format!(
            "SELECT id, first_name, prefixes, last_name FROM people \
             WHERE {} ORDER BY first_name_lower {}, id ASC LIMIT ?",
            condition, direction
        );

        let mut query = sqlx::query_as::<_, PersonRecord>(&sql);
        for value in binds {
            query = query.bind(value);
        }
        let limit = i64::try_from(limit).unwrap_or(i64::MAX);

        let people = query.bind(limit).fetch_all(&self.db).await?;
        Ok(people)
    }

    async fn get(&self, id: i64) -> Result<Option<PersonRecord>, StoreError> {
        let person = sqlx::query_as::<_, PersonRecord>(
            "SELECT id, first_name, prefixes, last_name FROM people WHERE id = ?"
        )
        .bind(id)
        .fetch_optional(&self.db)
        .await?;
        Ok(person)
    }
}

/// WHERE clause plus its bind values in order / 生成 WHERE 子句及绑定参数
fn build_where(predicate: &MatchPredicate) -> (String, Vec<String>) {
    if predicate.matches_everything() {
        return ("1 = 1".to_string(), Vec::new());
    }
    // Empty "any" has no satisfiable branch
    if predicate.terms.is_empty() {
        return ("0 = 1".to_string(), Vec::new());
    }

    let joiner = match predicate.combinator {
        Combinator::All => " AND ",
        Combinator::Any => " OR ",
    };

    let (clauses, binds): (Vec<String>, Vec<String>) =
        predicate.terms.iter().map(build_comparison).unzip();

    (format!("({})", clauses.join(joiner)), binds)
}

fn build_comparison(term: &FieldMatch) -> (String, String) {
    let column = term.field.lower_column();
    let value = term.value.to_lowercase();
    match term.kind {
        MatchKind::StartsWith => (
            format!(r"{} LIKE ? ESCAPE '\'", column),
            format!("{}%", escape_like(&value)),
        ),
        MatchKind::Equals => (format!("{} = ?", column), value),
    }
}

fn escape_like(value: &str) -> String {
    let mut escaped = String::with_capacity(value.len());
    for c in value.chars() {
        if matches!(c, '%' | '_' | '\\') {
            escaped.push('\\');
        }
        escaped.push(c);
    }
    escaped
}
