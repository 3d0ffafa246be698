//! Search query schema definition / 搜索查询的 Schema 定义

use serde::{Deserialize, Serialize};

use crate::models::PersonRecord;

/// Default result cap / 默认最大结果数
pub const DEFAULT_MAX_RESULTS: usize = 100;

/// Structured decomposition of a search phrase / 搜索词拆分结果
///
/// `None` means "no constraint on this field".
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct NameQuery {
    pub first_name: Option<String>,
    pub prefixes: Option<String>,
    pub last_name: Option<String>,
}

impl NameQuery {
    pub fn new(first_name: Option<&str>, prefixes: Option<&str>, last_name: Option<&str>) -> Self {
        Self {
            first_name: first_name.map(str::to_string),
            prefixes: prefixes.map(str::to_string),
            last_name: last_name.map(str::to_string),
        }
    }

    /// True when the phrase was empty / 空查询（匹配全部）
    pub fn is_empty(&self) -> bool {
        self.first_name.is_none() && self.prefixes.is_none() && self.last_name.is_none()
    }
}

/// Name field of a person record / 人员记录的姓名字段
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum NameField {
    FirstName,
    Prefixes,
    LastName,
}

impl NameField {
    /// Lowercased search column in the `people` table / 小写搜索列名
    pub fn lower_column(self) -> &'static str {
        match self {
            NameField::FirstName => "first_name_lower",
            NameField::Prefixes => "prefixes_lower",
            NameField::LastName => "last_name_lower",
        }
    }

    pub fn value_of(self, person: &PersonRecord) -> &str {
        match self {
            NameField::FirstName => &person.first_name,
            NameField::Prefixes => &person.prefixes,
            NameField::LastName => &person.last_name,
        }
    }
}

/// How a field is compared, always case-insensitive / 比较方式（均忽略大小写）
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MatchKind {
    StartsWith,
    Equals,
}

/// Single per-field comparison / 单字段比较条件
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FieldMatch {
    pub field: NameField,
    pub kind: MatchKind,
    pub value: String,
}

impl FieldMatch {
    pub fn starts_with(field: NameField, value: &str) -> Self {
        Self { field, kind: MatchKind::StartsWith, value: value.to_string() }
    }

    pub fn equals(field: NameField, value: &str) -> Self {
        Self { field, kind: MatchKind::Equals, value: value.to_string() }
    }

    pub fn matches(&self, person: &PersonRecord) -> bool {
        let stored = self.field.value_of(person).to_lowercase();
        let wanted = self.value.to_lowercase();
        match self.kind {
            MatchKind::StartsWith => stored.starts_with(&wanted),
            MatchKind::Equals => stored == wanted,
        }
    }
}

/// How the comparisons of a predicate are combined / 条件组合方式
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Combinator {
    /// Every comparison must hold; no comparisons matches everything / 全部满足
    All,
    /// At least one comparison must hold / 任一满足
    Any,
}

/// Candidate interpretation of a search phrase / 候选匹配条件
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MatchPredicate {
    pub combinator: Combinator,
    pub terms: Vec<FieldMatch>,
}

impl MatchPredicate {
    pub fn all(terms: Vec<FieldMatch>) -> Self {
        Self { combinator: Combinator::All, terms }
    }

    pub fn any(terms: Vec<FieldMatch>) -> Self {
        Self { combinator: Combinator::Any, terms }
    }

    /// Predicate without constraints / 无约束条件，匹配全部
    pub fn everything() -> Self {
        Self::all(Vec::new())
    }

    pub fn matches_everything(&self) -> bool {
        self.combinator == Combinator::All && self.terms.is_empty()
    }

    pub fn matches(&self, person: &PersonRecord) -> bool {
        match self.combinator {
            Combinator::All => self.terms.iter().all(|t| t.matches(person)),
            Combinator::Any => self.terms.iter().any(|t| t.matches(person)),
        }
    }
}

/// Sort direction on first name / 按名字排序方向
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SortOrder {
    #[default]
    Ascending,
    Descending,
}

/// Search options / 搜索选项
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SearchOptions {
    pub sort_order: SortOrder,
    /// Maximum number of results to return / 最大返回结果数
    pub max_results: usize,
}

impl Default for SearchOptions {
    fn default() -> Self {
        Self {
            sort_order: SortOrder::Ascending,
            max_results: DEFAULT_MAX_RESULTS,
        }
    }
}

impl SearchOptions {
    pub fn with_sort_order(mut self, sort_order: SortOrder) -> Self {
        self.sort_order = sort_order;
        self
    }

    pub fn with_max_results(mut self, max_results: usize) -> Self {
        self.max_results = max_results;
        self
    }
}

/// Ordering used by every store: first name case-insensitively, then id ascending
/// 排序规则：名字（忽略大小写），相同时按 id 升序
pub fn compare_people(a: &PersonRecord, b: &PersonRecord, order: SortOrder) -> std::cmp::Ordering {
    let by_name = a.first_name.to_lowercase().cmp(&b.first_name.to_lowercase());
    let by_name = match order {
        SortOrder::Ascending => by_name,
        SortOrder::Descending => by_name.reverse(),
    };
    by_name.then(a.id.cmp(&b.id))
}
