//! Search term parser / 搜索词解析器
//!
//! Positional heuristic: the first token is a given name, the last token is a
//! family name, everything in between is the particle block ("van der").

use super::schema::NameQuery;

/// Split a search phrase into name components / 将搜索词拆分为姓名各部分
pub fn parse(phrase: Option<&str>) -> NameQuery {
    let tokens: Vec<&str> = phrase
        .map(|p| p.split_whitespace().collect())
        .unwrap_or_default();

    match tokens.as_slice() {
        [] => NameQuery::default(),
        [first] => NameQuery::new(Some(*first), None, None),
        [first, last] => NameQuery::new(Some(*first), None, Some(*last)),
        [first, middle @ .., last] => {
            let prefixes = middle.join(" ");
            NameQuery::new(Some(*first), Some(&prefixes), Some(*last))
        }
    }
}
