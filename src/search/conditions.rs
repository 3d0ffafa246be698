//! Candidate condition synthesis / 候选条件生成
//!
//! A phrase maps onto the three name fields in more than one plausible way, so
//! instead of a single condition an ordered list of candidates is produced,
//! most specific first. Evaluation belongs to the executor.
//!
//! Candidates, in order / 候选顺序：
//! 1. first_name equals first token, last_name starts with last token
//! 2. first_name starts with first token, prefixes start with last token
//! 3. first/prefixes/last all start with their tokens (only with all three)
//! 4. prefixes start with first token, last_name starts with last token
//! 5. candidate 1 again as the final structured attempt
//!
//! A missing token drops the comparison that would use it.

use super::schema::{FieldMatch, MatchPredicate, NameField, NameQuery};

/// Build the ordered candidate list for a query / 生成有序候选条件列表
pub fn synthesize(query: &NameQuery) -> Vec<MatchPredicate> {
    if query.is_empty() {
        return vec![MatchPredicate::everything()];
    }

    let first = query.first_name.as_deref();
    let prefixes = query.prefixes.as_deref();
    let last = query.last_name.as_deref();

    let mut candidates = vec![
        exact_first_name_and_last_name(first, last),
        first_name_and_particle_as_last(first, last),
    ];

    if let (Some(first), Some(prefixes), Some(last)) = (first, prefixes, last) {
        candidates.push(MatchPredicate::all(vec![
            FieldMatch::starts_with(NameField::FirstName, first),
            FieldMatch::starts_with(NameField::Prefixes, prefixes),
            FieldMatch::starts_with(NameField::LastName, last),
        ]));
    }

    candidates.push(particle_as_first_and_last_name(first, last));
    candidates.push(exact_first_name_and_last_name(first, last));

    candidates
}

/// Broad single-token match used after every candidate came back empty
/// 所有候选均无结果时的兜底条件：名或姓以第一个词开头
pub fn fallback(query: &NameQuery) -> Option<MatchPredicate> {
    let first = query.first_name.as_deref()?;
    Some(MatchPredicate::any(vec![
        FieldMatch::starts_with(NameField::FirstName, first),
        FieldMatch::starts_with(NameField::LastName, first),
    ]))
}

fn exact_first_name_and_last_name(first: Option<&str>, last: Option<&str>) -> MatchPredicate {
    conjunction([
        first.map(|v| FieldMatch::equals(NameField::FirstName, v)),
        last.map(|v| FieldMatch::starts_with(NameField::LastName, v)),
    ])
}

// "Jan van" for Jan van der Berg: the last token continues the particle block
fn first_name_and_particle_as_last(first: Option<&str>, last: Option<&str>) -> MatchPredicate {
    conjunction([
        first.map(|v| FieldMatch::starts_with(NameField::FirstName, v)),
        last.map(|v| FieldMatch::starts_with(NameField::Prefixes, v)),
    ])
}

// "van Persie": the phrase starts inside the particle block
fn particle_as_first_and_last_name(first: Option<&str>, last: Option<&str>) -> MatchPredicate {
    conjunction([
        first.map(|v| FieldMatch::starts_with(NameField::Prefixes, v)),
        last.map(|v| FieldMatch::starts_with(NameField::LastName, v)),
    ])
}

fn conjunction<const N: usize>(terms: [Option<FieldMatch>; N]) -> MatchPredicate {
    MatchPredicate::all(terms.into_iter().flatten().collect())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::search::parser::parse;
    use crate::search::schema::{Combinator, MatchKind};

    #[test]
    fn test_three_tokens_produce_five_candidates() {
        let candidates = synthesize(&parse(Some("Job van Hakken")));
        assert_eq!(candidates.len(), 5);

        assert_eq!(
            candidates[0],
            MatchPredicate::all(vec![
                FieldMatch::equals(NameField::FirstName, "Job"),
                FieldMatch::starts_with(NameField::LastName, "Hakken"),
            ])
        );
        assert_eq!(
            candidates[1],
            MatchPredicate::all(vec![
                FieldMatch::starts_with(NameField::FirstName, "Job"),
                FieldMatch::starts_with(NameField::Prefixes, "Hakken"),
            ])
        );
        assert_eq!(
            candidates[2],
            MatchPredicate::all(vec![
                FieldMatch::starts_with(NameField::FirstName, "Job"),
                FieldMatch::starts_with(NameField::Prefixes, "van"),
                FieldMatch::starts_with(NameField::LastName, "Hakken"),
            ])
        );
        assert_eq!(
            candidates[3],
            MatchPredicate::all(vec![
                FieldMatch::starts_with(NameField::Prefixes, "Job"),
                FieldMatch::starts_with(NameField::LastName, "Hakken"),
            ])
        );
        assert_eq!(candidates[4], candidates[0]);
    }

    #[test]
    fn test_two_tokens_skip_triple_match() {
        let candidates = synthesize(&parse(Some("van Persie")));
        assert_eq!(candidates.len(), 4);
        assert!(candidates.iter().all(|c| c.terms.len() == 2));
        assert_eq!(
            candidates[2],
            MatchPredicate::all(vec![
                FieldMatch::starts_with(NameField::Prefixes, "van"),
                FieldMatch::starts_with(NameField::LastName, "Persie"),
            ])
        );
    }

    #[test]
    fn test_single_token_drops_missing_fields() {
        let candidates = synthesize(&parse(Some("Joep")));
        assert_eq!(candidates.len(), 4);
        assert_eq!(
            candidates[0],
            MatchPredicate::all(vec![FieldMatch::equals(NameField::FirstName, "Joep")])
        );
        assert_eq!(
            candidates[1],
            MatchPredicate::all(vec![FieldMatch::starts_with(NameField::FirstName, "Joep")])
        );
        assert_eq!(
            candidates[2],
            MatchPredicate::all(vec![FieldMatch::starts_with(NameField::Prefixes, "Joep")])
        );
    }

    #[test]
    fn test_empty_query_matches_everything() {
        let candidates = synthesize(&parse(None));
        assert_eq!(candidates, vec![MatchPredicate::everything()]);
        assert!(fallback(&parse(None)).is_none());
    }

    #[test]
    fn test_fallback_uses_first_token_on_both_names() {
        let predicate = fallback(&parse(Some("Naaien van der"))).unwrap();
        assert_eq!(predicate.combinator, Combinator::Any);
        assert_eq!(predicate.terms.len(), 2);
        assert!(predicate.terms.iter().all(|t| t.kind == MatchKind::StartsWith));
        assert!(predicate.terms.iter().all(|t| t.value == "Naaien"));
        assert_eq!(predicate.terms[0].field, NameField::FirstName);
        assert_eq!(predicate.terms[1].field, NameField::LastName);
    }

    #[test]
    fn test_synthesize_is_idempotent() {
        let query = parse(Some("Jan van der Berg"));
        assert_eq!(synthesize(&query), synthesize(&query));
    }
}
