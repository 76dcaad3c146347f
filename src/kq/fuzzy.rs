//! The fuzzy resolution engine.
//!
//! Queries and candidate names are compared in a canonical form: lowercased,
//! with spaces, hyphens and underscores removed. A query matches a candidate
//! when the canonical query is a substring (not a subsequence) of the
//! canonical key, so `5103 redismetric` matches
//! `rd-jira-5103-redis-metrics-57dff4f8b7-5c49k` through the concatenated
//! fragment `5103redismetrics`.
//!
//! [`resolve_one`] collapses a candidate set to a verdict with a fixed
//! precedence: no match, then unique match, then exact alias, then
//! ambiguous. The exact-alias step lets a fully typed name win even when
//! canonicalization makes it collide with prefix/suffix siblings.

/// Canonical comparison form: lowercase, then strip spaces, hyphens and
/// underscores. Pure and idempotent.
pub fn canonicalize(s: &str) -> String {
    s.to_lowercase()
        .chars()
        .filter(|c| !matches!(c, ' ' | '-' | '_'))
        .collect()
}

/// The outcome of collapsing a candidate set against a query.
///
/// Every command handler branches on this identically; the precedence
/// baked into [`resolve_one`] is user-visible behavior and must not be
/// reordered.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ResolutionVerdict<T> {
    /// Nothing matched the query.
    NoMatch,
    /// Exactly one candidate matched.
    Unique(T),
    /// Several candidates matched, but the raw input named one verbatim.
    ExactAlias(T),
    /// Several candidates matched; input order preserved.
    Ambiguous(Vec<T>),
}

/// Every candidate whose canonical key contains the canonical query as a
/// substring, in the input's original order. An empty query matches
/// nothing; callers treat an empty query as "show usage", never as
/// "match everything".
pub fn filter_matches<T, F>(query: &str, candidates: &[T], key_of: F) -> Vec<T>
where
    T: Clone,
    F: Fn(&T) -> &str,
{
    let needle = canonicalize(query);
    if needle.is_empty() {
        return Vec::new();
    }
    candidates
        .iter()
        .filter(|c| canonicalize(key_of(c)).contains(&needle))
        .cloned()
        .collect()
}

/// Collapse an already-matched candidate list to a verdict.
///
/// Shared by [`resolve_one`] and the joint namespace/pod resolution, which
/// builds its match list from a two-field conjunction instead of a single
/// key.
pub fn resolve_matched<T, E>(mut matched: Vec<T>, is_exact: E) -> ResolutionVerdict<T>
where
    E: Fn(&T) -> bool,
{
    match matched.len() {
        0 => ResolutionVerdict::NoMatch,
        1 => ResolutionVerdict::Unique(matched.remove(0)),
        _ => match matched.iter().position(|c| is_exact(c)) {
            Some(pos) => ResolutionVerdict::ExactAlias(matched.swap_remove(pos)),
            None => ResolutionVerdict::Ambiguous(matched),
        },
    }
}

/// Match `query` against `candidates` and collapse the result.
///
/// `is_exact` decides whether the raw, non-canonicalized user input names a
/// candidate verbatim; it is only consulted when more than one candidate
/// fuzzy-matches.
pub fn resolve_one<T, F, E>(
    query: &str,
    candidates: &[T],
    key_of: F,
    is_exact: E,
) -> ResolutionVerdict<T>
where
    T: Clone,
    F: Fn(&T) -> &str,
    E: Fn(&T) -> bool,
{
    resolve_matched(filter_matches(query, candidates, key_of), is_exact)
}
