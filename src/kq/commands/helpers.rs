use std::collections::BTreeSet;

use crate::error::Result;
use crate::fuzzy::{resolve_one, ResolutionVerdict};
use crate::gateway::ClusterGateway;
use crate::render::highlight;

use super::{CmdMessage, CmdResult, Listing};

/// Distinct namespace names from the all-pods listing, sorted.
pub fn distinct_namespaces<G: ClusterGateway>(gateway: &G) -> Result<Vec<String>> {
    let pods = gateway.all_pods()?;
    let set: BTreeSet<String> = pods.into_iter().map(|p| p.namespace).collect();
    Ok(set.into_iter().collect())
}

/// Distinct pod names across all namespaces, sorted.
pub fn distinct_pod_names<G: ClusterGateway>(gateway: &G) -> Result<Vec<String>> {
    let pods = gateway.all_pods()?;
    let set: BTreeSet<String> = pods.into_iter().map(|p| p.name).collect();
    Ok(set.into_iter().collect())
}

/// Outcome of narrowing a namespace query to a single namespace.
pub enum NamespacePick {
    /// Resolved; callers go on to their namespace-scoped work.
    One(String),
    /// NoMatch or Ambiguous, already turned into a renderable result.
    /// No further gateway calls are made on this path.
    Report(CmdResult),
}

/// Resolve a namespace query with the standard verdict policy. The raw
/// query token is both the exact-alias key and the highlight needle.
pub fn pick_namespace<G: ClusterGateway>(gateway: &G, query: &str) -> Result<NamespacePick> {
    let namespaces = distinct_namespaces(gateway)?;
    let verdict = resolve_one(query, &namespaces, |ns| ns.as_str(), |ns| ns == query);
    Ok(match verdict {
        ResolutionVerdict::Unique(ns) | ResolutionVerdict::ExactAlias(ns) => NamespacePick::One(ns),
        ResolutionVerdict::NoMatch => NamespacePick::Report(CmdResult::message(
            CmdMessage::error(format!("No namespace matched query \"{query}\"")),
        )),
        ResolutionVerdict::Ambiguous(candidates) => NamespacePick::Report(
            CmdResult::message(CmdMessage::warning("Found more than 1 result"))
                .with_listing(highlight_rows(&candidates, query)),
        ),
    })
}

/// Single-column listing with the query highlighted in each row.
pub fn highlight_rows(values: &[String], query: &str) -> Listing {
    Listing::Rows(values.iter().map(|v| highlight(v, query)).collect())
}
