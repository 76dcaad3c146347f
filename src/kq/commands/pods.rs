use crate::error::Result;
use crate::gateway::ClusterGateway;
use crate::render::Span;

use super::helpers::{pick_namespace, NamespacePick};
use super::{CmdMessage, CmdResult, Listing};

/// `kq all pods` — every pod, as a namespace / pod-name table.
pub fn all<G: ClusterGateway>(gateway: &G) -> Result<CmdResult> {
    let pods = gateway.all_pods()?;
    if pods.is_empty() {
        return Ok(CmdResult::message(CmdMessage::error("Cannot find any pods")));
    }

    let rows = pods
        .into_iter()
        .map(|p| (vec![Span::plain(p.namespace)], vec![Span::plain(p.name)]))
        .collect();
    Ok(CmdResult::default().with_listing(Listing::Table(rows)))
}

/// `kq <namespace>` / `kq <namespace> pods` — resolve the namespace query,
/// then list the pods living in it.
pub fn in_namespace<G: ClusterGateway>(gateway: &G, query: &str) -> Result<CmdResult> {
    let namespace = match pick_namespace(gateway, query)? {
        NamespacePick::One(ns) => ns,
        NamespacePick::Report(result) => return Ok(result),
    };

    let pods = gateway.pods_in(&namespace)?;
    if pods.is_empty() {
        return Ok(CmdResult::message(CmdMessage::error(format!(
            "No pods in namespace \"{namespace}\""
        ))));
    }

    let rows = pods.into_iter().map(|p| vec![Span::plain(p.name)]).collect();
    Ok(CmdResult::message(CmdMessage::success(format!(
        "Available pods in namespace \"{namespace}\""
    )))
    .with_listing(Listing::Rows(rows)))
}
