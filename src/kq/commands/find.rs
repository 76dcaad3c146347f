use crate::error::Result;
use crate::fuzzy::filter_matches;
use crate::gateway::ClusterGateway;

use super::helpers::{distinct_namespaces, distinct_pod_names, highlight_rows};
use super::{CmdMessage, CmdResult};

/// `kq find ns <query>` — every namespace matching the query, highlighted.
pub fn namespace<G: ClusterGateway>(gateway: &G, query: &str) -> Result<CmdResult> {
    let namespaces = distinct_namespaces(gateway)?;
    let matches = filter_matches(query, &namespaces, |ns| ns.as_str());
    if matches.is_empty() {
        return Ok(CmdResult::message(CmdMessage::error(format!(
            "No namespace matched query \"{query}\""
        ))));
    }
    Ok(CmdResult::message(CmdMessage::success("Found namespaces"))
        .with_listing(highlight_rows(&matches, query)))
}

/// `kq find pod <query>` — every pod name matching the query, highlighted.
pub fn pod<G: ClusterGateway>(gateway: &G, query: &str) -> Result<CmdResult> {
    let pod_names = distinct_pod_names(gateway)?;
    let matches = filter_matches(query, &pod_names, |name| name.as_str());
    if matches.is_empty() {
        return Ok(CmdResult::message(CmdMessage::error(format!(
            "No pods matched query \"{query}\""
        ))));
    }
    Ok(CmdResult::message(CmdMessage::success("Found pods"))
        .with_listing(highlight_rows(&matches, query)))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::commands::Listing;
    use crate::gateway::static_data::StaticGateway;
    use crate::render::{Role, Span};

    fn cluster() -> StaticGateway {
        StaticGateway::new()
            .with_pod("jira-1234", "rd-jira-5103-redis-metrics-57dff4f8b7-5c49k")
            .with_pod("prod", "web-1")
    }

    #[test]
    fn finds_namespaces_by_fragment() {
        let result = namespace(&cluster(), "1234").unwrap();
        match result.listing {
            Listing::Rows(rows) => {
                assert_eq!(rows.len(), 1);
                // "jira-" plain, "1234" highlighted
                assert_eq!(rows[0][0], Span::plain("jira-"));
                assert_eq!(rows[0][1], Span::query("1234"));
            }
            other => panic!("expected rows, got {other:?}"),
        }
    }

    #[test]
    fn finds_pods_across_separators() {
        let result = pod(&cluster(), "redismetrics").unwrap();
        match result.listing {
            Listing::Rows(rows) => {
                assert_eq!(rows.len(), 1);
                // No literal occurrence of "redismetrics", so no highlight.
                assert_eq!(rows[0].len(), 1);
                assert_eq!(rows[0][0].role, Role::Plain);
            }
            other => panic!("expected rows, got {other:?}"),
        }
    }

    #[test]
    fn reports_when_nothing_matches() {
        let result = namespace(&cluster(), "zzz").unwrap();
        assert_eq!(
            result.messages[0],
            CmdMessage::error("No namespace matched query \"zzz\"")
        );
        let result = pod(&cluster(), "zzz").unwrap();
        assert_eq!(
            result.messages[0],
            CmdMessage::error("No pods matched query \"zzz\"")
        );
    }
}
