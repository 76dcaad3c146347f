use crate::error::Result;
use crate::gateway::ClusterGateway;
use crate::render::Span;

use super::helpers::distinct_namespaces;
use super::{CmdMessage, CmdResult, Listing};

/// `kq all ns` — every distinct namespace, sorted.
pub fn all<G: ClusterGateway>(gateway: &G) -> Result<CmdResult> {
    let namespaces = distinct_namespaces(gateway)?;
    if namespaces.is_empty() {
        return Ok(CmdResult::message(CmdMessage::error(
            "Cannot find any namespace",
        )));
    }

    let rows = namespaces
        .into_iter()
        .map(|ns| vec![Span::plain(ns)])
        .collect();
    Ok(CmdResult::message(CmdMessage::success("All available namespaces"))
        .with_listing(Listing::Rows(rows)))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::gateway::static_data::StaticGateway;

    #[test]
    fn lists_sorted_deduplicated_namespaces() {
        let gateway = StaticGateway::new()
            .with_pod("staging", "web-1")
            .with_pod("prod", "web-1")
            .with_pod("prod", "web-2");

        let result = all(&gateway).unwrap();
        match result.listing {
            Listing::Rows(rows) => {
                let names: Vec<&str> = rows.iter().map(|r| r[0].text.as_str()).collect();
                assert_eq!(names, vec!["prod", "staging"]);
            }
            other => panic!("expected rows, got {other:?}"),
        }
    }

    #[test]
    fn empty_cluster_is_reported() {
        let result = all(&StaticGateway::new()).unwrap();
        assert_eq!(result.listing, Listing::None);
        assert_eq!(
            result.messages[0],
            CmdMessage::error("Cannot find any namespace")
        );
    }
}
