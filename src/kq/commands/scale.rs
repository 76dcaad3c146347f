//! `kq <namespace> scale [<deployment> [<count>]]`.
//!
//! With no deployment query: list the namespace's deployments. With a
//! query: list the matching ones. With a query and a count: resolve the
//! deployment uniquely and emit the scale dispatch. A non-integer count or
//! an ambiguous deployment query refuses the scale; nothing is dispatched.

use crate::error::Result;
use crate::fuzzy::{filter_matches, resolve_one, ResolutionVerdict};
use crate::gateway::ClusterGateway;
use crate::model::DeploymentRecord;
use crate::render::{highlight, Role, Span};

use super::helpers::{pick_namespace, NamespacePick};
use super::{CmdMessage, CmdResult, DispatchAction, Listing, MessageLevel};

pub fn run<G: ClusterGateway>(
    gateway: &G,
    ns_query: &str,
    deploy_query: Option<&str>,
    replicas: Option<&str>,
) -> Result<CmdResult> {
    let namespace = match pick_namespace(gateway, ns_query)? {
        NamespacePick::One(ns) => ns,
        NamespacePick::Report(result) => return Ok(result),
    };

    let deployments = gateway.deployments_in(&namespace)?;
    if deployments.is_empty() {
        return Ok(CmdResult::message(CmdMessage::error(format!(
            "No deployments in namespace \"{namespace}\""
        ))));
    }

    let Some(query) = deploy_query else {
        return Ok(CmdResult::message(CmdMessage::success(format!(
            "Deployments in namespace \"{namespace}\""
        )))
        .with_listing(deployment_rows(&deployments, "")));
    };

    let Some(count_token) = replicas else {
        let matches: Vec<DeploymentRecord> =
            filter_matches(query, &deployments, |d| d.name.as_str());
        if matches.is_empty() {
            return Ok(CmdResult::message(CmdMessage::error(format!(
                "No deployment matched query \"{query}\""
            ))));
        }
        return Ok(CmdResult::message(CmdMessage::success(format!(
            "Deployments in namespace \"{namespace}\""
        )))
        .with_listing(deployment_rows(&matches, query)));
    };

    // A bad count never gets as far as resolving the deployment.
    let count: u32 = match count_token.parse() {
        Ok(n) => n,
        Err(_) => {
            return Ok(CmdResult::message(CmdMessage::error(format!(
                "Invalid replica count \"{count_token}\""
            ))))
        }
    };

    match resolve_one(query, &deployments, |d| d.name.as_str(), |d| d.name == query) {
        ResolutionVerdict::NoMatch => Ok(CmdResult::message(CmdMessage::error(format!(
            "No deployment matched query \"{query}\""
        )))),
        ResolutionVerdict::Ambiguous(candidates) => Ok(CmdResult::message(CmdMessage::warning(
            "Found more than one deployment, refusing to scale",
        ))
        .with_listing(deployment_rows(&candidates, query))),
        ResolutionVerdict::Unique(deployment) | ResolutionVerdict::ExactAlias(deployment) => {
            Ok(CmdResult::default()
                .with_message(CmdMessage::spans(
                    MessageLevel::Success,
                    vec![
                        Span::plain("Scaling deployment "),
                        Span::name(deployment.name.clone()),
                        Span::plain(format!(" in \"{namespace}\" to {count} replicas")),
                    ],
                ))
                .with_dispatch(DispatchAction::Scale {
                    namespace,
                    deployment: deployment.name,
                    replicas: count,
                }))
        }
    }
}

/// Rows of "name  ready", with the query (if any) highlighted in the name.
fn deployment_rows(deployments: &[DeploymentRecord], query: &str) -> Listing {
    Listing::Rows(
        deployments
            .iter()
            .map(|d| {
                let mut spans = highlight(&d.name, query);
                if let Some(ready) = d.ready() {
                    spans.push(Span::new(format!("   {ready}"), Role::Info));
                }
                spans
            })
            .collect(),
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::gateway::static_data::StaticGateway;

    fn cluster() -> StaticGateway {
        StaticGateway::new()
            .with_pod("prod", "web-5d4f7b-1")
            .with_pod("staging", "web-1")
            .with_deployment("prod", "web", "2/2")
            .with_deployment("prod", "web-canary", "1/1")
            .with_deployment("prod", "worker", "3/3")
    }

    #[test]
    fn bare_scale_lists_all_deployments() {
        let result = run(&cluster(), "prod", None, None).unwrap();
        match result.listing {
            Listing::Rows(rows) => assert_eq!(rows.len(), 3),
            other => panic!("expected rows, got {other:?}"),
        }
        assert!(result.dispatch.is_none());
    }

    #[test]
    fn deploy_query_filters_the_listing() {
        let result = run(&cluster(), "prod", Some("web"), None).unwrap();
        match result.listing {
            Listing::Rows(rows) => assert_eq!(rows.len(), 2),
            other => panic!("expected rows, got {other:?}"),
        }
    }

    #[test]
    fn non_integer_count_reports_invalid_argument_without_dispatch() {
        let gateway = cluster();
        let result = run(&gateway, "prod", Some("worker"), Some("abc")).unwrap();
        assert_eq!(
            result.messages[0],
            CmdMessage::error("Invalid replica count \"abc\"")
        );
        assert!(result.dispatch.is_none());
        // Listing calls only; no scale was issued.
        assert_eq!(gateway.calls(), vec!["all_pods", "deployments_in prod"]);
    }

    #[test]
    fn ambiguous_deployment_refuses_to_scale() {
        // "we" matches web and web-canary; neither exactly.
        let result = run(&cluster(), "prod", Some("we"), Some("3")).unwrap();
        assert!(result.dispatch.is_none());
        assert_eq!(
            result.messages[0],
            CmdMessage::warning("Found more than one deployment, refusing to scale")
        );
    }

    #[test]
    fn exact_deployment_name_scales_despite_sibling() {
        // "web" also fuzzy-matches web-canary, but names web verbatim.
        let result = run(&cluster(), "prod", Some("web"), Some("3")).unwrap();
        assert_eq!(
            result.dispatch,
            Some(DispatchAction::Scale {
                namespace: "prod".into(),
                deployment: "web".into(),
                replicas: 3,
            })
        );
    }

    #[test]
    fn unique_deployment_scales() {
        let result = run(&cluster(), "prod", Some("work"), Some("5")).unwrap();
        assert_eq!(
            result.dispatch,
            Some(DispatchAction::Scale {
                namespace: "prod".into(),
                deployment: "worker".into(),
                replicas: 5,
            })
        );
    }

    #[test]
    fn namespace_no_match_stops_before_deployments() {
        let gateway = cluster();
        let result = run(&gateway, "zzz", None, None).unwrap();
        assert_eq!(
            result.messages[0],
            CmdMessage::error("No namespace matched query \"zzz\"")
        );
        assert_eq!(gateway.calls(), vec!["all_pods"]);
    }
}
