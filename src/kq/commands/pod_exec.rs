//! Joint namespace/pod resolution for `logs` and `bash`.
//!
//! Unlike the single-key lookups, the candidate set here is the cross
//! product of all pods filtered by a two-field conjunction: the namespace
//! query must be a canonical substring of the namespace AND the pod query a
//! canonical substring of the pod name. The collapsed verdict uses the
//! (namespace, pod) pair as the exact-alias key, so a fully typed pair
//! bypasses sibling ambiguity.

use crate::error::Result;
use crate::fuzzy::{canonicalize, resolve_matched, ResolutionVerdict};
use crate::gateway::ClusterGateway;
use crate::render::{highlight, Span};

use super::{CmdMessage, CmdResult, DispatchAction, Listing, MessageLevel};

/// What to do with the resolved pod.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PodAction {
    Logs { follow: bool },
    Shell,
}

pub fn run<G: ClusterGateway>(
    gateway: &G,
    ns_query: &str,
    pod_query: &str,
    action: PodAction,
) -> Result<CmdResult> {
    let ns_needle = canonicalize(ns_query);
    let pod_needle = canonicalize(pod_query);

    let pods = gateway.all_pods()?;
    let matched: Vec<(String, String)> = pods
        .into_iter()
        .filter(|p| {
            canonicalize(&p.namespace).contains(&ns_needle)
                && canonicalize(&p.name).contains(&pod_needle)
        })
        .map(|p| (p.namespace, p.name))
        .collect();

    let verdict = resolve_matched(matched, |(ns, pod)| ns == ns_query && pod == pod_query);
    match verdict {
        ResolutionVerdict::NoMatch => Ok(CmdResult::message(CmdMessage::error(format!(
            "Cannot find namespace \"{ns_query}\" and pod \"{pod_query}\""
        )))),
        ResolutionVerdict::Unique((namespace, pod))
        | ResolutionVerdict::ExactAlias((namespace, pod)) => {
            let dispatch = match action {
                PodAction::Logs { follow } => DispatchAction::Logs {
                    namespace: namespace.clone(),
                    pod: pod.clone(),
                    follow,
                },
                PodAction::Shell => DispatchAction::Shell {
                    namespace: namespace.clone(),
                    pod: pod.clone(),
                },
            };
            Ok(CmdResult::default()
                .with_message(CmdMessage::spans(
                    MessageLevel::Info,
                    vec![Span::plain("Namespace:\t"), Span::name(namespace)],
                ))
                .with_message(CmdMessage::spans(
                    MessageLevel::Info,
                    vec![Span::plain("Pod name:\t"), Span::name(pod)],
                ))
                .with_dispatch(dispatch))
        }
        ResolutionVerdict::Ambiguous(candidates) => {
            let rows = candidates
                .into_iter()
                .map(|(ns, pod)| (highlight(&ns, ns_query), highlight(&pod, pod_query)))
                .collect();
            Ok(
                CmdResult::message(CmdMessage::warning("Found more than one namespace/pod"))
                    .with_listing(Listing::Table(rows)),
            )
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::gateway::static_data::StaticGateway;

    fn cluster() -> StaticGateway {
        StaticGateway::new()
            .with_pod("prod", "web-1")
            .with_pod("prod", "web-2")
            .with_pod("staging", "web-1")
    }

    #[test]
    fn ambiguous_pair_lists_both_prod_pods() {
        let result = run(&cluster(), "prod", "web", PodAction::Shell).unwrap();
        assert!(result.dispatch.is_none());
        assert_eq!(
            result.messages[0],
            CmdMessage::warning("Found more than one namespace/pod")
        );
        match result.listing {
            Listing::Table(rows) => {
                let pairs: Vec<(String, String)> = rows
                    .iter()
                    .map(|(ns, pod)| {
                        (
                            ns.iter().map(|s| s.text.clone()).collect(),
                            pod.iter().map(|s| s.text.clone()).collect(),
                        )
                    })
                    .collect();
                assert_eq!(
                    pairs,
                    vec![
                        ("prod".to_string(), "web-1".to_string()),
                        ("prod".to_string(), "web-2".to_string()),
                    ]
                );
            }
            other => panic!("expected table, got {other:?}"),
        }
    }

    #[test]
    fn narrowed_pair_resolves_uniquely() {
        let result = run(&cluster(), "prod", "web-1", PodAction::Logs { follow: true }).unwrap();
        assert_eq!(
            result.dispatch,
            Some(DispatchAction::Logs {
                namespace: "prod".into(),
                pod: "web-1".into(),
                follow: true,
            })
        );
    }

    #[test]
    fn exact_pair_bypasses_ambiguity() {
        let gateway = StaticGateway::new()
            .with_pod("prod", "web")
            .with_pod("prod", "web-canary");
        let result = run(&gateway, "prod", "web", PodAction::Shell).unwrap();
        assert_eq!(
            result.dispatch,
            Some(DispatchAction::Shell {
                namespace: "prod".into(),
                pod: "web".into(),
            })
        );
    }

    #[test]
    fn unmatched_pair_is_reported() {
        let result = run(&cluster(), "prod", "database", PodAction::Shell).unwrap();
        assert!(result.dispatch.is_none());
        assert_eq!(
            result.messages[0],
            CmdMessage::error("Cannot find namespace \"prod\" and pod \"database\"")
        );
    }

    #[test]
    fn commands_never_touch_dispatch_gateway_methods() {
        let gateway = cluster();
        let _ = run(&gateway, "prod", "web-1", PodAction::Shell).unwrap();
        assert_eq!(gateway.calls(), vec!["all_pods"]);
    }
}
