//! Token routing: a pure dispatch table from the invocation's positional
//! tokens to an intent. No cluster calls happen here, so every row of the
//! table is unit-testable.

use kq::api::PodAction;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Intent {
    Help,
    AllNamespaces,
    AllPods,
    AllUsage,
    FindNamespace { query: String },
    FindPod { query: String },
    FindNamespaceUsage,
    FindPodUsage,
    FindUsage,
    NamespacePods { query: String },
    Scale {
        namespace: String,
        deployment: Option<String>,
        replicas: Option<String>,
    },
    PodCommand {
        namespace: String,
        pod: String,
        action: PodAction,
    },
    /// Context help for pod commands; `unknown` names an unrecognized
    /// subcommand when one was given.
    PodCommandUsage { unknown: Option<String> },
}

/// Keywords are matched case-insensitively; query tokens are carried raw so
/// the exact-alias comparison and highlighting see what the user typed.
pub fn route(tokens: &[String]) -> Intent {
    let Some(first) = tokens.first() else {
        return Intent::Help;
    };
    if first.to_lowercase().contains("help") {
        return Intent::Help;
    }

    match first.to_lowercase().as_str() {
        "all" => {
            return match tokens.get(1).map(|t| t.to_lowercase()) {
                Some(p) if p == "ns" || p == "namespaces" => Intent::AllNamespaces,
                Some(p) if p.contains("pod") => Intent::AllPods,
                _ => Intent::AllUsage,
            }
        }
        "find" => {
            return match tokens.get(1).map(|t| t.to_lowercase()) {
                Some(p) if p == "ns" || p == "namespaces" => match tokens.get(2) {
                    Some(query) => Intent::FindNamespace { query: query.clone() },
                    None => Intent::FindNamespaceUsage,
                },
                Some(p) if p.contains("pod") => match tokens.get(2) {
                    Some(query) => Intent::FindPod { query: query.clone() },
                    None => Intent::FindPodUsage,
                },
                _ => Intent::FindUsage,
            }
        }
        _ => {}
    }

    if tokens.len() == 1 || tokens[1].to_lowercase() == "pods" {
        return Intent::NamespacePods {
            query: tokens[0].clone(),
        };
    }

    if tokens[1].to_lowercase() == "scale" {
        return Intent::Scale {
            namespace: tokens[0].clone(),
            deployment: tokens.get(2).cloned(),
            replicas: tokens.get(3).cloned(),
        };
    }

    if tokens.len() >= 3 {
        let namespace = tokens[0].clone();
        let pod = tokens[1].clone();
        return match tokens[2].to_lowercase().as_str() {
            "logs" => {
                let follow = tokens[3..].iter().any(|t| t == "-f" || t == "--follow");
                Intent::PodCommand {
                    namespace,
                    pod,
                    action: PodAction::Logs { follow },
                }
            }
            "bash" => Intent::PodCommand {
                namespace,
                pod,
                action: PodAction::Shell,
            },
            other => Intent::PodCommandUsage {
                unknown: Some(other.to_string()),
            },
        };
    }

    Intent::PodCommandUsage { unknown: None }
}
