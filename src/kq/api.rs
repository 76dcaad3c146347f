//! # API facade
//!
//! Thin entry point over the command layer, generic over the gateway so the
//! same surface serves `KubectlGateway` in the binary and `StaticGateway`
//! in tests. No business logic lives here and nothing here touches the
//! terminal; handlers get back `CmdResult` values and decide how to render
//! them.

use crate::commands;
use crate::error::Result;
use crate::gateway::ClusterGateway;

pub use crate::commands::pod_exec::PodAction;
pub use crate::commands::{CmdMessage, CmdResult, DispatchAction, Listing, MessageLevel};

pub struct KqApi<G: ClusterGateway> {
    gateway: G,
}

impl<G: ClusterGateway> KqApi<G> {
    pub fn new(gateway: G) -> Self {
        Self { gateway }
    }

    pub fn all_namespaces(&self) -> Result<CmdResult> {
        commands::namespaces::all(&self.gateway)
    }

    pub fn all_pods(&self) -> Result<CmdResult> {
        commands::pods::all(&self.gateway)
    }

    pub fn pods_in_namespace(&self, query: &str) -> Result<CmdResult> {
        commands::pods::in_namespace(&self.gateway, query)
    }

    pub fn find_namespace(&self, query: &str) -> Result<CmdResult> {
        commands::find::namespace(&self.gateway, query)
    }

    pub fn find_pod(&self, query: &str) -> Result<CmdResult> {
        commands::find::pod(&self.gateway, query)
    }

    pub fn pod_command(&self, ns_query: &str, pod_query: &str, action: PodAction) -> Result<CmdResult> {
        commands::pod_exec::run(&self.gateway, ns_query, pod_query, action)
    }

    pub fn scale(
        &self,
        ns_query: &str,
        deploy_query: Option<&str>,
        replicas: Option<&str>,
    ) -> Result<CmdResult> {
        commands::scale::run(&self.gateway, ns_query, deploy_query, replicas)
    }

    /// Execute a dispatch action produced by one of the commands. The logs
    /// and shell actions hand the terminal to kubectl until it exits.
    pub fn execute(&self, action: &DispatchAction) -> Result<()> {
        match action {
            DispatchAction::Logs {
                namespace,
                pod,
                follow,
            } => self.gateway.pod_logs(namespace, pod, *follow),
            DispatchAction::Shell { namespace, pod } => self.gateway.pod_shell(namespace, pod),
            DispatchAction::Scale {
                namespace,
                deployment,
                replicas,
            } => self.gateway.scale_deployment(namespace, deployment, *replicas),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::gateway::static_data::StaticGateway;

    #[test]
    fn execute_routes_actions_to_the_gateway() {
        let api = KqApi::new(StaticGateway::new());
        api.execute(&DispatchAction::Logs {
            namespace: "prod".into(),
            pod: "web-1".into(),
            follow: true,
        })
        .unwrap();
        api.execute(&DispatchAction::Scale {
            namespace: "prod".into(),
            deployment: "web".into(),
            replicas: 2,
        })
        .unwrap();
        assert_eq!(
            api.gateway.calls(),
            vec!["pod_logs prod web-1 follow=true", "scale prod web 2"]
        );
    }
}
