//! In-memory gateway for tests: fixed record sets, no subprocess.

use std::cell::RefCell;

use crate::error::Result;
use crate::model::{DeploymentRecord, PodRecord};

use super::ClusterGateway;

/// Serves canned cluster state and records every call it receives, so tests
/// can assert both on outcomes and on which lookups were (not) issued.
#[derive(Debug, Default)]
pub struct StaticGateway {
    pods: Vec<PodRecord>,
    deployments: Vec<(String, DeploymentRecord)>,
    hidden_scoped: Vec<String>,
    calls: RefCell<Vec<String>>,
}

impl StaticGateway {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_pod(mut self, namespace: &str, name: &str) -> Self {
        self.pods.push(PodRecord::new(namespace, name));
        self
    }

    pub fn with_deployment(mut self, namespace: &str, name: &str, ready: &str) -> Self {
        self.deployments.push((
            namespace.to_string(),
            DeploymentRecord::new(name).with_columns(vec![ready.to_string()]),
        ));
        self
    }

    /// Make the scoped pod listing for `namespace` come back empty even
    /// though the all-pods listing still mentions it, simulating pods
    /// vanishing between the two calls.
    pub fn with_hidden_scoped_listing(mut self, namespace: &str) -> Self {
        self.hidden_scoped.push(namespace.to_string());
        self
    }

    /// Calls received so far, e.g. `["all_pods", "pods_in prod"]`.
    pub fn calls(&self) -> Vec<String> {
        self.calls.borrow().clone()
    }

    fn record(&self, call: impl Into<String>) {
        self.calls.borrow_mut().push(call.into());
    }
}

impl ClusterGateway for StaticGateway {
    fn all_pods(&self) -> Result<Vec<PodRecord>> {
        self.record("all_pods");
        Ok(self.pods.clone())
    }

    fn pods_in(&self, namespace: &str) -> Result<Vec<PodRecord>> {
        self.record(format!("pods_in {namespace}"));
        if self.hidden_scoped.iter().any(|ns| ns == namespace) {
            return Ok(Vec::new());
        }
        Ok(self
            .pods
            .iter()
            .filter(|p| p.namespace == namespace)
            .cloned()
            .collect())
    }

    fn deployments_in(&self, namespace: &str) -> Result<Vec<DeploymentRecord>> {
        self.record(format!("deployments_in {namespace}"));
        Ok(self
            .deployments
            .iter()
            .filter(|(ns, _)| ns == namespace)
            .map(|(_, d)| d.clone())
            .collect())
    }

    fn pod_logs(&self, namespace: &str, pod: &str, follow: bool) -> Result<()> {
        self.record(format!("pod_logs {namespace} {pod} follow={follow}"));
        Ok(())
    }

    fn pod_shell(&self, namespace: &str, pod: &str) -> Result<()> {
        self.record(format!("pod_shell {namespace} {pod}"));
        Ok(())
    }

    fn scale_deployment(&self, namespace: &str, deployment: &str, replicas: u32) -> Result<()> {
        self.record(format!("scale {namespace} {deployment} {replicas}"));
        Ok(())
    }
}
