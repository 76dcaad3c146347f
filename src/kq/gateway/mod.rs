//! # Cluster data gateway
//!
//! Everything kq knows about a cluster comes through the [`ClusterGateway`]
//! trait, so the command layer never touches a subprocess directly:
//!
//! - [`kubectl::KubectlGateway`]: production implementation that shells out
//!   to kubectl and parses its tabular output.
//! - [`static_data::StaticGateway`]: fixed record sets for tests, which also
//!   records every call it receives.
//!
//! Listing output framing (shared by both kubectl shapes): one header line,
//! N whitespace-delimited data lines, and possibly a trailing blank line.
//! The parsers here are pure so they can be tested without a subprocess.

use crate::error::{KqError, Result};
use crate::model::{DeploymentRecord, PodRecord};

pub mod kubectl;
pub mod static_data;

/// Synchronous boundary to the underlying cluster tool.
///
/// Listing calls are bounded by a timeout and fail the whole invocation on
/// any error; the dispatch calls (`pod_logs`, `pod_shell`) hand the terminal
/// to the child process until it exits.
pub trait ClusterGateway {
    /// Every pod in every namespace.
    fn all_pods(&self) -> Result<Vec<PodRecord>>;

    /// Pods in a single namespace.
    fn pods_in(&self, namespace: &str) -> Result<Vec<PodRecord>>;

    /// Deployments in a single namespace.
    fn deployments_in(&self, namespace: &str) -> Result<Vec<DeploymentRecord>>;

    /// Fetch logs for a pod, optionally following the stream.
    fn pod_logs(&self, namespace: &str, pod: &str, follow: bool) -> Result<()>;

    /// Open an interactive shell inside a pod.
    fn pod_shell(&self, namespace: &str, pod: &str) -> Result<()>;

    /// Scale a deployment to the given replica count.
    fn scale_deployment(&self, namespace: &str, deployment: &str, replicas: u32) -> Result<()>;
}

/// Data lines of a tabular listing: header stripped, trailing blank line
/// stripped, interior lines kept verbatim.
fn data_lines(output: &str) -> impl Iterator<Item = &str> {
    output
        .lines()
        .skip(1)
        .filter(|line| !line.trim().is_empty())
}

/// Parse `kubectl get pods --all-namespaces` output.
/// Field 0 is the namespace, field 1 the pod name.
pub fn parse_all_namespace_rows(output: &str) -> Result<Vec<PodRecord>> {
    data_lines(output)
        .map(|line| {
            let mut fields = line.split_whitespace().map(String::from);
            match (fields.next(), fields.next()) {
                (Some(namespace), Some(name)) => {
                    Ok(PodRecord::new(namespace, name).with_columns(fields.collect()))
                }
                _ => Err(KqError::Kubectl(format!("malformed pod row: {line:?}"))),
            }
        })
        .collect()
}

/// Parse a namespace-scoped `kubectl get pods` listing, attaching the known
/// namespace. Field 0 is the pod name.
pub fn parse_scoped_pod_rows(namespace: &str, output: &str) -> Result<Vec<PodRecord>> {
    data_lines(output)
        .map(|line| {
            let mut fields = line.split_whitespace().map(String::from);
            match fields.next() {
                Some(name) => {
                    Ok(PodRecord::new(namespace, name).with_columns(fields.collect()))
                }
                None => Err(KqError::Kubectl(format!("malformed pod row: {line:?}"))),
            }
        })
        .collect()
}

/// Parse a namespace-scoped `kubectl get deployments` listing.
pub fn parse_deployment_rows(output: &str) -> Result<Vec<DeploymentRecord>> {
    data_lines(output)
        .map(|line| {
            let mut fields = line.split_whitespace().map(String::from);
            match fields.next() {
                Some(name) => {
                    Ok(DeploymentRecord::new(name).with_columns(fields.collect()))
                }
                None => Err(KqError::Kubectl(format!(
                    "malformed deployment row: {line:?}"
                ))),
            }
        })
        .collect()
}
