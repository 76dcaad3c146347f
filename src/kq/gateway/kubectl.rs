//! Production gateway: shells out to kubectl.

use std::process::{Command, Stdio};
use std::sync::mpsc;
use std::thread;
use std::time::Duration;

use crate::error::{KqError, Result};
use crate::model::{DeploymentRecord, PodRecord};

use super::{parse_all_namespace_rows, parse_deployment_rows, parse_scoped_pod_rows, ClusterGateway};

const DEFAULT_TIMEOUT_SECS: u64 = 20;

/// Talks to the cluster through the `kubectl` binary on `$PATH`, relying on
/// its configured context and credentials.
pub struct KubectlGateway {
    timeout: Duration,
}

impl KubectlGateway {
    pub fn new() -> Self {
        Self {
            timeout: Duration::from_secs(DEFAULT_TIMEOUT_SECS),
        }
    }

    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }

    /// Run a listing command, capture stdout, and bound the wait.
    ///
    /// The child is reaped on a helper thread so `recv_timeout` can cap the
    /// wait without the pipe-buffer deadlock of reading after `wait`. A
    /// timeout is fatal to the invocation, which exits right away; the
    /// straggling child is left to the OS.
    fn capture(&self, args: &[&str]) -> Result<String> {
        let child = Command::new("kubectl")
            .args(args)
            .stdin(Stdio::null())
            .stdout(Stdio::piped())
            .stderr(Stdio::piped())
            .spawn()?;

        let (tx, rx) = mpsc::channel();
        thread::spawn(move || {
            let _ = tx.send(child.wait_with_output());
        });

        let output = match rx.recv_timeout(self.timeout) {
            Ok(result) => result?,
            Err(_) => return Err(KqError::Timeout(self.timeout.as_secs())),
        };

        if !output.status.success() {
            let stderr = String::from_utf8_lossy(&output.stderr);
            return Err(KqError::Kubectl(format!(
                "kubectl {} exited with {}: {}",
                args.join(" "),
                output.status,
                stderr.trim()
            )));
        }

        String::from_utf8(output.stdout)
            .map_err(|_| KqError::Kubectl("non-UTF-8 output from kubectl".into()))
    }

    /// Run a command with inherited stdio, handing the terminal to kubectl
    /// until it exits. No capture, no timeout.
    fn passthrough(&self, args: &[&str]) -> Result<()> {
        let status = Command::new("kubectl").args(args).status()?;
        if !status.success() {
            return Err(KqError::Kubectl(format!(
                "kubectl {} exited with {}",
                args.join(" "),
                status
            )));
        }
        Ok(())
    }
}

impl Default for KubectlGateway {
    fn default() -> Self {
        Self::new()
    }
}

impl ClusterGateway for KubectlGateway {
    fn all_pods(&self) -> Result<Vec<PodRecord>> {
        let output = self.capture(&["get", "pods", "--all-namespaces"])?;
        parse_all_namespace_rows(&output)
    }

    fn pods_in(&self, namespace: &str) -> Result<Vec<PodRecord>> {
        let scope = format!("--namespace={namespace}");
        let output = self.capture(&["get", "pods", &scope])?;
        parse_scoped_pod_rows(namespace, &output)
    }

    fn deployments_in(&self, namespace: &str) -> Result<Vec<DeploymentRecord>> {
        let scope = format!("--namespace={namespace}");
        let output = self.capture(&["get", "deployments", &scope])?;
        parse_deployment_rows(&output)
    }

    fn pod_logs(&self, namespace: &str, pod: &str, follow: bool) -> Result<()> {
        let scope = format!("--namespace={namespace}");
        let mut args: Vec<&str> = vec!["logs", &scope];
        if follow {
            args.push("-f");
        }
        args.push(pod);
        self.passthrough(&args)
    }

    fn pod_shell(&self, namespace: &str, pod: &str) -> Result<()> {
        let scope = format!("--namespace={namespace}");
        self.passthrough(&["exec", "-it", &scope, pod, "--", "bash"])
    }

    fn scale_deployment(&self, namespace: &str, deployment: &str, replicas: u32) -> Result<()> {
        let scope = format!("--namespace={namespace}");
        let count = format!("--replicas={replicas}");
        self.passthrough(&["scale", "deployment", deployment, &scope, &count])
    }
}
