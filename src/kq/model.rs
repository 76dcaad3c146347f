/// One row of `kubectl get pods --all-namespaces`.
///
/// `columns` carries the remaining status fields (READY, STATUS, RESTARTS,
/// AGE) untouched; kq never interprets them. Records are rebuilt from a
/// fresh kubectl call on every invocation and have no identity beyond
/// their field values.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PodRecord {
    pub namespace: String,
    pub name: String,
    pub columns: Vec<String>,
}

impl PodRecord {
    pub fn new(namespace: impl Into<String>, name: impl Into<String>) -> Self {
        Self {
            namespace: namespace.into(),
            name: name.into(),
            columns: Vec::new(),
        }
    }

    pub fn with_columns(mut self, columns: Vec<String>) -> Self {
        self.columns = columns;
        self
    }
}

/// One row of a namespace-scoped `kubectl get deployments` listing.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DeploymentRecord {
    pub name: String,
    pub columns: Vec<String>,
}

impl DeploymentRecord {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            columns: Vec::new(),
        }
    }

    pub fn with_columns(mut self, columns: Vec<String>) -> Self {
        self.columns = columns;
        self
    }

    /// The READY column when present (e.g. "2/2").
    pub fn ready(&self) -> Option<&str> {
        self.columns.first().map(String::as_str)
    }
}
