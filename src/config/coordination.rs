use serde::Deserialize;

use crate::Error;
use crate::Result;

/// Connectivity settings for the external coordination store adapter.
///
/// The in-memory repository ignores these; ZooKeeper/etcd-class adapters
/// read them at construction.
#[derive(Debug, Deserialize, Clone)]
pub struct CoordinationConfig {
    /// Store endpoints, e.g. `["10.0.0.1:2181", "10.0.0.2:2181"]`
    #[serde(default)]
    pub endpoints: Vec<String>,

    /// Per-operation timeout handed to the store client
    #[serde(default = "default_operation_timeout_ms")]
    pub operation_timeout_ms: u64,
}

impl Default for CoordinationConfig {
    fn default() -> Self {
        Self {
            endpoints: Vec::new(),
            operation_timeout_ms: default_operation_timeout_ms(),
        }
    }
}

impl CoordinationConfig {
    pub fn validate(&self) -> Result<()> {
        if self.operation_timeout_ms == 0 {
            return Err(Error::InvalidConfig(
                "operation_timeout_ms must be greater than zero".into(),
            ));
        }
        if self.endpoints.iter().any(|endpoint| endpoint.trim().is_empty()) {
            return Err(Error::InvalidConfig(
                "coordination endpoints cannot contain blank entries".into(),
            ));
        }
        Ok(())
    }
}

fn default_operation_timeout_ms() -> u64 {
    500
}
