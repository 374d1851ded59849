use serde::Deserialize;

use crate::Error;
use crate::NodeRole;
use crate::Result;

#[derive(Debug, Deserialize, Clone)]
pub struct NodeConfig {
    /// Deployment form of this process
    #[serde(default = "default_role")]
    pub role: NodeRole,

    /// Operator-assigned instance id; generated when absent
    #[serde(default)]
    pub instance_id: Option<String>,
}

impl Default for NodeConfig {
    fn default() -> Self {
        Self {
            role: default_role(),
            instance_id: None,
        }
    }
}

impl NodeConfig {
    pub fn validate(&self) -> Result<()> {
        if let Some(id) = &self.instance_id {
            if id.trim().is_empty() {
                return Err(Error::InvalidConfig(
                    "instance_id cannot be blank when set".into(),
                ));
            }
        }
        Ok(())
    }
}

fn default_role() -> NodeRole {
    NodeRole::StandaloneProxy
}
