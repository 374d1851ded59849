use nanoid::nanoid;
use serde::Deserialize;

/// Deployment form of the local process.
///
/// Read-only for the lifetime of the instance. The role informs secondary
/// collaborator decisions (e.g. a driver-embedded instance has no long-lived
/// proxy frontends to fan metadata out to); it never changes which lifecycle
/// protocol steps execute.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum NodeRole {
    /// Embedded in an application's database driver.
    DriverEmbedded,
    /// Standalone proxy instance fronting the cluster.
    StandaloneProxy,
}

/// Identity of the local compute node instance.
#[derive(Debug, Clone)]
pub struct InstanceMetadata {
    instance_id: String,
    role: NodeRole,
}

impl InstanceMetadata {
    /// New instance identity with a generated id.
    pub fn new(role: NodeRole) -> Self {
        Self {
            instance_id: nanoid!(),
            role,
        }
    }

    /// New instance identity with an operator-assigned id.
    pub fn with_id(
        instance_id: impl Into<String>,
        role: NodeRole,
    ) -> Self {
        Self {
            instance_id: instance_id.into(),
            role,
        }
    }

    pub fn instance_id(&self) -> &str {
        &self.instance_id
    }

    pub fn role(&self) -> NodeRole {
        self.role
    }
}
