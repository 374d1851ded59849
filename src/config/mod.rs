//! Configuration module for the metadata synchronization core.
//!
//! Hierarchical loading with priority:
//! 1. Default values (hardcoded)
//! 2. Explicit config file
//! 3. `METASYNC_CONFIG` file override
//! 4. Environment variables (highest priority)

mod coordination;
mod node;

pub use coordination::*;
pub use node::*;


use std::env;

use config::Config;
use config::Environment;
use config::File;
use serde::Deserialize;

use crate::Result;

#[derive(Debug, Deserialize, Clone, Default)]
pub struct Settings {
    /// Local node identity and role
    #[serde(default)]
    pub node: NodeConfig,

    /// Coordination store connectivity
    #[serde(default)]
    pub coordination: CoordinationConfig,
}

impl Settings {
    /// Load configuration from multiple sources with priority:
    /// 1. Explicit config file (if given)
    /// 2. `METASYNC_CONFIG` file override
    /// 3. Environment variables with the `METASYNC` prefix
    ///
    /// # Arguments
    /// * `config_path` - Optional path to a node configuration file
    pub fn load(config_path: Option<&str>) -> Result<Self> {
        let mut builder = Config::builder();

        if let Some(path) = config_path {
            builder = builder.add_source(File::with_name(path).required(true));
        }

        if let Ok(path) = env::var("METASYNC_CONFIG") {
            builder = builder.add_source(File::with_name(&path));
        }

        builder = builder.add_source(
            Environment::with_prefix("METASYNC")
                .separator("__")
                .ignore_empty(true)
                .try_parsing(true),
        );

        let settings: Settings = builder.build()?.try_deserialize()?;
        settings.validate()?;
        Ok(settings)
    }

    /// Validates every section.
    ///
    /// # Errors
    /// Returns `Error::InvalidConfig` if any configuration rules are violated
    pub fn validate(&self) -> Result<()> {
        self.node.validate()?;
        self.coordination.validate()
    }
}
