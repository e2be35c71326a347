//! Server capability report

use serde::{Deserialize, Serialize};

/// Static declaration of which protocol areas this server supports
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct Capabilities {
    pub tools: bool,
    pub resources: bool,
    pub prompts: bool,
    pub logging: bool,
}

impl Capabilities {
    /// The capability set of this server
    pub fn current() -> Self {
        Self {
            tools: true,
            resources: true,
            prompts: true,
            logging: false,
        }
    }
}
