use std::fmt;

use serde::{Deserialize, Serialize};

/// A TCP port number.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Port(pub u16);

impl Port {
    /// Ask the OS to pick a free port when binding.
    pub const ANY: Port = Port(0);

    pub fn get(self) -> u16 {
        self.0
    }
}

impl From<u16> for Port {
    fn from(p: u16) -> Self {
        Port(p)
    }
}

impl From<Port> for u16 {
    fn from(p: Port) -> u16 {
        p.0
    }
}

impl fmt::Display for Port {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}
