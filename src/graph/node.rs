//! Node identity.
//!
//! Nodes are the vertices in the route graph. Identity is the whole story:
//! a node is its id (a city name in the route-planning UI) and carries no
//! further payload. Positions, labels and selection state belong to the
//! rendering layer, not the engine.

use std::borrow::Borrow;
use std::fmt;

use serde::{Deserialize, Serialize};

/// Unique node identifier.
///
/// Wraps the user-supplied string id. The wrapper implements `Borrow<str>`
/// so maps keyed by `NodeId` can be queried with a plain `&str` without
/// allocating.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct NodeId(String);

impl NodeId {
    /// Create a new NodeId from anything string-like.
    #[inline]
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    /// Get the id as a string slice.
    #[inline]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for NodeId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl Borrow<str> for NodeId {
    #[inline]
    fn borrow(&self) -> &str {
        &self.0
    }
}

impl From<&str> for NodeId {
    #[inline]
    fn from(id: &str) -> Self {
        Self(id.to_string())
    }
}

impl From<String> for NodeId {
    #[inline]
    fn from(id: String) -> Self {
        Self(id)
    }
}

impl From<NodeId> for String {
    #[inline]
    fn from(id: NodeId) -> Self {
        id.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_node_id() {
        let id = NodeId::new("Hyderabad");
        assert_eq!(id.as_str(), "Hyderabad");
        assert_eq!(format!("{}", id), "Hyderabad");
    }

    #[test]
    fn test_node_id_conversion() {
        let id: NodeId = "Warangal".into();
        let raw: String = id.into();
        assert_eq!(raw, "Warangal");
    }

    #[test]
    fn test_borrow_str_lookup() {
        use std::collections::HashMap;

        let mut map: HashMap<NodeId, u32> = HashMap::new();
        map.insert(NodeId::new("Vijayawada"), 1);
        assert_eq!(map.get("Vijayawada"), Some(&1));
    }
}
