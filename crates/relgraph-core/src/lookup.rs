//! # Lookup
//!
//! Attribute scans over the node store.

use crate::graph::Graph;
use crate::NodeField;

impl Graph {
    /// Ids of every node whose `field` equals `value`, in node order.
    #[must_use]
    pub fn find_by(&self, field: NodeField, value: &str) -> Vec<String> {
        self.nodes()
            .filter(|node| node.field(field) == value)
            .map(|node| node.id.clone())
            .collect()
    }

    /// String-keyed variant of [`find_by`](Self::find_by).
    ///
    /// Returns `None` both for an unknown field name and for a scan with no
    /// matches; callers cannot tell the two apart.
    #[must_use]
    pub fn find_all(&self, field: &str, value: &str) -> Option<Vec<String>> {
        let field = field.parse::<NodeField>().ok()?;
        let ids = self.find_by(field, value);
        (!ids.is_empty()).then_some(ids)
    }
}

// =============================================================================
// TESTS
// =============================================================================
