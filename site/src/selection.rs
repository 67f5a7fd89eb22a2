//! Which feature the showcase is currently displaying.

use crate::content::{FeatureId, FeatureRecord};

/// Exactly one selected feature; starts at the first in display order.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct FeatureSelection {
    current: FeatureId,
}

impl Default for FeatureSelection {
    fn default() -> Self {
        FeatureSelection {
            current: FeatureId::ALL[0],
        }
    }
}

impl FeatureSelection {
    /// The selected identifier.
    pub fn current(&self) -> FeatureId {
        self.current
    }

    /// Whether `id` is the selected one.
    pub fn is_selected(&self, id: FeatureId) -> bool {
        self.current == id
    }

    /// Record of the selected feature.
    pub fn record(&self) -> &'static FeatureRecord {
        self.current.record()
    }

    /// Make `id` current. Returns `false` when it already was.
    pub fn select(&mut self, id: FeatureId) -> bool {
        if self.current == id {
            return false;
        }
        tracing::debug!(from = %self.current, to = %id, "feature selected");
        self.current = id;
        true
    }
}
