//! Engine Configuration

use serde::{Deserialize, Serialize};

use crate::error::{KanbanError, Result};
use crate::reorder::CrossColumnPlacement;

/// Pointer travel before a press on a handle turns into a drag
pub const DEFAULT_DRAG_THRESHOLD_PX: i32 = 10;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct KanbanConfig {
    /// Where a task lands when dragged over a task in another column
    pub cross_column_placement: CrossColumnPlacement,
    /// Movement (either axis) that starts a drag
    pub drag_threshold_px: i32,
}

impl Default for KanbanConfig {
    fn default() -> Self {
        Self {
            cross_column_placement: CrossColumnPlacement::default(),
            drag_threshold_px: DEFAULT_DRAG_THRESHOLD_PX,
        }
    }
}

impl KanbanConfig {
    pub fn from_json(data: &str) -> Result<Self> {
        serde_json::from_str(data).map_err(KanbanError::InvalidConfig)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_partial_config_keeps_defaults() {
        let config = KanbanConfig::from_json(r#"{"crossColumnPlacement":"atTarget"}"#).unwrap();
        assert_eq!(config.cross_column_placement, CrossColumnPlacement::AtTarget);
        assert_eq!(config.drag_threshold_px, DEFAULT_DRAG_THRESHOLD_PX);
    }

    #[test]
    fn test_default_placement_matches_existing_boards() {
        assert_eq!(
            KanbanConfig::default().cross_column_placement,
            CrossColumnPlacement::BeforeTarget
        );
    }

    #[test]
    fn test_unknown_placement_is_rejected() {
        let err = KanbanConfig::from_json(r#"{"crossColumnPlacement":"sideways"}"#).unwrap_err();
        assert!(matches!(err, KanbanError::InvalidConfig(_)));
    }
}
