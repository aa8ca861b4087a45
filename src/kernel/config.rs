use serde::{Deserialize, Serialize};

/// Sizing and history limits enforced by the editor kernel.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct EditorLimits {
    /// Undo snapshots kept before the oldest is dropped.
    pub history_depth: usize,
    /// Cell size ceiling for a 3x3 grid.
    pub small_grid_cell_ceiling: u32,
    /// Cell size ceiling for every other grid size.
    pub cell_size_ceiling: u32,
    /// `stamp.size = ceiling - stamp_size_margin` whenever a clamp fires.
    pub stamp_size_margin: u32,
}

impl Default for EditorLimits {
    fn default() -> Self {
        Self {
            history_depth: 100,
            small_grid_cell_ceiling: 350,
            cell_size_ceiling: 200,
            stamp_size_margin: 20,
        }
    }
}

impl EditorLimits {
    pub fn cell_ceiling(&self, grid_size: usize) -> u32 {
        if grid_size == 3 {
            self.small_grid_cell_ceiling
        } else {
            self.cell_size_ceiling
        }
    }
}

#[cfg(test)]
#[path = "../../tests/unit/kernel/config.rs"]
mod tests;
