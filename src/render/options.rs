use serde::{Deserialize, Serialize};

/// Figure layout. Panels are laid out row-major, `columns` per row.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct RenderOptions {
    pub width: u32,
    pub panel_height: u32,
    pub columns: usize,
    pub font_size: u32,
}

impl Default for RenderOptions {
    fn default() -> Self {
        Self { width: 1200, panel_height: 320, columns: 3, font_size: 16 }
    }
}
