use serde::{Deserialize, Serialize};

/// Parameters of one generation pass.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct OutlineSettings {
    /// Samples strictly above this value are solid.
    pub threshold: f32,
    /// World-space width of one cell. Scales every emitted position.
    pub cell_size: f32,
}

impl Default for OutlineSettings {
    fn default() -> Self {
        Self {
            threshold: 0.0,
            cell_size: 1.0,
        }
    }
}
