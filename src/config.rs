use serde::Deserialize;

use crate::command::ModeFlag;

/// Session defaults for angle commands. Owned by the client and mutated only
/// through its setters; a per-call override never writes back here.
#[derive(Debug, Clone, Copy, Deserialize)]
pub struct GimbalConfig {
    /// Control mode used when a rotate call does not specify one.
    #[serde(default)]
    pub mode: ModeFlag,

    /// Seconds a move is expected to take when not specified per call.
    #[serde(default = "default_duration")]
    pub duration: f64,
}

fn default_duration() -> f64 {
    1.0
}

impl Default for GimbalConfig {
    fn default() -> Self {
        GimbalConfig {
            mode: ModeFlag::default(),
            duration: default_duration(),
        }
    }
}
