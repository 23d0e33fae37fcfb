use std::sync::{Arc, Mutex};

use serde::{Deserialize, Serialize};

#[derive(Default, Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Vector3 {
    pub x: f64,
    pub y: f64,
    pub z: f64,
}

impl Vector3 {
    pub fn new(x: f64, y: f64, z: f64) -> Self {
        Vector3 { x, y, z }
    }
}

/// Last-known gimbal orientation, shared between the caller-facing client and
/// the feedback task.
#[derive(Default, Debug)]
pub struct PositionState {
    /// Orientation from the most recent feedback message, radians.
    pub current: Option<Vector3>,

    /// First orientation ever observed (this run or a previous one). Once set
    /// it never changes for the remainder of the run.
    pub initial: Option<Vector3>,
}

// Not a RwLock: there is at most one reader at any given moment
pub type SharedPosition = Arc<Mutex<PositionState>>;
