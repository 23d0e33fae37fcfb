use serde::{Deserialize, Serialize};

use crate::state::Vector3;

/// Gimbal control mode byte.
///
/// ABS means the target angles are relative to the vehicle frame, REL means
/// relative to the gimbal's current orientation. ALL/YAW/ROLL/PITCH selects
/// which axes the command is allowed to move; e.g. with `ABS_ROLL` only roll
/// changes, measured against the vehicle body.
///
/// Unknown byte values are not rejected here; they are forwarded as-is and
/// interpreted (or not) by the driver on the other side of the transport.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ModeFlag(pub u8);

impl ModeFlag {
    pub const ABS_ALL: ModeFlag = ModeFlag(0x01);
    pub const ABS_YAW: ModeFlag = ModeFlag(0x0D);
    pub const ABS_ROLL: ModeFlag = ModeFlag(0x0B);
    pub const ABS_PITCH: ModeFlag = ModeFlag(0x07);
    pub const REL_ALL: ModeFlag = ModeFlag(0x00);
    pub const REL_YAW: ModeFlag = ModeFlag(0x0C);
    pub const REL_ROLL: ModeFlag = ModeFlag(0x0A);
    pub const REL_PITCH: ModeFlag = ModeFlag(0x06);
}

impl Default for ModeFlag {
    fn default() -> Self {
        ModeFlag::REL_ALL
    }
}

/// Outbound angle command, fire-and-forget.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct GimbalAngleCommand {
    pub mode: ModeFlag,

    /// Seconds the move is expected to take.
    pub duration: f64,

    /// Roll in radians
    pub roll: f64,

    /// Pitch in radians
    pub pitch: f64,

    /// Yaw in radians
    pub yaw: f64,
}

/// Outbound rotation-rate command, fire-and-forget.
///
/// Axis convention follows the driver's message schema, not roll/pitch/yaw
/// order: `vector.x` is pitch rate, `vector.y` is roll rate, `vector.z` is yaw
/// rate, all in rad/s.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct GimbalSpeedCommand {
    pub vector: Vector3,
}

/// Camera actions accepted by the driver's request/response endpoint.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CameraAction {
    TakePicture,
    StartVideo,
    StopVideo,
}

impl CameraAction {
    /// Opcode as the endpoint's request schema defines it.
    pub fn opcode(self) -> u8 {
        match self {
            CameraAction::TakePicture => 0,
            CameraAction::StartVideo => 1,
            CameraAction::StopVideo => 2,
        }
    }
}

/// Response from the camera-action endpoint. The driver reports nothing we
/// act on, so this is opaque.
#[derive(Debug, Clone, Copy, Default)]
pub struct CameraActionResponse;
