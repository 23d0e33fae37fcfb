use std::sync::{Arc, Mutex};
use std::time::Duration;

use anyhow::Context;

use crate::command::{CameraAction, GimbalAngleCommand, GimbalSpeedCommand, ModeFlag};
use crate::config::GimbalConfig;
use crate::interface::{
    CameraService, ParamStore, Publisher, PARAM_INITIAL_X, PARAM_INITIAL_Y, PARAM_INITIAL_Z,
};
use crate::state::{PositionState, SharedPosition, Vector3};
use crate::task::FeedbackTask;

/// Arguments for [`GimbalClient::rotate`]. Angles are in degrees; `mode` and
/// `duration` fall back to the session defaults when left `None`.
#[derive(Debug, Clone, Copy, Default)]
pub struct Rotation {
    pub roll: f64,
    pub pitch: f64,
    pub yaw: f64,
    pub mode: Option<ModeFlag>,
    pub duration: Option<f64>,
}

/// Control surface for a camera gimbal reached over a messaging substrate.
///
/// Angle and speed commands are published fire-and-forget; camera actions go
/// through a request/response endpoint. Motion completion is assumed after the
/// command's nominal duration elapses, never confirmed by the device.
pub struct GimbalClient {
    angle_pub: Arc<dyn Publisher<GimbalAngleCommand>>,
    speed_pub: Arc<dyn Publisher<GimbalSpeedCommand>>,
    camera: Arc<dyn CameraService>,
    config: GimbalConfig,
    position: SharedPosition,
}

impl GimbalClient {
    /// Binds the client to its transport endpoints.
    ///
    /// Recovers a previously persisted initial position from the parameter
    /// store if one exists, then waits for the camera-action endpoint to come
    /// up. That wait has no timeout: if the endpoint never appears, this
    /// pends forever.
    ///
    /// The returned [`FeedbackTask`] owns the orientation subscription and
    /// must be spawned for position tracking to work.
    pub async fn connect(
        config: GimbalConfig,
        angle_pub: Arc<dyn Publisher<GimbalAngleCommand>>,
        speed_pub: Arc<dyn Publisher<GimbalSpeedCommand>>,
        camera: Arc<dyn CameraService>,
        params: Arc<dyn ParamStore>,
        feedback_rx: flume::Receiver<Vector3>,
    ) -> anyhow::Result<(Self, FeedbackTask)> {
        let initial = match params.get(PARAM_INITIAL_X).await? {
            Some(x) => {
                let y = params
                    .get(PARAM_INITIAL_Y)
                    .await?
                    .context("persisted initial position is missing its y component")?;
                let z = params
                    .get(PARAM_INITIAL_Z)
                    .await?
                    .context("persisted initial position is missing its z component")?;

                let initial = Vector3::new(x, y, z);
                debug!("recovered initial gimbal position {:?}", initial);
                Some(initial)
            }
            None => None,
        };

        let position: SharedPosition = Arc::new(Mutex::new(PositionState {
            current: None,
            initial,
        }));

        info!("waiting for camera action service");
        camera.wait_available().await;
        debug!("camera action service is available");

        let task = FeedbackTask::new(feedback_rx, position.clone(), params);

        Ok((
            GimbalClient {
                angle_pub,
                speed_pub,
                camera,
                config,
                position,
            },
            task,
        ))
    }

    /// Publishes an angle command and sleeps for the move's duration.
    ///
    /// Completion is assumed once the duration elapses; there is no feedback
    /// acknowledging that the move actually finished.
    pub async fn rotate(&self, rotation: Rotation) {
        let mode = rotation.mode.unwrap_or(self.config.mode);
        let duration = rotation.duration.unwrap_or(self.config.duration);

        let msg = GimbalAngleCommand {
            mode,
            duration,
            roll: rotation.roll.to_radians(),
            pitch: rotation.pitch.to_radians(),
            yaw: rotation.yaw.to_radians(),
        };

        trace!("publishing angle command {:?}", msg);
        self.angle_pub.publish(msg).await;

        tokio::time::sleep(Duration::from_secs_f64(duration)).await;
    }

    /// Publishes a rotation-rate command, angles in degrees/second.
    ///
    /// The outbound schema's axis order is not roll/pitch/yaw: roll maps to
    /// the vector's y component, pitch to x, yaw to z.
    pub async fn set_speed(&self, roll: f64, pitch: f64, yaw: f64) {
        let msg = GimbalSpeedCommand {
            vector: Vector3 {
                x: pitch.to_radians(),
                y: roll.to_radians(),
                z: yaw.to_radians(),
            },
        };

        trace!("publishing speed command {:?}", msg);
        self.speed_pub.publish(msg).await;

        tokio::time::sleep(Duration::from_secs(1)).await;
    }

    /// Sets the session default control mode. The byte is not validated; an
    /// unknown value is forwarded to the driver as-is.
    pub fn set_mode(&mut self, mode: ModeFlag) {
        self.config.mode = mode;
    }

    /// Sets the session default move duration in seconds.
    pub fn set_duration(&mut self, duration: f64) {
        self.config.duration = duration;
    }

    /// Returns the gimbal to zero in the vehicle frame, then waits an extra
    /// second for the motion to settle.
    pub async fn reset(&self) {
        self.rotate(Rotation {
            mode: Some(ModeFlag::ABS_ALL),
            duration: Some(1.0),
            ..Default::default()
        })
        .await;

        tokio::time::sleep(Duration::from_secs(1)).await;
    }

    /// Captures a still image. Service failures propagate to the caller.
    pub async fn take_picture(&self) -> anyhow::Result<()> {
        self.camera
            .call(CameraAction::TakePicture)
            .await
            .context("camera capture request failed")?;
        Ok(())
    }

    /// Starts video recording. Service failures propagate to the caller.
    pub async fn start_video(&self) -> anyhow::Result<()> {
        self.camera
            .call(CameraAction::StartVideo)
            .await
            .context("camera start-recording request failed")?;
        Ok(())
    }

    /// Stops the current video recording. Service failures propagate to the
    /// caller.
    pub async fn end_video(&self) -> anyhow::Result<()> {
        self.camera
            .call(CameraAction::StopVideo)
            .await
            .context("camera stop-recording request failed")?;
        Ok(())
    }

    /// Orientation from the most recent feedback message, radians.
    pub fn current_position(&self) -> Option<Vector3> {
        self.position.lock().unwrap().current
    }

    /// First orientation observed, this run or a previous one.
    pub fn initial_position(&self) -> Option<Vector3> {
        self.position.lock().unwrap().initial
    }
}
