use async_trait::async_trait;

use crate::command::{CameraAction, CameraActionResponse};

/// Persisted-parameter keys for the initial gimbal position.
pub const PARAM_INITIAL_X: &str = "gimbal_initial_position/x";
pub const PARAM_INITIAL_Y: &str = "gimbal_initial_position/y";
pub const PARAM_INITIAL_Z: &str = "gimbal_initial_position/z";

/// Outbound fire-and-forget publisher on the messaging substrate.
///
/// Delivery is the transport's contract; a message the transport drops is not
/// observable here, so publishing is infallible at this seam.
#[async_trait]
pub trait Publisher<T>: Send + Sync {
    async fn publish(&self, msg: T);
}

/// Synchronous request/response endpoint for camera actions.
#[async_trait]
pub trait CameraService: Send + Sync {
    /// Resolves once the endpoint is reachable. No timeout: if the endpoint
    /// never appears, this pends forever.
    async fn wait_available(&self);

    /// Issues one action and waits for the response. Transport-level service
    /// failures surface here and are not retried by the caller.
    async fn call(&self, action: CameraAction) -> anyhow::Result<CameraActionResponse>;
}

/// Key/value parameter store surviving process restarts. The concrete store
/// (file, external service) is the integrator's choice.
#[async_trait]
pub trait ParamStore: Send + Sync {
    async fn get(&self, key: &str) -> anyhow::Result<Option<f64>>;

    async fn set(&self, key: &str, value: f64) -> anyhow::Result<()>;
}
