use std::sync::Arc;

use tokio::select;
use tokio_util::sync::CancellationToken;

use crate::interface::{ParamStore, PARAM_INITIAL_X, PARAM_INITIAL_Y, PARAM_INITIAL_Z};
use crate::state::{SharedPosition, Vector3};

/// Consumes the inbound orientation feed and keeps the shared position state
/// current. The first reading ever observed also becomes the persisted
/// baseline; after that the baseline never changes for the rest of the run.
pub struct FeedbackTask {
    feedback_rx: flume::Receiver<Vector3>,
    position: SharedPosition,
    params: Arc<dyn ParamStore>,
}

impl FeedbackTask {
    pub(crate) fn new(
        feedback_rx: flume::Receiver<Vector3>,
        position: SharedPosition,
        params: Arc<dyn ParamStore>,
    ) -> Self {
        FeedbackTask {
            feedback_rx,
            position,
            params,
        }
    }

    pub fn name(&self) -> &'static str {
        "gimbal/feedback"
    }

    /// Runs until cancelled or until every sender of the feedback channel is
    /// dropped. A failed baseline write ends the task with an error.
    pub async fn run(self, cancel: CancellationToken) -> anyhow::Result<()> {
        let Self {
            feedback_rx,
            position,
            params,
        } = self;

        let loop_fut = async move {
            while let Ok(vector) = feedback_rx.recv_async().await {
                apply_update(&position, params.as_ref(), vector).await?;
            }

            Ok::<_, anyhow::Error>(())
        };

        select! {
            _ = cancel.cancelled() => {}
            res = loop_fut => { res? }
        }

        Ok(())
    }
}

async fn apply_update(
    position: &SharedPosition,
    params: &dyn ParamStore,
    vector: Vector3,
) -> anyhow::Result<()> {
    trace!("gimbal orientation update {:?}", vector);

    // lock is released before the store writes below
    let first_reading = {
        let mut state = position.lock().unwrap();
        state.current = Some(vector);

        if state.initial.is_none() {
            state.initial = Some(vector);
            true
        } else {
            false
        }
    };

    if first_reading {
        debug!("captured initial gimbal position {:?}", vector);
        params.set(PARAM_INITIAL_X, vector.x).await?;
        params.set(PARAM_INITIAL_Y, vector.y).await?;
        params.set(PARAM_INITIAL_Z, vector.z).await?;
    }

    Ok(())
}
