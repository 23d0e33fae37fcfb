#[macro_use]
extern crate tracing;

pub mod client;
pub mod command;
pub mod config;
pub mod interface;
pub mod state;
pub mod task;

#[cfg(test)]
pub(crate) mod mock;

pub use client::*;
pub use command::*;
pub use config::GimbalConfig;
pub use interface::{CameraService, ParamStore, Publisher};
pub use state::Vector3;
pub use task::FeedbackTask;
