//! In-memory transport implementations for tests.

use std::collections::HashMap;
use std::sync::atomic::{AtomicBool, AtomicUsize, Ordering};
use std::sync::{Arc, Mutex};

use async_trait::async_trait;
use tokio::sync::Notify;

use crate::command::{CameraAction, CameraActionResponse};
use crate::interface::{CameraService, ParamStore, Publisher};

pub struct RecordingPublisher<T> {
    sent: Mutex<Vec<T>>,
}

impl<T> RecordingPublisher<T> {
    pub fn new() -> Arc<Self> {
        Arc::new(RecordingPublisher {
            sent: Mutex::new(Vec::new()),
        })
    }
}

impl<T: Clone> RecordingPublisher<T> {
    pub fn sent(&self) -> Vec<T> {
        self.sent.lock().unwrap().clone()
    }
}

#[async_trait]
impl<T: Send + Sync> Publisher<T> for RecordingPublisher<T> {
    async fn publish(&self, msg: T) {
        self.sent.lock().unwrap().push(msg);
    }
}

pub struct MockCameraService {
    available: AtomicBool,
    notify: Notify,
    fail: AtomicBool,
    calls: Mutex<Vec<u8>>,
}

impl MockCameraService {
    pub fn new() -> Arc<Self> {
        Arc::new(MockCameraService {
            available: AtomicBool::new(true),
            notify: Notify::new(),
            fail: AtomicBool::new(false),
            calls: Mutex::new(Vec::new()),
        })
    }

    pub fn unavailable() -> Arc<Self> {
        let service = Self::new();
        service.available.store(false, Ordering::SeqCst);
        service
    }

    pub fn make_available(&self) {
        self.available.store(true, Ordering::SeqCst);
        self.notify.notify_waiters();
    }

    pub fn fail_next(&self) {
        self.fail.store(true, Ordering::SeqCst);
    }

    /// Opcodes received so far, in order.
    pub fn calls(&self) -> Vec<u8> {
        self.calls.lock().unwrap().clone()
    }
}

#[async_trait]
impl CameraService for MockCameraService {
    async fn wait_available(&self) {
        loop {
            // register for the wakeup before re-checking the flag
            let notified = self.notify.notified();
            if self.available.load(Ordering::SeqCst) {
                return;
            }
            notified.await;
        }
    }

    async fn call(&self, action: CameraAction) -> anyhow::Result<CameraActionResponse> {
        self.calls.lock().unwrap().push(action.opcode());
        if self.fail.swap(false, Ordering::SeqCst) {
            anyhow::bail!("camera action service failure");
        }
        Ok(CameraActionResponse)
    }
}

pub struct MockParamStore {
    values: Mutex<HashMap<String, f64>>,
    writes: AtomicUsize,
}

impl MockParamStore {
    pub fn new() -> Arc<Self> {
        Arc::new(MockParamStore {
            values: Mutex::new(HashMap::new()),
            writes: AtomicUsize::new(0),
        })
    }

    pub fn with_values(entries: &[(&str, f64)]) -> Arc<Self> {
        let store = Self::new();
        {
            let mut values = store.values.lock().unwrap();
            for (key, value) in entries {
                values.insert(key.to_string(), *value);
            }
        }
        store
    }

    /// Number of `set` calls made against this store.
    pub fn writes(&self) -> usize {
        self.writes.load(Ordering::SeqCst)
    }

    pub fn value(&self, key: &str) -> Option<f64> {
        self.values.lock().unwrap().get(key).copied()
    }
}

#[async_trait]
impl ParamStore for MockParamStore {
    async fn get(&self, key: &str) -> anyhow::Result<Option<f64>> {
        Ok(self.values.lock().unwrap().get(key).copied())
    }

    async fn set(&self, key: &str, value: f64) -> anyhow::Result<()> {
        self.values.lock().unwrap().insert(key.to_string(), value);
        self.writes.fetch_add(1, Ordering::SeqCst);
        Ok(())
    }
}
