//! Hazard notification.
//!
//! Hazard-capable containers (liquid and gas) report an overload attempt to a
//! [`HazardNotifier`] before the load is rejected. The notifier is injected by
//! the caller, which keeps the side effect observable: the default
//! [`TracingNotifier`] emits a `warn` event, while [`RecordingNotifier`]
//! collects notices in memory for display or assertions. The recorder's owner
//! is the one that shows notices, so it only logs them at `debug`.

use std::sync::Mutex;

use serde::Serialize;
use tracing::{debug, warn};

use crate::serial::SerialNumber;

/// Receives hazard notifications raised by containers.
pub trait HazardNotifier {
    fn notify_hazard(&self, serial: &SerialNumber, message: &str);
}

/// Emits every hazard notification as a `tracing` warning.
#[derive(Debug, Clone, Copy, Default)]
pub struct TracingNotifier;

impl HazardNotifier for TracingNotifier {
    fn notify_hazard(&self, serial: &SerialNumber, message: &str) {
        warn!(target: "konship::hazard", %serial, detail = message, "hazard notification");
    }
}

/// A single recorded hazard notification.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct HazardNotice {
    pub serial: SerialNumber,
    pub message: String,
}

/// Collects hazard notifications in memory.
#[derive(Debug, Default)]
pub struct RecordingNotifier {
    notices: Mutex<Vec<HazardNotice>>,
}

impl RecordingNotifier {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn len(&self) -> usize {
        self.lock().len()
    }

    pub fn is_empty(&self) -> bool {
        self.lock().is_empty()
    }

    /// Snapshot of the notices recorded so far.
    pub fn notices(&self) -> Vec<HazardNotice> {
        self.lock().clone()
    }

    /// Remove and return all recorded notices.
    pub fn drain(&self) -> Vec<HazardNotice> {
        std::mem::take(&mut *self.lock())
    }

    fn lock(&self) -> std::sync::MutexGuard<'_, Vec<HazardNotice>> {
        self.notices.lock().unwrap_or_else(|e| e.into_inner())
    }
}

impl HazardNotifier for RecordingNotifier {
    fn notify_hazard(&self, serial: &SerialNumber, message: &str) {
        debug!(target: "konship::hazard", %serial, detail = message, "hazard notice recorded");
        self.lock().push(HazardNotice {
            serial: serial.clone(),
            message: message.to_string(),
        });
    }
}

impl<N: HazardNotifier + ?Sized> HazardNotifier for std::sync::Arc<N> {
    fn notify_hazard(&self, serial: &SerialNumber, message: &str) {
        (**self).notify_hazard(serial, message);
    }
}

/// Message attached to overload hazard notifications.
pub(crate) fn overload_message(serial: &SerialNumber) -> String {
    format!("Attempting to overload: {serial}")
}
