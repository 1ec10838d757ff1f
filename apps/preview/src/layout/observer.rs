//! Layout Observer — records the rendered height of the preview's content container.
//!
//! Size-change notifications go through a [`ThrottledTask`], so a burst of
//! resizes produces one height read per interval. The read goes to the
//! container at fire time, which means the committed value is always the
//! latest one. Heights are published on a `watch` channel that the preview
//! panel reads when it derives page breaks.

use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::{Arc, Mutex};
use std::time::Duration;

use serde::Serialize;
use tokio::sync::watch;
use tracing::debug;

use crate::layout::throttle::ThrottledTask;

/// Something with a scrollable height that can be measured.
pub trait ContentContainer: Send + Sync {
    /// Full scrollable height of the container in pixels.
    fn scroll_height(&self) -> f64;
}

/// The last committed height reading.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize)]
pub struct HeightSample {
    pub height_px: f64,
    /// Number of committed reads; 0 until the first throttled read lands.
    pub revision: u64,
}

/// Container whose height is reported from outside, e.g. by the browser shell.
#[derive(Debug, Default)]
pub struct ReportedContainer {
    height_px: Mutex<f64>,
}

impl ReportedContainer {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn report(&self, height_px: f64) {
        match self.height_px.lock() {
            Ok(mut h) => *h = height_px,
            Err(poisoned) => *poisoned.into_inner() = height_px,
        }
    }
}

impl ContentContainer for ReportedContainer {
    fn scroll_height(&self) -> f64 {
        match self.height_px.lock() {
            Ok(h) => *h,
            Err(poisoned) => *poisoned.into_inner(),
        }
    }
}

// ────────────────────────────────────────────────────────────────────────────
// Observer
// ────────────────────────────────────────────────────────────────────────────

pub struct LayoutObserver {
    /// `None` when observing without a container; notifications are then no-ops.
    task: Option<ThrottledTask>,
    connected: Arc<AtomicBool>,
    heights: watch::Receiver<HeightSample>,
}

impl LayoutObserver {
    /// Starts observing `container`, reading its height at most once per `interval`.
    pub fn observe(container: Option<Arc<dyn ContentContainer>>, interval: Duration) -> Self {
        let (tx, heights) = watch::channel(HeightSample::default());
        let connected = Arc::new(AtomicBool::new(container.is_some()));

        let task = container.map(|container| {
            let connected = Arc::clone(&connected);
            ThrottledTask::new(interval, move || {
                if !connected.load(Ordering::Acquire) {
                    return;
                }
                let height_px = container.scroll_height();
                tx.send_modify(|sample| {
                    sample.height_px = height_px;
                    sample.revision += 1;
                });
                debug!(height_px, "content height updated");
            })
        });

        LayoutObserver {
            task,
            connected,
            heights,
        }
    }

    /// Size-change notification. Schedules a throttled height read.
    pub fn notify(&self) {
        if !self.is_connected() {
            return;
        }
        if let Some(task) = &self.task {
            task.call();
        }
    }

    pub fn latest(&self) -> HeightSample {
        *self.heights.borrow()
    }

    /// A receiver that sees every committed height.
    #[cfg(test)]
    pub fn subscribe(&self) -> watch::Receiver<HeightSample> {
        self.heights.clone()
    }

    pub fn is_connected(&self) -> bool {
        self.connected.load(Ordering::Acquire)
    }

    /// Stops observing and cancels any pending read. Idempotent.
    pub fn disconnect(&self) {
        if self.connected.swap(false, Ordering::AcqRel) {
            debug!("layout observer disconnected");
        }
        if let Some(task) = &self.task {
            task.cancel();
        }
    }
}

impl Drop for LayoutObserver {
    fn drop(&mut self) {
        self.disconnect();
    }
}
