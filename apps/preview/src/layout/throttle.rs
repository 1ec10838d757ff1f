//! Trailing-edge throttle backed by a cancellable tokio task.
//!
//! The first [`ThrottledTask::call`] arms a timer; calls made while it is armed
//! are absorbed. When the timer fires the callback runs once, and since the
//! callback reads live state it observes the latest value. Dropping or
//! cancelling the task aborts any armed timer; later calls are ignored.
//!
//! Must be called from within a tokio runtime.

use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::{Arc, Mutex, Weak};
use std::time::Duration;

use tokio::task::JoinHandle;

type Callback = Box<dyn Fn() + Send + Sync>;

pub struct ThrottledTask {
    inner: Arc<Inner>,
}

struct Inner {
    interval: Duration,
    callback: Callback,
    armed: Mutex<Option<JoinHandle<()>>>,
    cancelled: AtomicBool,
}

impl ThrottledTask {
    pub fn new(interval: Duration, callback: impl Fn() + Send + Sync + 'static) -> Self {
        ThrottledTask {
            inner: Arc::new(Inner {
                interval,
                callback: Box::new(callback),
                armed: Mutex::new(None),
                cancelled: AtomicBool::new(false),
            }),
        }
    }

    /// Requests an invocation. Returns `true` if this call armed a new timer.
    pub fn call(&self) -> bool {
        if self.is_cancelled() {
            return false;
        }

        let mut armed = match self.inner.armed.lock() {
            Ok(guard) => guard,
            Err(poisoned) => poisoned.into_inner(),
        };
        if armed.as_ref().is_some_and(|handle| !handle.is_finished()) {
            return false;
        }

        // The timer only holds a weak reference so a dropped task is never kept alive by it.
        let weak: Weak<Inner> = Arc::downgrade(&self.inner);
        let interval = self.inner.interval;
        *armed = Some(tokio::spawn(async move {
            tokio::time::sleep(interval).await;
            if let Some(inner) = weak.upgrade() {
                if !inner.cancelled.load(Ordering::Acquire) {
                    (inner.callback)();
                }
            }
        }));
        true
    }

    /// Aborts any armed timer and ignores all future calls.
    pub fn cancel(&self) {
        self.inner.cancelled.store(true, Ordering::Release);
        let handle = match self.inner.armed.lock() {
            Ok(mut guard) => guard.take(),
            Err(poisoned) => poisoned.into_inner().take(),
        };
        if let Some(handle) = handle {
            handle.abort();
        }
    }

    pub fn is_cancelled(&self) -> bool {
        self.inner.cancelled.load(Ordering::Acquire)
    }

    /// True while a timer is armed and has not fired yet.
    #[cfg(test)]
    pub fn is_pending(&self) -> bool {
        match self.inner.armed.lock() {
            Ok(guard) => guard.as_ref().is_some_and(|h| !h.is_finished()),
            Err(poisoned) => poisoned.into_inner().as_ref().is_some_and(|h| !h.is_finished()),
        }
    }
}

impl Drop for ThrottledTask {
    fn drop(&mut self) {
        self.cancel();
    }
}
