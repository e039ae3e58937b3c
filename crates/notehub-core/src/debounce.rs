//! Trailing-edge debouncer.
//!
//! Every `push` bumps a version counter and schedules a delayed check; only
//! the check that still sees its own version emits, so a burst of pushes
//! collapses into one emission of the last value.

use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::Arc;
use std::time::Duration;

type Emit<T> = Arc<dyn Fn(T) + Send + Sync>;

pub struct Debouncer<T> {
    delay: Duration,
    version: Arc<AtomicU64>,
    emit: Emit<T>,
}

impl<T: Send + 'static> Debouncer<T> {
    pub fn new(delay: Duration, emit: impl Fn(T) + Send + Sync + 'static) -> Self {
        Self {
            delay,
            version: Arc::new(AtomicU64::new(0)),
            emit: Arc::new(emit),
        }
    }

    /// Schedule `value` for emission after the quiet period.
    ///
    /// Must be called from within a tokio runtime.
    pub fn push(&self, value: T) {
        let version = self.version.fetch_add(1, Ordering::SeqCst) + 1;
        let current = Arc::clone(&self.version);
        let emit = Arc::clone(&self.emit);
        let delay = self.delay;

        tokio::spawn(async move {
            tokio::time::sleep(delay).await;
            if current.load(Ordering::SeqCst) == version {
                emit(value);
            }
        });
    }
}
