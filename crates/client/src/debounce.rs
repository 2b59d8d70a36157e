//! Trailing-edge debouncer for the search box.
//!
//! One pending timer per input stream: each keystroke cancels and restarts
//! it, and dropping the debouncer cancels it outright, so a torn-down screen
//! never applies a stale filter.

use std::time::Duration;

use tokio::sync::mpsc;
use tokio::task::JoinHandle;

pub const DEFAULT_DEBOUNCE: Duration = Duration::from_millis(300);

pub struct Debouncer<T> {
    delay: Duration,
    tx: mpsc::UnboundedSender<T>,
    pending: Option<JoinHandle<()>>,
}

impl<T: Send + 'static> Debouncer<T> {
    /// Returns the debouncer and the receiver that sees only settled values.
    pub fn new(delay: Duration) -> (Self, mpsc::UnboundedReceiver<T>) {
        let (tx, rx) = mpsc::unbounded_channel();
        (
            Self {
                delay,
                tx,
                pending: None,
            },
            rx,
        )
    }

    pub fn with_default_delay() -> (Self, mpsc::UnboundedReceiver<T>) {
        Self::new(DEFAULT_DEBOUNCE)
    }

    /// Feed one keystroke's worth of input. The previous pending delivery,
    /// if any, is cancelled; this value is delivered after `delay` unless a
    /// newer one replaces it.
    pub fn input(&mut self, value: T) {
        self.cancel();
        let tx = self.tx.clone();
        let delay = self.delay;
        self.pending = Some(tokio::spawn(async move {
            tokio::time::sleep(delay).await;
            let _ = tx.send(value);
        }));
    }

    /// Cancel the pending delivery without replacing it.
    pub fn cancel(&mut self) {
        if let Some(handle) = self.pending.take() {
            handle.abort();
        }
    }
}

impl<T> Drop for Debouncer<T> {
    fn drop(&mut self) {
        if let Some(handle) = self.pending.take() {
            handle.abort();
        }
    }
}
