//! Background refresh of the pending-request indicator.
//!
//! The task is owned by its holder (started on construction, aborted on drop
//! or `stop()`) and publishes through a watch channel, so overlapping reads
//! simply see the last written value. No backoff: a failed poll logs and
//! waits for the next tick.

use std::future::Future;
use std::sync::Arc;
use std::time::Duration;

use tokio::sync::watch;
use tokio::task::JoinHandle;

use crate::api::DanusApi;
use crate::error::ApiError;

pub struct PendingPoller {
    rx: watch::Receiver<usize>,
    handle: JoinHandle<()>,
}

impl PendingPoller {
    /// Start polling with `fetch` every `interval`; the first poll fires
    /// immediately. Failures leave the previous count in place.
    pub fn start<F, Fut>(interval: Duration, fetch: F) -> Self
    where
        F: Fn() -> Fut + Send + 'static,
        Fut: Future<Output = Result<usize, ApiError>> + Send,
    {
        let (tx, rx) = watch::channel(0usize);
        let handle = tokio::spawn(async move {
            let mut ticker = tokio::time::interval(interval);
            loop {
                ticker.tick().await;
                match fetch().await {
                    Ok(count) => {
                        let _ = tx.send(count);
                    }
                    Err(e) => {
                        tracing::warn!(error = %e, "gagal memuat jumlah request pending");
                    }
                }
            }
        });
        Self { rx, handle }
    }

    /// Poll the count of PENDING requests addressed to one admin.
    pub fn start_for_admin(api: Arc<DanusApi>, admin_id: i64, interval: Duration) -> Self {
        Self::start(interval, move || {
            let api = Arc::clone(&api);
            async move {
                let requests = api.admin_requests(admin_id).await?;
                Ok(requests.iter().filter(|r| r.is_pending()).count())
            }
        })
    }

    /// The most recently published count.
    pub fn pending_count(&self) -> usize {
        *self.rx.borrow()
    }

    /// A receiver for callers that want change notifications.
    pub fn subscribe(&self) -> watch::Receiver<usize> {
        self.rx.clone()
    }

    pub fn stop(self) {
        self.handle.abort();
    }
}

impl Drop for PendingPoller {
    fn drop(&mut self) {
        self.handle.abort();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::atomic::{AtomicUsize, Ordering};
    use tokio::time::advance;

    #[tokio::test(start_paused = true)]
    async fn test_poller_publishes_each_tick() {
        let calls = Arc::new(AtomicUsize::new(0));
        let calls_in_task = Arc::clone(&calls);
        let poller = PendingPoller::start(Duration::from_secs(30), move || {
            let calls = Arc::clone(&calls_in_task);
            async move { Ok(calls.fetch_add(1, Ordering::SeqCst) + 1) }
        });

        // First tick is immediate.
        tokio::task::yield_now().await;
        assert_eq!(poller.pending_count(), 1);

        advance(Duration::from_secs(30)).await;
        tokio::task::yield_now().await;
        assert_eq!(poller.pending_count(), 2);

        advance(Duration::from_secs(30)).await;
        tokio::task::yield_now().await;
        assert_eq!(poller.pending_count(), 3);
    }

    #[tokio::test(start_paused = true)]
    async fn test_failed_poll_keeps_previous_value() {
        let calls = Arc::new(AtomicUsize::new(0));
        let calls_in_task = Arc::clone(&calls);
        let poller = PendingPoller::start(Duration::from_secs(30), move || {
            let calls = Arc::clone(&calls_in_task);
            async move {
                match calls.fetch_add(1, Ordering::SeqCst) {
                    0 => Ok(5),
                    _ => Err(ApiError::Server {
                        message: "mati".into(),
                    }),
                }
            }
        });

        tokio::task::yield_now().await;
        assert_eq!(poller.pending_count(), 5);

        advance(Duration::from_secs(30)).await;
        tokio::task::yield_now().await;
        // The failed poll did not clobber the indicator.
        assert_eq!(poller.pending_count(), 5);
        assert!(calls.load(Ordering::SeqCst) >= 2);
    }

    #[tokio::test(start_paused = true)]
    async fn test_drop_stops_the_task() {
        let calls = Arc::new(AtomicUsize::new(0));
        let calls_in_task = Arc::clone(&calls);
        let poller = PendingPoller::start(Duration::from_secs(30), move || {
            let calls = Arc::clone(&calls_in_task);
            async move { Ok(calls.fetch_add(1, Ordering::SeqCst)) }
        });

        tokio::task::yield_now().await;
        drop(poller);
        let seen = calls.load(Ordering::SeqCst);

        advance(Duration::from_secs(120)).await;
        tokio::task::yield_now().await;
        assert_eq!(calls.load(Ordering::SeqCst), seen);
    }
}
