//! The save-effect seam
//!
//! The scheduler never knows how state is persisted; it hands a snapshot to
//! a [`SaveSink`] and moves on. Sinks may be asynchronous — the scheduler
//! does not await deferred saves for scheduling purposes and does not
//! serialize overlapping sink invocations (completion ordering is the
//! sink's responsibility).

use async_trait::async_trait;
use std::future::Future;

/// Destination for committed snapshots
///
/// Failures are not retried by the scheduler: a deferred save that fails is
/// logged and dropped, a manual flush surfaces the error to its caller.
/// Either way the scheduler's bookkeeping has already advanced
/// (last-write-wins); sinks that need reliability should catch and re-queue
/// internally.
#[async_trait]
pub trait SaveSink<T>: Send + Sync {
    /// Persist a snapshot
    async fn save(&self, snapshot: T) -> anyhow::Result<()>;
}

/// Adapter that turns an async closure into a [`SaveSink`]
pub struct SinkFn<F>(F);

impl<F> SinkFn<F> {
    /// Wrap an async function `Fn(T) -> Future<Output = anyhow::Result<()>>`
    pub fn new(f: F) -> Self {
        Self(f)
    }
}

#[async_trait]
impl<T, F, Fut> SaveSink<T> for SinkFn<F>
where
    T: Send + 'static,
    F: Fn(T) -> Fut + Send + Sync,
    Fut: Future<Output = anyhow::Result<()>> + Send,
{
    async fn save(&self, snapshot: T) -> anyhow::Result<()> {
        (self.0)(snapshot).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::atomic::{AtomicUsize, Ordering};
    use std::sync::Arc;

    #[tokio::test]
    async fn test_sink_fn_invokes_closure() {
        let calls = Arc::new(AtomicUsize::new(0));
        let calls_clone = calls.clone();

        let sink = SinkFn::new(move |n: u32| {
            let calls = calls_clone.clone();
            async move {
                assert_eq!(n, 7);
                calls.fetch_add(1, Ordering::SeqCst);
                Ok::<_, anyhow::Error>(())
            }
        });

        sink.save(7).await.unwrap();
        assert_eq!(calls.load(Ordering::SeqCst), 1);
    }

    #[tokio::test]
    async fn test_sink_fn_propagates_errors() {
        let sink = SinkFn::new(|_: u32| async { anyhow::bail!("disk full") });
        let err = sink.save(1).await.unwrap_err();
        assert!(err.to_string().contains("disk full"));
    }
}
