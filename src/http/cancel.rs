//! Per-call cooperative cancellation.
//!
//! [`cancel_pair`] yields a [`CancelHandle`] the caller keeps and a
//! [`CancelToken`] that is moved into exactly one request. Firing the handle
//! aborts that request, including a pending backoff wait, on its next poll.

use crate::error::HttpError;
use futures_util::future::{AbortHandle, AbortRegistration, Abortable};
use std::future::Future;

/// Caller side of a cancellation pair. Cheap to clone.
#[derive(Debug, Clone)]
pub struct CancelHandle(AbortHandle);

impl CancelHandle {
    pub fn cancel(&self) {
        self.0.abort();
    }

    pub fn is_cancelled(&self) -> bool {
        self.0.is_aborted()
    }
}

/// Request side of a cancellation pair. Consumed by the call it is passed to.
#[derive(Debug)]
pub struct CancelToken(AbortRegistration);

/// Create a linked handle/token pair.
pub fn cancel_pair() -> (CancelHandle, CancelToken) {
    let (handle, registration) = AbortHandle::new_pair();
    (CancelHandle(handle), CancelToken(registration))
}

/// Drive `fut` to completion unless `token` fires first.
pub(crate) async fn run_cancellable<T, F>(
    fut: F,
    token: Option<CancelToken>,
) -> Result<T, HttpError>
where
    F: Future<Output = Result<T, HttpError>>,
{
    run_until_cancelled(fut, token)
        .await
        .unwrap_or(Err(HttpError::Cancelled))
}

/// Drive `fut` to completion; `None` if `token` fired first.
pub(crate) async fn run_until_cancelled<F: Future>(
    fut: F,
    token: Option<CancelToken>,
) -> Option<F::Output> {
    match token {
        None => Some(fut.await),
        Some(CancelToken(registration)) => Abortable::new(fut, registration).await.ok(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::time::{Duration, Instant};

    #[tokio::test]
    async fn test_uncancelled_future_completes() {
        let (_handle, token) = cancel_pair();
        let out = run_cancellable(async { Ok::<_, HttpError>(7) }, Some(token)).await;
        assert_eq!(out.unwrap(), 7);
    }

    #[tokio::test]
    async fn test_cancel_before_start() {
        let (handle, token) = cancel_pair();
        handle.cancel();
        assert!(handle.is_cancelled());
        let out = run_cancellable(async { Ok::<_, HttpError>(7) }, Some(token)).await;
        assert!(matches!(out, Err(HttpError::Cancelled)));
    }

    #[tokio::test]
    async fn test_cancel_interrupts_wait() {
        let (handle, token) = cancel_pair();
        let started = Instant::now();
        tokio::spawn(async move {
            tokio::time::sleep(Duration::from_millis(50)).await;
            handle.cancel();
        });
        let out = run_cancellable(
            async {
                futures_timer::Delay::new(Duration::from_secs(30)).await;
                Ok::<_, HttpError>(())
            },
            Some(token),
        )
        .await;
        assert!(matches!(out, Err(HttpError::Cancelled)));
        assert!(started.elapsed() < Duration::from_secs(5));
    }
}
