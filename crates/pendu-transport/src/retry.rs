//! Rate-limit retry decorator.

use std::time::Duration;

use crate::{ChatTransport, TransportError};
use pendu_core::{MessageId, RoomId};

/// Backoff policy for rate-limited deliveries.
///
/// Attempt `n` (1-based) waits `backoff_step × n` before re-attempting,
/// so the defaults wait 10 s, 20 s, then 30 s before the final attempt.
#[derive(Debug, Clone, Copy)]
pub struct RetryPolicy {
    /// Re-attempts after the initial call.
    pub max_retries: u32,
    /// Base unit of the linear backoff.
    pub backoff_step: Duration,
}

impl Default for RetryPolicy {
    fn default() -> Self {
        Self {
            max_retries: 3,
            backoff_step: Duration::from_secs(10),
        }
    }
}

impl RetryPolicy {
    /// The wait before re-attempting after failed attempt `attempt`.
    pub fn delay(&self, attempt: u32) -> Duration {
        self.backoff_step * attempt
    }
}

/// Wraps a [`ChatTransport`], re-attempting rate-limited calls.
///
/// Non-retryable errors pass through untouched. When the retry budget is
/// exhausted the last error is returned and the failure logged; callers
/// keep their game state either way.
#[derive(Debug, Clone)]
pub struct Retrying<T> {
    inner: T,
    policy: RetryPolicy,
}

impl<T: ChatTransport> Retrying<T> {
    /// Wraps `inner` with the default policy.
    pub fn new(inner: T) -> Self {
        Self::with_policy(inner, RetryPolicy::default())
    }

    /// Wraps `inner` with a custom policy.
    pub fn with_policy(inner: T, policy: RetryPolicy) -> Self {
        Self { inner, policy }
    }

    /// The wrapped transport.
    pub fn inner(&self) -> &T {
        &self.inner
    }

    async fn with_retries<R, Fut>(
        &self,
        op: &'static str,
        mut call: impl FnMut() -> Fut,
    ) -> Result<R, TransportError>
    where
        Fut: Future<Output = Result<R, TransportError>>,
    {
        let mut attempt: u32 = 1;
        loop {
            match call().await {
                Ok(value) => return Ok(value),
                Err(e) if e.is_retryable()
                    && attempt <= self.policy.max_retries =>
                {
                    let wait = self.policy.delay(attempt);
                    tracing::warn!(
                        op,
                        attempt,
                        wait_ms = wait.as_millis() as u64,
                        "rate limited, backing off"
                    );
                    tokio::time::sleep(wait).await;
                    attempt += 1;
                }
                Err(e) => {
                    if e.is_retryable() {
                        tracing::error!(
                            op,
                            attempts = attempt,
                            "still rate limited, giving up"
                        );
                    }
                    return Err(e);
                }
            }
        }
    }
}

impl<T: ChatTransport> ChatTransport for Retrying<T> {
    async fn send(
        &self,
        room: RoomId,
        content: &str,
    ) -> Result<MessageId, TransportError> {
        self.with_retries("send", || self.inner.send(room, content))
            .await
    }

    async fn edit(
        &self,
        room: RoomId,
        message: MessageId,
        content: &str,
    ) -> Result<(), TransportError> {
        self.with_retries("edit", || self.inner.edit(room, message, content))
            .await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::atomic::{AtomicU32, Ordering};

    /// Rate-limits the first `limit_for` send attempts, then succeeds.
    struct Flaky {
        limit_for: u32,
        calls: AtomicU32,
    }

    impl Flaky {
        fn new(limit_for: u32) -> Self {
            Self {
                limit_for,
                calls: AtomicU32::new(0),
            }
        }
    }

    impl ChatTransport for Flaky {
        async fn send(
            &self,
            _room: RoomId,
            _content: &str,
        ) -> Result<MessageId, TransportError> {
            let call = self.calls.fetch_add(1, Ordering::SeqCst) + 1;
            if call <= self.limit_for {
                Err(TransportError::RateLimited)
            } else {
                Ok(MessageId(u64::from(call)))
            }
        }

        async fn edit(
            &self,
            _room: RoomId,
            _message: MessageId,
            _content: &str,
        ) -> Result<(), TransportError> {
            Err(TransportError::Rejected("no edits".into()))
        }
    }

    fn fast_policy() -> RetryPolicy {
        RetryPolicy {
            max_retries: 3,
            backoff_step: Duration::from_millis(1),
        }
    }

    #[tokio::test]
    async fn test_send_recovers_within_retry_budget() {
        let t = Retrying::with_policy(Flaky::new(2), fast_policy());
        let id = t.send(RoomId(1), "board").await.expect("third try works");
        assert_eq!(id, MessageId(3));
        assert_eq!(t.inner().calls.load(Ordering::SeqCst), 3);
    }

    #[tokio::test]
    async fn test_send_gives_up_after_budget_exhausted() {
        let t = Retrying::with_policy(Flaky::new(10), fast_policy());
        let err = t.send(RoomId(1), "board").await.unwrap_err();
        assert_eq!(err, TransportError::RateLimited);
        // Initial attempt plus three retries.
        assert_eq!(t.inner().calls.load(Ordering::SeqCst), 4);
    }

    #[tokio::test]
    async fn test_non_retryable_error_passes_through_immediately() {
        let t = Retrying::with_policy(Flaky::new(0), fast_policy());
        let err = t.edit(RoomId(1), MessageId(1), "x").await.unwrap_err();
        assert!(matches!(err, TransportError::Rejected(_)));
    }

    #[test]
    fn test_delay_grows_linearly_with_attempt() {
        let policy = RetryPolicy::default();
        assert_eq!(policy.delay(1), Duration::from_secs(10));
        assert_eq!(policy.delay(2), Duration::from_secs(20));
        assert_eq!(policy.delay(3), Duration::from_secs(30));
    }
}
