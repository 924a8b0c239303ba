//! Quiet-period scheduling for bursty input.
//!
//! A [`Debouncer`] holds at most one pending value. Scheduling a new value
//! replaces the pending one and restarts the quiet period; the value is only
//! released once nothing has been scheduled for the whole period.

use std::time::Duration;
use tokio::time::{sleep_until, Instant};

/// Quiet period used for search input unless configured otherwise
pub const DEFAULT_QUIET_PERIOD: Duration = Duration::from_millis(300);

#[derive(Debug)]
struct Pending<T> {
    value: T,
    deadline: Instant,
}

#[derive(Debug)]
pub struct Debouncer<T> {
    quiet_period: Duration,
    pending: Option<Pending<T>>,
}

impl<T> Debouncer<T> {
    pub fn new(quiet_period: Duration) -> Self {
        Self {
            quiet_period,
            pending: None,
        }
    }

    pub fn quiet_period(&self) -> Duration {
        self.quiet_period
    }

    /// Schedule `value`, cancelling whatever was pending and restarting the timer
    pub fn schedule(&mut self, value: T) {
        self.pending = Some(Pending {
            value,
            deadline: Instant::now() + self.quiet_period,
        });
    }

    /// Drop the pending value, if any, and hand it back
    pub fn cancel(&mut self) -> Option<T> {
        self.pending.take().map(|p| p.value)
    }

    pub fn is_pending(&self) -> bool {
        self.pending.is_some()
    }

    /// When the pending value will be released
    pub fn deadline(&self) -> Option<Instant> {
        self.pending.as_ref().map(|p| p.deadline)
    }

    /// Release the pending value if its deadline has passed
    pub fn poll_expired(&mut self) -> Option<T> {
        match self.deadline() {
            Some(deadline) if deadline <= Instant::now() => self.cancel(),
            _ => None,
        }
    }

    /// Wait until the pending value's quiet period elapses and take it.
    ///
    /// Never resolves while nothing is pending. Cancel-safe: dropping the
    /// future before it resolves leaves the pending value in place, so it can
    /// sit in a `select!` next to the input source.
    pub async fn fired(&mut self) -> T {
        loop {
            match self.deadline() {
                Some(deadline) => {
                    sleep_until(deadline).await;
                    if let Some(value) = self.poll_expired() {
                        return value;
                    }
                }
                None => std::future::pending::<()>().await,
            }
        }
    }
}

impl<T> Default for Debouncer<T> {
    fn default() -> Self {
        Self::new(DEFAULT_QUIET_PERIOD)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tokio::time::{advance, timeout};

    #[tokio::test(start_paused = true)]
    async fn test_fires_after_quiet_period() {
        let mut debouncer = Debouncer::new(Duration::from_millis(300));
        debouncer.schedule("rice");

        advance(Duration::from_millis(299)).await;
        assert!(debouncer.poll_expired().is_none());

        advance(Duration::from_millis(1)).await;
        assert_eq!(debouncer.poll_expired(), Some("rice"));
        assert!(!debouncer.is_pending());
    }

    #[tokio::test(start_paused = true)]
    async fn test_reschedule_restarts_timer_and_replaces_value() {
        let mut debouncer = Debouncer::new(Duration::from_millis(300));
        debouncer.schedule("r");
        advance(Duration::from_millis(200)).await;
        debouncer.schedule("ri");
        advance(Duration::from_millis(200)).await;

        // 400ms since the first keystroke but only 200ms of quiet
        assert!(debouncer.poll_expired().is_none());

        advance(Duration::from_millis(100)).await;
        assert_eq!(debouncer.poll_expired(), Some("ri"));
    }

    #[tokio::test(start_paused = true)]
    async fn test_cancel_returns_pending_value() {
        let mut debouncer = Debouncer::new(Duration::from_millis(300));
        assert_eq!(debouncer.cancel(), None::<&str>);

        debouncer.schedule("pasta");
        assert!(debouncer.deadline().is_some());
        assert_eq!(debouncer.cancel(), Some("pasta"));

        advance(Duration::from_secs(1)).await;
        assert!(debouncer.poll_expired().is_none());
    }

    #[tokio::test(start_paused = true)]
    async fn test_fired_resolves_at_deadline() {
        let mut debouncer = Debouncer::new(Duration::from_millis(300));
        debouncer.schedule(7);
        let start = Instant::now();

        assert_eq!(debouncer.fired().await, 7);
        assert!(start.elapsed() >= Duration::from_millis(300));
    }

    #[tokio::test(start_paused = true)]
    async fn test_fired_never_resolves_when_idle() {
        let mut debouncer: Debouncer<u8> = Debouncer::default();
        let result = timeout(Duration::from_secs(5), debouncer.fired()).await;
        assert!(result.is_err());
    }

    #[tokio::test(start_paused = true)]
    async fn test_dropped_fired_future_keeps_value() {
        let mut debouncer = Debouncer::new(Duration::from_millis(300));
        debouncer.schedule("eggs");

        let early = timeout(Duration::from_millis(100), debouncer.fired()).await;
        assert!(early.is_err());
        assert!(debouncer.is_pending());

        assert_eq!(debouncer.fired().await, "eggs");
    }
}
