//! Frame-wait protocol: poll until a target's geometry is known.
//!
//! After a scroll request the target element may need a layout pass before
//! its rectangle is reported. A frame wait polls a readiness probe up to
//! [`FrameWaitPolicy::max_retries`] times, pausing
//! [`FrameWaitPolicy::interval`] between consecutive checks. It reports
//! `true` as soon as the probe does and `false` once the budget is spent.
//! Exhaustion is not an error: callers proceed with whatever geometry they
//! have.
//!
//! Every form below is driven by the same [`FramePoll`] state machine, so
//! they are interchangeable: same defaults, same number of checks, same
//! pauses.
//!
//! | Form | Entry point | Suspends by |
//! |------|-------------|-------------|
//! | blocking | [`wait_blocking`] | sleeping the calling thread |
//! | callback | [`wait_then`] | sleeping, then invoking `on_done` |
//! | suspend-and-resume | [`wait_async`] | awaiting a [`Sleeper`] |
//! | tick-driven | [`FramePoll`] + a timer queue | returning to the caller |
//!
//! # Determinism
//!
//! The interval is fixed (no backoff, no jitter), so a wait that never
//! resolves takes exactly `max_retries` checks and `max_retries - 1` pauses.
//!
//! # Example
//!
//! ```
//! use waymark_runtime::frame_wait::{FrameWaitPolicy, wait_blocking};
//! use std::time::Duration;
//!
//! let policy = FrameWaitPolicy::new(3, Duration::from_millis(1));
//! let mut checks = 0;
//! let ready = wait_blocking(policy, || { checks += 1; checks == 2 }, None);
//! assert!(ready);
//! assert_eq!(checks, 2);
//! ```

#![forbid(unsafe_code)]

use std::future::Future;

use crate::cancellation::CancellationToken;
use web_time::Duration;

/// Retry budget and pause for a frame wait.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct FrameWaitPolicy {
    /// Maximum number of checks. Zero is treated as one.
    pub max_retries: u32,
    /// Pause between consecutive checks, in milliseconds.
    pub interval_ms: u64,
}

impl FrameWaitPolicy {
    /// Default number of checks.
    pub const DEFAULT_MAX_RETRIES: u32 = 10;
    /// Default pause between checks.
    pub const DEFAULT_INTERVAL: Duration = Duration::from_millis(100);

    /// Create a policy.
    pub fn new(max_retries: u32, interval: Duration) -> Self {
        Self {
            max_retries,
            interval_ms: u64::try_from(interval.as_millis()).unwrap_or(u64::MAX),
        }
    }

    /// Single check, no pauses.
    pub fn immediate() -> Self {
        Self {
            max_retries: 1,
            interval_ms: 0,
        }
    }

    /// Pause between checks.
    #[inline]
    pub fn interval(&self) -> Duration {
        Duration::from_millis(self.interval_ms)
    }

    /// Number of checks a wait performs before giving up.
    #[inline]
    pub fn attempts(&self) -> u32 {
        self.max_retries.max(1)
    }

    /// Longest total pause a wait can take (for timeout budgeting).
    pub fn total_max_delay(&self) -> Duration {
        self.interval() * (self.attempts() - 1)
    }
}

impl Default for FrameWaitPolicy {
    fn default() -> Self {
        Self::new(Self::DEFAULT_MAX_RETRIES, Self::DEFAULT_INTERVAL)
    }
}

/// What to do after a check.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PollStep {
    /// The geometry is available.
    Ready,
    /// Not yet; check again after the given pause.
    RetryAfter(Duration),
    /// Budget spent without seeing geometry.
    Exhausted,
}

impl PollStep {
    /// Whether the wait is over, and with what result.
    #[inline]
    pub fn outcome(self) -> Option<bool> {
        match self {
            Self::Ready => Some(true),
            Self::Exhausted => Some(false),
            Self::RetryAfter(_) => None,
        }
    }
}

/// Counting state machine shared by every frame-wait form.
#[derive(Debug, Clone)]
pub struct FramePoll {
    policy: FrameWaitPolicy,
    checks: u32,
}

impl FramePoll {
    /// Start a fresh wait.
    pub fn new(policy: FrameWaitPolicy) -> Self {
        Self { policy, checks: 0 }
    }

    /// Record one check of the probe and decide what comes next.
    pub fn check(&mut self, available: bool) -> PollStep {
        self.checks = self.checks.saturating_add(1);
        if available {
            PollStep::Ready
        } else if self.checks >= self.policy.attempts() {
            PollStep::Exhausted
        } else {
            PollStep::RetryAfter(self.policy.interval())
        }
    }

    /// Checks performed so far.
    #[inline]
    pub fn checks(&self) -> u32 {
        self.checks
    }

    /// The policy this wait runs under.
    #[inline]
    pub fn policy(&self) -> FrameWaitPolicy {
        self.policy
    }
}

fn log_outcome(poll: &FramePoll, ready: bool) {
    if ready {
        tracing::trace!(
            target: "waymark.frame_wait",
            checks = poll.checks(),
            "frame available"
        );
    } else {
        tracing::debug!(
            target: "waymark.frame_wait",
            checks = poll.checks(),
            max_retries = poll.policy().max_retries,
            "frame wait gave up"
        );
    }
}

/// Poll `probe` on the calling thread, sleeping between checks.
///
/// A cancelled `cancel` token ends the wait with `false`; cancellation is
/// checked before every check and interrupts a pause in progress.
pub fn wait_blocking(
    policy: FrameWaitPolicy,
    mut probe: impl FnMut() -> bool,
    cancel: Option<&CancellationToken>,
) -> bool {
    let mut poll = FramePoll::new(policy);
    loop {
        if cancel.is_some_and(CancellationToken::is_cancelled) {
            return false;
        }
        match poll.check(probe()) {
            PollStep::RetryAfter(pause) => match cancel {
                Some(token) => {
                    if token.sleep(pause) {
                        return false;
                    }
                }
                None => std::thread::sleep(pause),
            },
            step => {
                let ready = step == PollStep::Ready;
                log_outcome(&poll, ready);
                return ready;
            }
        }
    }
}

/// Callback form of [`wait_blocking`]: runs the wait, then hands the result
/// to `on_done`.
///
/// `on_done` is not invoked when the wait was cancelled, so a stale
/// completion cannot act on state that has since changed.
pub fn wait_then(
    policy: FrameWaitPolicy,
    probe: impl FnMut() -> bool,
    cancel: Option<&CancellationToken>,
    on_done: impl FnOnce(bool),
) {
    let ready = wait_blocking(policy, probe, cancel);
    if cancel.is_some_and(CancellationToken::is_cancelled) {
        return;
    }
    on_done(ready);
}

/// Asynchronous timer used by [`wait_async`].
pub trait Sleeper {
    /// Resolve after `duration`.
    fn sleep(&self, duration: Duration) -> impl Future<Output = ()>;
}

/// Suspend-and-resume form: awaits `sleeper` between checks instead of
/// blocking the thread.
pub async fn wait_async<S: Sleeper>(
    policy: FrameWaitPolicy,
    mut probe: impl FnMut() -> bool,
    sleeper: &S,
    cancel: Option<&CancellationToken>,
) -> bool {
    let mut poll = FramePoll::new(policy);
    loop {
        if cancel.is_some_and(CancellationToken::is_cancelled) {
            return false;
        }
        match poll.check(probe()) {
            PollStep::RetryAfter(pause) => sleeper.sleep(pause).await,
            step => {
                let ready = step == PollStep::Ready;
                log_outcome(&poll, ready);
                return ready;
            }
        }
    }
}

/// [`Sleeper`] backed by `tokio::time::sleep`.
#[cfg(feature = "tokio")]
#[derive(Debug, Clone, Copy, Default)]
pub struct TokioSleeper;

#[cfg(feature = "tokio")]
impl Sleeper for TokioSleeper {
    fn sleep(&self, duration: Duration) -> impl Future<Output = ()> {
        tokio::time::sleep(duration)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::RefCell;

    #[derive(Default)]
    struct RecordingSleeper {
        pauses: RefCell<Vec<Duration>>,
    }

    impl Sleeper for RecordingSleeper {
        fn sleep(&self, duration: Duration) -> impl Future<Output = ()> {
            self.pauses.borrow_mut().push(duration);
            std::future::ready(())
        }
    }

    #[test]
    fn defaults_are_ten_checks_at_100ms() {
        let policy = FrameWaitPolicy::default();
        assert_eq!(policy.max_retries, 10);
        assert_eq!(policy.interval(), Duration::from_millis(100));
        assert_eq!(policy.total_max_delay(), Duration::from_millis(900));
    }

    #[test]
    fn poll_counts_checks_until_exhausted() {
        let mut poll = FramePoll::new(FrameWaitPolicy::new(3, Duration::from_millis(5)));
        assert_eq!(poll.check(false), PollStep::RetryAfter(Duration::from_millis(5)));
        assert_eq!(poll.check(false), PollStep::RetryAfter(Duration::from_millis(5)));
        assert_eq!(poll.check(false), PollStep::Exhausted);
        assert_eq!(poll.checks(), 3);
    }

    #[test]
    fn poll_ready_wins_even_on_last_check() {
        let mut poll = FramePoll::new(FrameWaitPolicy::new(2, Duration::ZERO));
        assert_eq!(poll.check(false).outcome(), None);
        assert_eq!(poll.check(true).outcome(), Some(true));
    }

    #[test]
    fn zero_retries_still_checks_once() {
        let mut checks = 0;
        let ready = wait_blocking(
            FrameWaitPolicy::new(0, Duration::from_secs(5)),
            || {
                checks += 1;
                false
            },
            None,
        );
        assert!(!ready);
        assert_eq!(checks, 1);
    }

    #[test]
    fn callback_form_reports_result() {
        let mut result = None;
        wait_then(FrameWaitPolicy::immediate(), || true, None, |ready| {
            result = Some(ready)
        });
        assert_eq!(result, Some(true));
    }

    #[test]
    fn callback_form_is_silent_after_cancel() {
        let source = crate::cancellation::CancellationSource::new();
        let token = source.token();
        source.cancel();
        let mut called = false;
        wait_then(FrameWaitPolicy::default(), || true, Some(&token), |_| {
            called = true
        });
        assert!(!called);
    }

    #[test]
    fn async_form_pauses_between_checks_only() {
        let sleeper = RecordingSleeper::default();
        let policy = FrameWaitPolicy::new(3, Duration::from_millis(100));
        let ready = pollster::block_on(wait_async(policy, || false, &sleeper, None));
        assert!(!ready);
        assert_eq!(
            *sleeper.pauses.borrow(),
            vec![Duration::from_millis(100), Duration::from_millis(100)]
        );
    }

    #[test]
    fn async_form_returns_as_soon_as_ready() {
        let sleeper = RecordingSleeper::default();
        let mut checks = 0;
        let ready = pollster::block_on(wait_async(
            FrameWaitPolicy::default(),
            || {
                checks += 1;
                checks >= 4
            },
            &sleeper,
            None,
        ));
        assert!(ready);
        assert_eq!(checks, 4);
        assert_eq!(sleeper.pauses.borrow().len(), 3);
    }
}
