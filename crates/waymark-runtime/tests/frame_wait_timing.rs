//! Timing and equivalence tests for the frame-wait forms.
//!
//! The blocking, callback, and async forms must agree on the number of
//! checks and pauses for the same policy and probe.

use std::cell::RefCell;
use std::future::Future;
use std::sync::Arc;
use std::sync::atomic::{AtomicBool, AtomicU32, Ordering};
use std::thread;
use std::time::{Duration, Instant};

use proptest::prelude::*;
use waymark_runtime::{
    CancellationSource, FramePoll, FrameWaitPolicy, PollStep, Sleeper, wait_async, wait_blocking,
    wait_then,
};

#[derive(Default)]
struct CountingSleeper {
    pauses: RefCell<Vec<Duration>>,
}

impl Sleeper for CountingSleeper {
    fn sleep(&self, duration: Duration) -> impl Future<Output = ()> {
        self.pauses.borrow_mut().push(duration);
        std::future::ready(())
    }
}

fn init_tracing() {
    let _ = tracing_subscriber::fmt()
        .with_test_writer()
        .with_max_level(tracing::Level::TRACE)
        .try_init();
}

#[test]
fn unresolved_tag_gives_up_after_exactly_max_retries_checks() {
    init_tracing();
    let interval = Duration::from_millis(20);
    let policy = FrameWaitPolicy::new(3, interval);
    let mut checks = 0;
    let start = Instant::now();

    let ready = wait_blocking(
        policy,
        || {
            checks += 1;
            false
        },
        None,
    );

    let elapsed = start.elapsed();
    assert!(!ready);
    assert_eq!(checks, 3);
    assert!(elapsed >= interval * 2, "elapsed {elapsed:?}");
}

#[test]
fn resolved_on_first_check_never_sleeps() {
    init_tracing();
    let start = Instant::now();
    assert!(wait_blocking(
        FrameWaitPolicy::new(10, Duration::from_secs(1)),
        || true,
        None
    ));
    assert!(start.elapsed() < Duration::from_millis(500));
}

#[test]
fn cancel_from_another_thread_cuts_the_wait_short() {
    init_tracing();
    let source = CancellationSource::new();
    let token = source.token();
    let checks = Arc::new(AtomicU32::new(0));
    let seen = Arc::clone(&checks);

    let waiter = thread::spawn(move || {
        wait_blocking(
            FrameWaitPolicy::new(1_000, Duration::from_millis(10)),
            || {
                seen.fetch_add(1, Ordering::SeqCst);
                false
            },
            Some(&token),
        )
    });

    thread::sleep(Duration::from_millis(40));
    source.cancel();
    assert!(!waiter.join().unwrap());
    assert!(checks.load(Ordering::SeqCst) < 1_000);
}

#[test]
fn probe_flipped_by_another_thread_is_observed() {
    init_tracing();
    let available = Arc::new(AtomicBool::new(false));
    let flag = Arc::clone(&available);
    let writer = thread::spawn(move || {
        thread::sleep(Duration::from_millis(25));
        flag.store(true, Ordering::SeqCst);
    });

    let mut result = None;
    wait_then(
        FrameWaitPolicy::new(50, Duration::from_millis(5)),
        || available.load(Ordering::SeqCst),
        None,
        |ready| result = Some(ready),
    );
    writer.join().unwrap();
    assert_eq!(result, Some(true));
}

fn blocking_checks(policy: FrameWaitPolicy, ready_on: Option<u32>) -> (bool, u32) {
    init_tracing();
    let mut checks = 0;
    let ready = wait_blocking(
        policy,
        || {
            checks += 1;
            ready_on == Some(checks)
        },
        None,
    );
    (ready, checks)
}

fn async_checks(policy: FrameWaitPolicy, ready_on: Option<u32>) -> (bool, u32, usize) {
    let sleeper = CountingSleeper::default();
    let mut checks = 0;
    let ready = pollster::block_on(wait_async(
        policy,
        || {
            checks += 1;
            ready_on == Some(checks)
        },
        &sleeper,
        None,
    ));
    let pauses = sleeper.pauses.borrow().len();
    (ready, checks, pauses)
}

fn tick_checks(policy: FrameWaitPolicy, ready_on: Option<u32>) -> (bool, u32) {
    let mut poll = FramePoll::new(policy);
    loop {
        let available = ready_on == Some(poll.checks() + 1);
        if let Some(ready) = poll.check(available).outcome() {
            return (ready, poll.checks());
        }
    }
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(64))]

    #[test]
    fn all_forms_agree(max_retries in 0u32..8, ready_on in proptest::option::of(1u32..10)) {
        let policy = FrameWaitPolicy::new(max_retries, Duration::ZERO);

        let (b_ready, b_checks) = blocking_checks(policy, ready_on);
        let (a_ready, a_checks, a_pauses) = async_checks(policy, ready_on);
        let (t_ready, t_checks) = tick_checks(policy, ready_on);

        prop_assert_eq!(b_ready, a_ready);
        prop_assert_eq!(b_ready, t_ready);
        prop_assert_eq!(b_checks, a_checks);
        prop_assert_eq!(b_checks, t_checks);
        prop_assert_eq!(a_pauses as u32, a_checks - 1);
        prop_assert!(b_checks <= policy.attempts());
    }
}

#[test]
fn retry_step_carries_the_interval() {
    let mut poll = FramePoll::new(FrameWaitPolicy::default());
    assert_eq!(
        poll.check(false),
        PollStep::RetryAfter(Duration::from_millis(100))
    );
}
