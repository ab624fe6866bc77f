#![forbid(unsafe_code)]

//! waymark runtime
//!
//! Single-thread plumbing shared by the guide: time, timers, frame-wait
//! retries, cross-thread hand-off, and observable state.
//!
//! # Key Components
//!
//! - [`Clock`] / [`ManualClock`] - monotonic time, injectable for tests
//! - [`TimerQueue`] - deadline queue for settle delays and poll retries
//! - [`FrameWaitPolicy`] / [`FramePoll`] - the frame-wait retry contract
//! - [`CancellationSource`] - interrupts blocking frame waits
//! - [`MainQueue`] / [`QueueHandle`] - fire-and-forget hand-off to the UI thread
//! - [`Observable`] - state with change subscriptions
//!
//! # Role in waymark
//! Nothing here knows about steps or overlays. The `waymark` crate composes
//! these pieces into the guide state machine.

pub mod cancellation;
pub mod clock;
pub mod dispatch;
pub mod frame_wait;
pub mod observable;
pub mod timer;

pub use cancellation::{CancellationSource, CancellationToken};
pub use clock::{Clock, ManualClock, SystemClock};
pub use dispatch::{Disconnected, MainQueue, QueueHandle};
#[cfg(feature = "tokio")]
pub use frame_wait::TokioSleeper;
pub use frame_wait::{FramePoll, FrameWaitPolicy, PollStep, Sleeper, wait_async, wait_blocking, wait_then};
pub use observable::{Observable, Subscription};
pub use timer::{TimerId, TimerQueue};
