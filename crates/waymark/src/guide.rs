#![forbid(unsafe_code)]

//! The guide state machine.
//!
//! A [`Guide`] walks the user through a list of [`Step`]s, one overlay at a
//! time. It owns the step list, the geometry registry, and the overlay
//! presenter, and lives on the UI thread.
//!
//! # State machine
//!
//! ```text
//!            start()                 settle delay
//!   Idle ─────────────▶ Active(i, Settling) ─────────▶ present(i)
//!    ▲                                                    │
//!    │ end() / last advance()          scroll anchor?     │
//!    │                        ┌───── yes ─────────────────┤
//!    │                        ▼                           │ no
//!    │            Active(i, AwaitingFrame)                │
//!    │                        │ frame wait done           │
//!    │                        ▼                           ▼
//!    └──────────────── Active(i, Presented) ◀──── geometry known
//!                             │
//!                             │ advance(): present(i + 1)
//!                             ▼
//! ```
//!
//! A step whose geometry is still empty when it comes up is skipped.
//!
//! # Timers
//!
//! The settle delay and frame-wait retries are entries in a [`TimerQueue`]
//! fired by [`Guide::tick`]. Nothing sleeps. Every step timer is stamped
//! with the run generation, which `start`, `advance`, `end`, and
//! completion bump; a timer that fires after the generation moved on is
//! dropped without effect.
//!
//! # Threads
//!
//! `Guide` is `!Send`. Other threads use a [`GuideRemote`] from
//! [`Guide::remote`]; its commands are applied by [`Guide::pump`].

use std::future::Future;

use tracing::{debug, debug_span, trace};
use waymark_core::{Rect, ScrollAnchor, Tag};
use waymark_runtime::{
    Clock, FramePoll, MainQueue, Observable, PollStep, Sleeper, SystemClock, TimerQueue,
    wait_async,
};
use web_time::Instant;

use crate::config::GuideConfig;
use crate::overlay::{OverlayAction, OverlayContent};
use crate::presenter::{OverlayHost, OverlayPresenter};
use crate::registry::GeometryRegistry;
use crate::remote::{GuideCommand, GuideRemote};
use crate::step::Step;

/// Brings a scroll position into view on request.
///
/// Any `FnMut(&ScrollAnchor)` closure is a `ScrollProxy`.
pub trait ScrollProxy {
    /// Scroll so that `anchor` is visible. Completion is not reported; the
    /// guide waits for fresh geometry instead.
    fn scroll_to(&mut self, anchor: &ScrollAnchor);
}

impl<F: FnMut(&ScrollAnchor)> ScrollProxy for F {
    fn scroll_to(&mut self, anchor: &ScrollAnchor) {
        self(anchor);
    }
}

/// Where an active step is in its lifecycle.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum StepPhase {
    /// Waiting out the settle delay after `start`.
    Settling,
    /// Scroll requested; polling for the step's geometry.
    AwaitingFrame,
    /// Overlay drawn for the step.
    Presented,
}

/// Run state.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum GuideState {
    /// No run in progress.
    #[default]
    Idle,
    /// Showing, or about to show, step `index`.
    Active {
        /// Zero-based current step.
        index: usize,
        /// Lifecycle of the current step.
        phase: StepPhase,
    },
}

/// How the last run ended.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum RunOutcome {
    /// Advanced past the last step.
    Completed,
    /// Ended early by `end()` or the skip button.
    Ended,
}

/// Point-in-time view of a guide, published on every change.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct GuideSnapshot {
    /// Run state.
    pub state: GuideState,
    /// Steps in the active run; zero while idle.
    pub total: usize,
    /// The current step while active.
    pub current: Option<Step>,
    /// Whether the current step has non-empty geometry.
    pub rect_known: bool,
    /// Whether an overlay surface is showing.
    pub overlay_visible: bool,
    /// Steps skipped for missing geometry in the current or last run.
    pub skipped: usize,
    /// How the last run ended, if one has.
    pub last_outcome: Option<RunOutcome>,
}

impl GuideSnapshot {
    /// Current step index; zero while idle.
    pub fn index(&self) -> usize {
        match self.state {
            GuideState::Active { index, .. } => index,
            GuideState::Idle => 0,
        }
    }

    /// Whether a run is in progress.
    pub fn is_active(&self) -> bool {
        matches!(self.state, GuideState::Active { .. })
    }
}

enum TimerKind {
    Settle,
    StepPoll {
        index: usize,
        poll: FramePoll,
    },
    Waiter {
        tag: Tag,
        poll: FramePoll,
        on_done: Box<dyn FnOnce(bool)>,
    },
}

struct GuideTimer {
    generation: u64,
    kind: TimerKind,
}

impl GuideTimer {
    fn is_waiter(&self) -> bool {
        matches!(self.kind, TimerKind::Waiter { .. })
    }
}

/// Onboarding guide bound to an overlay host.
///
/// # Example
///
/// ```ignore
/// let mut guide = Guide::new(host);
/// guide.update_rect("save", Rect::new(300.0, 40.0, 60.0, 30.0));
/// guide.start([Step::new("save", "Tap here to save")], None);
///
/// // In the frame loop:
/// guide.pump();
/// ```
pub struct Guide<H: OverlayHost, C: Clock = SystemClock> {
    steps: Vec<Step>,
    state: GuideState,
    config: GuideConfig,
    registry: GeometryRegistry,
    presenter: OverlayPresenter<H>,
    scroll_proxy: Option<Box<dyn ScrollProxy>>,
    clock: C,
    timers: TimerQueue<GuideTimer>,
    generation: u64,
    skipped: usize,
    last_outcome: Option<RunOutcome>,
    published: Observable<GuideSnapshot>,
    inbox: MainQueue<GuideCommand>,
}

impl<H: OverlayHost> Guide<H, SystemClock> {
    /// A guide on the system clock.
    pub fn new(host: H) -> Self {
        Self::with_clock(host, SystemClock)
    }
}

impl<H: OverlayHost, C: Clock> Guide<H, C> {
    /// A guide on a custom clock.
    pub fn with_clock(host: H, clock: C) -> Self {
        Self {
            steps: Vec::new(),
            state: GuideState::Idle,
            config: GuideConfig::default(),
            registry: GeometryRegistry::new(),
            presenter: OverlayPresenter::new(host),
            scroll_proxy: None,
            clock,
            timers: TimerQueue::new(),
            generation: 0,
            skipped: 0,
            last_outcome: None,
            published: Observable::new(GuideSnapshot::default()),
            inbox: MainQueue::new(),
        }
    }

    /// Route scroll requests to `proxy`.
    ///
    /// Without a proxy, steps with a scroll anchor are shown right away.
    pub fn set_scroll_proxy(&mut self, proxy: impl ScrollProxy + 'static) {
        self.scroll_proxy = Some(Box::new(proxy));
    }

    /// Forget the scroll proxy.
    pub fn clear_scroll_proxy(&mut self) {
        self.scroll_proxy = None;
    }

    // ── public control surface ──────────────────────────────────────────

    /// Create placeholder steps for `tags` so geometry can be collected
    /// before the real steps are known.
    ///
    /// Pending geometry for these tags is applied and consumed. Ignored
    /// while a run is active.
    pub fn initialize_tags<I, T>(&mut self, tags: I)
    where
        I: IntoIterator<Item = T>,
        T: Into<Tag>,
    {
        if self.is_active() {
            debug!(target: "waymark.guide", "initialize_tags ignored during a run");
            return;
        }
        let mut steps: Vec<Step> = tags.into_iter().map(Step::placeholder).collect();
        let mut applied = 0usize;
        for step in &mut steps {
            if let Some(rect) = self.registry.take_pending(step.tag.as_str()) {
                step.target = rect;
                applied += 1;
            }
        }
        debug!(
            target: "waymark.guide",
            tags = steps.len(),
            applied,
            "placeholder steps created"
        );
        self.steps = steps;
        self.publish();
    }

    /// Begin a run over `steps`. `None` uses [`GuideConfig::default`].
    ///
    /// Each step keeps, in order of preference: pending geometry reported
    /// for its tag, geometry it was constructed with, geometry of the
    /// same-tag step from the previous list.
    pub fn start(&mut self, steps: impl IntoIterator<Item = Step>, config: Option<GuideConfig>) {
        let mut steps: Vec<Step> = steps.into_iter().collect();
        let _span = debug_span!(target: "waymark.guide", "guide.start", steps = steps.len()).entered();

        for step in &mut steps {
            if !step.has_geometry()
                && let Some(previous) = self.steps.iter().find(|s| s.tag == step.tag)
            {
                step.target = previous.target;
            }
            if let Some(rect) = self.registry.pending(step.tag.as_str()) {
                step.target = rect;
            }
        }
        self.registry.clear_pending();

        self.generation += 1;
        self.timers.clear();
        self.steps = steps;
        self.config = config.unwrap_or_default();
        self.skipped = 0;
        self.last_outcome = None;

        if self.steps.is_empty() {
            debug!(target: "waymark.guide", "started with no steps");
            self.finish(RunOutcome::Completed);
            return;
        }

        self.state = GuideState::Active {
            index: 0,
            phase: StepPhase::Settling,
        };
        let due = self.clock.now() + self.config.settle_delay_duration();
        self.schedule(due, TimerKind::Settle);
        debug!(
            target: "waymark.guide",
            settle_ms = self.config.settle_delay_ms,
            "guide started"
        );
        self.publish();
    }

    /// Move to the next step, or complete the run after the last one.
    pub fn advance(&mut self) {
        let GuideState::Active { index, .. } = self.state else {
            trace!(target: "waymark.guide", "advance ignored while idle");
            return;
        };
        self.generation += 1;
        self.timers.retain(GuideTimer::is_waiter);
        if index + 1 < self.steps.len() {
            self.present_from(index + 1, false);
        } else {
            self.finish(RunOutcome::Completed);
        }
    }

    /// Stop the run and hide the overlay. No-op while idle.
    pub fn end(&mut self) {
        if !self.is_active() && !self.presenter.is_visible() {
            trace!(target: "waymark.guide", "end ignored while idle");
            return;
        }
        self.finish(RunOutcome::Ended);
    }

    /// Record fresh geometry for `tag` from a layout pass.
    ///
    /// Reports made while idle, or for tags with no step in the active run,
    /// are held until `initialize_tags` or `start` claims them. A report for
    /// the displayed step redraws it in place; an empty one skips it.
    pub fn update_rect(&mut self, tag: impl Into<Tag>, rect: Rect) {
        let tag = tag.into();
        trace!(target: "waymark.registry", %tag, ?rect, "geometry reported");
        self.registry.record(tag.clone(), rect);

        if !self.is_active() {
            // Placeholder steps see the report now; `start` takes it from pending.
            if let Some(step) = self.steps.iter_mut().find(|s| s.tag == tag) {
                step.target = rect;
            }
            self.registry.pend(tag, rect);
            return;
        }

        let Some(pos) = self.steps.iter().position(|s| s.tag == tag) else {
            self.registry.pend(tag, rect);
            return;
        };
        if self.steps[pos].target == rect {
            return;
        }
        self.steps[pos].target = rect;

        let displayed = GuideState::Active {
            index: pos,
            phase: StepPhase::Presented,
        };
        if self.state == displayed {
            if rect.is_empty() {
                debug!(target: "waymark.guide", %tag, "displayed step lost its geometry");
                self.generation += 1;
                self.timers.retain(GuideTimer::is_waiter);
                self.skip_from(pos);
            } else {
                let content = self.content_for(pos);
                self.presenter.render(&content);
            }
        }
        self.publish();
    }

    /// Apply a gesture from the overlay.
    ///
    /// The primary button and taps on the dim layer advance; the skip
    /// button ends the run.
    pub fn handle_action(&mut self, action: OverlayAction) {
        trace!(target: "waymark.guide", ?action, "overlay action");
        match action {
            OverlayAction::Next | OverlayAction::DimTap => self.advance(),
            OverlayAction::Skip => self.end(),
        }
    }

    // ── frame loop ──────────────────────────────────────────────────────

    /// Fire every due timer. Returns how many fired.
    pub fn tick(&mut self) -> usize {
        let now = self.clock.now();
        let mut fired = 0;
        while let Some(timer) = self.timers.pop_due(now) {
            self.fire(timer, now);
            fired += 1;
        }
        fired
    }

    /// When the next timer is due, if any.
    pub fn next_deadline(&self) -> Option<Instant> {
        self.timers.next_deadline()
    }

    /// Apply commands posted through [`GuideRemote`]s, then [`tick`](Self::tick).
    ///
    /// Returns the number of commands applied.
    pub fn pump(&mut self) -> usize {
        let mut handled = 0;
        while let Some(command) = self.inbox.try_next() {
            self.apply(command);
            handled += 1;
        }
        if handled > 0 {
            trace!(target: "waymark.dispatch", handled, "remote commands applied");
        }
        self.tick();
        handled
    }

    /// A `Send` handle for driving this guide from other threads.
    pub fn remote(&self) -> GuideRemote {
        GuideRemote::new(self.inbox.handle())
    }

    /// Apply one command immediately.
    pub fn apply(&mut self, command: GuideCommand) {
        match command {
            GuideCommand::InitializeTags(tags) => self.initialize_tags(tags),
            GuideCommand::Start { steps, config } => self.start(steps, config),
            GuideCommand::Advance => self.advance(),
            GuideCommand::End => self.end(),
            GuideCommand::UpdateRect(tag, rect) => self.update_rect(tag, rect),
            GuideCommand::Action(action) => self.handle_action(action),
        }
    }

    // ── frame waits ─────────────────────────────────────────────────────

    /// Call `on_done` once `tag` has geometry, or with `false` once the
    /// run's frame-wait budget is spent.
    ///
    /// The first check happens now; later ones are driven by
    /// [`tick`](Self::tick). Pending waits are dropped, without calling
    /// `on_done`, by `start` and `end`.
    pub fn wait_for_frame(&mut self, tag: impl Into<Tag>, on_done: impl FnOnce(bool) + 'static) {
        let tag = tag.into();
        let mut poll = FramePoll::new(self.config.frame_wait);
        match poll.check(self.registry.is_available(tag.as_str())) {
            PollStep::RetryAfter(pause) => {
                let due = self.clock.now() + pause;
                self.schedule(
                    due,
                    TimerKind::Waiter {
                        tag,
                        poll,
                        on_done: Box::new(on_done),
                    },
                );
            }
            step => on_done(step == PollStep::Ready),
        }
    }

    /// Async form of [`wait_for_frame`](Self::wait_for_frame).
    ///
    /// The future does not borrow the guide; geometry reported through
    /// [`update_rect`](Self::update_rect) while it is pending is observed.
    pub fn wait_for_frame_async<T, S>(
        &self,
        tag: T,
        sleeper: S,
    ) -> impl Future<Output = bool> + use<T, S, H, C>
    where
        T: Into<Tag>,
        S: Sleeper,
    {
        let watch = self.registry.watch(tag.into());
        let policy = self.config.frame_wait;
        async move { wait_async(policy, || watch.is_available(), &sleeper, None).await }
    }

    // ── observation ─────────────────────────────────────────────────────

    /// Current state, built fresh.
    pub fn snapshot(&self) -> GuideSnapshot {
        let (current, total) = match self.state {
            GuideState::Active { index, .. } => (self.steps.get(index).cloned(), self.steps.len()),
            GuideState::Idle => (None, 0),
        };
        GuideSnapshot {
            state: self.state,
            total,
            rect_known: current.as_ref().is_some_and(Step::has_geometry),
            current,
            overlay_visible: self.presenter.is_visible(),
            skipped: self.skipped,
            last_outcome: self.last_outcome,
        }
    }

    /// Published state. Subscribe to be told when the current step changes.
    pub fn state(&self) -> &Observable<GuideSnapshot> {
        &self.published
    }

    /// Run state.
    pub fn run_state(&self) -> GuideState {
        self.state
    }

    /// Whether a run is in progress.
    pub fn is_active(&self) -> bool {
        matches!(self.state, GuideState::Active { .. })
    }

    /// Current step index; zero while idle.
    pub fn current_index(&self) -> usize {
        match self.state {
            GuideState::Active { index, .. } => index,
            GuideState::Idle => 0,
        }
    }

    /// The step list of the current or last run.
    pub fn steps(&self) -> &[Step] {
        &self.steps
    }

    /// Config of the current or last run.
    pub fn config(&self) -> &GuideConfig {
        &self.config
    }

    /// Geometry reports seen so far.
    pub fn registry(&self) -> &GeometryRegistry {
        &self.registry
    }

    /// Whether an overlay surface is showing.
    pub fn is_overlay_visible(&self) -> bool {
        self.presenter.is_visible()
    }

    /// The overlay host.
    pub fn host(&self) -> &H {
        self.presenter.host()
    }

    /// The overlay host, mutably.
    pub fn host_mut(&mut self) -> &mut H {
        self.presenter.host_mut()
    }

    // ── internals ───────────────────────────────────────────────────────

    fn schedule(&mut self, due: Instant, kind: TimerKind) {
        self.timers.schedule(
            due,
            GuideTimer {
                generation: self.generation,
                kind,
            },
        );
    }

    fn fire(&mut self, timer: GuideTimer, now: Instant) {
        let GuideTimer { generation, kind } = timer;
        match kind {
            TimerKind::Waiter { tag, mut poll, on_done } => {
                match poll.check(self.registry.is_available(tag.as_str())) {
                    PollStep::RetryAfter(pause) => {
                        self.schedule(now + pause, TimerKind::Waiter { tag, poll, on_done });
                    }
                    step => on_done(step == PollStep::Ready),
                }
            }
            _ if generation != self.generation => {
                trace!(target: "waymark.guide", generation, "stale timer dropped");
            }
            TimerKind::Settle => {
                if let GuideState::Active {
                    index,
                    phase: StepPhase::Settling,
                } = self.state
                {
                    self.present_from(index, false);
                }
            }
            TimerKind::StepPoll { index, mut poll } => {
                let awaiting = GuideState::Active {
                    index,
                    phase: StepPhase::AwaitingFrame,
                };
                if self.state != awaiting {
                    return;
                }
                let available = self.steps.get(index).is_some_and(Step::has_geometry);
                match poll.check(available) {
                    PollStep::RetryAfter(pause) => {
                        self.schedule(now + pause, TimerKind::StepPoll { index, poll });
                    }
                    step => {
                        debug!(
                            target: "waymark.guide",
                            index,
                            ready = step == PollStep::Ready,
                            checks = poll.checks(),
                            "frame wait finished"
                        );
                        self.present_from(index, true);
                    }
                }
            }
        }
    }

    /// Show the first presentable step at or after `index`.
    ///
    /// `scrolled` is true when `index`'s scroll and frame wait already ran.
    fn present_from(&mut self, mut index: usize, mut scrolled: bool) {
        loop {
            let Some(step) = self.steps.get(index) else {
                self.finish(RunOutcome::Completed);
                return;
            };
            let _span = debug_span!(
                target: "waymark.guide",
                "guide.present",
                index,
                tag = %step.tag
            )
            .entered();

            let anchor = if scrolled {
                None
            } else {
                step.scroll_anchor.clone()
            };
            scrolled = false;

            if let Some(anchor) = anchor
                && let Some(proxy) = self.scroll_proxy.as_mut()
            {
                proxy.scroll_to(&anchor);
                let mut poll = FramePoll::new(self.config.frame_wait);
                let available = self.steps[index].has_geometry();
                if let PollStep::RetryAfter(pause) = poll.check(available) {
                    self.state = GuideState::Active {
                        index,
                        phase: StepPhase::AwaitingFrame,
                    };
                    let due = self.clock.now() + pause;
                    self.schedule(due, TimerKind::StepPoll { index, poll });
                    self.publish();
                    return;
                }
            }

            if self.render(index) {
                return;
            }
            self.skipped += 1;
            if index + 1 >= self.steps.len() {
                self.finish(RunOutcome::Completed);
                return;
            }
            index += 1;
        }
    }

    fn skip_from(&mut self, index: usize) {
        self.skipped += 1;
        if index + 1 < self.steps.len() {
            self.present_from(index + 1, false);
        } else {
            self.finish(RunOutcome::Completed);
        }
    }

    /// Draw step `index` if it has geometry.
    fn render(&mut self, index: usize) -> bool {
        let Some(step) = self.steps.get(index) else {
            return false;
        };
        if !step.has_geometry() {
            debug!(target: "waymark.guide", index, tag = %step.tag, "no geometry, step skipped");
            return false;
        }
        let content = self.content_for(index);
        self.state = GuideState::Active {
            index,
            phase: StepPhase::Presented,
        };
        self.presenter.show();
        self.presenter.render(&content);
        debug!(target: "waymark.guide", index, "step presented");
        self.publish();
        true
    }

    fn content_for(&self, index: usize) -> OverlayContent {
        OverlayContent::new(&self.steps[index], index, self.steps.len(), &self.config)
    }

    fn finish(&mut self, outcome: RunOutcome) {
        self.generation += 1;
        self.timers.clear();
        self.registry.clear_pending();
        self.presenter.hide();
        self.state = GuideState::Idle;
        self.last_outcome = Some(outcome);
        debug!(
            target: "waymark.guide",
            ?outcome,
            skipped = self.skipped,
            "guide finished"
        );
        self.publish();
    }

    fn publish(&self) {
        self.published.set(self.snapshot());
    }
}

impl<H: OverlayHost, C: Clock> std::fmt::Debug for Guide<H, C> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Guide")
            .field("state", &self.state)
            .field("steps", &self.steps.len())
            .field("generation", &self.generation)
            .field("timers", &self.timers.len())
            .field("presenter", &self.presenter)
            .finish_non_exhaustive()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use waymark_runtime::ManualClock;
    use web_time::Duration;

    #[derive(Default)]
    struct NullHost {
        frames: usize,
    }

    impl OverlayHost for NullHost {
        type Surface = ();

        fn open_surface(&mut self) -> Option<()> {
            Some(())
        }

        fn render(&mut self, _surface: &mut (), _content: &OverlayContent) {
            self.frames += 1;
        }

        fn close_surface(&mut self, _surface: ()) {}
    }

    fn guide() -> (Guide<NullHost, ManualClock>, ManualClock) {
        let clock = ManualClock::new();
        (Guide::with_clock(NullHost::default(), clock.clone()), clock)
    }

    fn rect() -> Rect {
        Rect::new(10.0, 10.0, 40.0, 20.0)
    }

    #[test]
    fn settle_delay_defers_first_step() {
        let (mut guide, clock) = guide();
        guide.update_rect("a", rect());
        guide.start([Step::new("a", "first")], None);
        assert_eq!(
            guide.run_state(),
            GuideState::Active {
                index: 0,
                phase: StepPhase::Settling
            }
        );
        assert_eq!(guide.tick(), 0);

        clock.advance(Duration::from_millis(300));
        assert_eq!(guide.tick(), 1);
        assert!(guide.is_overlay_visible());
        assert_eq!(guide.host().frames, 1);
    }

    #[test]
    fn stale_settle_timer_is_dropped() {
        let (mut guide, clock) = guide();
        guide.update_rect("a", rect());
        guide.start([Step::new("a", "first")], None);
        guide.end();
        clock.advance(Duration::from_secs(1));
        guide.tick();
        assert!(!guide.is_overlay_visible());
        assert_eq!(guide.run_state(), GuideState::Idle);
    }

    #[test]
    fn start_with_no_steps_completes() {
        let (mut guide, _) = guide();
        guide.start(Vec::new(), None);
        assert_eq!(guide.run_state(), GuideState::Idle);
        assert_eq!(guide.snapshot().last_outcome, Some(RunOutcome::Completed));
    }

    #[test]
    fn advance_while_idle_is_ignored() {
        let (mut guide, _) = guide();
        guide.advance();
        guide.end();
        assert_eq!(guide.snapshot(), GuideSnapshot::default());
    }

    #[test]
    fn redraw_in_place_on_new_geometry() {
        let (mut guide, clock) = guide();
        guide.update_rect("a", rect());
        guide.start(
            [Step::new("a", "first")],
            Some(GuideConfig::default().settle_delay(Duration::ZERO)),
        );
        clock.advance(Duration::from_millis(1));
        guide.tick();
        assert_eq!(guide.host().frames, 1);

        guide.update_rect("a", Rect::new(20.0, 20.0, 40.0, 20.0));
        assert_eq!(guide.host().frames, 2);
        assert_eq!(guide.steps()[0].target.x, 20.0);

        // Same geometry again draws nothing.
        guide.update_rect("a", Rect::new(20.0, 20.0, 40.0, 20.0));
        assert_eq!(guide.host().frames, 2);
    }

    #[test]
    fn closures_are_scroll_proxies() {
        let mut seen = Vec::new();
        let mut proxy = |anchor: &ScrollAnchor| seen.push(anchor.as_str().to_owned());
        proxy.scroll_to(&ScrollAnchor::from("top"));
        assert_eq!(seen, vec!["top".to_string()]);
    }
}
