#![forbid(unsafe_code)]

//! Driving a guide from other threads.
//!
//! A [`Guide`](crate::Guide) lives on the UI thread. A [`GuideRemote`] is a
//! cheap, `Send` handle that queues commands for it; they are applied, in
//! order, the next time the owner calls [`Guide::pump`](crate::Guide::pump).
//!
//! Every method is fire-and-forget. A remote whose guide was dropped logs
//! at trace level and otherwise does nothing; use [`GuideRemote::post`] to
//! observe that case.

use tracing::trace;
use waymark_core::{Rect, Tag};
use waymark_runtime::QueueHandle;

use crate::config::GuideConfig;
use crate::error::Result;
use crate::overlay::OverlayAction;
use crate::step::Step;

/// A guide operation queued for the UI thread.
#[derive(Debug, Clone, PartialEq)]
pub enum GuideCommand {
    /// [`Guide::initialize_tags`](crate::Guide::initialize_tags).
    InitializeTags(Vec<Tag>),
    /// [`Guide::start`](crate::Guide::start).
    Start {
        /// Steps for the run.
        steps: Vec<Step>,
        /// Config for the run; `None` uses the default.
        config: Option<GuideConfig>,
    },
    /// [`Guide::advance`](crate::Guide::advance).
    Advance,
    /// [`Guide::end`](crate::Guide::end).
    End,
    /// [`Guide::update_rect`](crate::Guide::update_rect).
    UpdateRect(Tag, Rect),
    /// [`Guide::handle_action`](crate::Guide::handle_action).
    Action(OverlayAction),
}

/// `Send + Clone` handle that queues commands for a guide.
#[derive(Debug, Clone)]
pub struct GuideRemote {
    queue: QueueHandle<GuideCommand>,
}

impl GuideRemote {
    pub(crate) fn new(queue: QueueHandle<GuideCommand>) -> Self {
        Self { queue }
    }

    /// Queue `command`, reporting a dropped guide.
    pub fn post(&self, command: GuideCommand) -> Result<()> {
        self.queue.post(command)?;
        Ok(())
    }

    fn send(&self, command: GuideCommand) {
        if self.post(command).is_err() {
            trace!(target: "waymark.dispatch", "guide dropped, command discarded");
        }
    }

    /// Queue an `initialize_tags` call.
    pub fn initialize_tags<I, T>(&self, tags: I)
    where
        I: IntoIterator<Item = T>,
        T: Into<Tag>,
    {
        self.send(GuideCommand::InitializeTags(
            tags.into_iter().map(Into::into).collect(),
        ));
    }

    /// Queue a `start` call.
    pub fn start(&self, steps: impl IntoIterator<Item = Step>, config: Option<GuideConfig>) {
        self.send(GuideCommand::Start {
            steps: steps.into_iter().collect(),
            config,
        });
    }

    /// Queue an `advance` call.
    pub fn advance(&self) {
        self.send(GuideCommand::Advance);
    }

    /// Queue an `end` call.
    pub fn end(&self) {
        self.send(GuideCommand::End);
    }

    /// Queue an `update_rect` call.
    pub fn update_rect(&self, tag: impl Into<Tag>, rect: Rect) {
        self.send(GuideCommand::UpdateRect(tag.into(), rect));
    }

    /// Queue a `handle_action` call.
    pub fn handle_action(&self, action: OverlayAction) {
        self.send(GuideCommand::Action(action));
    }
}
