#![forbid(unsafe_code)]

//! Hand-off from any thread to the UI thread.
//!
//! Guide state is confined to one thread. Layout callbacks, background
//! tasks, or other threads that want to touch it post a message through a
//! [`QueueHandle`]; the owning thread drains the [`MainQueue`] from its frame
//! loop and applies the messages in arrival order.
//!
//! Posting never blocks. Posting to a queue whose owner is gone is reported
//! as [`Disconnected`] and is otherwise harmless, so callers can fire and
//! forget.

use std::fmt;
use std::sync::mpsc;

/// Receiving end, owned by the UI thread.
pub struct MainQueue<M> {
    sender: mpsc::Sender<M>,
    receiver: mpsc::Receiver<M>,
}

impl<M: Send + 'static> MainQueue<M> {
    /// Create an empty queue.
    #[must_use]
    pub fn new() -> Self {
        let (sender, receiver) = mpsc::channel();
        Self { sender, receiver }
    }

    /// A sending handle that can move to other threads.
    #[must_use]
    pub fn handle(&self) -> QueueHandle<M> {
        QueueHandle {
            sender: self.sender.clone(),
        }
    }

    /// Take the next queued message without blocking.
    pub fn try_next(&self) -> Option<M> {
        self.receiver.try_recv().ok()
    }

    /// Apply every queued message, including ones posted while draining.
    ///
    /// Returns the number of messages handled.
    pub fn drain(&self, mut apply: impl FnMut(M)) -> usize {
        let mut handled = 0;
        while let Some(msg) = self.try_next() {
            apply(msg);
            handled += 1;
        }
        if handled > 0 {
            tracing::trace!(target: "waymark.dispatch", handled, "drained main queue");
        }
        handled
    }
}

impl<M: Send + 'static> Default for MainQueue<M> {
    fn default() -> Self {
        Self::new()
    }
}

impl<M> fmt::Debug for MainQueue<M> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("MainQueue").finish_non_exhaustive()
    }
}

/// Sending end. `Send + Clone` whenever the message type is `Send`.
pub struct QueueHandle<M> {
    sender: mpsc::Sender<M>,
}

impl<M> Clone for QueueHandle<M> {
    fn clone(&self) -> Self {
        Self {
            sender: self.sender.clone(),
        }
    }
}

impl<M> fmt::Debug for QueueHandle<M> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("QueueHandle").finish_non_exhaustive()
    }
}

impl<M: Send + 'static> QueueHandle<M> {
    /// Queue `msg` for the UI thread.
    pub fn post(&self, msg: M) -> Result<(), Disconnected<M>> {
        self.sender.send(msg).map_err(|mpsc::SendError(msg)| {
            tracing::trace!(target: "waymark.dispatch", "post to dropped main queue");
            Disconnected(msg)
        })
    }
}

/// The UI-thread side was dropped; carries the undelivered message.
#[derive(PartialEq, Eq)]
pub struct Disconnected<M>(pub M);

impl<M> Disconnected<M> {
    /// Recover the undelivered message.
    pub fn into_inner(self) -> M {
        self.0
    }
}

impl<M> fmt::Debug for Disconnected<M> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("Disconnected(..)")
    }
}

impl<M> fmt::Display for Disconnected<M> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("main queue is gone")
    }
}

impl<M> std::error::Error for Disconnected<M> {}
