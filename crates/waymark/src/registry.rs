#![forbid(unsafe_code)]

//! Geometry reported by the host's layout passes.
//!
//! Two maps live here:
//!
//! - `latest`: the most recent rectangle for every tag ever reported. Frame
//!   waits probe this map.
//! - `pending`: reports that arrived while no step with that tag existed.
//!   They are folded into steps by `initialize_tags` or `start` and then
//!   dropped.
//!
//! `latest` sits behind an `Rc<RefCell<_>>` so a [`FrameWatch`] can probe it
//! from an async frame wait that outlives the borrow of the guide.

use std::cell::RefCell;
use std::rc::Rc;

use ahash::AHashMap;
use waymark_core::{Rect, Tag};

type Latest = Rc<RefCell<AHashMap<Tag, Rect>>>;

/// Latest and pending geometry by tag.
#[derive(Debug, Default)]
pub struct GeometryRegistry {
    latest: Latest,
    pending: AHashMap<Tag, Rect>,
}

impl GeometryRegistry {
    /// Create an empty registry.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Remember `rect` as the latest geometry of `tag`.
    pub fn record(&mut self, tag: Tag, rect: Rect) {
        self.latest.borrow_mut().insert(tag, rect);
    }

    /// Latest geometry of `tag`, if ever reported.
    pub fn resolve(&self, tag: &str) -> Option<Rect> {
        self.latest.borrow().get(tag).copied()
    }

    /// Whether `tag` currently has non-empty geometry.
    pub fn is_available(&self, tag: &str) -> bool {
        self.resolve(tag).is_some_and(|rect| !rect.is_empty())
    }

    /// Hold `rect` until a step named `tag` exists. Later reports win.
    pub fn pend(&mut self, tag: Tag, rect: Rect) {
        self.pending.insert(tag, rect);
    }

    /// Pending geometry for `tag` without consuming it.
    pub fn pending(&self, tag: &str) -> Option<Rect> {
        self.pending.get(tag).copied()
    }

    /// Remove and return pending geometry for `tag`.
    pub fn take_pending(&mut self, tag: &str) -> Option<Rect> {
        self.pending.remove(tag)
    }

    /// Drop every pending report.
    pub fn clear_pending(&mut self) {
        self.pending.clear();
    }

    /// Number of pending reports.
    pub fn pending_len(&self) -> usize {
        self.pending.len()
    }

    /// A detached probe for `tag`.
    pub fn watch(&self, tag: Tag) -> FrameWatch {
        FrameWatch {
            latest: Rc::clone(&self.latest),
            tag,
        }
    }
}

/// Probes one tag's latest geometry without borrowing the guide.
#[derive(Debug, Clone)]
pub struct FrameWatch {
    latest: Latest,
    tag: Tag,
}

impl FrameWatch {
    /// The watched tag.
    pub fn tag(&self) -> &Tag {
        &self.tag
    }

    /// Latest geometry of the watched tag.
    pub fn rect(&self) -> Option<Rect> {
        self.latest.borrow().get(&self.tag).copied()
    }

    /// Whether the watched tag has non-empty geometry.
    pub fn is_available(&self) -> bool {
        self.rect().is_some_and(|rect| !rect.is_empty())
    }
}
