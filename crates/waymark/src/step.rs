#![forbid(unsafe_code)]

//! One stop in a guide.

use waymark_core::{Rect, ScrollAnchor, Tag};

/// A guide step: which element to highlight and what to say about it.
///
/// `target` starts empty and is filled in by geometry reports. A step whose
/// target is still empty when it comes up is skipped.
#[derive(Debug, Clone, PartialEq)]
pub struct Step {
    /// Identifier of the highlighted element.
    pub tag: Tag,
    /// Message shown in the panel.
    pub message: String,
    /// Last known geometry of the element, in overlay coordinates.
    pub target: Rect,
    /// Scroll container position to bring into view before showing.
    pub scroll_anchor: Option<ScrollAnchor>,
}

impl Step {
    /// A step with no geometry yet.
    pub fn new(tag: impl Into<Tag>, message: impl Into<String>) -> Self {
        Self {
            tag: tag.into(),
            message: message.into(),
            target: Rect::ZERO,
            scroll_anchor: None,
        }
    }

    /// A message-less step used to collect geometry before `start`.
    pub fn placeholder(tag: impl Into<Tag>) -> Self {
        Self::new(tag, String::new())
    }

    /// Set known geometry up front.
    #[must_use]
    pub fn target(mut self, rect: Rect) -> Self {
        self.target = rect;
        self
    }

    /// Scroll to `anchor` before this step is shown.
    #[must_use]
    pub fn scroll_to(mut self, anchor: impl Into<ScrollAnchor>) -> Self {
        self.scroll_anchor = Some(anchor.into());
        self
    }

    /// Whether the step can be displayed.
    #[inline]
    pub fn has_geometry(&self) -> bool {
        !self.target.is_empty()
    }
}
