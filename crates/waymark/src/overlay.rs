#![forbid(unsafe_code)]

//! What the overlay shows for one step, and where its parts go.
//!
//! The overlay has three layers:
//!
//! 1. A dim layer over the whole viewport with a rounded cutout around the
//!    target.
//! 2. A message panel with a small arrow pointing at the target.
//! 3. A footer inside the panel: progress ("2/5"), a skip button, and a
//!    next/done button.
//!
//! [`OverlayContent`] is the host-independent description of all three.
//! [`OverlayLayout`] turns it into concrete rectangles once the host knows the
//! panel's measured size.

use waymark_core::{Insets, Point, Rect, Rgba, Size, Tag};

use crate::config::GuideConfig;
use crate::position::{AnchorSide, place};
use crate::step::Step;

/// Distance the cutout extends past the target on every side.
pub const CUTOUT_PADDING: f64 = 8.0;

/// Corner radius of the cutout.
pub const CUTOUT_RADIUS: f64 = 8.0;

/// Distance from the panel's left edge to the arrow when the target starts
/// at or before the panel.
pub const ARROW_INSET: f64 = 16.0;

/// User input coming back from the overlay.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum OverlayAction {
    /// The next/done button.
    Next,
    /// The skip button.
    Skip,
    /// A tap on the dim layer outside the panel.
    DimTap,
}

/// Everything needed to draw one step.
#[derive(Debug, Clone, PartialEq)]
pub struct OverlayContent {
    /// Tag of the highlighted element.
    pub tag: Tag,
    /// Panel message.
    pub message: String,
    /// Zero-based position of this step.
    pub index: usize,
    /// Number of steps in the run.
    pub total: usize,
    /// Target geometry.
    pub target: Rect,
    /// Hole in the dim layer.
    pub cutout: Rect,
    /// Corner radius of the hole.
    pub cutout_radius: f64,
    /// Next or done, depending on position.
    pub primary_label: String,
    /// Skip button label.
    pub skip_label: String,
    /// Appearance for the run.
    pub config: GuideConfig,
}

impl OverlayContent {
    /// Describe `step`, the `index`-th of `total`.
    pub fn new(step: &Step, index: usize, total: usize, config: &GuideConfig) -> Self {
        let is_last = index + 1 >= total;
        let primary_label = if is_last {
            config.done_label.clone()
        } else {
            config.next_label.clone()
        };
        Self {
            tag: step.tag.clone(),
            message: step.message.clone(),
            index,
            total,
            target: step.target,
            cutout: step.target.outset(CUTOUT_PADDING),
            cutout_radius: CUTOUT_RADIUS,
            primary_label,
            skip_label: config.skip_label.clone(),
            config: config.clone(),
        }
    }

    /// One-based progress, e.g. `"2/5"`.
    pub fn progress_label(&self) -> String {
        format!("{}/{}", self.index + 1, self.total)
    }

    /// Whether this is the final step.
    pub fn is_last(&self) -> bool {
        self.index + 1 >= self.total
    }

    /// Color of the dim layer.
    pub fn dim_color(&self) -> Rgba {
        Rgba::BLACK.with_opacity(self.config.dim_opacity)
    }
}

/// Concrete geometry of the overlay for one viewport.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct OverlayLayout {
    /// The message panel.
    pub panel: Rect,
    /// Which panel edge carries the arrow.
    pub anchor: AnchorSide,
    /// Arrow position measured from the panel's left edge.
    pub arrow_offset: f64,
    /// Hole in the dim layer.
    pub cutout: Rect,
}

impl OverlayLayout {
    /// Lay out `content` given the panel's measured size.
    ///
    /// The panel width is capped at the configured max width before
    /// placement.
    pub fn resolve(content: &OverlayContent, measured: Size, viewport: Size, insets: Insets) -> Self {
        let max_width = content.config.resolved_max_width(viewport.width);
        let size = Size::new(measured.width.min(max_width), measured.height);
        let placement = place(content.target, size, viewport, insets);
        let arrow_offset = (content.target.left() - placement.origin.x).max(0.0) + ARROW_INSET;

        Self {
            panel: placement.panel(size),
            anchor: placement.anchor,
            arrow_offset,
            cutout: content.cutout,
        }
    }

    /// Action for a tap at `point`, if the tap is outside the panel.
    ///
    /// Taps inside the panel belong to its buttons, which the host routes
    /// itself.
    pub fn action_at(&self, point: Point) -> Option<OverlayAction> {
        if self.panel.contains(point) {
            None
        } else {
            Some(OverlayAction::DimTap)
        }
    }
}
