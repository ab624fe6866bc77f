#![forbid(unsafe_code)]

//! Panel placement next to a highlighted element.
//!
//! # Algorithm
//!
//! Both panel dimensions are raised to at least [`MIN_OVERLAY_DIMENSION`].
//!
//! Horizontal: the panel's left edge starts at the target's left edge. If
//! the right edge would come within [`PADDING`] of the viewport's right
//! edge it is pulled in to end exactly there; a non-positive left edge is
//! pushed to [`PADDING`].
//!
//! Vertical: the panel goes [`PADDING`] below the target, pointing up, when
//! it fits above the bottom safe area. Otherwise it goes [`PADDING`] above
//! the target, pointing down; if that pokes through the top safe area the
//! panel is centered on the target's vertical midpoint, clamped to the
//! usable band.
//!
//! # Invariants
//!
//! - `Bottom` is returned exactly when the below position does not fit.
//! - The function is pure and total. Degenerate viewports produce finite,
//!   possibly off-screen, coordinates rather than panics.

use waymark_core::{Insets, Point, Rect, Size};

/// Gap between panel, target, and viewport edges.
pub const PADDING: f64 = 16.0;

/// Smallest panel width and height used for placement.
pub const MIN_OVERLAY_DIMENSION: f64 = 50.0;

/// Which panel edge faces the target.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum AnchorSide {
    /// Panel sits below the target; its top edge points up at it.
    Top,
    /// Panel sits above the target or over its midpoint; its bottom edge
    /// points down.
    Bottom,
}

/// Where the panel goes.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Placement {
    /// Top-left corner of the panel.
    pub origin: Point,
    /// Edge of the panel facing the target.
    pub anchor: AnchorSide,
}

impl Placement {
    /// Panel rectangle for the given (unclamped) panel size.
    pub fn panel(&self, size: Size) -> Rect {
        Rect::from_origin_size(self.origin, size.at_least(MIN_OVERLAY_DIMENSION))
    }
}

/// Place a panel of `overlay` size next to `target` inside `viewport`.
///
/// `insets` is the viewport's safe area; only `top` and `bottom` are used.
pub fn place(target: Rect, overlay: Size, viewport: Size, insets: Insets) -> Placement {
    let overlay = overlay.at_least(MIN_OVERLAY_DIMENSION);

    let mut x = target.left();
    if x + overlay.width >= viewport.width - PADDING {
        x = viewport.width - overlay.width - PADDING;
    } else if x <= 0.0 {
        x = PADDING;
    }

    let min_y = insets.top + PADDING;
    let max_y = viewport.height - insets.bottom - PADDING - overlay.height;
    let below = target.bottom() + PADDING;

    let (y, anchor) = if below + overlay.height > max_y {
        let above = target.top() - PADDING - overlay.height;
        let y = if above >= min_y {
            above
        } else {
            // Not f64::clamp: the band may be inverted on tiny viewports.
            target.mid_y().max(min_y).min(max_y)
        };
        (y, AnchorSide::Bottom)
    } else {
        (below, AnchorSide::Top)
    };

    Placement {
        origin: Point::new(x, y),
        anchor,
    }
}
