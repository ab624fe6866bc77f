#![forbid(unsafe_code)]

//! Owns the overlay surface and hands content to the host for drawing.
//!
//! The presenter keeps at most one surface alive. [`show`](OverlayPresenter::show)
//! is idempotent; [`hide`](OverlayPresenter::hide) on a hidden presenter does
//! nothing. When the host cannot provide a surface (no window yet, app in the
//! background) showing degrades to a logged no-op and the guide keeps running
//! without anything on screen.

use tracing::{debug, trace};

use crate::overlay::OverlayContent;

/// The host's drawing side.
///
/// Implemented by whatever owns the real window or terminal. The guide never
/// draws; it only decides what to draw and when.
pub trait OverlayHost {
    /// A live overlay surface, such as a window or layer.
    type Surface;

    /// Create a surface covering the viewport, above app content.
    ///
    /// Returns `None` if no surface can be created right now.
    fn open_surface(&mut self) -> Option<Self::Surface>;

    /// Draw `content` on `surface`, replacing whatever was drawn before.
    fn render(&mut self, surface: &mut Self::Surface, content: &OverlayContent);

    /// Tear the surface down.
    fn close_surface(&mut self, surface: Self::Surface);
}

/// Single-surface overlay owner.
pub struct OverlayPresenter<H: OverlayHost> {
    host: H,
    surface: Option<H::Surface>,
}

impl<H: OverlayHost> OverlayPresenter<H> {
    /// Wrap a host. Nothing is shown yet.
    pub fn new(host: H) -> Self {
        Self {
            host,
            surface: None,
        }
    }

    /// Ensure a surface exists. Returns whether one is available.
    pub fn show(&mut self) -> bool {
        if self.surface.is_some() {
            return true;
        }
        match self.host.open_surface() {
            Some(surface) => {
                debug!(target: "waymark.presenter", "overlay surface opened");
                self.surface = Some(surface);
                true
            }
            None => {
                debug!(target: "waymark.presenter", "no overlay surface available");
                false
            }
        }
    }

    /// Draw `content` if a surface is showing. Returns whether it was drawn.
    pub fn render(&mut self, content: &OverlayContent) -> bool {
        let Some(surface) = self.surface.as_mut() else {
            trace!(target: "waymark.presenter", "render skipped, overlay hidden");
            return false;
        };
        self.host.render(surface, content);
        true
    }

    /// Close the surface if one is showing.
    pub fn hide(&mut self) {
        if let Some(surface) = self.surface.take() {
            self.host.close_surface(surface);
            debug!(target: "waymark.presenter", "overlay surface closed");
        }
    }

    /// Whether a surface is showing.
    #[inline]
    pub fn is_visible(&self) -> bool {
        self.surface.is_some()
    }

    /// The wrapped host.
    pub fn host(&self) -> &H {
        &self.host
    }

    /// The wrapped host, mutably.
    pub fn host_mut(&mut self) -> &mut H {
        &mut self.host
    }
}

impl<H: OverlayHost> std::fmt::Debug for OverlayPresenter<H> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("OverlayPresenter")
            .field("visible", &self.is_visible())
            .finish_non_exhaustive()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::GuideConfig;
    use crate::step::Step;
    use waymark_core::Rect;

    #[derive(Default)]
    struct CountingHost {
        available: bool,
        opened: usize,
        closed: usize,
        rendered: Vec<String>,
    }

    impl OverlayHost for CountingHost {
        type Surface = usize;

        fn open_surface(&mut self) -> Option<usize> {
            if !self.available {
                return None;
            }
            self.opened += 1;
            Some(self.opened)
        }

        fn render(&mut self, _surface: &mut usize, content: &OverlayContent) {
            self.rendered.push(content.message.clone());
        }

        fn close_surface(&mut self, _surface: usize) {
            self.closed += 1;
        }
    }

    fn content() -> OverlayContent {
        let step = Step::new("a", "hello").target(Rect::new(0.0, 0.0, 10.0, 10.0));
        OverlayContent::new(&step, 0, 1, &GuideConfig::default())
    }

    #[test]
    fn show_is_idempotent() {
        let mut presenter = OverlayPresenter::new(CountingHost {
            available: true,
            ..Default::default()
        });
        assert!(presenter.show());
        assert!(presenter.show());
        assert_eq!(presenter.host().opened, 1);
    }

    #[test]
    fn hide_when_hidden_is_a_no_op() {
        let mut presenter = OverlayPresenter::new(CountingHost::default());
        presenter.hide();
        assert_eq!(presenter.host().closed, 0);
    }

    #[test]
    fn missing_surface_degrades_to_no_op() {
        let mut presenter = OverlayPresenter::new(CountingHost::default());
        assert!(!presenter.show());
        assert!(!presenter.render(&content()));
        assert!(presenter.host().rendered.is_empty());
    }

    #[test]
    fn render_then_hide() {
        let mut presenter = OverlayPresenter::new(CountingHost {
            available: true,
            ..Default::default()
        });
        presenter.show();
        assert!(presenter.render(&content()));
        presenter.hide();
        assert!(!presenter.is_visible());
        assert_eq!(presenter.host().rendered, vec!["hello".to_string()]);
        assert_eq!(presenter.host().closed, 1);
    }
}
