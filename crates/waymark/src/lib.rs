#![forbid(unsafe_code)]

//! waymark: onboarding guides for UI hosts.
//!
//! A guide highlights one element at a time behind a dimmed overlay and
//! shows a short message next to it. The host reports element geometry from
//! its layout passes and draws what the guide hands it; the guide decides
//! which step is current, when to scroll, and where the panel goes.
//!
//! # Quick start
//!
//! ```ignore
//! use waymark::prelude::*;
//!
//! let mut guide = Guide::new(MyHost::new());
//! guide.initialize_tags(["compose", "inbox"]);
//!
//! // From layout callbacks, on any thread via a remote:
//! let remote = guide.remote();
//! remote.update_rect("compose", Rect::new(300.0, 760.0, 56.0, 56.0));
//!
//! guide.start(
//!     [
//!         Step::new("compose", "Write a new message"),
//!         Step::new("inbox", "Your conversations live here").scroll_to("top"),
//!     ],
//!     None,
//! );
//!
//! // Each frame:
//! guide.pump();
//! ```

pub mod config;
pub mod error;
pub mod guide;
pub mod overlay;
pub mod position;
pub mod presenter;
pub mod registry;
pub mod remote;
pub mod step;

// --- Core re-exports -------------------------------------------------------

pub use waymark_core::{Insets, Point, Rect, Rgba, ScrollAnchor, Size, Tag};

// --- Runtime re-exports ----------------------------------------------------

#[cfg(feature = "tokio")]
pub use waymark_runtime::TokioSleeper;
pub use waymark_runtime::{Clock, FrameWaitPolicy, ManualClock, Sleeper, Subscription, SystemClock};

// --- Guide -----------------------------------------------------------------

pub use config::{ConfigError, GuideConfig};
pub use error::{Error, Result};
pub use guide::{Guide, GuideSnapshot, GuideState, RunOutcome, ScrollProxy, StepPhase};
pub use overlay::{OverlayAction, OverlayContent, OverlayLayout};
pub use position::{AnchorSide, Placement, place};
pub use presenter::{OverlayHost, OverlayPresenter};
pub use registry::{FrameWatch, GeometryRegistry};
pub use remote::{GuideCommand, GuideRemote};
pub use step::Step;

/// Everything a host needs to drive a guide.
pub mod prelude {
    pub use crate::{
        Error, Guide, GuideConfig, GuideRemote, GuideSnapshot, GuideState, OverlayAction,
        OverlayContent, OverlayHost, OverlayLayout, Rect, Result, Size, Step, Tag,
    };

    pub use crate::{core, runtime};
}

pub use waymark_core as core;
pub use waymark_runtime as runtime;
