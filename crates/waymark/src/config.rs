#![forbid(unsafe_code)]

//! Guide configuration.
//!
//! A [`GuideConfig`] is supplied once per [`Guide::start`](crate::Guide::start)
//! call and stays fixed for the run. It carries the overlay's appearance
//! (handed to the host inside [`OverlayContent`](crate::OverlayContent)) and
//! the sequencer's timing.
//!
//! # Loading
//!
//! With the `config-file` feature a config can be read from TOML or JSON.
//! Missing keys fall back to the defaults below.
//!
//! ```toml
//! dim_opacity = 0.75
//! next_label = "Continue"
//! background = "#1C1C1E"
//! text_color = "#FFFFFF"
//!
//! [frame_wait]
//! max_retries = 5
//! interval_ms = 50
//! ```
//!
//! # Defaults
//!
//! | Field | Default |
//! |-------|---------|
//! | `dim_opacity` | 0.6 |
//! | `corner_radius` | 10 |
//! | `padding` | 10 |
//! | `max_width` | two thirds of the viewport width |
//! | `background` / `text_color` | white / black |
//! | labels | "Skip Tutorial", "Next", "Done" |
//! | `settle_delay_ms` | 300 |
//! | `frame_wait` | 10 checks, 100 ms apart |

#[cfg(feature = "config-file")]
use std::path::Path;

use waymark_core::Rgba;
use waymark_runtime::FrameWaitPolicy;
use web_time::Duration;

/// Appearance and timing for one guide run.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct GuideConfig {
    /// Opacity of the dim layer around the cutout.
    pub dim_opacity: f64,
    /// Corner radius of the message panel.
    pub corner_radius: f64,
    /// Inner padding of the message panel.
    pub padding: f64,
    /// Panel max width; `None` means two thirds of the viewport width.
    pub max_width: Option<f64>,
    /// Panel background.
    pub background: Rgba,
    /// Message text color.
    pub text_color: Rgba,
    /// Label of the button that ends the guide early.
    pub skip_label: String,
    /// Label of the advance button on every step but the last.
    pub next_label: String,
    /// Label of the advance button on the last step.
    pub done_label: String,
    /// Pause between `start` and evaluating the first step.
    pub settle_delay_ms: u64,
    /// Retry budget when waiting for a scrolled-to element's geometry.
    pub frame_wait: FrameWaitPolicy,
}

impl Default for GuideConfig {
    fn default() -> Self {
        Self {
            dim_opacity: 0.6,
            corner_radius: 10.0,
            padding: 10.0,
            max_width: None,
            background: Rgba::WHITE,
            text_color: Rgba::BLACK,
            skip_label: "Skip Tutorial".to_string(),
            next_label: "Next".to_string(),
            done_label: "Done".to_string(),
            settle_delay_ms: 300,
            frame_wait: FrameWaitPolicy::default(),
        }
    }
}

impl GuideConfig {
    /// Set dim layer opacity.
    #[must_use]
    pub fn dim_opacity(mut self, opacity: f64) -> Self {
        self.dim_opacity = opacity;
        self
    }

    /// Set panel corner radius.
    #[must_use]
    pub fn corner_radius(mut self, radius: f64) -> Self {
        self.corner_radius = radius;
        self
    }

    /// Set panel padding.
    #[must_use]
    pub fn padding(mut self, padding: f64) -> Self {
        self.padding = padding;
        self
    }

    /// Set a fixed panel max width.
    #[must_use]
    pub fn max_width(mut self, width: f64) -> Self {
        self.max_width = Some(width);
        self
    }

    /// Set panel colors.
    #[must_use]
    pub fn colors(mut self, background: Rgba, text: Rgba) -> Self {
        self.background = background;
        self.text_color = text;
        self
    }

    /// Set the skip / next / done button labels.
    #[must_use]
    pub fn labels(
        mut self,
        skip: impl Into<String>,
        next: impl Into<String>,
        done: impl Into<String>,
    ) -> Self {
        self.skip_label = skip.into();
        self.next_label = next.into();
        self.done_label = done.into();
        self
    }

    /// Set the settle delay.
    #[must_use]
    pub fn settle_delay(mut self, delay: Duration) -> Self {
        self.settle_delay_ms = u64::try_from(delay.as_millis()).unwrap_or(u64::MAX);
        self
    }

    /// Set the frame-wait policy.
    #[must_use]
    pub fn frame_wait(mut self, policy: FrameWaitPolicy) -> Self {
        self.frame_wait = policy;
        self
    }

    /// Settle delay as a duration.
    #[inline]
    pub fn settle_delay_duration(&self) -> Duration {
        Duration::from_millis(self.settle_delay_ms)
    }

    /// Panel max width for a viewport of the given width.
    pub fn resolved_max_width(&self, viewport_width: f64) -> f64 {
        self.max_width.unwrap_or(viewport_width / 3.0 * 2.0)
    }

    /// Check every parameter is within range.
    ///
    /// Returns a list of problems; empty means valid.
    #[must_use]
    pub fn validate(&self) -> Vec<String> {
        let mut errors = Vec::new();

        if !(0.0..=1.0).contains(&self.dim_opacity) {
            errors.push(format!(
                "dim_opacity must be in [0, 1], got {}",
                self.dim_opacity
            ));
        }
        if !(self.corner_radius >= 0.0 && self.corner_radius.is_finite()) {
            errors.push(format!(
                "corner_radius must be finite and >= 0, got {}",
                self.corner_radius
            ));
        }
        if !(self.padding >= 0.0 && self.padding.is_finite()) {
            errors.push(format!(
                "padding must be finite and >= 0, got {}",
                self.padding
            ));
        }
        if let Some(width) = self.max_width
            && !(width > 0.0 && width.is_finite())
        {
            errors.push(format!("max_width must be finite and > 0, got {width}"));
        }
        if self.next_label.trim().is_empty() {
            errors.push("next_label must not be empty".into());
        }
        if self.done_label.trim().is_empty() {
            errors.push("done_label must not be empty".into());
        }
        if self.frame_wait.max_retries == 0 {
            errors.push("frame_wait.max_retries must be > 0".into());
        }

        errors
    }

    /// Return `self` if [`validate`](Self::validate) finds nothing.
    pub fn validated(self) -> Result<Self, ConfigError> {
        let errors = self.validate();
        if errors.is_empty() {
            Ok(self)
        } else {
            Err(ConfigError::Validation(errors))
        }
    }

    /// Load from a TOML string.
    #[cfg(feature = "config-file")]
    pub fn from_toml_str(s: &str) -> Result<Self, ConfigError> {
        toml::from_str(s).map_err(ConfigError::Toml)
    }

    /// Load from a TOML file on disk.
    #[cfg(feature = "config-file")]
    pub fn from_toml_file(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path.as_ref()).map_err(ConfigError::Io)?;
        Self::from_toml_str(&content)
    }

    /// Load from a JSON string.
    #[cfg(feature = "config-file")]
    pub fn from_json_str(s: &str) -> Result<Self, ConfigError> {
        serde_json::from_str(s).map_err(ConfigError::Json)
    }

    /// Load from a JSON file on disk.
    #[cfg(feature = "config-file")]
    pub fn from_json_file(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path.as_ref()).map_err(ConfigError::Io)?;
        Self::from_json_str(&content)
    }

    /// Serialize to a TOML string.
    #[cfg(feature = "config-file")]
    pub fn to_toml_string(&self) -> Result<String, ConfigError> {
        toml::to_string_pretty(self).map_err(ConfigError::TomlSerialize)
    }
}

/// Errors from loading or validating a [`GuideConfig`].
#[derive(Debug)]
pub enum ConfigError {
    /// I/O error reading a file.
    Io(std::io::Error),
    /// TOML parse error.
    #[cfg(feature = "config-file")]
    Toml(toml::de::Error),
    /// TOML serialization error.
    #[cfg(feature = "config-file")]
    TomlSerialize(toml::ser::Error),
    /// JSON parse error.
    #[cfg(feature = "config-file")]
    Json(serde_json::Error),
    /// Validation errors.
    Validation(Vec<String>),
}

impl std::fmt::Display for ConfigError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Io(e) => write!(f, "I/O error: {e}"),
            #[cfg(feature = "config-file")]
            Self::Toml(e) => write!(f, "TOML parse error: {e}"),
            #[cfg(feature = "config-file")]
            Self::TomlSerialize(e) => write!(f, "TOML serialize error: {e}"),
            #[cfg(feature = "config-file")]
            Self::Json(e) => write!(f, "JSON parse error: {e}"),
            Self::Validation(errors) => {
                write!(f, "validation errors: {}", errors.join("; "))
            }
        }
    }
}

impl std::error::Error for ConfigError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::Io(e) => Some(e),
            #[cfg(feature = "config-file")]
            Self::Toml(e) => Some(e),
            #[cfg(feature = "config-file")]
            Self::TomlSerialize(e) => Some(e),
            #[cfg(feature = "config-file")]
            Self::Json(e) => Some(e),
            Self::Validation(_) => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_match_documented_values() {
        let config = GuideConfig::default();
        assert_eq!(config.dim_opacity, 0.6);
        assert_eq!(config.corner_radius, 10.0);
        assert_eq!(config.padding, 10.0);
        assert_eq!(config.max_width, None);
        assert_eq!(config.background, Rgba::WHITE);
        assert_eq!(config.text_color, Rgba::BLACK);
        assert_eq!(config.skip_label, "Skip Tutorial");
        assert_eq!(config.next_label, "Next");
        assert_eq!(config.done_label, "Done");
        assert_eq!(config.settle_delay_duration(), Duration::from_millis(300));
        assert_eq!(config.frame_wait, FrameWaitPolicy::default());
    }

    #[test]
    fn default_is_valid() {
        assert!(GuideConfig::default().validate().is_empty());
        assert!(GuideConfig::default().validated().is_ok());
    }

    #[test]
    fn builder_sets_fields() {
        let config = GuideConfig::default()
            .dim_opacity(0.3)
            .max_width(240.0)
            .labels("Later", "Continue", "Got it")
            .settle_delay(Duration::ZERO);
        assert_eq!(config.dim_opacity, 0.3);
        assert_eq!(config.resolved_max_width(900.0), 240.0);
        assert_eq!(config.next_label, "Continue");
        assert_eq!(config.settle_delay_ms, 0);
    }

    #[test]
    fn max_width_defaults_to_two_thirds_of_viewport() {
        assert_eq!(GuideConfig::default().resolved_max_width(390.0), 260.0);
    }

    #[test]
    fn validate_reports_every_problem() {
        let config = GuideConfig {
            dim_opacity: 1.5,
            corner_radius: -1.0,
            padding: f64::NAN,
            max_width: Some(0.0),
            next_label: " ".into(),
            frame_wait: FrameWaitPolicy::new(0, Duration::from_millis(10)),
            ..GuideConfig::default()
        };
        let errors = config.validate();
        assert_eq!(errors.len(), 6, "{errors:?}");
        assert!(matches!(
            config.validated(),
            Err(ConfigError::Validation(list)) if list.len() == 6
        ));
    }

    #[test]
    fn validation_error_display_joins_messages() {
        let err = ConfigError::Validation(vec!["a".into(), "b".into()]);
        assert_eq!(err.to_string(), "validation errors: a; b");
    }
}
