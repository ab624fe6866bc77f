#![forbid(unsafe_code)]

//! Identifiers for tracked elements and scroll targets.
//!
//! Hosts that name their elements with an enum can implement
//! `From<TheirEnum> for Tag` and pass enum values anywhere a tag is taken.

use std::borrow::Borrow;
use std::fmt;

/// Unique string identifying a trackable UI element within a guide run.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(transparent))]
pub struct Tag(String);

impl Tag {
    /// Create a tag.
    pub fn new(tag: impl Into<String>) -> Self {
        Self(tag.into())
    }

    /// The tag text.
    #[inline]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for Tag {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl Borrow<str> for Tag {
    fn borrow(&self) -> &str {
        &self.0
    }
}

impl AsRef<str> for Tag {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl From<&str> for Tag {
    fn from(tag: &str) -> Self {
        Self(tag.to_string())
    }
}

impl From<String> for Tag {
    fn from(tag: String) -> Self {
        Self(tag)
    }
}

impl From<&String> for Tag {
    fn from(tag: &String) -> Self {
        Self(tag.clone())
    }
}

impl From<&Tag> for Tag {
    fn from(tag: &Tag) -> Self {
        tag.clone()
    }
}

/// Opaque identifier of a scroll position the host knows how to reveal.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(transparent))]
pub struct ScrollAnchor(String);

impl ScrollAnchor {
    /// Create an anchor.
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    /// The anchor id.
    #[inline]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for ScrollAnchor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for ScrollAnchor {
    fn from(id: &str) -> Self {
        Self(id.to_string())
    }
}

impl From<String> for ScrollAnchor {
    fn from(id: String) -> Self {
        Self(id)
    }
}
