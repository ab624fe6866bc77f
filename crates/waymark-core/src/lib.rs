#![forbid(unsafe_code)]

//! Core value types for waymark guides.
//!
//! # Role in waymark
//! `waymark-core` is the leaf of the workspace. It defines the geometry that
//! host layout passes report (`Rect`, `Size`, `Insets`), the colors used by
//! overlay configuration, and the identifiers (`Tag`, `ScrollAnchor`) that
//! connect guide steps to host elements. It has no runtime behavior of its
//! own.

pub mod color;
pub mod geometry;
pub mod tag;

pub use color::{ParseColorError, Rgba};
pub use geometry::{Insets, Point, Rect, Size};
pub use tag::{ScrollAnchor, Tag};
