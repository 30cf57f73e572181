//! # TRELLIS Core
//!
//! Plain data used by the widget layer.
//!
//! ## CRITICAL RULE
//!
//! This crate must NEVER depend on input handling or rendering. Widgets,
//! trackers and render targets live in `trellis_ui`; only the value types
//! they exchange live here.

#![deny(missing_docs)]
#![deny(unsafe_code)]

pub mod color;
pub mod geometry;

pub use color::Color;
pub use geometry::{Orientation, Point, Rect, Size, VOID_POINT};
