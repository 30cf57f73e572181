//! # TRELLIS UI
//!
//! Retained-mode widget layer: stateful widgets polled once per frame
//! against tracked input, then redrawn.
//!
//! ## Architecture
//!
//! ```text
//! ┌──────────────────────────────────────────────────────────────┐
//! │                          ONE FRAME                           │
//! ├──────────────────────────────────────────────────────────────┤
//! │  record() → events → refresh() → process() → present()       │
//! │      ↓                   ↓           ↓            ↓          │
//! │  snapshot           edge detect  WidgetResult  RenderTarget  │
//! └──────────────────────────────────────────────────────────────┘
//! ```
//!
//! - `process` walks the tree once with the frame's input and an offset
//!   that containers accumulate. It never draws.
//! - `present` walks the tree once with the same offsets. It never touches
//!   input or interaction state.
//!
//! Widgets cache their look and redraw it only on state transitions.
//! Everything is single-threaded; there is nothing to lock.

#![deny(missing_docs)]
#![deny(unsafe_code)]

pub mod error;
pub mod generate;
pub mod input;
pub mod render;
pub mod result;
pub mod style;
pub mod widget;

pub use error::{BuildResult, ConfigError, InputError, UiError, UiResult, WidgetError};
pub use generate::{generate_buttons, wrap, wrap_with_page};
pub use input::{
    InputEvent, InputManager, Key, KeyTracker, KeyboardInput, MouseButton, MouseTracker,
    PointerInput,
};
pub use render::{CopyTo, Drawable, Image, RenderCommand, RenderTarget, Surface, SurfaceLoader, UIRenderer};
pub use result::{
    BranchResult, ButtonResult, InputBoxResult, PageResult, ScrollbarResult, WidgetResult,
    WidgetType,
};
pub use style::{ButtonStyle, ColorScheme, TextStyle, UiConfig};
pub use widget::{
    AnimatedFrame, BranchPage, Button, Frame, FrameArray, InputBox, Member, Page, Scrollbar,
    Widget, WidgetId, Wrapper,
};

pub use trellis_core::{Color, Orientation, Point, Rect, Size, VOID_POINT};
