//! Widget system for UI components.
//!
//! Leaves (buttons, input boxes, scrollbars, frames) and the two containers
//! that compose them (pages and branch pages). Everything implements
//! [`Widget`], so containers nest freely.

mod branch_page;
mod button;
mod core;
mod frame;
mod frame_array;
mod input_box;
mod page;
mod scrollbar;

pub use self::core::{Member, Widget, WidgetId};
pub use branch_page::{BranchPage, BranchPair};
pub use button::{mouse_pressed, Button, PressedPredicate};
pub use frame::{AnimatedFrame, Frame, Wrapper};
pub use frame_array::FrameArray;
pub use input_box::{keyboard_char_input, mouse_on_click, CharEvent, CharInput, ClickPredicate, InputBox};
pub use page::{Child, Page};
pub use scrollbar::{mouse_drag_horizontal, mouse_drag_vertical, DragPredicate, Scrollbar};
