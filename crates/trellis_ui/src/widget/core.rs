//! Core widget types and traits.

use std::ops::{Deref, DerefMut};
use std::sync::atomic::{AtomicU64, Ordering};

use trellis_core::Point;

use crate::render::RenderTarget;
use crate::result::{WidgetResult, WidgetType};

static NEXT_ID: AtomicU64 = AtomicU64::new(1);

/// Unique identifier for a widget.
///
/// Containers key their children's results by it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, PartialOrd, Ord)]
pub struct WidgetId(u64);

impl WidgetId {
    /// No widget. Never handed out by [`next`](Self::next).
    pub const NONE: Self = Self(0);

    /// Creates a widget ID from a raw value.
    #[must_use]
    pub const fn new(id: u64) -> Self {
        Self(id)
    }

    /// Allocates a fresh, process-unique ID.
    #[must_use]
    pub fn next() -> Self {
        Self(NEXT_ID.fetch_add(1, Ordering::Relaxed))
    }

    /// Returns the raw ID value.
    #[must_use]
    pub const fn raw(self) -> u64 {
        self.0
    }
}

/// The two-phase widget contract.
///
/// Each frame, `process` runs once with the frame's input and writes the
/// widget's outcome into `result`; then `present` runs once and draws. The
/// offset `rel` is accumulated by containers: a widget's absolute position is
/// always `position() + rel`.
///
/// `process` never draws. `present` never changes interaction state.
pub trait Widget<I> {
    /// Identity used as the key in a parent's result map.
    fn id(&self) -> WidgetId;

    /// Position relative to the parent.
    fn position(&self) -> Point;

    /// Shape of the result this widget produces.
    fn widget_type(&self) -> WidgetType;

    /// Polls input and reports this frame's outcome.
    ///
    /// The result may borrow from the widget for `'a`.
    fn process<'a>(&'a mut self, rel: Point, input: &I, result: &mut WidgetResult<'a>);

    /// Draws the widget at `position() + rel`.
    fn present(&mut self, target: &mut dyn RenderTarget, rel: Point);
}

/// A container's child: owned by the container or borrowed from the caller.
pub enum Member<'w, T: ?Sized> {
    /// The container drops it.
    Owned(Box<T>),
    /// The caller keeps it; it must outlive the container.
    Borrowed(&'w mut T),
}

impl<'w, T> Member<'w, T> {
    /// Moves `value` into a new owned member.
    pub fn owned(value: T) -> Self {
        Self::Owned(Box::new(value))
    }
}

impl<'w, T: ?Sized> Member<'w, T> {
    /// Borrows `value` for the container's lifetime.
    pub fn borrowed(value: &'w mut T) -> Self {
        Self::Borrowed(value)
    }

    /// Returns true if the container owns the member.
    #[must_use]
    pub fn is_owned(&self) -> bool {
        matches!(self, Self::Owned(_))
    }
}

impl<T: ?Sized> From<Box<T>> for Member<'_, T> {
    fn from(value: Box<T>) -> Self {
        Self::Owned(value)
    }
}

impl<'w, T: ?Sized> From<&'w mut T> for Member<'w, T> {
    fn from(value: &'w mut T) -> Self {
        Self::Borrowed(value)
    }
}

impl<T: ?Sized> Deref for Member<'_, T> {
    type Target = T;

    fn deref(&self) -> &T {
        match self {
            Self::Owned(b) => b,
            Self::Borrowed(r) => r,
        }
    }
}

impl<T: ?Sized> DerefMut for Member<'_, T> {
    fn deref_mut(&mut self) -> &mut T {
        match self {
            Self::Owned(b) => b,
            Self::Borrowed(r) => r,
        }
    }
}
