//! Passive leaves: they draw, and report the frame tag.

use trellis_core::Point;

use super::core::{Widget, WidgetId};
use super::frame_array::FrameArray;
use crate::render::{CopyTo, Drawable, RenderTarget, Surface};
use crate::result::{WidgetResult, WidgetType};

/// A static drawable at a position.
pub struct Frame<D: Drawable = Surface> {
    id: WidgetId,
    position: Point,
    surface: D,
}

impl<D: Drawable> Frame<D> {
    /// Creates a frame showing `surface`.
    #[must_use]
    pub fn new(position: Point, surface: D) -> Self {
        Self {
            id: WidgetId::next(),
            position,
            surface,
        }
    }

    /// Identity of this frame, for any input type.
    #[must_use]
    pub fn id(&self) -> WidgetId {
        self.id
    }

    /// Replaces the drawable, returning the old one.
    pub fn set_surface(&mut self, surface: D) -> D {
        std::mem::replace(&mut self.surface, surface)
    }

    /// The drawable shown.
    #[must_use]
    pub fn surface(&self) -> &D {
        &self.surface
    }
}

impl<I, D: Drawable> Widget<I> for Frame<D> {
    fn id(&self) -> WidgetId {
        self.id
    }

    fn position(&self) -> Point {
        self.position
    }

    fn widget_type(&self) -> WidgetType {
        WidgetType::Frame
    }

    fn process<'a>(&'a mut self, _rel: Point, _input: &I, result: &mut WidgetResult<'a>) {
        result.set(WidgetType::Frame);
    }

    fn present(&mut self, target: &mut dyn RenderTarget, rel: Point) {
        self.surface.draw(target, self.position + rel);
    }
}

/// Places anything that can copy itself onto a target in a widget tree.
pub struct Wrapper<W: CopyTo> {
    id: WidgetId,
    position: Point,
    inner: W,
}

/// An animation in a widget tree.
pub type AnimatedFrame = Wrapper<FrameArray>;

impl<W: CopyTo> Wrapper<W> {
    /// Wraps `inner` at `position`.
    #[must_use]
    pub fn new(position: Point, inner: W) -> Self {
        Self {
            id: WidgetId::next(),
            position,
            inner,
        }
    }

    /// Identity of this wrapper, for any input type.
    #[must_use]
    pub fn id(&self) -> WidgetId {
        self.id
    }

    /// The wrapped object.
    #[must_use]
    pub fn inner(&self) -> &W {
        &self.inner
    }

    /// The wrapped object, mutably.
    pub fn inner_mut(&mut self) -> &mut W {
        &mut self.inner
    }

    /// Unwraps.
    #[must_use]
    pub fn into_inner(self) -> W {
        self.inner
    }
}

impl<I, W: CopyTo> Widget<I> for Wrapper<W> {
    fn id(&self) -> WidgetId {
        self.id
    }

    fn position(&self) -> Point {
        self.position
    }

    fn widget_type(&self) -> WidgetType {
        WidgetType::Frame
    }

    fn process<'a>(&'a mut self, _rel: Point, _input: &I, result: &mut WidgetResult<'a>) {
        result.set(WidgetType::Frame);
    }

    fn present(&mut self, target: &mut dyn RenderTarget, rel: Point) {
        CopyTo::copy_to(&mut self.inner, target, self.position + rel);
    }
}
