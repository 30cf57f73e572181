//! Scrollbar: a track with a draggable handle.

use trellis_core::{Orientation, Point, Rect, Size};

use super::button::{mouse_pressed, Button, PressedPredicate};
use super::core::{Widget, WidgetId};
use crate::error::{BuildResult, WidgetError};
use crate::input::{MouseButton, PointerInput};
use crate::render::{CopyTo, Drawable, Image, RenderTarget, Surface};
use crate::result::{WidgetResult, WidgetType};
use crate::style::{ButtonStyle, ColorScheme};

/// Turns input into a change of the handle position, as a fraction of the
/// track.
///
/// Called with the input, the handle's absolute hit rect, the size of the
/// track the handle moves along and whether the handle is pressed.
pub type DragPredicate<I> = fn(&I, &Rect, Size, bool) -> f64;

fn mouse_drag<I: PointerInput>(
    input: &I,
    handle: &Rect,
    track: Size,
    handle_is_front: bool,
    orientation: Orientation,
) -> f64 {
    let mouse = input.mouse();
    let grabbed = handle.contains(mouse.at_unchecked(MouseButton::Left)) || handle_is_front;
    if !(mouse.moved() && mouse.is_down(MouseButton::Left) && grabbed) {
        return 0.0;
    }
    let extent = orientation.extent(track);
    if extent == 0 {
        return 0.0;
    }
    f64::from(orientation.along(mouse.motion_delta())) / f64::from(extent)
}

/// Default vertical drag: pointer motion while the handle is held.
#[must_use]
pub fn mouse_drag_vertical<I: PointerInput>(
    input: &I,
    handle: &Rect,
    track: Size,
    handle_is_front: bool,
) -> f64 {
    mouse_drag(input, handle, track, handle_is_front, Orientation::Vertical)
}

/// Default horizontal drag: pointer motion while the handle is held.
#[must_use]
pub fn mouse_drag_horizontal<I: PointerInput>(
    input: &I,
    handle: &Rect,
    track: Size,
    handle_is_front: bool,
) -> f64 {
    mouse_drag(input, handle, track, handle_is_front, Orientation::Horizontal)
}

/// A bar along one fixed axis with a handle at `percentage` of the way.
pub struct Scrollbar<I> {
    id: WidgetId,
    position: Point,
    size: Size,
    orientation: Orientation,
    percentage: f64,
    /// Area the handle's top-left corner moves across.
    track: Size,
    handle: Button<I>,
    scheme: ColorScheme,
    outline: i32,
    background: Option<(Image, Point)>,
    back: Surface,
    drag: DragPredicate<I>,
}

impl<I: PointerInput> Scrollbar<I> {
    /// Creates a mouse-driven vertical scrollbar.
    ///
    /// # Errors
    ///
    /// [`WidgetError::InvalidConfiguration`] if the handle does not fit.
    pub fn vertical(position: Point, size: Size, handle_len: i32) -> BuildResult<Self> {
        Self::build(
            position,
            size,
            handle_len,
            Orientation::Vertical,
            mouse_drag_vertical::<I>,
            mouse_pressed::<I>,
        )
    }

    /// Creates a mouse-driven horizontal scrollbar.
    ///
    /// # Errors
    ///
    /// [`WidgetError::InvalidConfiguration`] if the handle does not fit.
    pub fn horizontal(position: Point, size: Size, handle_len: i32) -> BuildResult<Self> {
        Self::build(
            position,
            size,
            handle_len,
            Orientation::Horizontal,
            mouse_drag_horizontal::<I>,
            mouse_pressed::<I>,
        )
    }
}

impl<I> Scrollbar<I> {
    /// Creates a scrollbar with custom drag and handle predicates.
    ///
    /// # Errors
    ///
    /// [`WidgetError::InvalidConfiguration`] if the handle does not fit.
    pub fn build(
        position: Point,
        size: Size,
        handle_len: i32,
        orientation: Orientation,
        drag: DragPredicate<I>,
        pressed: PressedPredicate<I>,
    ) -> BuildResult<Self> {
        let extent = orientation.extent(size);
        if handle_len <= 0 || handle_len > extent {
            return Err(WidgetError::invalid(
                "Scrollbar",
                format!("handle length {handle_len} does not fit a track of {extent}"),
            ));
        }
        let handle_style = ButtonStyle::new(orientation.with_extent(size, handle_len))
            .with_scheme(ColorScheme::DARK);
        let mut scrollbar = Self {
            id: WidgetId::next(),
            position,
            size,
            orientation,
            percentage: 0.0,
            track: orientation.with_extent(size, extent - handle_len),
            handle: Button::with_predicate(Point::ZERO, handle_style, pressed),
            scheme: ColorScheme::BRIGHT,
            outline: 1,
            background: None,
            back: Surface::new(size),
            drag,
        };
        scrollbar.redraw();
        Ok(scrollbar)
    }

    /// Sets the starting handle position.
    #[must_use]
    pub fn with_percentage(mut self, percentage: f64) -> Self {
        self.set_percentage(percentage);
        self
    }

    /// Sets the track colors and outline width.
    #[must_use]
    pub fn with_track_style(mut self, scheme: ColorScheme, outline: i32) -> Self {
        self.scheme = scheme;
        self.outline = outline;
        self.redraw();
        self
    }

    /// Replaces the handle's look, keeping its size and behavior.
    #[must_use]
    pub fn with_handle_scheme(mut self, scheme: ColorScheme) -> Self {
        self.handle.set_scheme(scheme);
        self
    }

    /// Shows `image` centered on the track.
    #[must_use]
    pub fn with_background(mut self, image: Image) -> Self {
        let at = self.size.center(image.size());
        self.background = Some((image, at));
        self.redraw();
        self
    }

    /// Handle position in `[0, 1]`.
    #[must_use]
    pub fn percentage(&self) -> f64 {
        self.percentage
    }

    /// Moves the handle, clamped to `[0, 1]`.
    pub fn set_percentage(&mut self, percentage: f64) {
        self.percentage = if percentage.is_nan() {
            0.0
        } else {
            percentage.clamp(0.0, 1.0)
        };
    }

    /// Axis the handle moves along.
    #[must_use]
    pub fn orientation(&self) -> Orientation {
        self.orientation
    }

    /// Handle offset from the scrollbar's top-left corner.
    #[must_use]
    #[allow(clippy::cast_possible_truncation)]
    pub fn handle_offset(&self) -> Point {
        // Within the track extent, so the cast truncates toward zero only.
        let travel = f64::from(self.orientation.extent(self.track)) * self.percentage;
        self.orientation.offset(travel as i32)
    }

    /// The handle button.
    #[must_use]
    pub fn handle(&self) -> &Button<I> {
        &self.handle
    }

    fn redraw(&mut self) {
        let bounds = Rect::from_pos_size(Point::ZERO, self.size);
        self.back.clear();
        self.back.fill(self.scheme.front_outline);
        self.back.fill_rect(self.scheme.front_body, bounds.shrink(self.outline));
        if let Some((image, at)) = &self.background {
            self.back.blit(image, *at);
        }
    }
}

impl<I> Widget<I> for Scrollbar<I> {
    fn id(&self) -> WidgetId {
        self.id
    }

    fn position(&self) -> Point {
        self.position
    }

    fn widget_type(&self) -> WidgetType {
        WidgetType::Scrollbar
    }

    fn process<'a>(&'a mut self, rel: Point, input: &I, result: &mut WidgetResult<'a>) {
        let at = self.position + self.handle_offset() + rel;
        let handle_rect = self.handle.rect(at);
        let delta = (self.drag)(input, &handle_rect, self.track, self.handle.is_front());
        if delta != 0.0 {
            // The press may now lie outside the moved handle; hold it so the
            // drag continues on later frames.
            self.handle.to_front();
            self.set_percentage(self.percentage + delta);
        }

        let at = self.position + self.handle_offset() + rel;
        let _ = self.handle.poll(at, input);

        result.set_scrollbar().percentage = self.percentage;
    }

    fn present(&mut self, target: &mut dyn RenderTarget, rel: Point) {
        self.back.copy_to(target, self.position + rel);
        let at = self.position + self.handle_offset() + rel;
        self.handle.present(target, at);
    }
}
