//! Two-state push button.

use trellis_core::{Point, Rect};

use super::core::{Widget, WidgetId};
use crate::input::{MouseButton, PointerInput};
use crate::render::{CopyTo, Drawable, Image, RenderTarget, Surface};
use crate::result::{ButtonResult, WidgetResult, WidgetType};
use crate::style::{ButtonStyle, ColorScheme};

/// Decides whether a button is held this frame.
///
/// Called with the input, the button's absolute hit rect and whether the
/// button is currently pressed.
pub type PressedPredicate<I> = fn(&I, &Rect, bool) -> bool;

/// Default predicate: the left button is held, and either the button is
/// already pressed or the press started inside it.
///
/// Dragging off a pressed button keeps it pressed until release.
#[must_use]
pub fn mouse_pressed<I: PointerInput>(input: &I, rect: &Rect, is_front: bool) -> bool {
    let mouse = input.mouse();
    mouse.is_down(MouseButton::Left)
        && (is_front || rect.contains(mouse.at_unchecked(MouseButton::Left)))
}

/// A button with an idle (back) and a pressed (front) look.
///
/// The look of the current state is cached and only redrawn when the state
/// changes.
pub struct Button<I> {
    id: WidgetId,
    position: Point,
    style: ButtonStyle,
    image: Option<(Image, Point)>,
    front: bool,
    visual: Surface,
    pressed: PressedPredicate<I>,
}

impl<I: PointerInput> Button<I> {
    /// Creates a mouse-driven button.
    #[must_use]
    pub fn new(position: Point, style: ButtonStyle) -> Self {
        Self::with_predicate(position, style, mouse_pressed::<I>)
    }
}

impl<I> Button<I> {
    /// Creates a button driven by `pressed`.
    #[must_use]
    pub fn with_predicate(position: Point, style: ButtonStyle, pressed: PressedPredicate<I>) -> Self {
        let mut button = Self {
            id: WidgetId::next(),
            position,
            style,
            image: None,
            front: false,
            visual: Surface::new(style.size),
            pressed,
        };
        button.redraw();
        button
    }

    /// Shows `image` centered on the button.
    #[must_use]
    pub fn with_image(self, image: Image) -> Self {
        let at = self.style.size.center(image.size());
        self.with_image_at(image, at)
    }

    /// Shows `image` at `at`, relative to the button.
    #[must_use]
    pub fn with_image_at(mut self, image: Image, at: Point) -> Self {
        self.image = Some((image, at));
        self.redraw();
        self
    }

    /// Moves the button.
    pub fn set_position(&mut self, position: Point) {
        self.position = position;
    }

    /// Replaces the colors and redraws.
    pub fn set_scheme(&mut self, scheme: ColorScheme) {
        self.style.scheme = scheme;
        self.redraw();
    }

    /// The style the button was built with.
    #[must_use]
    pub fn style(&self) -> &ButtonStyle {
        &self.style
    }

    /// Returns true while pressed.
    #[must_use]
    pub fn is_front(&self) -> bool {
        self.front
    }

    /// Absolute hit rect for offset `rel`.
    #[must_use]
    pub fn rect(&self, rel: Point) -> Rect {
        Rect::from_pos_size(self.position + rel, self.style.size)
    }

    /// Number of times the cached look was redrawn.
    #[must_use]
    pub fn redraws(&self) -> u64 {
        self.visual.revision()
    }

    /// Switches to the pressed look. Returns false if already pressed.
    pub fn to_front(&mut self) -> bool {
        if self.front {
            return false;
        }
        self.front = true;
        self.redraw();
        true
    }

    /// Switches to the idle look. Returns false if already idle.
    pub fn to_back(&mut self) -> bool {
        if !self.front {
            return false;
        }
        self.front = false;
        self.redraw();
        true
    }

    /// Evaluates the predicate and applies the resulting transition.
    pub fn poll(&mut self, rel: Point, input: &I) -> ButtonResult {
        let rect = self.rect(rel);
        let mut result = ButtonResult::default();
        if (self.pressed)(input, &rect, self.front) {
            result.pressed = self.to_front();
        } else {
            result.released = self.to_back();
        }
        result
    }

    fn redraw(&mut self) {
        let scheme = &self.style.scheme;
        let (outline, body) = if self.front {
            (scheme.front_outline, scheme.front_body)
        } else {
            (scheme.back_outline, scheme.back_body)
        };
        let bounds = Rect::from_pos_size(Point::ZERO, self.style.size);

        self.visual.clear();
        self.visual.fill(outline);
        self.visual.fill_rect(body, bounds.shrink(self.style.outline));
        if let Some((image, at)) = &self.image {
            self.visual.blit(image, *at);
        }
    }
}

impl<I> Widget<I> for Button<I> {
    fn id(&self) -> WidgetId {
        self.id
    }

    fn position(&self) -> Point {
        self.position
    }

    fn widget_type(&self) -> WidgetType {
        WidgetType::Button
    }

    fn process<'a>(&'a mut self, rel: Point, input: &I, result: &mut WidgetResult<'a>) {
        *result.set_button() = self.poll(rel, input);
    }

    fn present(&mut self, target: &mut dyn RenderTarget, rel: Point) {
        self.visual.copy_to(target, self.position + rel);
    }
}

#[cfg(test)]
mod tests {
    use trellis_core::Size;

    use super::*;
    use crate::input::MouseTracker;
    use crate::render::{RenderCommand, UIRenderer};

    fn always(_: &(), _: &Rect, _: bool) -> bool {
        true
    }

    fn never(_: &(), _: &Rect, _: bool) -> bool {
        false
    }

    fn style() -> ButtonStyle {
        ButtonStyle::new(Size::new(40, 20))
    }

    #[test]
    fn test_held_button_presses_once() {
        let mut button = Button::with_predicate(Point::ZERO, style(), always);

        assert_eq!(
            button.poll(Point::ZERO, &()),
            ButtonResult { pressed: true, released: false }
        );
        for _ in 0..3 {
            assert_eq!(button.poll(Point::ZERO, &()), ButtonResult::default());
        }
    }

    #[test]
    fn test_release_reported_once() {
        let mut button = Button::with_predicate(Point::ZERO, style(), never);
        assert!(button.to_front());

        assert_eq!(
            button.poll(Point::ZERO, &()),
            ButtonResult { pressed: false, released: true }
        );
        assert_eq!(button.poll(Point::ZERO, &()), ButtonResult::default());
    }

    #[test]
    fn test_redraw_only_on_transition() {
        let mut button = Button::with_predicate(Point::ZERO, style(), always);
        let initial = button.redraws();

        let _ = button.poll(Point::ZERO, &());
        let _ = button.poll(Point::ZERO, &());
        let _ = button.poll(Point::ZERO, &());
        assert_eq!(button.redraws(), initial + 1);
        assert!(!button.to_front());
        assert_eq!(button.redraws(), initial + 1);
    }

    #[test]
    fn test_mouse_press_inside_then_drag_off() {
        let mut mouse = MouseTracker::new();
        let mut button: Button<MouseTracker> = Button::new(Point::new(10, 10), style());
        let rel = Point::new(100, 0);

        mouse.record();
        mouse.down(MouseButton::Left, Point::new(115, 15)).unwrap();
        mouse.refresh();
        assert!(button.poll(rel, &mouse).pressed);

        // Held elsewhere: stays pressed.
        mouse.record();
        mouse.motion(Point::new(400, 400));
        mouse.refresh();
        assert_eq!(button.poll(rel, &mouse), ButtonResult::default());
        assert!(button.is_front());

        mouse.record();
        mouse.up(MouseButton::Left).unwrap();
        mouse.refresh();
        assert!(button.poll(rel, &mouse).released);
    }

    #[test]
    fn test_mouse_press_outside_ignored() {
        let mut mouse = MouseTracker::new();
        let mut button: Button<MouseTracker> = Button::new(Point::ZERO, style());

        mouse.record();
        mouse.down(MouseButton::Left, Point::new(41, 5)).unwrap();
        mouse.refresh();
        assert_eq!(button.poll(Point::ZERO, &mouse), ButtonResult::default());
    }

    #[test]
    fn test_present_uses_scheme_and_offset() {
        let scheme = ColorScheme::DARK;
        let mut button =
            Button::with_predicate(Point::new(5, 5), style().with_scheme(scheme).with_outline(2), never);

        let mut renderer = UIRenderer::new();
        button.present(&mut renderer, Point::new(1, 1));

        assert_eq!(
            renderer.commands(),
            &[
                RenderCommand::Fill {
                    bounds: Rect::new(6, 6, 40, 20),
                    color: scheme.back_outline,
                },
                RenderCommand::Fill {
                    bounds: Rect::new(8, 8, 36, 16),
                    color: scheme.back_body,
                },
            ]
        );
    }

    #[test]
    fn test_centered_image() {
        let image = Image::new("icon", Size::new(10, 10));
        let mut button = Button::with_predicate(Point::ZERO, style(), never).with_image(image);

        let mut renderer = UIRenderer::new();
        button.present(&mut renderer, Point::ZERO);
        assert_eq!(renderer.commands()[2].origin(), Point::new(15, 5));
    }
}
