//! Single text field.

use trellis_core::{Point, Rect, Size};

use super::core::{Widget, WidgetId};
use crate::input::{Key, KeyboardInput, MouseButton, PointerInput};
use crate::render::{CopyTo, Drawable, Image, RenderTarget, Surface};
use crate::result::{WidgetResult, WidgetType};
use crate::style::{ColorScheme, TextStyle};

/// What a character input function saw this frame.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum CharEvent {
    /// No key this frame.
    #[default]
    None,
    /// A key was consumed; the text may have changed.
    Key,
    /// The submit key was pressed. The text is unchanged.
    Submit,
}

/// Decides whether this frame toggles focus.
///
/// Called with the input, the box's absolute rect and whether it is focused.
pub type ClickPredicate<I> = fn(&I, &Rect, bool) -> bool;

/// Applies this frame's key to the text buffer.
pub type CharInput<I> = fn(&I, &mut String) -> CharEvent;

/// Default focus toggle.
///
/// An unfocused box gains focus on a left click whose press and current
/// pointer position are both inside it. A focused box loses focus on any
/// left click.
#[must_use]
pub fn mouse_on_click<I: PointerInput>(input: &I, rect: &Rect, focused: bool) -> bool {
    let mouse = input.mouse();
    let click = mouse.is_click(MouseButton::Left);
    if focused {
        click
    } else {
        click && rect.contains(mouse.cursor()) && rect.contains(mouse.at_unchecked(MouseButton::Left))
    }
}

/// Default character input: backspace pops, enter submits, printable keys
/// append, anything else is consumed without effect.
pub fn keyboard_char_input<I: KeyboardInput>(input: &I, text: &mut String) -> CharEvent {
    match input.keyboard().current() {
        None => CharEvent::None,
        Some(Key::Enter) => CharEvent::Submit,
        Some(Key::Backspace) => {
            text.pop();
            CharEvent::Key
        }
        Some(key) => {
            if let Some(c) = key.as_char() {
                text.push(c);
            }
            CharEvent::Key
        }
    }
}

/// A click-to-focus text field.
///
/// While empty it shows its background image, if any. Text is re-rendered
/// only on frames where a key was consumed.
pub struct InputBox<I> {
    id: WidgetId,
    position: Point,
    size: Size,
    outline: i32,
    scheme: ColorScheme,
    style: TextStyle,
    text: String,
    text_offset: Point,
    background: Option<(Image, Point)>,
    focused: bool,
    /// Box body, plus the background while the text is empty.
    back: Surface,
    showing_background: bool,
    rendered: Surface,
    on_click: ClickPredicate<I>,
    char_input: CharInput<I>,
}

impl<I: PointerInput + KeyboardInput> InputBox<I> {
    /// Creates a mouse-focused, keyboard-driven input box.
    #[must_use]
    pub fn new(position: Point, size: Size, style: TextStyle) -> Self {
        Self::with_input(position, size, style, mouse_on_click::<I>, keyboard_char_input::<I>)
    }
}

impl<I> InputBox<I> {
    /// Creates an input box with custom focus and character handling.
    #[must_use]
    pub fn with_input(
        position: Point,
        size: Size,
        style: TextStyle,
        on_click: ClickPredicate<I>,
        char_input: CharInput<I>,
    ) -> Self {
        let outline = 1;
        let mut input_box = Self {
            id: WidgetId::next(),
            position,
            size,
            outline,
            scheme: ColorScheme::BRIGHT,
            style,
            text: String::new(),
            text_offset: Self::default_text_offset(size, outline, style),
            background: None,
            focused: false,
            back: Surface::new(size),
            showing_background: true,
            rendered: Surface::new(size.inset(outline)),
            on_click,
            char_input,
        };
        input_box.redraw_back();
        input_box
    }

    fn default_text_offset(size: Size, outline: i32, style: TextStyle) -> Point {
        Point::new(outline * 2, (size.h - style.line_height) / 2)
    }

    /// Starts with `text` already typed.
    #[must_use]
    pub fn with_text(mut self, text: impl Into<String>) -> Self {
        self.set_text(text);
        self
    }

    /// Sets the box colors and outline width.
    #[must_use]
    pub fn with_scheme(mut self, scheme: ColorScheme, outline: i32) -> Self {
        self.scheme = scheme;
        self.outline = outline;
        self.text_offset = Self::default_text_offset(self.size, outline, self.style);
        self.rendered = Surface::new(self.size.inset(outline));
        self.render_text();
        self.redraw_back();
        self
    }

    /// Draws the text at `offset` inside the box instead of left-aligned.
    #[must_use]
    pub fn with_text_offset(mut self, offset: Point) -> Self {
        self.text_offset = offset;
        self
    }

    /// Shows `image` centered while the box is empty.
    #[must_use]
    pub fn with_background(self, image: Image) -> Self {
        let at = self.size.center(image.size());
        self.with_background_at(image, at)
    }

    /// Shows `image` at `at` while the box is empty.
    #[must_use]
    pub fn with_background_at(mut self, image: Image, at: Point) -> Self {
        self.background = Some((image, at));
        self.redraw_back();
        self
    }

    /// The text typed so far.
    #[must_use]
    pub fn text(&self) -> &str {
        &self.text
    }

    /// Replaces the text.
    pub fn set_text(&mut self, text: impl Into<String>) {
        self.text = text.into();
        self.render_text();
        if self.text.is_empty() != self.showing_background {
            self.redraw_back();
        }
    }

    /// Returns true while the box takes keyboard input.
    #[must_use]
    pub fn is_focused(&self) -> bool {
        self.focused
    }

    /// Number of times the text was re-rendered.
    #[must_use]
    pub fn text_redraws(&self) -> u64 {
        self.rendered.revision()
    }

    fn redraw_back(&mut self) {
        let (outline, body) = if self.focused {
            (self.scheme.front_outline, self.scheme.front_body)
        } else {
            (self.scheme.back_outline, self.scheme.back_body)
        };
        self.back.clear();
        self.back.fill(outline);
        self.back
            .fill_rect(body, Rect::from_pos_size(Point::ZERO, self.size).shrink(self.outline));

        self.showing_background = self.text.is_empty();
        if self.showing_background {
            if let Some((image, at)) = &self.background {
                self.back.blit(image, *at);
            }
        }
    }

    fn render_text(&mut self) {
        self.rendered.clear();
        if !self.text.is_empty() {
            self.rendered.text(&self.text, Point::ZERO, &self.style);
        }
    }
}

impl<I> Widget<I> for InputBox<I> {
    fn id(&self) -> WidgetId {
        self.id
    }

    fn position(&self) -> Point {
        self.position
    }

    fn widget_type(&self) -> WidgetType {
        WidgetType::InputBox
    }

    fn process<'a>(&'a mut self, rel: Point, input: &I, result: &mut WidgetResult<'a>) {
        let rect = Rect::from_pos_size(self.position + rel, self.size);
        if (self.on_click)(input, &rect, self.focused) {
            self.focused = !self.focused;
            self.redraw_back();
        }

        let mut submitted = false;
        if self.focused {
            match (self.char_input)(input, &mut self.text) {
                CharEvent::None => {}
                CharEvent::Key => self.render_text(),
                CharEvent::Submit => {
                    submitted = true;
                    self.render_text();
                }
            }
        }
        if self.text.is_empty() != self.showing_background {
            self.redraw_back();
        }

        let out = result.set_input_box();
        out.text = self.text.as_str();
        out.submitted = submitted;
    }

    fn present(&mut self, target: &mut dyn RenderTarget, rel: Point) {
        let at = self.position + rel;
        self.back.copy_to(target, at);
        self.rendered.copy_to(target, at + self.text_offset);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::input::InputManager;
    use crate::render::{RenderCommand, UIRenderer};

    fn typed(input_box: &mut InputBox<InputManager>, input: &InputManager) -> (String, bool) {
        let mut result = WidgetResult::default();
        input_box.process(Point::ZERO, input, &mut result);
        let r = result.as_input_box().copied().unwrap_or_default();
        (r.text.to_owned(), r.submitted)
    }

    fn press(input: &mut InputManager, key: Key) {
        input.record();
        input.keys_mut().down(key).unwrap();
        input.refresh();
        input.record();
        input.keys_mut().up(key).unwrap();
    }

    fn focused_box(input: &mut InputManager) -> InputBox<InputManager> {
        let mut input_box = InputBox::new(Point::ZERO, Size::new(100, 20), TextStyle::default());
        input.record();
        input.pointer_mut().motion(Point::new(10, 10));
        input.pointer_mut().down(MouseButton::Left, Point::new(10, 10)).unwrap();
        input.refresh();
        let _ = typed(&mut input_box, input);
        assert!(input_box.is_focused());

        input.record();
        input.pointer_mut().up(MouseButton::Left).unwrap();
        input.refresh();
        input_box
    }

    #[test]
    fn test_unfocused_ignores_keys() {
        let mut input = InputManager::with_text_keys();
        let mut input_box = InputBox::new(Point::ZERO, Size::new(100, 20), TextStyle::default());

        press(&mut input, Key::Char('a'));
        assert_eq!(typed(&mut input_box, &input), (String::new(), false));
    }

    #[test]
    fn test_typing_backspace_and_submit() {
        let mut input = InputManager::with_text_keys();
        let mut input_box = focused_box(&mut input);

        for key in [Key::Char('h'), Key::Char('i'), Key::Char('x'), Key::Backspace] {
            press(&mut input, key);
            let _ = typed(&mut input_box, &input);
        }
        assert_eq!(input_box.text(), "hi");

        press(&mut input, Key::Enter);
        assert_eq!(typed(&mut input_box, &input), ("hi".to_owned(), true));

        input.refresh();
        assert_eq!(typed(&mut input_box, &input), ("hi".to_owned(), false));
    }

    #[test]
    fn test_text_rendered_only_on_key() {
        let mut input = InputManager::with_text_keys();
        let mut input_box = focused_box(&mut input);
        let before = input_box.text_redraws();

        for _ in 0..3 {
            input.record();
            input.refresh();
            let _ = typed(&mut input_box, &input);
        }
        assert_eq!(input_box.text_redraws(), before);

        press(&mut input, Key::Char('q'));
        let _ = typed(&mut input_box, &input);
        assert_eq!(input_box.text_redraws(), before + 1);
    }

    #[test]
    fn test_background_only_while_empty() {
        let image = Image::new("hint", Size::new(20, 10));
        let mut input_box: InputBox<InputManager> =
            InputBox::new(Point::ZERO, Size::new(100, 20), TextStyle::default())
                .with_background(image);

        let has_image = |input_box: &mut InputBox<InputManager>| {
            let mut renderer = UIRenderer::new();
            input_box.present(&mut renderer, Point::ZERO);
            renderer
                .commands()
                .iter()
                .any(|c| matches!(c, RenderCommand::Image { .. }))
        };

        assert!(has_image(&mut input_box));
        input_box.set_text("x");
        assert!(!has_image(&mut input_box));
        input_box.set_text("");
        assert!(has_image(&mut input_box));
    }

    #[test]
    fn test_click_anywhere_unfocuses() {
        let mut input = InputManager::with_text_keys();
        let mut input_box = focused_box(&mut input);

        input.record();
        input.pointer_mut().motion(Point::new(500, 500));
        input.pointer_mut().down(MouseButton::Left, Point::new(500, 500)).unwrap();
        input.refresh();
        let _ = typed(&mut input_box, &input);
        assert!(!input_box.is_focused());
    }
}
