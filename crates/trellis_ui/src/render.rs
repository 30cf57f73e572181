//! UI rendering capabilities.
//!
//! The widget layer never touches pixels. It needs exactly two things from a
//! backend:
//!
//! - **draw**: composite a [`Drawable`] onto a [`RenderTarget`] at an offset
//!   ([`Drawable::draw`]), used by every `present`.
//! - **load**: produce a drawable from an external resource
//!   ([`SurfaceLoader`]), used at construction time only.
//!
//! Widgets cache what they draw as [`Surface`]s: retained lists of
//! [`RenderCommand`]s relative to the surface origin. Presenting a surface
//! submits its commands translated by the draw offset. [`UIRenderer`] is the
//! recording target; a GPU or software backend consumes its command list.

use std::path::Path;
use std::sync::Arc;

use trellis_core::{Color, Point, Rect, Size};

use crate::error::UiResult;
use crate::style::TextStyle;

/// A render command for the UI.
#[derive(Debug, Clone, PartialEq)]
pub enum RenderCommand {
    /// Filled rectangle.
    Fill {
        /// Bounds.
        bounds: Rect,
        /// Fill color.
        color: Color,
    },
    /// Externally loaded image.
    Image {
        /// Image handle.
        image: Image,
        /// Destination bounds.
        bounds: Rect,
    },
    /// Text, rasterized by the backend.
    Text {
        /// Text content.
        text: String,
        /// Top-left of the first line.
        origin: Point,
        /// Text color.
        color: Color,
        /// Line height in pixels.
        line_height: i32,
        /// Wrap width in pixels, 0 for no wrapping.
        wrap_width: i32,
    },
}

impl RenderCommand {
    /// Returns the command moved by `offset`.
    #[must_use]
    pub fn translated(&self, offset: Point) -> Self {
        match self {
            Self::Fill { bounds, color } => Self::Fill {
                bounds: bounds.translate(offset),
                color: *color,
            },
            Self::Image { image, bounds } => Self::Image {
                image: image.clone(),
                bounds: bounds.translate(offset),
            },
            Self::Text {
                text,
                origin,
                color,
                line_height,
                wrap_width,
            } => Self::Text {
                text: text.clone(),
                origin: *origin + offset,
                color: *color,
                line_height: *line_height,
                wrap_width: *wrap_width,
            },
        }
    }

    /// Returns the top-left corner the command draws at.
    #[must_use]
    pub fn origin(&self) -> Point {
        match self {
            Self::Fill { bounds, .. } | Self::Image { bounds, .. } => bounds.pos(),
            Self::Text { origin, .. } => *origin,
        }
    }
}

/// Where drawables end up.
pub trait RenderTarget {
    /// Accepts one command, already in target coordinates.
    fn submit(&mut self, command: RenderCommand);
}

/// Something that can be composited at an offset.
pub trait Drawable {
    /// Pixel size of the drawable.
    fn size(&self) -> Size;

    /// Draws onto `target` with the top-left corner at `offset`.
    fn draw(&self, target: &mut dyn RenderTarget, offset: Point);
}

/// Something that can be copied onto a target, possibly advancing its own
/// state (animations do).
pub trait CopyTo {
    /// Copies onto `target` at `pos`.
    fn copy_to(&mut self, target: &mut dyn RenderTarget, pos: Point);
}

impl<D: Drawable> CopyTo for D {
    fn copy_to(&mut self, target: &mut dyn RenderTarget, pos: Point) {
        self.draw(target, pos);
    }
}

impl<D: Drawable + ?Sized> Drawable for &D {
    fn size(&self) -> Size {
        (**self).size()
    }

    fn draw(&self, target: &mut dyn RenderTarget, offset: Point) {
        (**self).draw(target, offset);
    }
}

impl<D: Drawable + ?Sized> Drawable for Arc<D> {
    fn size(&self) -> Size {
        (**self).size()
    }

    fn draw(&self, target: &mut dyn RenderTarget, offset: Point) {
        (**self).draw(target, offset);
    }
}

/// Handle to an image owned by the backend.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Image {
    source: Arc<str>,
    size: Size,
}

impl Image {
    /// Creates a handle for `source` with the decoded size.
    #[must_use]
    pub fn new(source: impl Into<Arc<str>>, size: Size) -> Self {
        Self {
            source: source.into(),
            size,
        }
    }

    /// Backend identifier of the image.
    #[must_use]
    pub fn source(&self) -> &str {
        &self.source
    }
}

impl Drawable for Image {
    fn size(&self) -> Size {
        self.size
    }

    fn draw(&self, target: &mut dyn RenderTarget, offset: Point) {
        target.submit(RenderCommand::Image {
            image: self.clone(),
            bounds: Rect::from_pos_size(offset, self.size),
        });
    }
}

/// A retained drawing: commands relative to its own origin.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Surface {
    size: Size,
    commands: Vec<RenderCommand>,
    /// Bumped on every `clear()`.
    revision: u64,
}

impl Surface {
    /// Creates an empty surface.
    #[must_use]
    pub fn new(size: Size) -> Self {
        Self {
            size,
            commands: Vec::new(),
            revision: 0,
        }
    }

    /// Creates a surface showing one image.
    #[must_use]
    pub fn from_image(image: &Image) -> Self {
        let mut surface = Self::new(image.size());
        surface.blit(image, Point::ZERO);
        surface
    }

    /// Fills the whole surface.
    pub fn fill(&mut self, color: Color) {
        self.fill_rect(color, Rect::from_pos_size(Point::ZERO, self.size));
    }

    /// Fills part of the surface.
    pub fn fill_rect(&mut self, color: Color, bounds: Rect) {
        self.commands.push(RenderCommand::Fill { bounds, color });
    }

    /// Draws an image at `at`.
    pub fn blit(&mut self, image: &Image, at: Point) {
        self.commands.push(RenderCommand::Image {
            image: image.clone(),
            bounds: Rect::from_pos_size(at, image.size()),
        });
    }

    /// Draws text at `at`, wrapped to the surface width.
    pub fn text(&mut self, text: &str, at: Point, style: &TextStyle) {
        self.commands.push(RenderCommand::Text {
            text: text.to_owned(),
            origin: at,
            color: style.color,
            line_height: style.line_height,
            wrap_width: self.size.w,
        });
    }

    /// Drops every command, keeping the size.
    pub fn clear(&mut self) {
        self.commands.clear();
        self.revision += 1;
    }

    /// How many times the surface has been cleared for a redraw.
    #[must_use]
    pub fn revision(&self) -> u64 {
        self.revision
    }

    /// The retained commands.
    #[must_use]
    pub fn commands(&self) -> &[RenderCommand] {
        &self.commands
    }

    /// Returns true if nothing is drawn.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.commands.is_empty()
    }
}

impl Drawable for Surface {
    fn size(&self) -> Size {
        self.size
    }

    fn draw(&self, target: &mut dyn RenderTarget, offset: Point) {
        for command in &self.commands {
            target.submit(command.translated(offset));
        }
    }
}

/// Produces drawables from external resources.
pub trait SurfaceLoader {
    /// Loads the resource at `path`.
    ///
    /// # Errors
    ///
    /// Whatever the backend reports for unreadable or undecodable files.
    fn load(&mut self, path: &Path) -> UiResult<Surface>;
}

/// UI renderer that records commands for the frame.
pub struct UIRenderer {
    /// All commands from the frame.
    commands: Vec<RenderCommand>,
}

impl UIRenderer {
    /// Creates a new UI renderer.
    #[must_use]
    pub fn new() -> Self {
        Self {
            commands: Vec::with_capacity(1024),
        }
    }

    /// Begins a new frame.
    pub fn begin_frame(&mut self) {
        self.commands.clear();
    }

    /// Commands recorded so far this frame.
    #[must_use]
    pub fn commands(&self) -> &[RenderCommand] {
        &self.commands
    }

    /// Ends the frame and hands the commands to the caller.
    pub fn end_frame(&mut self) -> Vec<RenderCommand> {
        std::mem::take(&mut self.commands)
    }

    /// Returns the total command count.
    #[must_use]
    pub fn command_count(&self) -> usize {
        self.commands.len()
    }
}

impl Default for UIRenderer {
    fn default() -> Self {
        Self::new()
    }
}

impl RenderTarget for UIRenderer {
    fn submit(&mut self, command: RenderCommand) {
        self.commands.push(command);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_renderer_frame() {
        let mut renderer = UIRenderer::new();

        renderer.begin_frame();
        let mut surface = Surface::new(Size::new(100, 50));
        surface.fill(Color::WHITE);
        surface.draw(&mut renderer, Point::new(10, 10));

        assert_eq!(renderer.command_count(), 1);
        let commands = renderer.end_frame();
        assert_eq!(
            commands[0],
            RenderCommand::Fill {
                bounds: Rect::new(10, 10, 100, 50),
                color: Color::WHITE,
            }
        );
        assert_eq!(renderer.command_count(), 0);
    }

    #[test]
    fn test_surface_translates_every_command() {
        let image = Image::new("icon.png", Size::new(8, 8));
        let mut surface = Surface::new(Size::new(20, 20));
        surface.fill(Color::BLACK);
        surface.blit(&image, Point::new(6, 6));

        let mut renderer = UIRenderer::new();
        surface.copy_to(&mut renderer, Point::new(100, 200));

        let origins: Vec<_> = renderer.commands().iter().map(RenderCommand::origin).collect();
        assert_eq!(origins, vec![Point::new(100, 200), Point::new(106, 206)]);
    }

    #[test]
    fn test_borrowed_drawable() {
        let image = Image::new("a.png", Size::new(3, 4));
        let by_ref = &image;
        assert_eq!(by_ref.size(), Size::new(3, 4));

        let mut renderer = UIRenderer::new();
        Arc::new(image.clone()).draw(&mut renderer, Point::ZERO);
        assert_eq!(renderer.command_count(), 1);
    }
}
