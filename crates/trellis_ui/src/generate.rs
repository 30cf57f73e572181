//! Shortcuts for building common widget arrangements.

use trellis_core::{Orientation, Point};

use crate::input::PointerInput;
use crate::render::{CopyTo, Image};
use crate::style::ButtonStyle;
use crate::widget::{Button, Child, Page, Wrapper};

/// Lays out one button per entry of `images` in a row or column.
///
/// The first button sits at `begin`; each next one is offset by the button
/// extent plus `sep` along `orientation`. `None` entries give plain buttons.
#[must_use]
pub fn generate_buttons<I: PointerInput>(
    begin: Point,
    style: &ButtonStyle,
    images: impl IntoIterator<Item = Option<Image>>,
    sep: i32,
    orientation: Orientation,
) -> Vec<Button<I>> {
    let step = orientation.offset(orientation.extent(style.size) + sep);
    let mut at = begin;
    images
        .into_iter()
        .map(|image| {
            let button = Button::new(at, *style);
            at += step;
            match image {
                Some(image) => button.with_image(image),
                None => button,
            }
        })
        .collect()
}

/// Puts a drawable-like object at `position` in a widget tree.
#[must_use]
pub fn wrap<W: CopyTo>(position: Point, inner: W) -> Wrapper<W> {
    Wrapper::new(position, inner)
}

/// A page holding just `widget`.
///
/// The page sits at the origin, so the widget keeps its own position.
#[must_use]
pub fn wrap_with_page<'w, I>(widget: Child<'w, I>) -> Page<'w, I> {
    let mut page = Page::new(Point::ZERO);
    page.push(widget);
    page
}
