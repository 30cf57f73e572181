//! Page: an ordered group of sibling widgets.

use trellis_core::Point;

use super::core::{Member, Widget, WidgetId};
use crate::error::{BuildResult, WidgetError};
use crate::render::RenderTarget;
use crate::result::{PageResult, WidgetResult, WidgetType};

/// A page's child widget.
pub type Child<'w, I> = Member<'w, dyn Widget<I> + 'w>;

struct Entry<'w, I> {
    widget: Child<'w, I>,
    /// Recorded when the child was added.
    kind: WidgetType,
}

/// Siblings processed and presented together at the page's offset.
///
/// Children keep their insertion order for presenting. Each child's result
/// is stored under its [`WidgetId`].
pub struct Page<'w, I> {
    id: WidgetId,
    position: Point,
    children: Vec<Entry<'w, I>>,
}

impl<'w, I> Page<'w, I> {
    /// Creates an empty page.
    #[must_use]
    pub fn new(position: Point) -> Self {
        Self {
            id: WidgetId::next(),
            position,
            children: Vec::new(),
        }
    }

    /// Creates a page that owns `children`.
    #[must_use]
    pub fn owning(position: Point, children: Vec<Box<dyn Widget<I> + 'w>>) -> Self {
        let mut page = Self::new(position);
        for child in children {
            page.push(Member::Owned(child));
        }
        page
    }

    /// Creates a page over widgets the caller keeps.
    #[must_use]
    pub fn borrowing(position: Point, children: Vec<&'w mut (dyn Widget<I> + 'w)>) -> Self {
        let mut page = Self::new(position);
        for child in children {
            page.push(Member::Borrowed(child));
        }
        page
    }

    /// Fails if the page has no children.
    ///
    /// # Errors
    ///
    /// [`WidgetError::InvalidConfiguration`] on an empty page.
    pub fn non_empty(self) -> BuildResult<Self> {
        if self.children.is_empty() {
            return Err(WidgetError::invalid("Page", "no children"));
        }
        Ok(self)
    }

    /// Appends a child.
    pub fn push(&mut self, widget: Child<'w, I>) {
        let kind = widget.widget_type();
        tracing::trace!(page = self.id.raw(), child = widget.id().raw(), ?kind, "child added");
        self.children.push(Entry { widget, kind });
    }

    /// Appends a child the page owns.
    pub fn push_owned<W: Widget<I> + 'w>(&mut self, widget: W) {
        let widget: Box<dyn Widget<I> + 'w> = Box::new(widget);
        self.push(Member::Owned(widget));
    }

    /// Appends a child the caller keeps.
    pub fn push_borrowed<W: Widget<I> + 'w>(&mut self, widget: &'w mut W) {
        let widget: &'w mut (dyn Widget<I> + 'w) = widget;
        self.push(Member::Borrowed(widget));
    }

    /// Removes the child with `id`.
    pub fn remove(&mut self, id: WidgetId) -> Option<Child<'w, I>> {
        let index = self.children.iter().position(|e| e.widget.id() == id)?;
        Some(self.children.remove(index).widget)
    }

    /// Number of children.
    #[must_use]
    pub fn len(&self) -> usize {
        self.children.len()
    }

    /// Returns true if the page has no children.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.children.is_empty()
    }

    /// Children's ids and result shapes, in insertion order.
    #[must_use]
    pub fn child_types(&self) -> Vec<(WidgetId, WidgetType)> {
        self.children.iter().map(|e| (e.widget.id(), e.kind)).collect()
    }

    /// Processes every child at the page's offset into `out`.
    pub fn process_page<'a>(&'a mut self, rel: Point, input: &I, out: &mut PageResult<'a>) {
        let at = self.position + rel;
        for entry in &mut self.children {
            let id = entry.widget.id();
            entry.widget.process(at, input, out.slot(id));
        }
    }
}

impl<I> Widget<I> for Page<'_, I> {
    fn id(&self) -> WidgetId {
        self.id
    }

    fn position(&self) -> Point {
        self.position
    }

    fn widget_type(&self) -> WidgetType {
        WidgetType::Page
    }

    fn process<'a>(&'a mut self, rel: Point, input: &I, result: &mut WidgetResult<'a>) {
        self.process_page(rel, input, result.set_page());
    }

    fn present(&mut self, target: &mut dyn RenderTarget, rel: Point) {
        let at = self.position + rel;
        for entry in &mut self.children {
            entry.widget.present(target, at);
        }
    }
}
