//! Per-frame widget results.
//!
//! A [`WidgetResult`] is exactly one of a fixed set of shapes, chosen by the
//! widget that processed it. Containers nest their children's results, so a
//! single `process` call on the root yields a whole result tree.
//!
//! Results may borrow from the widgets that produced them (an input box hands
//! out a view of its text buffer). The lifetime `'a` is the mutable borrow of
//! the widget tree taken by `process`: the tree cannot be processed again, or
//! presented, while a result from it is alive.

use std::collections::HashMap;

use crate::widget::WidgetId;

/// Discriminant of a [`WidgetResult`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum WidgetType {
    /// Nothing processed yet.
    #[default]
    None,
    /// See [`ButtonResult`].
    Button,
    /// See [`PageResult`].
    Page,
    /// See [`InputBoxResult`].
    InputBox,
    /// See [`ScrollbarResult`].
    Scrollbar,
    /// See [`BranchResult`].
    BranchPage,
    /// Passive leaves: frames, wrappers, animations.
    Frame,
}

/// Outcome of a button this frame.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ButtonResult {
    /// Went from idle to pressed.
    pub pressed: bool,
    /// Went from pressed to idle.
    pub released: bool,
}

/// Results of every child of a page, keyed by child identity.
#[derive(Debug, Default)]
pub struct PageResult<'a> {
    children: HashMap<WidgetId, WidgetResult<'a>>,
}

impl<'a> PageResult<'a> {
    /// Result of the child with `id`.
    #[must_use]
    pub fn get(&self, id: WidgetId) -> Option<&WidgetResult<'a>> {
        self.children.get(&id)
    }

    /// Number of child results.
    #[must_use]
    pub fn len(&self) -> usize {
        self.children.len()
    }

    /// Returns true if no child reported.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.children.is_empty()
    }

    /// Iterates over `(child, result)` pairs in no particular order.
    pub fn iter(&self) -> impl Iterator<Item = (WidgetId, &WidgetResult<'a>)> {
        self.children.iter().map(|(&id, r)| (id, r))
    }

    /// Drops every child result, keeping the allocation.
    pub fn clear(&mut self) {
        self.children.clear();
    }

    /// Slot for the child with `id`, created empty if missing.
    pub fn slot(&mut self, id: WidgetId) -> &mut WidgetResult<'a> {
        self.children.entry(id).or_default()
    }
}

/// Outcome of an input box this frame.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct InputBoxResult<'a> {
    /// View of the box's text buffer.
    pub text: &'a str,
    /// The submit key was pressed this frame.
    pub submitted: bool,
}

/// Outcome of a scrollbar this frame.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct ScrollbarResult {
    /// Handle position in `[0, 1]`.
    pub percentage: f64,
}

/// Outcome of a branch page this frame.
#[derive(Debug, Default)]
pub struct BranchResult<'a> {
    /// Trigger button of the active branch.
    pub active: WidgetId,
    /// Result of the active page.
    pub page: PageResult<'a>,
}

/// What one widget reports after processing.
#[derive(Debug, Default)]
pub enum WidgetResult<'a> {
    /// Nothing.
    #[default]
    None,
    /// Button edges.
    Button(ButtonResult),
    /// Child results.
    Page(PageResult<'a>),
    /// Text view and submit flag.
    InputBox(InputBoxResult<'a>),
    /// Handle position.
    Scrollbar(ScrollbarResult),
    /// Active branch and its page's results.
    BranchPage(BranchResult<'a>),
    /// Passive leaf.
    Frame,
}

impl<'a> WidgetResult<'a> {
    /// The tag of this result.
    #[must_use]
    pub fn widget_type(&self) -> WidgetType {
        match self {
            Self::None => WidgetType::None,
            Self::Button(_) => WidgetType::Button,
            Self::Page(_) => WidgetType::Page,
            Self::InputBox(_) => WidgetType::InputBox,
            Self::Scrollbar(_) => WidgetType::Scrollbar,
            Self::BranchPage(_) => WidgetType::BranchPage,
            Self::Frame => WidgetType::Frame,
        }
    }

    /// Empty result of the given shape.
    #[must_use]
    pub fn empty(ty: WidgetType) -> Self {
        match ty {
            WidgetType::None => Self::None,
            WidgetType::Button => Self::Button(ButtonResult::default()),
            WidgetType::Page => Self::Page(PageResult::default()),
            WidgetType::InputBox => Self::InputBox(InputBoxResult::default()),
            WidgetType::Scrollbar => Self::Scrollbar(ScrollbarResult::default()),
            WidgetType::BranchPage => Self::BranchPage(BranchResult::default()),
            WidgetType::Frame => Self::Frame,
        }
    }

    /// Switches to shape `ty` with an empty payload.
    ///
    /// Setting the current tag again resets the payload in place, so nested
    /// maps keep their allocation. Setting a different tag drops the old
    /// payload before the new one is installed.
    pub fn set(&mut self, ty: WidgetType) {
        match self {
            Self::Button(r) if ty == WidgetType::Button => *r = ButtonResult::default(),
            Self::Page(r) if ty == WidgetType::Page => r.clear(),
            Self::InputBox(r) if ty == WidgetType::InputBox => *r = InputBoxResult::default(),
            Self::Scrollbar(r) if ty == WidgetType::Scrollbar => {
                *r = ScrollbarResult::default();
            }
            Self::BranchPage(r) if ty == WidgetType::BranchPage => {
                r.active = WidgetId::NONE;
                r.page.clear();
            }
            Self::None if ty == WidgetType::None => {}
            Self::Frame if ty == WidgetType::Frame => {}
            _ => {
                *self = Self::None;
                *self = Self::empty(ty);
            }
        }
    }

    /// Sets the button shape and returns its payload.
    pub fn set_button(&mut self) -> &mut ButtonResult {
        match self {
            Self::Button(r) => {
                *r = ButtonResult::default();
                r
            }
            _ => {
                *self = Self::Button(ButtonResult::default());
                self.set_button()
            }
        }
    }

    /// Sets the page shape and returns its payload.
    pub fn set_page(&mut self) -> &mut PageResult<'a> {
        match self {
            Self::Page(r) => {
                r.clear();
                r
            }
            _ => {
                *self = Self::Page(PageResult::default());
                self.set_page()
            }
        }
    }

    /// Sets the input box shape and returns its payload.
    pub fn set_input_box(&mut self) -> &mut InputBoxResult<'a> {
        match self {
            Self::InputBox(r) => {
                *r = InputBoxResult::default();
                r
            }
            _ => {
                *self = Self::InputBox(InputBoxResult::default());
                self.set_input_box()
            }
        }
    }

    /// Sets the scrollbar shape and returns its payload.
    pub fn set_scrollbar(&mut self) -> &mut ScrollbarResult {
        match self {
            Self::Scrollbar(r) => {
                *r = ScrollbarResult::default();
                r
            }
            _ => {
                *self = Self::Scrollbar(ScrollbarResult::default());
                self.set_scrollbar()
            }
        }
    }

    /// Sets the branch page shape and returns its payload.
    pub fn set_branch_page(&mut self) -> &mut BranchResult<'a> {
        match self {
            Self::BranchPage(r) => {
                r.active = WidgetId::NONE;
                r.page.clear();
                r
            }
            _ => {
                *self = Self::BranchPage(BranchResult::default());
                self.set_branch_page()
            }
        }
    }

    /// The button payload, if this is a button result.
    #[must_use]
    pub fn as_button(&self) -> Option<&ButtonResult> {
        match self {
            Self::Button(r) => Some(r),
            _ => None,
        }
    }

    /// The page payload, if this is a page result.
    #[must_use]
    pub fn as_page(&self) -> Option<&PageResult<'a>> {
        match self {
            Self::Page(r) => Some(r),
            _ => None,
        }
    }

    /// The input box payload, if this is an input box result.
    #[must_use]
    pub fn as_input_box(&self) -> Option<&InputBoxResult<'a>> {
        match self {
            Self::InputBox(r) => Some(r),
            _ => None,
        }
    }

    /// The scrollbar payload, if this is a scrollbar result.
    #[must_use]
    pub fn as_scrollbar(&self) -> Option<&ScrollbarResult> {
        match self {
            Self::Scrollbar(r) => Some(r),
            _ => None,
        }
    }

    /// The branch page payload, if this is a branch page result.
    #[must_use]
    pub fn as_branch_page(&self) -> Option<&BranchResult<'a>> {
        match self {
            Self::BranchPage(r) => Some(r),
            _ => None,
        }
    }
}
