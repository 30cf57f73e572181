//! Tab set: trigger buttons, each selecting one page.

use trellis_core::Point;

use super::button::Button;
use super::core::{Member, Widget, WidgetId};
use super::page::Page;
use crate::error::{BuildResult, WidgetError};
use crate::render::RenderTarget;
use crate::result::{WidgetResult, WidgetType};

/// A trigger button and the page it selects.
pub type BranchPair<'w, 'p, I> = (Member<'w, Button<I>>, Member<'w, Page<'p, I>>);

struct Branch<'w, 'p, I> {
    button: Member<'w, Button<I>>,
    page: Member<'w, Page<'p, I>>,
}

/// (button, page) pairs with exactly one page active.
///
/// Every button is processed and presented each frame. Releasing a button
/// activates its page; only the active page is processed and presented.
/// A branch page always has at least one branch.
pub struct BranchPage<'w, 'p, I> {
    id: WidgetId,
    position: Point,
    branches: Vec<Branch<'w, 'p, I>>,
    active: usize,
}

impl<'w, 'p, I> BranchPage<'w, 'p, I> {
    /// Creates a branch page from `(button, page)` pairs.
    ///
    /// `init` selects the initially active branch by button id; `None`
    /// activates the first.
    ///
    /// # Errors
    ///
    /// [`WidgetError::InvalidConfiguration`] if `branches` is empty or `init`
    /// names no button among them.
    pub fn new(
        position: Point,
        branches: Vec<BranchPair<'w, 'p, I>>,
        init: Option<WidgetId>,
    ) -> BuildResult<Self> {
        if branches.is_empty() {
            return Err(WidgetError::invalid("BranchPage", "no branches"));
        }
        let branches: Vec<_> = branches
            .into_iter()
            .map(|(button, page)| Branch { button, page })
            .collect();
        let active = match init {
            None => 0,
            Some(id) => branches
                .iter()
                .position(|b| b.button.id() == id)
                .ok_or_else(|| {
                    WidgetError::invalid(
                        "BranchPage",
                        format!("initial branch {} is not among the branches", id.raw()),
                    )
                })?,
        };
        tracing::debug!(branches = branches.len(), active, "branch page created");
        Ok(Self {
            id: WidgetId::next(),
            position,
            branches,
            active,
        })
    }

    /// Creates a branch page from parallel button and page lists.
    ///
    /// # Errors
    ///
    /// [`WidgetError::InvalidConfiguration`] if the lists differ in length,
    /// plus the errors of [`new`](Self::new).
    pub fn from_lists(
        position: Point,
        buttons: Vec<Member<'w, Button<I>>>,
        pages: Vec<Member<'w, Page<'p, I>>>,
        init: Option<WidgetId>,
    ) -> BuildResult<Self> {
        if buttons.len() != pages.len() {
            return Err(WidgetError::invalid(
                "BranchPage",
                format!("{} buttons for {} pages", buttons.len(), pages.len()),
            ));
        }
        Self::new(position, buttons.into_iter().zip(pages).collect(), init)
    }

    /// Adds a branch. The active branch is unchanged.
    pub fn add_branch(&mut self, (button, page): BranchPair<'w, 'p, I>) {
        self.branches.push(Branch { button, page });
    }

    /// Removes the branch triggered by button `id` and hands it back.
    ///
    /// Returns `Ok(None)` if no branch has that button. Removing the active
    /// branch activates the first remaining one.
    ///
    /// # Errors
    ///
    /// [`WidgetError::InvalidConfiguration`] if it is the last branch; the
    /// branch page is left unchanged.
    pub fn erase_branch(&mut self, id: WidgetId) -> BuildResult<Option<BranchPair<'w, 'p, I>>> {
        let Some(index) = self.branches.iter().position(|b| b.button.id() == id) else {
            return Ok(None);
        };
        if self.branches.len() == 1 {
            return Err(WidgetError::invalid("BranchPage", "cannot erase the last branch"));
        }

        let Branch { button, page } = self.branches.remove(index);
        if index == self.active {
            self.active = 0;
        } else if index < self.active {
            self.active -= 1;
        }
        tracing::info!(
            branch = id.raw(),
            active = self.active_id().raw(),
            "branch erased"
        );
        Ok(Some((button, page)))
    }

    /// Button id of the active branch.
    #[must_use]
    pub fn active(&self) -> WidgetId {
        self.active_id()
    }

    fn active_id(&self) -> WidgetId {
        self.branches[self.active].button.id()
    }

    /// The active page.
    #[must_use]
    pub fn active_page(&self) -> &Page<'p, I> {
        &self.branches[self.active].page
    }

    /// Number of branches. Never zero.
    #[must_use]
    pub fn len(&self) -> usize {
        self.branches.len()
    }

    /// Always false.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.branches.is_empty()
    }
}

impl<I> Widget<I> for BranchPage<'_, '_, I> {
    fn id(&self) -> WidgetId {
        self.id
    }

    fn position(&self) -> Point {
        self.position
    }

    fn widget_type(&self) -> WidgetType {
        WidgetType::BranchPage
    }

    fn process<'a>(&'a mut self, rel: Point, input: &I, result: &mut WidgetResult<'a>) {
        let at = self.position + rel;

        let mut released = None;
        for (index, branch) in self.branches.iter_mut().enumerate() {
            if branch.button.poll(at, input).released {
                released = Some(index);
            }
        }
        if let Some(index) = released {
            if index != self.active {
                tracing::debug!(from = self.active, to = index, "branch switched");
            }
            self.active = index;
        }

        let out = result.set_branch_page();
        out.active = self.active_id();
        let active = self.active;
        self.branches[active]
            .page
            .process_page(at, input, &mut out.page);
    }

    fn present(&mut self, target: &mut dyn RenderTarget, rel: Point) {
        let at = self.position + rel;
        for branch in &mut self.branches {
            branch.button.present(target, at);
        }
        let active = self.active;
        self.branches[active].page.present(target, at);
    }
}
