//! The page navigator
//!
//! Owns the page list and the current index, gates back/next transitions on
//! the derived flags and the optional veto hooks, and notifies the renderer
//! after every change.

use std::fmt;

use crate::error::StepperResult;

use super::options::StepperOptions;
use super::renderer::{RenderFrame, Renderer};
use super::state::NavigatorState;
use super::step::StepDescriptor;

/// Caller-supplied predicate that may block a transition
///
/// Returns `Ok(false)` to veto. An `Err` is propagated to the caller of the
/// navigation operation and the state is left untouched.
pub type VetoHook = Box<dyn FnMut(&NavigatorState) -> StepperResult<bool>>;

/// Direction of a bottom-bar transition
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Direction {
    Back,
    Next,
}

impl fmt::Display for Direction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Back => write!(f, "back"),
            Self::Next => write!(f, "next"),
        }
    }
}

/// Outcome of `go_back` / `go_next`
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Transition {
    /// The page changed
    Moved { from: usize, to: usize },
    /// A veto hook returned false
    Vetoed,
    /// Nowhere to go: first/last page, error mode, or no pages
    Blocked,
}

impl Transition {
    pub fn is_moved(&self) -> bool {
        matches!(self, Self::Moved { .. })
    }
}

/// Paginated navigator over a list of content pages
pub struct PageNavigator<C> {
    pages: Vec<C>,
    options: StepperOptions,
    state: NavigatorState,
    before_back: Option<VetoHook>,
    before_next: Option<VetoHook>,
    renderer: Option<Box<dyn Renderer<C>>>,
}

impl<C> PageNavigator<C> {
    /// Create a navigator positioned at `options.initial_page`
    ///
    /// # Errors
    ///
    /// Returns `InvalidPageIndex` if there is at least one page and the
    /// initial page is out of range.
    pub fn new(pages: Vec<C>, options: StepperOptions) -> StepperResult<Self> {
        let page_count = pages.len();

        if page_count == 0 && options.initial_page != 0 {
            tracing::warn!(
                initial_page = options.initial_page,
                "navigator has no pages; ignoring initial page"
            );
        }
        if let Some(ref labels) = options.step_labels {
            if labels.len() != page_count {
                tracing::warn!(
                    labels = labels.len(),
                    pages = page_count,
                    "step label count does not match page count"
                );
            }
        }

        let state = NavigatorState::new(page_count, options.initial_page, options.error)?;
        tracing::debug!(page_count, current_page = ?state.current_page(), "navigator created");

        Ok(Self {
            pages,
            options,
            state,
            before_back: None,
            before_next: None,
            renderer: None,
        })
    }

    /// Register a hook consulted before every back transition
    pub fn with_before_back<F>(mut self, hook: F) -> Self
    where
        F: FnMut(&NavigatorState) -> StepperResult<bool> + 'static,
    {
        self.before_back = Some(Box::new(hook));
        self
    }

    /// Register a hook consulted before every next transition
    pub fn with_before_next<F>(mut self, hook: F) -> Self
    where
        F: FnMut(&NavigatorState) -> StepperResult<bool> + 'static,
    {
        self.before_next = Some(Box::new(hook));
        self
    }

    /// Register the renderer notified on every state change
    pub fn with_renderer<R>(mut self, renderer: R) -> Self
    where
        R: Renderer<C> + 'static,
    {
        self.renderer = Some(Box::new(renderer));
        self
    }

    pub fn state(&self) -> &NavigatorState {
        &self.state
    }

    pub fn options(&self) -> &StepperOptions {
        &self.options
    }

    pub fn pages(&self) -> &[C] {
        &self.pages
    }

    pub fn current_page(&self) -> Option<usize> {
        self.state.current_page()
    }

    pub fn page_count(&self) -> usize {
        self.state.page_count()
    }

    pub fn can_go_back(&self) -> bool {
        self.state.can_go_back()
    }

    pub fn can_go_next(&self) -> bool {
        self.state.can_go_next()
    }

    pub fn is_error(&self) -> bool {
        self.state.error()
    }

    /// Content of the current page
    pub fn current_content(&self) -> Option<&C> {
        self.state.current_page().and_then(|page| self.pages.get(page))
    }

    /// Step descriptors for the current state
    pub fn steps(&self) -> Vec<StepDescriptor> {
        self.state.steps(self.options.step_labels.as_deref())
    }

    /// Build a frame for the current state without notifying anyone
    pub fn frame(&self) -> RenderFrame<'_, C> {
        RenderFrame::new(&self.state, &self.pages, &self.options)
    }

    /// Move to the previous page
    pub fn go_back(&mut self) -> StepperResult<Transition> {
        self.step(Direction::Back)
    }

    /// Move to the next page
    pub fn go_next(&mut self) -> StepperResult<Transition> {
        self.step(Direction::Next)
    }

    fn step(&mut self, direction: Direction) -> StepperResult<Transition> {
        let Some(current) = self.state.current_page() else {
            return Ok(Transition::Blocked);
        };

        let (allowed, hook) = match direction {
            Direction::Back => (self.state.can_go_back(), self.before_back.as_mut()),
            Direction::Next => (self.state.can_go_next(), self.before_next.as_mut()),
        };
        if !allowed {
            tracing::debug!(%direction, current, "transition blocked");
            return Ok(Transition::Blocked);
        }

        if let Some(hook) = hook {
            if !hook(&self.state)? {
                tracing::debug!(%direction, current, "transition vetoed");
                return Ok(Transition::Vetoed);
            }
        }

        let target = match direction {
            Direction::Back => current - 1,
            Direction::Next => current + 1,
        };
        self.jump_to(target)?;

        Ok(Transition::Moved {
            from: current,
            to: target,
        })
    }

    /// Set the current page and recompute the flags
    ///
    /// Veto hooks are not consulted.
    ///
    /// # Errors
    ///
    /// Returns `InvalidPageIndex` if `position` is not a page.
    pub fn jump_to(&mut self, position: usize) -> StepperResult<()> {
        self.state = self.state.with_page(position)?;
        tracing::debug!(position, "page selected");
        self.notify();
        Ok(())
    }

    /// Turn error mode on or off
    ///
    /// The renderer is only notified when the flag actually changes.
    pub fn set_error(&mut self, error: bool) {
        if self.state.error() == error {
            return;
        }
        self.state = self.state.with_error(error);
        tracing::debug!(error, "error mode changed");
        self.notify();
    }

    /// Push the current state to the renderer without changing it
    pub fn refresh(&mut self) {
        self.notify();
    }

    fn notify(&mut self) {
        if let Some(renderer) = self.renderer.as_mut() {
            let frame = RenderFrame::new(&self.state, &self.pages, &self.options);
            renderer.render(&frame);
        }
    }
}

impl<C: fmt::Debug> fmt::Debug for PageNavigator<C> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("PageNavigator")
            .field("pages", &self.pages)
            .field("options", &self.options)
            .field("state", &self.state)
            .field("before_back", &self.before_back.is_some())
            .field("before_next", &self.before_next.is_some())
            .field("renderer", &self.renderer.is_some())
            .finish()
    }
}
