//! Navigator state
//!
//! The page index plus the flags derived from it. Every mutation produces a
//! whole new value, so observers never see a half-updated state.

use serde::Serialize;

use crate::error::{StepperError, StepperResult};

use super::step::{StepDescriptor, StepStatus};

/// Current page and derived navigation flags
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct NavigatorState {
    page_count: usize,
    /// `None` only when there are no pages
    current_page: Option<usize>,
    error: bool,
    can_go_back: bool,
    can_go_next: bool,
}

impl NavigatorState {
    /// Create the initial state
    ///
    /// # Errors
    ///
    /// Returns `InvalidPageIndex` if there are pages and `initial_page` is
    /// not one of them. With no pages the initial page is ignored.
    pub fn new(page_count: usize, initial_page: usize, error: bool) -> StepperResult<Self> {
        if page_count == 0 {
            return Ok(Self::derive(0, None, error));
        }
        if initial_page >= page_count {
            return Err(StepperError::invalid_page(initial_page, page_count));
        }
        Ok(Self::derive(page_count, Some(initial_page), error))
    }

    fn derive(page_count: usize, current_page: Option<usize>, error: bool) -> Self {
        let (can_go_back, can_go_next) = match current_page {
            Some(page) => (page > 0, page + 1 < page_count && !error),
            None => (false, false),
        };
        Self {
            page_count,
            current_page,
            error,
            can_go_back,
            can_go_next,
        }
    }

    /// State with the current page replaced
    pub fn with_page(&self, position: usize) -> StepperResult<Self> {
        if position >= self.page_count {
            return Err(StepperError::invalid_page(position, self.page_count));
        }
        Ok(Self::derive(self.page_count, Some(position), self.error))
    }

    /// State with the error flag replaced
    pub fn with_error(&self, error: bool) -> Self {
        Self::derive(self.page_count, self.current_page, error)
    }

    pub fn page_count(&self) -> usize {
        self.page_count
    }

    pub fn current_page(&self) -> Option<usize> {
        self.current_page
    }

    pub fn error(&self) -> bool {
        self.error
    }

    pub fn can_go_back(&self) -> bool {
        self.can_go_back
    }

    pub fn can_go_next(&self) -> bool {
        self.can_go_next
    }

    /// Whether there is anything to navigate at all
    pub fn is_empty(&self) -> bool {
        self.page_count == 0
    }

    /// Whether the current page is the final one
    pub fn is_last_page(&self) -> bool {
        self.current_page
            .is_some_and(|page| page + 1 == self.page_count)
    }

    /// Status of the step at `index`
    pub fn step_status(&self, index: usize) -> StepStatus {
        let Some(current) = self.current_page else {
            return StepStatus::Upcoming;
        };
        if index == current {
            StepStatus::Active
        } else if index < current {
            if self.error {
                StepStatus::Errored
            } else {
                StepStatus::Completed
            }
        } else {
            StepStatus::Upcoming
        }
    }

    /// One descriptor per page, labelled from `labels` where available
    pub fn steps(&self, labels: Option<&[String]>) -> Vec<StepDescriptor> {
        (0..self.page_count)
            .map(|index| StepDescriptor {
                index,
                label: labels.and_then(|l| l.get(index)).cloned(),
                status: self.step_status(index),
            })
            .collect()
    }
}
