//! Per-page acknowledgement tracking
//!
//! A cloneable handle shared between the UI (which records acknowledgements)
//! and the navigator's `before_next` hook (which reads them).

use std::cell::RefCell;
use std::collections::BTreeSet;
use std::rc::Rc;

use crate::error::StepperResult;
use crate::navigator::NavigatorState;

/// Which pages need acknowledging, and which have been
#[derive(Debug, Clone, Default)]
pub struct Acknowledgements {
    required: Rc<Vec<bool>>,
    acknowledged: Rc<RefCell<BTreeSet<usize>>>,
}

impl Acknowledgements {
    /// `required[i]` marks page `i` as needing acknowledgement
    pub fn new(required: Vec<bool>) -> Self {
        Self {
            required: Rc::new(required),
            acknowledged: Rc::new(RefCell::new(BTreeSet::new())),
        }
    }

    pub fn is_required(&self, page: usize) -> bool {
        self.required.get(page).copied().unwrap_or(false)
    }

    pub fn is_acknowledged(&self, page: usize) -> bool {
        self.acknowledged.borrow().contains(&page)
    }

    /// Required but not yet acknowledged
    pub fn is_pending(&self, page: usize) -> bool {
        self.is_required(page) && !self.is_acknowledged(page)
    }

    /// Record an acknowledgement; ignored for pages that need none
    pub fn acknowledge(&self, page: usize) {
        if self.is_required(page) {
            self.acknowledged.borrow_mut().insert(page);
        }
    }

    /// Flip the acknowledgement of a page; returns the new value
    pub fn toggle(&self, page: usize) -> bool {
        if !self.is_required(page) {
            return false;
        }
        let mut acknowledged = self.acknowledged.borrow_mut();
        if acknowledged.remove(&page) {
            false
        } else {
            acknowledged.insert(page);
            true
        }
    }

    /// Hook that vetoes leaving a page while it is pending
    pub fn veto_hook(&self) -> impl FnMut(&NavigatorState) -> StepperResult<bool> + 'static {
        let acks = self.clone();
        move |state: &NavigatorState| {
            Ok(state
                .current_page()
                .map_or(true, |page| !acks.is_pending(page)))
        }
    }
}
