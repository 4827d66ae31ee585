//! Renderer seam
//!
//! The navigator never draws anything itself. After every state change it
//! builds a `RenderFrame` and hands it to the registered `Renderer`.

use super::options::StepperOptions;
use super::state::NavigatorState;
use super::step::StepDescriptor;

/// Everything a renderer needs to draw one state of the stepper
#[derive(Debug)]
pub struct RenderFrame<'a, C> {
    /// Page index and flags
    pub state: NavigatorState,
    /// One descriptor per page
    pub steps: Vec<StepDescriptor>,
    /// Content of the current page, if any
    pub content: Option<&'a C>,
    /// Display options
    pub options: &'a StepperOptions,
}

impl<'a, C> RenderFrame<'a, C> {
    /// Build a frame from the navigator's parts
    pub fn new(state: &NavigatorState, pages: &'a [C], options: &'a StepperOptions) -> Self {
        Self {
            state: *state,
            steps: state.steps(options.step_labels.as_deref()),
            content: state.current_page().and_then(|page| pages.get(page)),
            options,
        }
    }

    pub fn current_page(&self) -> Option<usize> {
        self.state.current_page()
    }

    pub fn page_count(&self) -> usize {
        self.state.page_count()
    }

    /// Whether the back button should be shown
    pub fn show_back(&self) -> bool {
        self.state.can_go_back()
    }

    /// Whether the next button should be shown
    pub fn show_next(&self) -> bool {
        self.state.can_go_next()
    }

    pub fn show_top_stepper(&self) -> bool {
        self.options.show_top_stepper
    }

    pub fn show_bottom_stepper(&self) -> bool {
        self.options.show_bottom_stepper
    }
}

/// Consumer of navigator output
pub trait Renderer<C> {
    /// Called after every state change
    fn render(&mut self, frame: &RenderFrame<'_, C>);
}

impl<C, F> Renderer<C> for F
where
    F: FnMut(&RenderFrame<'_, C>),
{
    fn render(&mut self, frame: &RenderFrame<'_, C>) {
        self(frame)
    }
}

/// Renderer that records each frame in the log
#[derive(Debug, Default, Clone, Copy)]
pub struct TracingRenderer;

impl<C> Renderer<C> for TracingRenderer {
    fn render(&mut self, frame: &RenderFrame<'_, C>) {
        tracing::debug!(
            current_page = ?frame.current_page(),
            page_count = frame.page_count(),
            can_go_back = frame.show_back(),
            can_go_next = frame.show_next(),
            error = frame.state.error(),
            "stepper state changed"
        );
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::navigator::step::StepStatus;

    #[test]
    fn test_frame_selects_current_content() {
        let pages = vec!["intro", "details", "done"];
        let options = StepperOptions::default();
        let state = NavigatorState::new(3, 1, false).unwrap();
        let frame = RenderFrame::new(&state, &pages, &options);

        assert_eq!(frame.content, Some(&"details"));
        assert_eq!(frame.steps.len(), 3);
        assert_eq!(frame.steps[1].status, StepStatus::Active);
        assert!(frame.show_back());
        assert!(frame.show_next());
    }

    #[test]
    fn test_empty_frame_has_no_content() {
        let pages: Vec<&str> = Vec::new();
        let options = StepperOptions::default();
        let state = NavigatorState::new(0, 0, false).unwrap();
        let frame = RenderFrame::new(&state, &pages, &options);

        assert!(frame.content.is_none());
        assert!(frame.steps.is_empty());
        assert!(!frame.show_back());
        assert!(!frame.show_next());
    }

    #[test]
    fn test_region_flags_follow_options() {
        let pages = vec!["a"];
        let state = NavigatorState::new(1, 0, false).unwrap();

        let hidden = StepperOptions::new();
        let frame = RenderFrame::new(&state, &pages, &hidden);
        assert!(!frame.show_top_stepper());
        assert!(!frame.show_bottom_stepper());

        let shown = StepperOptions::new()
            .with_top_stepper(true)
            .with_bottom_stepper(true);
        let frame = RenderFrame::new(&state, &pages, &shown);
        assert!(frame.show_top_stepper());
        assert!(frame.show_bottom_stepper());
    }

    #[test]
    fn test_closure_renderer() {
        let pages = vec![1, 2];
        let options = StepperOptions::default();
        let state = NavigatorState::new(2, 0, false).unwrap();
        let mut seen = Vec::new();
        {
            let mut renderer = |frame: &RenderFrame<'_, i32>| seen.push(frame.current_page());
            renderer.render(&RenderFrame::new(&state, &pages, &options));
        }
        assert_eq!(seen, vec![Some(0)]);
    }
}
