//! Step table formatting
//!
//! Renders the step descriptors of a navigator as a table, for printing
//! outside the TUI.

use tabled::{settings::Style, Table, Tabled};

use crate::form::{Acknowledgements, Page};
use crate::navigator::{PageNavigator, StepDescriptor};

#[derive(Tabled)]
struct StepRow {
    #[tabled(rename = "#")]
    number: usize,
    #[tabled(rename = "Step")]
    label: String,
    #[tabled(rename = "Status")]
    status: String,
    #[tabled(rename = "Ack")]
    ack: &'static str,
}

fn ack_cell(acks: &Acknowledgements, index: usize) -> &'static str {
    if !acks.is_required(index) {
        ""
    } else if acks.is_acknowledged(index) {
        "yes"
    } else {
        "required"
    }
}

/// Format the steps as a table
pub fn format_step_table(steps: &[StepDescriptor], acks: &Acknowledgements) -> String {
    if steps.is_empty() {
        return "No pages in this form.".to_string();
    }

    let rows: Vec<StepRow> = steps
        .iter()
        .map(|step| StepRow {
            number: step.number(),
            label: step.label.clone().unwrap_or_else(|| "-".to_string()),
            status: step.status.to_string(),
            ack: ack_cell(acks, step.index),
        })
        .collect();

    let mut table = Table::new(rows);
    table.with(Style::modern());
    table.to_string()
}

/// One-paragraph summary of where the navigator stands
pub fn format_navigation_summary(navigator: &PageNavigator<Page>) -> String {
    let state = navigator.state();
    let shown = |flag: bool| if flag { "shown" } else { "hidden" };

    let position = match (state.current_page(), navigator.current_content()) {
        (Some(page), Some(content)) => format!(
            "Page {} of {}: {}",
            page + 1,
            state.page_count(),
            content.title
        ),
        _ => "No pages".to_string(),
    };

    format!(
        "{}\nBack button: {}\nNext button: {}\nError mode:  {}\n",
        position,
        shown(state.can_go_back()),
        shown(state.can_go_next()),
        if state.error() { "on" } else { "off" },
    )
}
