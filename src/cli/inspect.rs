//! `stepper inspect`: print the step table without opening the TUI

use std::path::PathBuf;

use clap::Args;

use crate::config::settings::Settings;
use crate::display::{format_navigation_summary, format_step_table};
use crate::error::StepperResult;

use super::args::{load_form_navigator, DisplayArgs};

/// Arguments for `inspect`
#[derive(Args, Debug)]
pub struct InspectArgs {
    /// Form definition file (.yaml, .yml or .json)
    pub form: PathBuf,

    #[command(flatten)]
    pub display: DisplayArgs,

    /// Print the step descriptors as JSON instead of a table
    #[arg(long)]
    pub json: bool,
}

/// Handle the inspect command, returning the text to print
pub fn handle_inspect_command(settings: &Settings, args: &InspectArgs) -> StepperResult<String> {
    let loaded = load_form_navigator(&args.form, settings, &args.display)?;
    let navigator = &loaded.navigator;

    if args.json {
        let report = serde_json::json!({
            "title": loaded.title,
            "state": navigator.state(),
            "steps": navigator.steps(),
        });
        return Ok(format!("{}\n", serde_json::to_string_pretty(&report)?));
    }

    let mut output = String::new();
    if let Some(ref title) = loaded.title {
        output.push_str(&format!("{}\n\n", title));
    }
    output.push_str(&format_navigation_summary(navigator));
    output.push('\n');
    output.push_str(&format_step_table(&navigator.steps(), &loaded.acks));
    output.push('\n');
    Ok(output)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::form::FormDefinition;
    use tempfile::TempDir;

    fn sample_file(dir: &TempDir) -> PathBuf {
        let path = dir.path().join("sample.yaml");
        FormDefinition::sample().save(&path).unwrap();
        path
    }

    #[test]
    fn test_inspect_table() {
        let temp_dir = TempDir::new().unwrap();
        let args = InspectArgs {
            form: sample_file(&temp_dir),
            display: DisplayArgs {
                page: Some(2),
                ..Default::default()
            },
            json: false,
        };

        let output = handle_inspect_command(&Settings::default(), &args).unwrap();
        assert!(output.starts_with("Getting started"));
        assert!(output.contains("Page 2 of 3: Terms"));
        assert!(output.contains("completed"));
    }

    #[test]
    fn test_inspect_json_error_mode() {
        let temp_dir = TempDir::new().unwrap();
        let args = InspectArgs {
            form: sample_file(&temp_dir),
            display: DisplayArgs {
                page: Some(3),
                error: true,
                ..Default::default()
            },
            json: true,
        };

        let output = handle_inspect_command(&Settings::default(), &args).unwrap();
        let value: serde_json::Value = serde_json::from_str(&output).unwrap();
        assert_eq!(value["state"]["current_page"], 2);
        assert_eq!(value["state"]["can_go_next"], false);
        assert_eq!(value["steps"][0]["status"], "errored");
        assert_eq!(value["steps"][2]["status"], "active");
    }
}
