//! Arguments shared by commands that open a form

use std::path::{Path, PathBuf};

use clap::Args;

use crate::config::settings::Settings;
use crate::error::StepperResult;
use crate::form::{Acknowledgements, FormDefinition, Page};
use crate::navigator::{PageNavigator, StepperOverrides};

/// Display overrides accepted on the command line
#[derive(Args, Debug, Clone, Default)]
pub struct DisplayArgs {
    /// Page to start on (1-based)
    #[arg(
        short = 'p',
        long = "page",
        value_parser = clap::builder::RangedU64ValueParser::<usize>::new().range(1..)
    )]
    pub page: Option<usize>,

    /// Start in error mode (forward navigation disabled)
    #[arg(long, conflicts_with = "no_error")]
    pub error: bool,

    /// Start with error mode off, even if the form turns it on
    #[arg(long)]
    pub no_error: bool,

    /// Draw the top step indicator
    #[arg(long, conflicts_with = "no_top")]
    pub top: bool,

    /// Hide the top step indicator
    #[arg(long)]
    pub no_top: bool,

    /// Draw the bottom navigation bar
    #[arg(long, conflicts_with = "no_bottom")]
    pub bottom: bool,

    /// Hide the bottom navigation bar
    #[arg(long)]
    pub no_bottom: bool,
}

fn flag_pair(on: bool, off: bool) -> Option<bool> {
    match (on, off) {
        (true, _) => Some(true),
        (_, true) => Some(false),
        _ => None,
    }
}

impl DisplayArgs {
    /// Overrides to apply after the form's own options
    pub fn overrides(&self) -> StepperOverrides {
        StepperOverrides {
            initial_page: self.page.map(|p| p.saturating_sub(1)),
            error: flag_pair(self.error, self.no_error),
            show_top_stepper: flag_pair(self.top, self.no_top),
            show_bottom_stepper: flag_pair(self.bottom, self.no_bottom),
            ..Default::default()
        }
    }
}

/// A form file turned into a ready navigator
pub struct LoadedForm {
    pub title: Option<String>,
    pub navigator: PageNavigator<Page>,
    pub acks: Acknowledgements,
}

/// Load a form and build its navigator
///
/// Options are layered: settings, then the form's `options` block, then
/// the command-line flags.
pub fn load_form_navigator(
    path: &Path,
    settings: &Settings,
    display: &DisplayArgs,
) -> StepperResult<LoadedForm> {
    let form = FormDefinition::load(path)?;
    let options = display
        .overrides()
        .apply(form.resolve_options(settings.stepper_options()));
    let title = form.title.clone();
    let (navigator, acks) = form.into_navigator(options)?;

    Ok(LoadedForm {
        title,
        navigator,
        acks,
    })
}

/// Resolve a possibly relative form path for messages
pub fn display_path(path: &Path) -> PathBuf {
    std::fs::canonicalize(path).unwrap_or_else(|_| path.to_path_buf())
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_no_flags_no_overrides() {
        assert_eq!(DisplayArgs::default().overrides(), StepperOverrides::default());
    }

    #[test]
    fn test_flags_to_overrides() {
        let args = DisplayArgs {
            page: Some(2),
            error: true,
            no_top: true,
            bottom: true,
            ..Default::default()
        };
        let overrides = args.overrides();
        assert_eq!(overrides.initial_page, Some(1));
        assert_eq!(overrides.error, Some(true));
        assert_eq!(overrides.show_top_stepper, Some(false));
        assert_eq!(overrides.show_bottom_stepper, Some(true));
    }

    #[test]
    fn test_layering() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("form.yaml");
        std::fs::write(
            &path,
            "pages:\n  - title: A\n  - title: B\n  - title: C\noptions:\n  initial_page: 1\n  show_top_stepper: false\n",
        )
        .unwrap();

        let settings = Settings::default();

        let loaded = load_form_navigator(&path, &settings, &DisplayArgs::default()).unwrap();
        assert_eq!(loaded.navigator.current_page(), Some(1));
        assert!(!loaded.navigator.options().show_top_stepper);
        assert!(loaded.navigator.options().show_bottom_stepper);

        let flags = DisplayArgs {
            page: Some(3),
            top: true,
            ..Default::default()
        };
        let loaded = load_form_navigator(&path, &settings, &flags).unwrap();
        assert_eq!(loaded.navigator.current_page(), Some(2));
        assert!(loaded.navigator.options().show_top_stepper);
    }

    #[test]
    fn test_no_error_clears_form_error_mode() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("form.yaml");
        std::fs::write(
            &path,
            "pages:\n  - title: A\n  - title: B\noptions:\n  error: true\n",
        )
        .unwrap();
        let settings = Settings::default();

        let loaded = load_form_navigator(&path, &settings, &DisplayArgs::default()).unwrap();
        assert!(loaded.navigator.is_error());
        assert!(!loaded.navigator.can_go_next());

        let flags = DisplayArgs {
            no_error: true,
            ..Default::default()
        };
        assert_eq!(flags.overrides().error, Some(false));
        let loaded = load_form_navigator(&path, &settings, &flags).unwrap();
        assert!(!loaded.navigator.is_error());
        assert!(loaded.navigator.can_go_next());
    }

    #[test]
    fn test_page_flag_parsing() {
        use clap::Parser;

        #[derive(Parser)]
        struct Harness {
            #[command(flatten)]
            display: DisplayArgs,
        }

        let parsed = Harness::try_parse_from(["stepper", "--page", "3", "--no-error"]).unwrap();
        assert_eq!(parsed.display.page, Some(3));
        assert_eq!(parsed.display.overrides().initial_page, Some(2));
        assert_eq!(parsed.display.overrides().error, Some(false));

        assert!(Harness::try_parse_from(["stepper", "--page", "0"]).is_err());
        assert!(Harness::try_parse_from(["stepper", "--error", "--no-error"]).is_err());
    }

    #[test]
    fn test_page_out_of_range() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("form.json");
        std::fs::write(&path, r#"{"pages": [{"title": "Only"}]}"#).unwrap();

        let flags = DisplayArgs {
            page: Some(4),
            ..Default::default()
        };
        let err = load_form_navigator(&path, &Settings::default(), &flags)
            .err()
            .unwrap();
        assert!(err.is_invalid_page_index());
    }
}
