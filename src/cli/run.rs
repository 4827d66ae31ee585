//! `stepper run`: open a form in the terminal stepper

use std::path::PathBuf;
use std::time::Duration;

use anyhow::Result;
use clap::Args;

use crate::config::settings::Settings;
use crate::navigator::TracingRenderer;
use crate::tui::{run_tui, App};

use super::args::{display_path, load_form_navigator, DisplayArgs};

/// Arguments for `run`
#[derive(Args, Debug)]
pub struct RunArgs {
    /// Form definition file (.yaml, .yml or .json)
    pub form: PathBuf,

    #[command(flatten)]
    pub display: DisplayArgs,
}

/// Handle the run command
pub fn handle_run_command(settings: &Settings, args: RunArgs) -> Result<()> {
    let loaded = load_form_navigator(&args.form, settings, &args.display)?;
    tracing::info!(form = %display_path(&args.form).display(), "opening form");

    let navigator = loaded.navigator.with_renderer(TracingRenderer);
    let mut app = App::new(navigator, loaded.acks, loaded.title);
    app.navigator.refresh();

    run_tui(&mut app, Duration::from_millis(settings.tick_rate_ms.max(10)))?;

    match app.navigator.current_page() {
        Some(page) => println!(
            "Stopped on page {} of {}.",
            page + 1,
            app.navigator.page_count()
        ),
        None => println!("The form has no pages."),
    }
    Ok(())
}
