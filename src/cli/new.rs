//! `stepper new`: write an example form to start from

use std::path::PathBuf;

use clap::Args;

use crate::error::{StepperError, StepperResult};
use crate::form::FormDefinition;

/// Arguments for `new`
#[derive(Args, Debug)]
pub struct NewArgs {
    /// Where to write the form (.yaml, .yml or .json)
    pub path: PathBuf,

    /// Overwrite an existing file
    #[arg(short, long)]
    pub force: bool,
}

/// Handle the new command
pub fn handle_new_command(args: &NewArgs) -> StepperResult<()> {
    if args.path.exists() && !args.force {
        return Err(StepperError::Validation(format!(
            "{} already exists; use --force to overwrite",
            args.path.display()
        )));
    }

    FormDefinition::sample().save(&args.path)?;
    println!("Wrote example form to {}", args.path.display());
    println!("Run 'stepper run {}' to open it.", args.path.display());
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_writes_loadable_form() {
        let temp_dir = TempDir::new().unwrap();
        let args = NewArgs {
            path: temp_dir.path().join("form.json"),
            force: false,
        };
        handle_new_command(&args).unwrap();

        let form = FormDefinition::load(&args.path).unwrap();
        assert_eq!(form, FormDefinition::sample());
    }

    #[test]
    fn test_refuses_to_overwrite() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("form.yaml");
        std::fs::write(&path, "pages: []\n").unwrap();

        let args = NewArgs { path, force: false };
        let err = handle_new_command(&args).unwrap_err();
        assert!(err.is_validation());

        let forced = NewArgs {
            path: args.path.clone(),
            force: true,
        };
        handle_new_command(&forced).unwrap();
    }
}
