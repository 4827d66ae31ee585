use anyhow::Result;
use clap::{Parser, Subcommand};

use stepper::cli::{
    handle_inspect_command, handle_new_command, handle_run_command, InspectArgs, NewArgs, RunArgs,
};
use stepper::config::{paths::StepperPaths, settings::Settings};
use stepper::logging::init_logging;

#[derive(Parser)]
#[command(
    name = "stepper",
    version,
    about = "Step through multi-page forms in the terminal",
    long_about = "stepper opens a YAML or JSON form definition as a paginated \
                  wizard with a step indicator, back/next navigation and \
                  optional acknowledgement gates on individual pages."
)]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Open a form in the interactive stepper
    #[command(alias = "tui")]
    Run(RunArgs),

    /// Print the steps and navigation state of a form
    Inspect(InspectArgs),

    /// Write an example form definition
    New(NewArgs),

    /// Write the default settings file
    Init,

    /// Show current configuration and paths
    Config,
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    let paths = StepperPaths::new()?;
    let settings = Settings::load_or_create(&paths)?;

    match cli.command {
        Some(Commands::Run(args)) => {
            // Only the TUI needs a log file; keep the guard until it exits
            let _guard = match init_logging(&paths, &settings) {
                Ok(guard) => Some(guard),
                Err(e) => {
                    eprintln!("Warning: file logging disabled: {:#}", e);
                    None
                }
            };
            handle_run_command(&settings, args)?;
        }
        Some(Commands::Inspect(args)) => {
            print!("{}", handle_inspect_command(&settings, &args)?);
        }
        Some(Commands::New(args)) => {
            handle_new_command(&args)?;
        }
        Some(Commands::Init) => {
            println!("Initializing stepper at: {}", paths.base_dir().display());
            settings.save(&paths)?;
            println!("Settings written to {}", paths.settings_file().display());
            println!();
            println!("Run 'stepper new form.yaml' to create an example form.");
        }
        Some(Commands::Config) => {
            println!("stepper Configuration");
            println!("=====================");
            println!("Config directory: {}", paths.base_dir().display());
            println!("Settings file:    {}", paths.settings_file().display());
            println!("Log directory:    {}", paths.log_dir().display());
            println!(
                "Initialized:      {}",
                if paths.is_initialized() { "yes" } else { "no (run 'stepper init')" }
            );
            println!();
            println!("Settings:");
            println!("  Top stepper:     {}", settings.show_top_stepper);
            println!("  Bottom stepper:  {}", settings.show_bottom_stepper);
            println!(
                "  Button titles:   {} / {}",
                settings.back_button_title, settings.next_button_title
            );
            println!("  Tick rate:       {}ms", settings.tick_rate_ms);
            println!("  Log filter:      {}", settings.log_filter);
        }
        None => {
            println!("stepper - paginated forms in the terminal");
            println!();
            println!("Run 'stepper --help' for usage information.");
            println!("Run 'stepper new form.yaml' to create an example form.");
            println!("Run 'stepper run form.yaml' to open it.");
        }
    }

    Ok(())
}
