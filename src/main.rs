use std::path::PathBuf;

use anyhow::Result;
use clap::{Parser, Subcommand};

use stepwizard::cli::{
    handle_journal_command, handle_messages_command, handle_run_command, handle_show_command,
    OutputFormat,
};
use stepwizard::config::{paths::WizardPaths, settings::Settings};
use stepwizard::journal::JournalLogger;
use stepwizard::wizard::{Control, StepWizard};

#[derive(Parser)]
#[command(
    name = "stepwizard",
    version,
    about = "Step-by-step message panel for the terminal",
    long_about = "StepWizard shows one message per step with Previous/Next \
                  navigation and a close toggle. Run without a subcommand to \
                  open the interactive panel."
)]
struct Cli {
    /// Load step messages from a YAML or JSON file
    #[arg(short, long, global = true, env = "STEP_WIZARD_MESSAGES")]
    messages: Option<PathBuf>,

    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Launch the interactive panel
    #[command(alias = "ui")]
    Tui,

    /// Print the render description for a step
    Show {
        /// Step to show (1-based)
        #[arg(short, long)]
        step: Option<usize>,
        /// Show the panel closed
        #[arg(long)]
        closed: bool,
        /// Output format
        #[arg(short, long, value_enum, default_value_t = OutputFormat::Text)]
        format: OutputFormat,
    },

    /// Apply activations from the initial state and print the result
    Run {
        /// Controls to activate in order (next, prev, close)
        #[arg(required = true)]
        controls: Vec<Control>,
        /// Output format
        #[arg(short, long, value_enum, default_value_t = OutputFormat::Text)]
        format: OutputFormat,
    },

    /// List the step messages
    Messages,

    /// Show recent journal entries
    Journal {
        /// Number of entries to show
        #[arg(short, long, default_value = "20")]
        limit: usize,
    },

    /// Write default settings to disk
    Init,

    /// Show current configuration and paths
    Config,
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    let paths = WizardPaths::new()?;
    let settings = Settings::load_or_create(&paths)?;
    let journal = JournalLogger::new(paths.journal_file());
    let active_journal = || settings.journal_enabled.then(|| journal.clone());

    match cli.command {
        None | Some(Commands::Tui) => {
            let messages = settings.message_list(&paths, cli.messages.as_deref())?;
            if settings.journal_enabled {
                paths.ensure_directories()?;
            }
            let wizard = StepWizard::new(messages).with_open(settings.start_open);
            stepwizard::tui::run_tui(&settings, wizard, active_journal())?;
        }
        Some(Commands::Show {
            step,
            closed,
            format,
        }) => {
            let messages = settings.message_list(&paths, cli.messages.as_deref())?;
            handle_show_command(messages, step, closed, format)?;
        }
        Some(Commands::Run { controls, format }) => {
            let messages = settings.message_list(&paths, cli.messages.as_deref())?;
            if settings.journal_enabled {
                paths.ensure_directories()?;
            }
            handle_run_command(
                messages,
                settings.start_open,
                &controls,
                active_journal().as_ref(),
                format,
            )?;
        }
        Some(Commands::Messages) => {
            let messages = settings.message_list(&paths, cli.messages.as_deref())?;
            handle_messages_command(&messages)?;
        }
        Some(Commands::Journal { limit }) => {
            handle_journal_command(&journal, limit)?;
        }
        Some(Commands::Init) => {
            println!("Initializing StepWizard at: {}", paths.base_dir().display());
            settings.save(&paths)?;
            println!("Settings written to {}", paths.settings_file().display());
        }
        Some(Commands::Config) => {
            let messages = settings.message_list(&paths, cli.messages.as_deref())?;
            println!("StepWizard Configuration");
            println!("========================");
            println!("Base directory: {}", paths.base_dir().display());
            println!("Settings file:  {}", paths.settings_file().display());
            println!("Journal file:   {}", paths.journal_file().display());
            println!();
            println!("Settings:");
            println!("  Steps:           {}", messages.len());
            match &settings.messages_file {
                Some(file) => println!("  Messages file:   {}", file.display()),
                None => println!("  Messages file:   (inline)"),
            }
            println!("  Start open:      {}", settings.start_open);
            println!("  Journal enabled: {}", settings.journal_enabled);
            println!("  Tick rate:       {}ms", settings.tick_rate_ms);
        }
    }

    Ok(())
}
