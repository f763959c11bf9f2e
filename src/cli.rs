//! Command-line interface implementation for lin.
//! Provides argument parsing and help text formatting using clap.

use clap::{error::ErrorKind, ArgAction, CommandFactory, Parser, Subcommand};
use std::path::PathBuf;

use crate::constants::VERSION;

/// Command-line arguments structure for lin.
#[derive(Parser, Debug)]
#[command(
    name = "lin",
    version = VERSION,
    about = "lin: scaffold a webpack page project from the remote template",
    long_about = None,
    disable_version_flag = true
)]
pub struct Args {
    /// Print version
    #[arg(short = 'v', long = "version", action = ArgAction::Version)]
    pub version: Option<bool>,

    /// Enable verbose logging output
    #[arg(long, global = true)]
    pub verbose: bool,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Initialize a project from the template
    Create {
        /// Directory the project is created in
        #[arg(value_name = "PROJECT")]
        project: PathBuf,
    },
}

/// Parses command line arguments and returns the Args structure.
///
/// # Exits
/// * With status code 1 if the command or its argument is missing
/// * With clap's default error handling for other argument errors
pub fn get_args() -> Args {
    match Args::try_parse() {
        Ok(args) => args,
        Err(e) => match e.kind() {
            ErrorKind::MissingRequiredArgument
            | ErrorKind::MissingSubcommand
            | ErrorKind::DisplayHelpOnMissingArgumentOrSubcommand => {
                let _ = Args::command()
                    .help_template(
                        r#"{about-section}
{usage-heading} {usage}

{all-args}
{after-help}
"#,
                    )
                    .print_help();
                std::process::exit(1);
            }
            _ => e.exit(),
        },
    }
}
