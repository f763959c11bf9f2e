//! lin's application entry point.
//! Parses the command line, sets up logging and dispatches the command.

use lin::{
    cli::{get_args, Args, Command},
    config::Config,
    create::create_project,
    error::{default_error_handler, Result},
    logger::init_logger,
    prompt::DialoguerPrompter,
};

/// Main application entry point.
fn main() {
    let args = get_args();

    init_logger(args.verbose);

    if let Err(err) = run(args) {
        default_error_handler(err);
    }
}

fn run(args: Args) -> Result<()> {
    let config = Config::default();
    let prompt = DialoguerPrompter::new();

    match args.command {
        Command::Create { project } => {
            create_project(&config, &prompt, &project)?;
        }
    }
    Ok(())
}
