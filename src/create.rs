//! The `create` command: questions, template fetch, rendering, finalization.

use std::path::{Path, PathBuf};
use std::time::Duration;

use console::style;
use indicatif::ProgressBar;
use log::debug;

use crate::config::Config;
use crate::error::{Error, Result};
use crate::finalizer::{completion_summary, finalize, StepOutcome};
use crate::loader::fetch_template;
use crate::materializer::materialize;
use crate::params::derive_parameters;
use crate::prompt::Prompter;
use crate::questions::{collect_answers, questions};
use crate::renderer::MiniJinjaRenderer;

/// Ensures the project directory does not exist yet.
///
/// # Errors
/// * `Error::OutputDirectoryExistsError` if something is already at `project`
pub fn get_project_dir<P: AsRef<Path>>(project: P) -> Result<PathBuf> {
    let project = project.as_ref();
    if project.exists() {
        return Err(Error::OutputDirectoryExistsError {
            output_dir: project.display().to_string(),
        });
    }
    Ok(project.to_path_buf())
}

fn fetch_with_spinner(template: &str, project: &Path) -> Result<PathBuf> {
    let spinner = ProgressBar::new_spinner();
    spinner.set_message("Downloading template...");
    spinner.enable_steady_tick(Duration::from_millis(100));

    match fetch_template(template, project) {
        Ok(root) => {
            spinner.finish_with_message(format!("{} Download complete", style("✓").green()));
            Ok(root)
        }
        Err(e) => {
            spinner.finish_with_message(format!("{} Download failed", style("✗").red()));
            Err(e)
        }
    }
}

/// Creates a project at `project` from the configured template.
///
/// Nothing touches the filesystem until every question is answered. A failed
/// fetch or rewrite leaves whatever was already written in place.
pub fn create_project(config: &Config, prompt: &dyn Prompter, project: &Path) -> Result<PathBuf> {
    let project = get_project_dir(project)?;

    let answers = collect_answers(prompt, &questions())?;
    let params = derive_parameters(&answers)?;
    debug!("Parameters: {:?}", params);

    println!();
    let root = fetch_with_spinner(&config.template, &project)?;

    let engine = MiniJinjaRenderer::new();
    materialize(&engine, &root, &params, (config.today)())?;

    let report = finalize(&root, &params);
    match &report.rename {
        StepOutcome::Done(path) => println!("Renamed page directory to '{}'.", path.display()),
        StepOutcome::Failed(reason) => println!("{} {reason}", style("Rename failed:").red()),
        StepOutcome::Skipped => {}
    }
    if let StepOutcome::Failed(reason) = &report.npmrc {
        println!("{} {reason}", style("Could not update .npmrc:").red());
    }

    println!("{}", completion_summary(&project));
    Ok(root)
}
