//! Post-rendering changes to the project tree and the closing summary.

use std::fs::{self, OpenOptions};
use std::io::Write;
use std::path::{Path, PathBuf};

use console::style;
use log::{debug, warn};

use crate::constants::{BASE_PAGE_DIR, NPMRC_FILE, NPMRC_LINE_BREAK, PAGE_ROOT, SASS_MIRROR_LINE};
use crate::error::{Error, Result};
use crate::params::Parameters;

/// Outcome of one finalization step.
#[derive(Debug, PartialEq)]
pub enum StepOutcome {
    Done(PathBuf),
    Skipped,
    Failed(String),
}

impl StepOutcome {
    fn from_result(result: Result<PathBuf>) -> Self {
        match result {
            Ok(path) => StepOutcome::Done(path),
            Err(e) => StepOutcome::Failed(e.to_string()),
        }
    }
}

#[derive(Debug, PartialEq)]
pub struct FinalizeReport {
    pub rename: StepOutcome,
    pub npmrc: StepOutcome,
}

/// Renames `src/page/base` to `src/page/<name>`. A project named `base`
/// keeps the directory as it is.
///
/// # Errors
/// * `Error::RenameError` if the destination exists or the rename fails
pub fn rename_page_dir(root: &Path, name: &str) -> Result<PathBuf> {
    let from = root.join(BASE_PAGE_DIR);
    let to = root.join(PAGE_ROOT).join(name);

    if from == to {
        return Ok(to);
    }
    if to.exists() {
        return Err(Error::RenameError(format!("'{}' already exists", to.display())));
    }

    fs::rename(&from, &to).map_err(|e| {
        Error::RenameError(format!("'{}' -> '{}': {e}", from.display(), to.display()))
    })?;

    debug!("Renamed '{}' to '{}'.", from.display(), to.display());
    Ok(to)
}

/// Makes sure `.npmrc` at `root` carries the sass binary mirror.
///
/// A missing file is created with exactly the mirror line; an existing one
/// gets a line break and the mirror line appended.
pub fn ensure_npmrc(root: &Path) -> Result<PathBuf> {
    let path = root.join(NPMRC_FILE);

    if path.exists() {
        let mut file = OpenOptions::new().append(true).open(&path)?;
        write!(file, "{NPMRC_LINE_BREAK}{SASS_MIRROR_LINE}")?;
        debug!("Appended sass mirror to '{}'.", path.display());
    } else {
        fs::write(&path, SASS_MIRROR_LINE)?;
        debug!("Created '{}'.", path.display());
    }

    Ok(path)
}

/// Runs both finalization steps. Neither failure stops the other.
pub fn finalize(root: &Path, params: &Parameters) -> FinalizeReport {
    let rename = StepOutcome::from_result(rename_page_dir(root, &params.name));
    if let StepOutcome::Failed(reason) = &rename {
        warn!("{reason}");
    }

    let npmrc = if params.sass {
        StepOutcome::from_result(ensure_npmrc(root))
    } else {
        StepOutcome::Skipped
    };
    if let StepOutcome::Failed(reason) = &npmrc {
        warn!("Could not write {NPMRC_FILE}: {reason}");
    }

    FinalizeReport { rename, npmrc }
}

/// Next manual steps shown once the project is ready.
pub fn completion_summary(project: &Path) -> String {
    let steps = [
        ("cd into Project", format!("cd {}", project.display())),
        ("Project setup", "npm install".to_string()),
        ("Compiles and hot-reloads for development", "npm run dev".to_string()),
        ("Compiles and minifies for production", "npm run build".to_string()),
    ];

    let mut summary = String::from("\n");
    for (title, command) in steps {
        summary.push_str(&format!(
            " # {title}\n{}{}\n\n",
            style("   $ ").dim(),
            style(command).blue()
        ));
    }
    summary
}
