//! Rewrites the placeholder files of a freshly fetched template.
//!
//! Each templated file sees only its own [`View`] of the parameters, so a
//! placeholder outside that view stays in the file untouched.

use std::fs;
use std::path::{Path, PathBuf};

use chrono::NaiveDate;
use log::info;
use serde_json::json;

use crate::error::{Error, Result};
use crate::params::Parameters;
use crate::renderer::TemplateRenderer;

/// The subset of parameters a templated file is rendered with.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum View {
    /// name, description, author, less, sass
    Full,
    NameOnly,
    /// name plus the current date as `time`
    NameAndTime,
}

impl View {
    pub fn context(self, params: &Parameters, today: NaiveDate) -> serde_json::Value {
        match self {
            View::Full => json!(params),
            View::NameOnly => json!({ "name": params.name }),
            View::NameAndTime => json!({ "name": params.name, "time": format_time(today) }),
        }
    }
}

#[derive(Debug, Clone, Copy)]
pub struct TemplateFile {
    /// Path relative to the project root
    pub path: &'static str,
    pub view: View,
}

/// Files rewritten after the template is fetched, in processing order.
pub const TEMPLATE_FILES: [TemplateFile; 4] = [
    TemplateFile { path: "package.json", view: View::Full },
    TemplateFile { path: "webpack.config.js", view: View::NameOnly },
    TemplateFile { path: "version.json", view: View::NameAndTime },
    TemplateFile { path: "src/page/base/route.config.json", view: View::NameOnly },
];

/// Formats a date as `YYYY-M-D` without zero padding.
pub fn format_time(date: NaiveDate) -> String {
    date.format("%Y-%-m-%-d").to_string()
}

fn materialize_file(
    engine: &dyn TemplateRenderer,
    path: &Path,
    context: &serde_json::Value,
) -> Result<()> {
    let content = fs::read_to_string(path)?;
    let rendered = engine.render(&content, context)?;
    fs::write(path, rendered)?;
    Ok(())
}

/// Renders every entry of `files` in place under `root`.
///
/// Stops at the first failure. Files already rewritten stay rewritten.
///
/// # Errors
/// * `Error::MaterializeError` naming the file that could not be read,
///   rendered or written
pub fn materialize_files(
    engine: &dyn TemplateRenderer,
    root: &Path,
    files: &[TemplateFile],
    params: &Parameters,
    today: NaiveDate,
) -> Result<Vec<PathBuf>> {
    let mut written = Vec::with_capacity(files.len());

    for file in files {
        let path = root.join(file.path);
        let context = file.view.context(params, today);

        materialize_file(engine, &path, &context).map_err(|e| Error::MaterializeError {
            path: path.clone(),
            source: Box::new(e),
        })?;

        info!("Rewrote '{}'.", path.display());
        written.push(path);
    }

    Ok(written)
}

/// Renders [`TEMPLATE_FILES`] under `root`.
pub fn materialize(
    engine: &dyn TemplateRenderer,
    root: &Path,
    params: &Parameters,
    today: NaiveDate,
) -> Result<Vec<PathBuf>> {
    materialize_files(engine, root, &TEMPLATE_FILES, params, today)
}
