//! Template retrieval for lin.
//! Deposits the project skeleton into the project directory, either by
//! cloning a git repository or by copying a local template tree.
use crate::error::{Error, Result};
use log::debug;
use std::fs;
use std::path::{Path, PathBuf};
use url::Url;
use walkdir::WalkDir;

/// Represents the source location of a template.
#[derive(Debug, PartialEq)]
pub enum TemplateSource {
    /// Local filesystem template path
    FileSystem(PathBuf),
    /// Git repository URL (HTTPS or SSH)
    Git(String),
}

impl std::fmt::Display for TemplateSource {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            TemplateSource::FileSystem(path) => {
                write!(f, "local path: '{}'", path.display())
            }
            TemplateSource::Git(repo) => write!(f, "git repository: '{repo}'"),
        }
    }
}

impl TemplateSource {
    /// Creates a TemplateSource from a string path or URL.
    ///
    /// A leading `direct:` marker is accepted and stripped from git URLs.
    pub fn from_string(s: &str) -> Self {
        let s = s.strip_prefix("direct:").unwrap_or(s);

        if let Ok(url) = Url::parse(s) {
            if matches!(url.scheme(), "https" | "http" | "git" | "ssh") {
                return Self::Git(s.to_string());
            }
        }

        if s.starts_with("git@") {
            return Self::Git(s.to_string());
        }

        Self::FileSystem(PathBuf::from(s))
    }
}

/// Trait for loading templates from different sources.
pub trait TemplateLoader {
    /// Places the template into `dest` and returns the project root.
    fn load(&self, dest: &Path) -> Result<PathBuf>;
}

/// Loader for templates from the local filesystem.
pub struct LocalLoader<P: AsRef<Path>> {
    path: P,
}

/// Loader for templates from git repositories.
pub struct GitLoader<S: AsRef<str>> {
    repo: S,
}

impl<P: AsRef<Path>> LocalLoader<P> {
    /// Creates a new LocalLoader instance.
    pub fn new(path: P) -> Self {
        Self { path }
    }
}

impl<P: AsRef<Path>> TemplateLoader for LocalLoader<P> {
    /// Copies the template tree into `dest`, leaving out any `.git` directory.
    ///
    /// # Errors
    /// * `Error::TemplateDoesNotExistsError` if the template path doesn't exist
    fn load(&self, dest: &Path) -> Result<PathBuf> {
        let source = self.path.as_ref();
        if !source.is_dir() {
            return Err(Error::TemplateDoesNotExistsError {
                template_dir: source.display().to_string(),
            });
        }

        debug!("Copying template '{}' to '{}'.", source.display(), dest.display());

        let entries = WalkDir::new(source)
            .into_iter()
            .filter_entry(|entry| entry.file_name() != ".git");
        for entry in entries {
            let entry = entry.map_err(|e| Error::TemplateError(e.to_string()))?;
            let relative = entry
                .path()
                .strip_prefix(source)
                .map_err(|e| Error::TemplateError(e.to_string()))?;
            let target = dest.join(relative);

            if entry.file_type().is_dir() {
                fs::create_dir_all(&target)?;
            } else {
                if let Some(parent) = target.parent() {
                    fs::create_dir_all(parent)?;
                }
                fs::copy(entry.path(), &target)?;
            }
        }

        Ok(dest.to_path_buf())
    }
}

impl<S: AsRef<str>> GitLoader<S> {
    /// Creates a new GitLoader instance.
    pub fn new(repo: S) -> Self {
        Self { repo }
    }
}

impl<S: AsRef<str>> TemplateLoader for GitLoader<S> {
    /// Clones the repository into `dest` and drops its `.git` directory, so
    /// the project starts without the template's history.
    ///
    /// # Errors
    /// * `Error::Git2Error` if the clone fails
    fn load(&self, dest: &Path) -> Result<PathBuf> {
        let repo_url = self.repo.as_ref();

        debug!("Cloning repository '{}' to '{}'.", repo_url, dest.display());

        git2::build::RepoBuilder::new().clone(repo_url, dest)?;

        let git_dir = dest.join(".git");
        if git_dir.exists() {
            fs::remove_dir_all(&git_dir)?;
        }

        Ok(dest.to_path_buf())
    }
}

/// Fetches the template described by `template` into `dest`.
pub fn fetch_template<S: AsRef<str>>(template: S, dest: &Path) -> Result<PathBuf> {
    let source = TemplateSource::from_string(template.as_ref());
    debug!("Using template from the {}", source);

    let loader: Box<dyn TemplateLoader> = match source {
        TemplateSource::Git(repo) => Box::new(GitLoader::new(repo)),
        TemplateSource::FileSystem(path) => Box::new(LocalLoader::new(path)),
    };

    loader.load(dest)
}
