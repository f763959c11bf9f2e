//! Maps collected answers onto the parameters consumed by template rendering.

use std::str::FromStr;

use serde::Serialize;

use crate::error::{Error, Result};
use crate::questions::{AnswerSet, AUTHOR, CSS_STYLE, DESCRIPTION, NAME, PREPROCESSOR};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Preprocessor {
    Less,
    Sass,
}

impl FromStr for Preprocessor {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        match s {
            "less" => Ok(Self::Less),
            "sass" => Ok(Self::Sass),
            other => Err(Error::InconsistentAnswers(format!(
                "unknown preprocessor '{other}'"
            ))),
        }
    }
}

/// Normalized parameters. `less` and `sass` are never both true.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Parameters {
    pub name: String,
    pub description: String,
    pub author: String,
    pub less: bool,
    pub sass: bool,
}

fn required_text(answers: &AnswerSet, id: &str) -> Result<String> {
    answers
        .get_str(id)
        .map(str::to_string)
        .ok_or_else(|| Error::InconsistentAnswers(format!("missing answer '{id}'")))
}

/// Derives [`Parameters`] from a completed [`AnswerSet`].
///
/// A `preprocessor` answer is only consulted when `cssStyle` is true.
///
/// # Errors
/// * `Error::InconsistentAnswers` if a required answer is missing or the
///   preprocessor is neither `less` nor `sass`
pub fn derive_parameters(answers: &AnswerSet) -> Result<Parameters> {
    let css_style = answers
        .get_bool(CSS_STYLE)
        .ok_or_else(|| Error::InconsistentAnswers(format!("missing answer '{CSS_STYLE}'")))?;

    let preprocessor = if css_style {
        let choice = required_text(answers, PREPROCESSOR)?;
        Some(choice.parse::<Preprocessor>()?)
    } else {
        None
    };

    Ok(Parameters {
        name: required_text(answers, NAME)?,
        description: required_text(answers, DESCRIPTION)?,
        author: required_text(answers, AUTHOR)?,
        less: preprocessor == Some(Preprocessor::Less),
        sass: preprocessor == Some(Preprocessor::Sass),
    })
}
