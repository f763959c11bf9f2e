//! The fixed question sequence and the answers collected from it.

use crate::error::Result;
use crate::prompt::Prompter;
use indexmap::IndexMap;
use log::debug;

/// Answer ids, in the order they are asked.
pub const NAME: &str = "name";
pub const DESCRIPTION: &str = "description";
pub const AUTHOR: &str = "author";
pub const CSS_STYLE: &str = "cssStyle";
pub const PREPROCESSOR: &str = "preprocessor";

#[derive(Debug, Clone, PartialEq)]
pub enum QuestionKind {
    Text,
    YesNo,
    SingleChoice(Vec<String>),
}

/// A single interactive question.
///
/// `when` decides, from the answers collected so far, whether the question is
/// asked at all. A skipped question leaves no entry in the [`AnswerSet`].
pub struct Question {
    pub id: &'static str,
    pub prompt: &'static str,
    pub kind: QuestionKind,
    pub when: Option<fn(&AnswerSet) -> bool>,
}

impl Question {
    pub fn is_visible(&self, answers: &AnswerSet) -> bool {
        self.when.map_or(true, |when| when(answers))
    }
}

/// Answers keyed by question id, in the order they were given.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct AnswerSet {
    answers: IndexMap<String, serde_json::Value>,
}

impl AnswerSet {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn insert<K: Into<String>>(&mut self, id: K, value: serde_json::Value) {
        self.answers.insert(id.into(), value);
    }

    pub fn get(&self, id: &str) -> Option<&serde_json::Value> {
        self.answers.get(id)
    }

    pub fn get_str(&self, id: &str) -> Option<&str> {
        self.get(id).and_then(|v| v.as_str())
    }

    pub fn get_bool(&self, id: &str) -> Option<bool> {
        self.get(id).and_then(|v| v.as_bool())
    }

    pub fn contains(&self, id: &str) -> bool {
        self.answers.contains_key(id)
    }

    pub fn len(&self) -> usize {
        self.answers.len()
    }

    pub fn is_empty(&self) -> bool {
        self.answers.is_empty()
    }

    pub fn ids(&self) -> impl Iterator<Item = &str> {
        self.answers.keys().map(String::as_str)
    }
}

impl<K: Into<String>> FromIterator<(K, serde_json::Value)> for AnswerSet {
    fn from_iter<T: IntoIterator<Item = (K, serde_json::Value)>>(iter: T) -> Self {
        let mut answers = AnswerSet::new();
        for (id, value) in iter {
            answers.insert(id, value);
        }
        answers
    }
}

fn wants_preprocessor(answers: &AnswerSet) -> bool {
    answers.get_bool(CSS_STYLE).unwrap_or(false)
}

/// Returns the questions asked by `lin create`, in order.
pub fn questions() -> Vec<Question> {
    vec![
        Question {
            id: NAME,
            prompt: "Project name",
            kind: QuestionKind::Text,
            when: None,
        },
        Question {
            id: DESCRIPTION,
            prompt: "Project description",
            kind: QuestionKind::Text,
            when: None,
        },
        Question {
            id: AUTHOR,
            prompt: "Project author",
            kind: QuestionKind::Text,
            when: None,
        },
        Question {
            id: CSS_STYLE,
            prompt: "Use a CSS preprocessor (less/sass)?",
            kind: QuestionKind::YesNo,
            when: None,
        },
        Question {
            id: PREPROCESSOR,
            prompt: "Select a CSS preprocessor",
            kind: QuestionKind::SingleChoice(vec!["less".to_string(), "sass".to_string()]),
            when: Some(wants_preprocessor),
        },
    ]
}

/// Asks every visible question in order and returns the collected answers.
///
/// # Errors
/// * `Error::PromptError` if the user aborts or the terminal fails. Nothing
///   has been written to disk at that point.
pub fn collect_answers(prompt: &dyn Prompter, questions: &[Question]) -> Result<AnswerSet> {
    let mut answers = AnswerSet::new();

    for question in questions {
        if !question.is_visible(&answers) {
            debug!("Skipping question '{}'.", question.id);
            continue;
        }

        let value = match &question.kind {
            QuestionKind::Text => serde_json::Value::String(prompt.input(question.prompt)?),
            QuestionKind::YesNo => {
                serde_json::Value::Bool(prompt.confirm(question.prompt, true)?)
            }
            QuestionKind::SingleChoice(choices) => {
                let index = prompt.select(question.prompt, choices)?;
                let choice = choices.get(index).cloned().unwrap_or_default();
                serde_json::Value::String(choice)
            }
        };

        debug!("Answer for '{}': {}", question.id, value);
        answers.insert(question.id, value);
    }

    Ok(answers)
}
