#![allow(dead_code)]

use std::cell::RefCell;
use std::collections::VecDeque;
use std::fs;
use std::path::Path;

use lin::error::{Error, Result};
use lin::prompt::Prompter;

pub enum Reply {
    Text(&'static str),
    Yes(bool),
    Choice(usize),
    Abort,
}

/// Prompter answering from a fixed script and recording what was asked.
pub struct ScriptedPrompter {
    replies: RefCell<VecDeque<Reply>>,
    pub asked: RefCell<Vec<String>>,
}

impl ScriptedPrompter {
    pub fn new(replies: Vec<Reply>) -> Self {
        Self { replies: RefCell::new(replies.into()), asked: RefCell::new(Vec::new()) }
    }

    fn next(&self, prompt: &str) -> Result<Reply> {
        self.asked.borrow_mut().push(prompt.to_string());
        match self.replies.borrow_mut().pop_front() {
            Some(Reply::Abort) | None => Err(Error::PromptError("interrupted".to_string())),
            Some(reply) => Ok(reply),
        }
    }
}

impl Prompter for ScriptedPrompter {
    fn input(&self, prompt: &str) -> Result<String> {
        match self.next(prompt)? {
            Reply::Text(text) => Ok(text.to_string()),
            _ => panic!("unexpected text prompt '{prompt}'"),
        }
    }

    fn confirm(&self, prompt: &str, _default: bool) -> Result<bool> {
        match self.next(prompt)? {
            Reply::Yes(yes) => Ok(yes),
            _ => panic!("unexpected confirm prompt '{prompt}'"),
        }
    }

    fn select(&self, prompt: &str, _choices: &[String]) -> Result<usize> {
        match self.next(prompt)? {
            Reply::Choice(index) => Ok(index),
            _ => panic!("unexpected select prompt '{prompt}'"),
        }
    }
}

pub const PACKAGE_JSON: &str = r#"{
  "name": "{{name}}",
  "description": "{{description}}",
  "author": "{{author}}",
  "less": {{less}},
  "sass": {{sass}}
}
"#;

pub const WEBPACK_CONFIG: &str = "module.exports = { name: '{{name}}', author: '{{author}}' };\n";

pub const VERSION_JSON: &str = "{\"name\": \"{{name}}\", \"time\": \"{{time}}\"}\n";

pub const ROUTE_CONFIG: &str = "{\"path\": \"/{{ name }}\"}\n";

/// Writes a minimal project template under `root`.
pub fn write_template(root: &Path) {
    fs::create_dir_all(root.join("src/page/base")).unwrap();
    fs::write(root.join("package.json"), PACKAGE_JSON).unwrap();
    fs::write(root.join("webpack.config.js"), WEBPACK_CONFIG).unwrap();
    fs::write(root.join("version.json"), VERSION_JSON).unwrap();
    fs::write(root.join("src/page/base/route.config.json"), ROUTE_CONFIG).unwrap();
    fs::write(root.join("src/page/base/index.js"), "console.log('{{name}}');\n").unwrap();
}
