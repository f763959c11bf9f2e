//! Run configuration injected into the `create` pipeline at startup.
//! The binary always uses [`Config::default`]; tests swap in a local template
//! and a fixed date.

use chrono::{Local, NaiveDate};

use crate::constants::DEFAULT_TEMPLATE_URL;

pub struct Config {
    /// Git URL or local path of the project template
    pub template: String,
    /// Supplies the date stamped into `version.json`
    pub today: fn() -> NaiveDate,
}

fn local_today() -> NaiveDate {
    Local::now().date_naive()
}

impl Config {
    pub fn new<S: Into<String>>(template: S, today: fn() -> NaiveDate) -> Self {
        Self { template: template.into(), today }
    }
}

impl Default for Config {
    fn default() -> Self {
        Self::new(DEFAULT_TEMPLATE_URL, local_today)
    }
}
