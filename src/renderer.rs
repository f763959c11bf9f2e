//! Template rendering for lin.
//! Placeholders use MiniJinja's `{{ name }}` syntax. Only keys present in the
//! supplied context are substituted. Everything else, including other
//! placeholders and stray `{%` / `{#` markers, is kept verbatim.
use crate::error::{Error, Result};
use minijinja::Environment;
use regex::{Captures, Regex};
use std::sync::LazyLock;

/// A `{{ ident ... }}` expression (capturing the leading identifier), or any
/// other opening of a MiniJinja tag.
static MARKER: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"\{\{-?\s*([A-Za-z_][A-Za-z0-9_]*)[^}]*\}\}|\{[{%#]")
        .expect("valid marker pattern")
});

/// Trait for template rendering engines.
pub trait TemplateRenderer {
    /// Renders a template string with the given context.
    ///
    /// # Arguments
    /// * `template` - Template string to render
    /// * `context` - Context variables for rendering
    ///
    /// # Returns
    /// * `Result<String>` - Rendered template string
    fn render(&self, template: &str, context: &serde_json::Value) -> Result<String>;
}

/// MiniJinja-based template rendering engine.
pub struct MiniJinjaRenderer {
    /// MiniJinja environment instance
    env: Environment<'static>,
}

impl MiniJinjaRenderer {
    /// Creates a new MiniJinjaRenderer that keeps trailing newlines intact.
    pub fn new() -> Self {
        let mut env = Environment::new();
        env.set_keep_trailing_newline(true);
        Self { env }
    }
}

impl Default for MiniJinjaRenderer {
    fn default() -> Self {
        MiniJinjaRenderer::new()
    }
}

/// Turns `template` into MiniJinja source in which only expressions over keys
/// of `context` are live. Every other tag opening becomes a string literal
/// expression that renders back to the same text.
pub fn escape_markers(template: &str, context: &serde_json::Value) -> String {
    MARKER
        .replace_all(template, |caps: &Captures| {
            let in_view = caps.get(1).is_some_and(|ident| context.get(ident.as_str()).is_some());
            if in_view {
                caps[0].to_string()
            } else {
                let literal = serde_json::Value::String(caps[0].to_string());
                format!("{{{{ {literal} }}}}")
            }
        })
        .into_owned()
}

impl TemplateRenderer for MiniJinjaRenderer {
    /// Renders a template string using MiniJinja.
    ///
    /// # Errors
    /// * `Error::MinijinjaError` if the template does not compile or render
    fn render(&self, template: &str, context: &serde_json::Value) -> Result<String> {
        let source = escape_markers(template, context);
        self.env.render_str(&source, context).map_err(Error::MinijinjaError)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_escape_out_of_view() {
        let context = json!({"name": "shop"});
        assert_eq!(
            escape_markers("{{ name }} by {{author}}", &context),
            r#"{{ name }} by {{ "{{author}}" }}"#
        );
    }

    #[test]
    fn test_escape_filtered_expression() {
        let context = json!({"name": "shop"});
        assert_eq!(
            escape_markers("{{ author | upper }}", &context),
            r#"{{ "{{ author | upper }}" }}"#
        );
        assert_eq!(escape_markers("{{ name | upper }}", &context), "{{ name | upper }}");
    }

    #[test]
    fn test_escape_tag_openings() {
        let context = json!({"name": "shop"});
        assert_eq!(escape_markers("a {% b {# c", &context), r#"a {{ "{%" }} b {{ "{#" }} c"#);
        assert_eq!(escape_markers("{{#if x}}", &context), r#"{{ "{{" }}#if x}}"#);
    }
}
