//! Template rendering for workergen.
//! Go-style templates are translated by [`crate::syntax`] and rendered with
//! MiniJinja in strict mode, so a reference to an undefined variable is an
//! error rather than an empty string.
use crate::error::{Error, Result};
use crate::syntax::translate;
use minijinja::{Environment, UndefinedBehavior};

/// Trait for template rendering engines.
pub trait TemplateRenderer {
    /// Renders a template string with the given context.
    ///
    /// # Arguments
    /// * `name` - Name used in error messages, usually the source path
    /// * `template` - Template string to render
    /// * `context` - Context variables for rendering
    ///
    /// # Returns
    /// * `Result<String>` - Rendered template string
    fn render(&self, name: &str, template: &str, context: &serde_json::Value)
        -> Result<String>;
}

/// MiniJinja-based template rendering engine.
pub struct MiniJinjaRenderer {
    /// MiniJinja environment instance
    env: Environment<'static>,
}

impl MiniJinjaRenderer {
    /// Creates a new renderer with strict undefined handling.
    pub fn new() -> Self {
        let mut env = Environment::new();
        env.set_undefined_behavior(UndefinedBehavior::Strict);
        env.set_keep_trailing_newline(true);
        Self { env }
    }
}

impl Default for MiniJinjaRenderer {
    fn default() -> Self {
        MiniJinjaRenderer::new()
    }
}

impl TemplateRenderer for MiniJinjaRenderer {
    /// Renders a Go-style template string using MiniJinja.
    ///
    /// # Errors
    /// * `Error::TemplateParseError` if the template is malformed
    /// * `Error::TemplateSyntaxError` if rendering fails, e.g. on an
    ///   undefined variable
    fn render(
        &self,
        name: &str,
        template: &str,
        context: &serde_json::Value,
    ) -> Result<String> {
        let source = translate(name, template)?;

        let mut env = self.env.clone();
        env.add_template_owned("temp", source).map_err(|e| Error::TemplateParseError {
            template: name.to_string(),
            reason: e.to_string(),
        })?;

        let tmpl = env.get_template("temp").map_err(|e| Error::TemplateParseError {
            template: name.to_string(),
            reason: e.to_string(),
        })?;

        tmpl.render(context)
            .map_err(|e| Error::TemplateSyntaxError { template: name.to_string(), source: e })
    }
}
