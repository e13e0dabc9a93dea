use minijinja::Environment;
use std::path::Path;
use thiserror::Error;

/// Errors that can occur when rendering templates
#[derive(Debug, Error)]
pub enum TemplateError {
    #[error("template directory not found: {0}")]
    MissingDirectory(String),

    #[error("template error: {0}")]
    RenderError(#[from] minijinja::Error),
}

/// Jinja template engine over the configured templates directory
///
/// Templates are loaded from disk per render, so edits to the HTML do not
/// require a restart.
pub struct TemplateEngine {
    env: Environment<'static>,
}

impl TemplateEngine {
    /// Create an engine rooted at the given directory
    ///
    /// The directory must exist at startup; a missing template inside it is
    /// a per-request render error instead.
    pub fn new<P: AsRef<Path>>(dir: P) -> Result<Self, TemplateError> {
        let dir = dir.as_ref();
        if !dir.is_dir() {
            return Err(TemplateError::MissingDirectory(
                dir.display().to_string(),
            ));
        }

        let mut env = Environment::new();
        env.set_loader(minijinja::path_loader(dir));

        Ok(Self { env })
    }

    /// Render a template by file name with the given context
    pub fn render(&self, name: &str, ctx: minijinja::Value) -> Result<String, TemplateError> {
        let template = self.env.get_template(name)?;
        Ok(template.render(ctx)?)
    }
}
