//! Fixed file templates
//!
//! Templates use `{name}` placeholders filled by simple string replacement;
//! there is no template engine and nothing is cached.

mod boilerplate;
mod project;

pub use boilerplate::render_boilerplate;
pub use project::{
    minimal_project_files, TAILWIND_CONFIG, TAILWIND_CONFIG_FILE, TAILWIND_INDEX_CSS,
    TAILWIND_INDEX_CSS_FILE,
};

/// Template renderer for `{var}` placeholders
#[derive(Debug, Default)]
pub struct TemplateRenderer;

impl TemplateRenderer {
    /// Create a new renderer
    pub fn new() -> Self {
        Self
    }

    /// Replace every `{name}` in `template` with `name`
    pub fn render_string(&self, template: &str, name: &str) -> String {
        template.replace("{name}", name)
    }
}
