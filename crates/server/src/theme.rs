//! Template engine wrapper around Tera.
//!
//! Templates are compiled into the binary; there is no on-disk theme
//! directory to configure.

use anyhow::{Context, Result};
use tera::Tera;

/// Template engine for rendering pages.
pub struct ThemeEngine {
    tera: Tera,
}

impl ThemeEngine {
    /// Create a new theme engine with the built-in templates.
    pub fn new() -> Result<Self> {
        let mut tera = Tera::default();

        tera.add_raw_templates(vec![
            ("base.html", include_str!("../templates/base.html")),
            ("home.html", include_str!("../templates/home.html")),
            ("about.html", include_str!("../templates/about.html")),
            ("contact.html", include_str!("../templates/contact.html")),
            ("projects.html", include_str!("../templates/projects.html")),
            ("project.html", include_str!("../templates/project.html")),
            ("admin/login.html", include_str!("../templates/admin/login.html")),
            ("admin/index.html", include_str!("../templates/admin/index.html")),
            ("not_found.html", include_str!("../templates/not_found.html")),
        ])
        .context("failed to load templates")?;

        Ok(Self { tera })
    }

    /// Render a template with the given context.
    pub fn render(&self, template: &str, context: &tera::Context) -> Result<String> {
        self.tera
            .render(template, context)
            .with_context(|| format!("failed to render template {template}"))
    }
}
