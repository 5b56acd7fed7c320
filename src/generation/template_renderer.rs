//! Tera-based template renderer

use std::path::Path;
use tera::Tera;

use crate::error::Result;
use crate::generation::{Artifact, RenderContext, TemplateFile};

/// Renders template files into artifacts rooted at an output directory
pub struct TeraTemplateRenderer {
    tera: Tera,
}

impl TeraTemplateRenderer {
    /// Register every template with a fresh Tera instance
    pub fn new(templates: &[TemplateFile]) -> Result<Self> {
        let mut tera = Tera::default();
        // No HTML templates here; keep generated source byte-for-byte.
        tera.autoescape_on(vec![]);
        tera.add_raw_templates(
            templates
                .iter()
                .map(|t| (t.destination, t.source))
                .collect::<Vec<_>>(),
        )?;
        Ok(Self { tera })
    }

    pub fn render_all(
        &self,
        templates: &[TemplateFile],
        context: &RenderContext,
        output_dir: &Path,
    ) -> Result<Vec<Artifact>> {
        let tera_context = context.to_tera_context();
        templates
            .iter()
            .map(|template| -> Result<Artifact> {
                let content = self.tera.render(template.destination, &tera_context)?;
                tracing::debug!(template = %template.destination, "Rendered template");
                Ok(Artifact::new(output_dir, template.destination, content))
            })
            .collect()
    }
}
