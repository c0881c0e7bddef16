//! Default project layout rendered with Tera

use crate::error::Result;
use crate::metadata::ProjectMetadata;
use crate::templates::TemplateFile;
use camino::Utf8PathBuf;
use tera::{Context, Tera};
use tracing::debug;

/// Template name and output path of every layout file, in write order
pub const LAYOUT_FILES: [(&str, &str); 4] = [
    ("README.md", "README.md"),
    ("main.py", "src/main.py"),
    ("Dockerfile", "Dockerfile"),
    ("requirements.txt", "requirements.txt"),
];

/// Renders README, source stub, Dockerfile and requirements file
pub struct ProjectLayout {
    tera: Tera,
}

impl ProjectLayout {
    pub fn new() -> Result<Self> {
        let mut tera = Tera::default();

        tera.add_raw_template("README.md", include_str!("templates/README.md.tera"))?;
        tera.add_raw_template("main.py", include_str!("templates/main.py.tera"))?;
        tera.add_raw_template("Dockerfile", include_str!("templates/Dockerfile.tera"))?;
        tera.add_raw_template(
            "requirements.txt",
            include_str!("templates/requirements.txt.tera"),
        )?;

        Ok(Self { tera })
    }

    /// Render every layout file for `metadata`
    pub fn render(&self, metadata: &ProjectMetadata) -> Result<Vec<TemplateFile>> {
        let context = Context::from_serialize(metadata)?;

        LAYOUT_FILES
            .iter()
            .map(|(template, path)| {
                debug!("Rendering layout file: {}", path);
                let rendered = self.tera.render(template, &context)?;
                Ok(TemplateFile {
                    path: Utf8PathBuf::from(*path),
                    contents: rendered.into_bytes(),
                })
            })
            .collect()
    }
}

impl std::fmt::Debug for ProjectLayout {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ProjectLayout")
            .field("files", &LAYOUT_FILES.map(|(_, path)| path))
            .finish()
    }
}
