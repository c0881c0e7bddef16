//! Template stores

use crate::error::{Error, Result};
use camino::{Utf8Path, Utf8PathBuf};
use rust_embed::RustEmbed;
use std::collections::{BTreeMap, BTreeSet};
use std::fs;
use tracing::debug;

/// Starter templates compiled into the binary
#[derive(RustEmbed)]
#[folder = "$CARGO_MANIFEST_DIR/starter_templates/"]
#[prefix = ""]
struct StarterTemplates;

/// One file of a starter template
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TemplateFile {
    /// Path relative to the template root, `/`-separated
    pub path: Utf8PathBuf,
    pub contents: Vec<u8>,
}

/// Read-only collection of named starter templates
pub trait TemplateStore {
    /// Names of all templates, sorted
    fn list_templates(&self) -> Vec<String>;

    /// Files of the named template, sorted by path
    fn template_files(&self, name: &str) -> Result<Vec<TemplateFile>>;

    /// Check that a template exists
    fn contains(&self, name: &str) -> bool {
        self.list_templates().iter().any(|t| t == name)
    }

    /// Copy a template recursively into `dest`
    ///
    /// Parent directories are created as needed and existing files are
    /// overwritten. Returns the paths written.
    fn copy_template(&self, name: &str, dest: &Utf8Path) -> Result<Vec<Utf8PathBuf>> {
        let files = self.template_files(name)?;
        let mut written = Vec::with_capacity(files.len());

        for file in files {
            let target = dest.join(&file.path);
            if let Some(parent) = target.parent() {
                fs::create_dir_all(parent)
                    .map_err(|e| Error::write_failed(parent.as_str(), e.to_string()))?;
            }
            fs::write(&target, &file.contents)
                .map_err(|e| Error::write_failed(target.as_str(), e.to_string()))?;
            debug!("Copied template file: {}", target);
            written.push(target);
        }

        Ok(written)
    }
}

/// Split an embedded path into template name and file path
fn split_template_path(path: &str) -> Option<(&str, &str)> {
    let (name, rest) = path.split_once('/')?;
    if name.is_empty() || rest.is_empty() {
        return None;
    }
    Some((name, rest))
}

/// Templates bundled from `starter_templates/<name>/...`
#[derive(Debug, Clone, Copy, Default)]
pub struct EmbeddedTemplateStore;

impl EmbeddedTemplateStore {
    pub fn new() -> Self {
        Self
    }
}

impl TemplateStore for EmbeddedTemplateStore {
    fn list_templates(&self) -> Vec<String> {
        StarterTemplates::iter()
            .filter_map(|path| split_template_path(&path).map(|(name, _)| name.to_string()))
            .collect::<BTreeSet<_>>()
            .into_iter()
            .collect()
    }

    fn template_files(&self, name: &str) -> Result<Vec<TemplateFile>> {
        let mut files = Vec::new();

        for path in StarterTemplates::iter() {
            let Some((template, rel)) = split_template_path(&path) else {
                continue;
            };
            if template != name {
                continue;
            }
            if let Some(content) = StarterTemplates::get(&path) {
                files.push(TemplateFile {
                    path: Utf8PathBuf::from(rel),
                    contents: content.data.into_owned(),
                });
            }
        }

        if files.is_empty() {
            return Err(Error::template_not_found(name));
        }

        files.sort_by(|a, b| a.path.cmp(&b.path));
        Ok(files)
    }
}

/// In-memory template store
#[derive(Debug, Clone, Default)]
pub struct MemoryTemplateStore {
    templates: BTreeMap<String, BTreeMap<Utf8PathBuf, Vec<u8>>>,
}

impl MemoryTemplateStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a file to a template, creating the template if needed
    pub fn with_file(
        mut self,
        template: impl Into<String>,
        path: impl Into<Utf8PathBuf>,
        contents: impl Into<Vec<u8>>,
    ) -> Self {
        self.templates
            .entry(template.into())
            .or_default()
            .insert(path.into(), contents.into());
        self
    }
}

impl TemplateStore for MemoryTemplateStore {
    fn list_templates(&self) -> Vec<String> {
        self.templates.keys().cloned().collect()
    }

    fn template_files(&self, name: &str) -> Result<Vec<TemplateFile>> {
        let files = self
            .templates
            .get(name)
            .ok_or_else(|| Error::template_not_found(name))?;

        Ok(files
            .iter()
            .map(|(path, contents)| TemplateFile {
                path: path.clone(),
                contents: contents.clone(),
            })
            .collect())
    }
}
