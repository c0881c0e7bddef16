//! Writes project files to disk
//!
//! Every file is attempted even after a failure, so all problems are
//! reported together. If anything failed, whatever the scaffold created is
//! removed again and [`Error::PartialScaffold`] is returned.

use super::layout::ProjectLayout;
use crate::error::{Error, Result};
use crate::metadata::ProjectMetadata;
use crate::templates::{TemplateFile, TemplateStore, TemplateVars};
use camino::{Utf8Path, Utf8PathBuf};
use std::fs;
use std::io::ErrorKind;
use tracing::{debug, error, info, warn};

/// Where a project is written
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ScaffoldTarget {
    /// Create this directory; it must not exist yet
    NewDirectory(Utf8PathBuf),
    /// Write into this existing directory; no layout file may exist yet
    InPlace(Utf8PathBuf),
}

impl ScaffoldTarget {
    pub fn root(&self) -> &Utf8Path {
        match self {
            ScaffoldTarget::NewDirectory(path) | ScaffoldTarget::InPlace(path) => path,
        }
    }
}

/// Outcome of a successful scaffold
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ScaffoldReport {
    pub root: Utf8PathBuf,
    /// Files written, in write order
    pub created: Vec<Utf8PathBuf>,
}

/// Materialises projects from the default layout or a starter template
pub struct Scaffolder<'a> {
    store: &'a dyn TemplateStore,
    layout: ProjectLayout,
}

impl<'a> Scaffolder<'a> {
    pub fn new(store: &'a dyn TemplateStore) -> Result<Self> {
        Ok(Self {
            store,
            layout: ProjectLayout::new()?,
        })
    }

    /// Write the default four-file layout
    pub fn scaffold(
        &self,
        metadata: &ProjectMetadata,
        target: &ScaffoldTarget,
    ) -> Result<ScaffoldReport> {
        let files = self.layout.render(metadata)?;
        self.write_project(files, target)
    }

    /// Copy a starter template and fill in its placeholders
    pub fn scaffold_from_template(
        &self,
        template: &str,
        metadata: &ProjectMetadata,
        target: &ScaffoldTarget,
    ) -> Result<ScaffoldReport> {
        let vars = TemplateVars::from(metadata);
        let files = self
            .store
            .template_files(template)?
            .into_iter()
            .map(|file| TemplateFile {
                contents: vars.render_bytes(&file.contents),
                path: file.path,
            })
            .collect();

        debug!("Scaffolding from starter template '{}'", template);
        self.write_project(files, target)
    }

    fn write_project(
        &self,
        files: Vec<TemplateFile>,
        target: &ScaffoldTarget,
    ) -> Result<ScaffoldReport> {
        let root = target.root();
        let mut written = Written::default();

        match target {
            ScaffoldTarget::NewDirectory(_) => {
                if root.symlink_metadata().is_ok() {
                    return Err(Error::directory_exists(root.as_str()));
                }
                fs::create_dir(root).map_err(|e| match e.kind() {
                    ErrorKind::AlreadyExists => Error::directory_exists(root.as_str()),
                    _ => Error::write_failed(root.as_str(), e.to_string()),
                })?;
            }
            ScaffoldTarget::InPlace(_) => {
                for file in &files {
                    let path = root.join(&file.path);
                    if path.symlink_metadata().is_ok() {
                        return Err(Error::file_exists(path.as_str()));
                    }
                }
            }
        }

        let mut failures = Vec::new();
        for file in &files {
            let path = root.join(&file.path);
            if let Err(e) = written.write(root, &path, &file.contents) {
                error!("{}", e);
                failures.push(e);
            }
        }

        if !failures.is_empty() {
            written.rollback(target);
            return Err(Error::partial_scaffold(&failures));
        }

        info!("Scaffolded {} files into {}", written.files.len(), root);
        Ok(ScaffoldReport {
            root: root.to_path_buf(),
            created: written.files,
        })
    }
}

/// Paths created so far, for rollback
#[derive(Debug, Default)]
struct Written {
    files: Vec<Utf8PathBuf>,
    dirs: Vec<Utf8PathBuf>,
}

impl Written {
    fn write(&mut self, root: &Utf8Path, path: &Utf8Path, contents: &[u8]) -> Result<()> {
        if let Some(parent) = path.parent() {
            self.ensure_dir(root, parent)?;
        }

        fs::write(path, contents).map_err(|e| Error::write_failed(path.as_str(), e.to_string()))?;
        debug!("Wrote {}", path);
        self.files.push(path.to_path_buf());
        Ok(())
    }

    /// Create `dir` and any missing ancestors below `root`
    fn ensure_dir(&mut self, root: &Utf8Path, dir: &Utf8Path) -> Result<()> {
        let mut missing: Vec<&Utf8Path> = dir
            .ancestors()
            .take_while(|d| *d != root && !d.as_str().is_empty())
            .filter(|d| !d.is_dir())
            .collect();
        missing.reverse();

        for d in missing {
            fs::create_dir(d).map_err(|e| Error::write_failed(d.as_str(), e.to_string()))?;
            self.dirs.push(d.to_path_buf());
        }
        Ok(())
    }

    fn rollback(&self, target: &ScaffoldTarget) {
        match target {
            ScaffoldTarget::NewDirectory(root) => {
                if let Err(e) = fs::remove_dir_all(root) {
                    warn!("Failed to remove {}: {}", root, e);
                }
            }
            ScaffoldTarget::InPlace(_) => {
                for file in &self.files {
                    if let Err(e) = fs::remove_file(file) {
                        warn!("Failed to remove {}: {}", file, e);
                    }
                }
                for dir in self.dirs.iter().rev() {
                    if let Err(e) = fs::remove_dir(dir) {
                        warn!("Failed to remove {}: {}", dir, e);
                    }
                }
            }
        }
    }
}
