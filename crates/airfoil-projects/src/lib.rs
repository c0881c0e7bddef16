//! # airfoil-projects
//!
//! Project scaffolding library for the Airfoil CLI providing:
//! - Project metadata (name, model type, model name, CUDA and Python versions)
//! - The metadata wizard: a terminal-independent form state machine
//! - Starter templates bundled into the binary
//! - The scaffolder that materialises a project directory
//!
//! # Examples
//!
//! ## Scaffold a project from metadata
//!
//! ```no_run
//! use airfoil_projects::{
//!     EmbeddedTemplateStore, ProjectMetadata, ScaffoldTarget, Scaffolder,
//! };
//! use camino::Utf8PathBuf;
//!
//! # fn example() -> Result<(), Box<dyn std::error::Error>> {
//! let metadata = ProjectMetadata::new("demo", "LLM", "gpt2", "12.5", "3.10")?;
//! let store = EmbeddedTemplateStore::new();
//! let scaffolder = Scaffolder::new(&store)?;
//!
//! let target = ScaffoldTarget::NewDirectory(Utf8PathBuf::from("./demo"));
//! let report = scaffolder.scaffold(&metadata, &target)?;
//! println!("created {} files", report.created.len());
//! # Ok(())
//! # }
//! ```
//!
//! ## Drive the wizard
//!
//! ```
//! use airfoil_projects::wizard::{FormWizard, Key, Transition};
//!
//! let mut wizard = FormWizard::new();
//! for c in "demo".chars() {
//!     wizard.handle_event(Key::Char(c));
//! }
//! assert_eq!(wizard.handle_event(Key::Tab), Transition::Continue);
//! assert_eq!(wizard.focus_index(), 1);
//! ```

pub mod error;
pub mod metadata;
pub mod scaffold;
pub mod templates;
pub mod wizard;

pub use error::{Error, Result};
pub use metadata::{MetadataDraft, MetadataField, ProjectMetadata};
pub use scaffold::{ProjectLayout, ScaffoldReport, ScaffoldTarget, Scaffolder};
pub use templates::{
    EmbeddedTemplateStore, MemoryTemplateStore, TemplateFile, TemplateStore, TemplateVars,
};
