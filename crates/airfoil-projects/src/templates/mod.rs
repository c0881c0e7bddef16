//! Starter templates
//!
//! A starter template is a named directory tree of files. Stores hand out
//! the files of a template; [`TemplateVars`] fills the `{var}` placeholders
//! in them with project metadata.

mod renderer;
mod store;

pub use renderer::TemplateVars;
pub use store::{EmbeddedTemplateStore, MemoryTemplateStore, TemplateFile, TemplateStore};
