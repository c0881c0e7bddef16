//! Project scaffolding
//!
//! [`ProjectLayout`] renders the default four-file project from metadata;
//! [`Scaffolder`] writes either that layout or a starter template to disk.

mod layout;
mod scaffolder;

pub use layout::{ProjectLayout, LAYOUT_FILES};
pub use scaffolder::{ScaffoldReport, ScaffoldTarget, Scaffolder};
