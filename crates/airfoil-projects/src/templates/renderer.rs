//! Variable substitution for starter templates
//!
//! Starter templates use simple `{var}` placeholders rather than Tera
//! syntax so that Python and Dockerfile sources stay readable as-is.

use crate::metadata::ProjectMetadata;
use serde::Serialize;

/// Variables available to starter templates
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct TemplateVars {
    pub project_name: String,
    pub model_type: String,
    pub model_name: String,
    pub cuda_version: String,
    pub python_version: String,
}

impl TemplateVars {
    /// Value for a placeholder name, if it is one of ours
    fn lookup(&self, name: &str) -> Option<&str> {
        match name {
            "project_name" => Some(self.project_name.as_str()),
            "model_type" => Some(self.model_type.as_str()),
            "model_name" => Some(self.model_name.as_str()),
            "cuda_version" => Some(self.cuda_version.as_str()),
            "python_version" => Some(self.python_version.as_str()),
            _ => None,
        }
    }

    /// Replace every known `{var}` placeholder in `template`
    ///
    /// A single left-to-right pass: substituted values are never rescanned,
    /// and unknown `{...}` tokens are copied through unchanged.
    pub fn render(&self, template: &str) -> String {
        let mut out = String::with_capacity(template.len());
        let mut rest = template;

        while let Some(open) = rest.find('{') {
            out.push_str(&rest[..open]);
            let after = &rest[open + 1..];

            let value = after
                .find('}')
                .and_then(|close| self.lookup(&after[..close]).map(|v| (close, v)));

            match value {
                Some((close, value)) => {
                    out.push_str(value);
                    rest = &after[close + 1..];
                }
                None => {
                    out.push('{');
                    rest = after;
                }
            }
        }

        out.push_str(rest);
        out
    }

    /// Render file contents, leaving non UTF-8 data untouched
    pub fn render_bytes(&self, contents: &[u8]) -> Vec<u8> {
        match std::str::from_utf8(contents) {
            Ok(text) => self.render(text).into_bytes(),
            Err(_) => contents.to_vec(),
        }
    }
}

impl From<&ProjectMetadata> for TemplateVars {
    fn from(metadata: &ProjectMetadata) -> Self {
        Self {
            project_name: metadata.name().to_string(),
            model_type: metadata.model_type().to_string(),
            model_name: metadata.model_name().to_string(),
            cuda_version: metadata.cuda_version().to_string(),
            python_version: metadata.python_version().to_string(),
        }
    }
}
