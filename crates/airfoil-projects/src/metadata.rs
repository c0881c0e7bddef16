//! Project metadata collected from flags or the wizard

use crate::error::{Error, Result};
use serde::Serialize;

/// One of the five metadata fields, in wizard order
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum MetadataField {
    Name,
    ModelType,
    ModelName,
    CudaVersion,
    PythonVersion,
}

impl MetadataField {
    /// All fields in wizard order
    pub const ALL: [MetadataField; 5] = [
        MetadataField::Name,
        MetadataField::ModelType,
        MetadataField::ModelName,
        MetadataField::CudaVersion,
        MetadataField::PythonVersion,
    ];

    /// Position of the field in the wizard
    pub fn index(self) -> usize {
        match self {
            MetadataField::Name => 0,
            MetadataField::ModelType => 1,
            MetadataField::ModelName => 2,
            MetadataField::CudaVersion => 3,
            MetadataField::PythonVersion => 4,
        }
    }

    /// Human-readable name, used in error messages
    pub fn label(self) -> &'static str {
        match self {
            MetadataField::Name => "project name",
            MetadataField::ModelType => "model type",
            MetadataField::ModelName => "model name",
            MetadataField::CudaVersion => "CUDA version",
            MetadataField::PythonVersion => "Python version",
        }
    }

    /// Placeholder hint shown in an empty wizard field
    pub fn placeholder(self) -> &'static str {
        match self {
            MetadataField::Name => "Project Name",
            MetadataField::ModelType => "Use case: Text | Embed | Image | Audio",
            MetadataField::ModelName => "Hugging Face Model Name: openchat/openchat-3.5-0106",
            MetadataField::CudaVersion => "CUDA Version: 12.5, 12.4, 12.3, 12.2, etc.",
            MetadataField::PythonVersion => "Python Version: 3.11, 3.10, 3.9, 3.8",
        }
    }

    /// Maximum number of characters accepted by the wizard, if limited
    pub fn char_limit(self) -> Option<usize> {
        match self {
            MetadataField::ModelType => Some(64),
            _ => None,
        }
    }
}

/// Finalised project metadata
///
/// All fields are non-empty. No format checks are applied to the version
/// strings.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ProjectMetadata {
    name: String,
    model_type: String,
    model_name: String,
    cuda_version: String,
    python_version: String,
}

impl ProjectMetadata {
    /// Build metadata, rejecting empty fields
    pub fn new(
        name: impl Into<String>,
        model_type: impl Into<String>,
        model_name: impl Into<String>,
        cuda_version: impl Into<String>,
        python_version: impl Into<String>,
    ) -> Result<Self> {
        MetadataDraft {
            name: Some(name.into()),
            model_type: Some(model_type.into()),
            model_name: Some(model_name.into()),
            cuda_version: Some(cuda_version.into()),
            python_version: Some(python_version.into()),
        }
        .build()
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn model_type(&self) -> &str {
        &self.model_type
    }

    pub fn model_name(&self) -> &str {
        &self.model_name
    }

    pub fn cuda_version(&self) -> &str {
        &self.cuda_version
    }

    pub fn python_version(&self) -> &str {
        &self.python_version
    }

    /// Value of a field by identifier
    pub fn get(&self, field: MetadataField) -> &str {
        match field {
            MetadataField::Name => &self.name,
            MetadataField::ModelType => &self.model_type,
            MetadataField::ModelName => &self.model_name,
            MetadataField::CudaVersion => &self.cuda_version,
            MetadataField::PythonVersion => &self.python_version,
        }
    }
}

/// Partially known metadata
///
/// Flags and wizard answers are collected into drafts and merged; empty
/// strings count as absent.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct MetadataDraft {
    pub name: Option<String>,
    pub model_type: Option<String>,
    pub model_name: Option<String>,
    pub cuda_version: Option<String>,
    pub python_version: Option<String>,
}

impl MetadataDraft {
    fn slot(&self, field: MetadataField) -> &Option<String> {
        match field {
            MetadataField::Name => &self.name,
            MetadataField::ModelType => &self.model_type,
            MetadataField::ModelName => &self.model_name,
            MetadataField::CudaVersion => &self.cuda_version,
            MetadataField::PythonVersion => &self.python_version,
        }
    }

    fn slot_mut(&mut self, field: MetadataField) -> &mut Option<String> {
        match field {
            MetadataField::Name => &mut self.name,
            MetadataField::ModelType => &mut self.model_type,
            MetadataField::ModelName => &mut self.model_name,
            MetadataField::CudaVersion => &mut self.cuda_version,
            MetadataField::PythonVersion => &mut self.python_version,
        }
    }

    /// Non-empty value of a field
    pub fn get(&self, field: MetadataField) -> Option<&str> {
        self.slot(field).as_deref().filter(|v| !v.is_empty())
    }

    /// Set a field; an empty value clears it
    pub fn set(&mut self, field: MetadataField, value: impl Into<String>) {
        let value = value.into();
        *self.slot_mut(field) = if value.is_empty() { None } else { Some(value) };
    }

    /// Fields that are still empty, in wizard order
    pub fn missing(&self) -> Vec<MetadataField> {
        MetadataField::ALL
            .into_iter()
            .filter(|f| self.get(*f).is_none())
            .collect()
    }

    /// Fill empty fields from `fallback`
    pub fn or(mut self, fallback: &MetadataDraft) -> Self {
        for field in MetadataField::ALL {
            if self.get(field).is_none() {
                *self.slot_mut(field) = fallback.get(field).map(String::from);
            }
        }
        self
    }

    /// Finalise the draft, failing on the first empty field
    pub fn build(self) -> Result<ProjectMetadata> {
        if let Some(field) = self.missing().first() {
            return Err(Error::missing_field(field.label()));
        }

        let take = |v: Option<String>| v.unwrap_or_default();
        Ok(ProjectMetadata {
            name: take(self.name),
            model_type: take(self.model_type),
            model_name: take(self.model_name),
            cuda_version: take(self.cuda_version),
            python_version: take(self.python_version),
        })
    }
}

impl From<&ProjectMetadata> for MetadataDraft {
    fn from(metadata: &ProjectMetadata) -> Self {
        let mut draft = MetadataDraft::default();
        for field in MetadataField::ALL {
            draft.set(field, metadata.get(field));
        }
        draft
    }
}
