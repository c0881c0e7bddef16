//! Create command

use airfoil_projects::{
    EmbeddedTemplateStore, Error as ProjectError, MetadataDraft, MetadataField, ProjectMetadata,
    ScaffoldReport, ScaffoldTarget, Scaffolder, TemplateStore,
};
use anyhow::{bail, Context, Result};
use camino::{Utf8Component, Utf8Path, Utf8PathBuf};
use tracing::{debug, info};

use crate::cli::CreateArgs;
use crate::{output, prompts, terminal, utils};

pub fn run(args: CreateArgs) -> Result<()> {
    let store = EmbeddedTemplateStore::new();
    if let Some(name) = &args.template {
        check_template(&store, name)?;
    }

    let metadata = collect_metadata(&args)?;
    if !args.init {
        check_project_name(metadata.name())?;
    }

    let template = if args.select_template {
        Some(prompts::select_starter_template(&store)?)
    } else {
        args.template.clone()
    };

    if let Some(name) = &template {
        output::info(&format!("Using starter template: {}", name));
    }

    let target = scaffold_target(&args, metadata.name(), &utils::current_dir()?);
    let report = create_project(&store, &metadata, template.as_deref(), &target)
        .context("Failed to create project structure")?;

    output::success("Project created successfully");
    output::kv("Location", report.root.as_str());
    for file in &report.created {
        debug!("created {}", file);
    }

    Ok(())
}

/// Metadata given on the command line; empty flags are absent
pub fn flag_draft(args: &CreateArgs) -> MetadataDraft {
    let mut draft = MetadataDraft::default();
    draft.set(MetadataField::Name, args.name.as_str());
    draft.set(MetadataField::ModelType, args.model_type.as_str());
    draft.set(MetadataField::ModelName, args.model_name.as_str());
    draft.set(MetadataField::CudaVersion, args.cuda_version.as_str());
    draft.set(MetadataField::PythonVersion, args.python_version.as_str());
    draft
}

/// The wizard runs when name, type or model is missing
pub fn needs_wizard(args: &CreateArgs) -> bool {
    args.name.is_empty() || args.model_type.is_empty() || args.model_name.is_empty()
}

fn collect_metadata(args: &CreateArgs) -> Result<ProjectMetadata> {
    let flags = flag_draft(args);

    let draft = if needs_wizard(args) {
        info!("Collecting project details");
        let answers: MetadataDraft = terminal::run_wizard()?.into();
        answers.or(&flags)
    } else {
        flags
    };

    Ok(draft.build()?)
}

/// Fail before any prompting when a named starter template does not exist
pub fn check_template(store: &dyn TemplateStore, name: &str) -> Result<()> {
    if !store.contains(name) {
        return Err(ProjectError::template_not_found(name).into());
    }
    Ok(())
}

/// A new project directory must be a single plain name under the current path
pub fn check_project_name(name: &str) -> Result<()> {
    let mut components = Utf8Path::new(name).components();
    let single = matches!(
        (components.next(), components.next()),
        (Some(Utf8Component::Normal(_)), None)
    );
    if !single || name.contains(['/', '\\']) {
        bail!(
            "Invalid project name '{}': use a single directory name without path separators or '..'",
            name
        );
    }
    Ok(())
}

/// Where the project goes: the current directory with `--init`, else `./<name>`
pub fn scaffold_target(args: &CreateArgs, name: &str, cwd: &Utf8Path) -> ScaffoldTarget {
    if args.init {
        ScaffoldTarget::InPlace(cwd.to_path_buf())
    } else {
        ScaffoldTarget::NewDirectory(Utf8PathBuf::from(name))
    }
}

/// Scaffold from a starter template when one is named, else the default layout
pub fn create_project(
    store: &dyn TemplateStore,
    metadata: &ProjectMetadata,
    template: Option<&str>,
    target: &ScaffoldTarget,
) -> Result<ScaffoldReport> {
    let scaffolder = Scaffolder::new(store)?;

    let report = match template {
        Some(name) => scaffolder.scaffold_from_template(name, metadata, target)?,
        None => scaffolder.scaffold(metadata, target)?,
    };
    Ok(report)
}

#[cfg(test)]
mod tests {
    use super::*;
    use airfoil_projects::MemoryTemplateStore;
    use tempfile::TempDir;

    fn args(name: &str, model_type: &str, model_name: &str) -> CreateArgs {
        CreateArgs {
            name: name.to_string(),
            model_type: model_type.to_string(),
            model_name: model_name.to_string(),
            cuda_version: "12.5".to_string(),
            python_version: "3.10".to_string(),
            init: false,
            template: None,
            select_template: false,
        }
    }

    fn temp_root() -> (TempDir, Utf8PathBuf) {
        let temp = TempDir::new().unwrap();
        let root = Utf8PathBuf::try_from(temp.path().to_path_buf()).unwrap();
        (temp, root)
    }

    #[test]
    fn test_complete_flags_skip_wizard() {
        assert!(!needs_wizard(&args("demo", "LLM", "gpt2")));
        assert!(needs_wizard(&args("demo", "", "gpt2")));
        assert!(needs_wizard(&args("demo", "LLM", "")));
        assert!(needs_wizard(&args("", "LLM", "gpt2")));
    }

    #[test]
    fn test_flag_draft_builds_metadata() {
        let metadata = flag_draft(&args("demo", "LLM", "gpt2")).build().unwrap();
        assert_eq!(metadata.name(), "demo");
        assert_eq!(metadata.cuda_version(), "12.5");
        assert_eq!(metadata.python_version(), "3.10");
    }

    #[test]
    fn test_wizard_answers_fall_back_to_flags() {
        let mut answers = MetadataDraft::default();
        answers.set(MetadataField::ModelType, "Text");
        answers.set(MetadataField::ModelName, "gpt2");

        let metadata = answers
            .or(&flag_draft(&args("hello-world", "", "")))
            .build()
            .unwrap();
        assert_eq!(metadata.name(), "hello-world");
        assert_eq!(metadata.model_type(), "Text");
        assert_eq!(metadata.cuda_version(), "12.5");
    }

    #[test]
    fn test_unanswered_required_field_is_missing() {
        let err = MetadataDraft::default()
            .or(&flag_draft(&args("hello-world", "", "")))
            .build()
            .unwrap_err();
        assert!(matches!(err, ProjectError::MissingField { .. }));
    }

    #[test]
    fn test_project_name_must_be_single_component() {
        assert!(check_project_name("demo").is_ok());
        assert!(check_project_name("my-llm.project").is_ok());

        for name in ["../x", "a/b", "..", ".", "/tmp/demo", "a\\b", "demo/"] {
            assert!(check_project_name(name).is_err(), "accepted {:?}", name);
        }
    }

    #[test]
    fn test_unknown_starter_template_is_rejected() {
        let store = EmbeddedTemplateStore::new();
        assert!(check_template(&store, "hello_world").is_ok());

        let err = check_template(&store, "no_such_template").unwrap_err();
        assert!(matches!(
            err.downcast_ref::<ProjectError>(),
            Some(ProjectError::TemplateNotFound { .. })
        ));
    }

    #[test]
    fn test_scaffold_target_modes() {
        let cwd = Utf8PathBuf::from("/work");
        let mut create = args("demo", "LLM", "gpt2");
        assert_eq!(
            scaffold_target(&create, "demo", &cwd),
            ScaffoldTarget::NewDirectory(Utf8PathBuf::from("demo"))
        );

        create.init = true;
        assert_eq!(
            scaffold_target(&create, "demo", &cwd),
            ScaffoldTarget::InPlace(cwd.clone())
        );
    }

    #[test]
    fn test_create_project_default_layout() {
        let (_temp, root) = temp_root();
        let store = MemoryTemplateStore::new();
        let metadata = ProjectMetadata::new("demo", "LLM", "gpt2", "12.5", "3.10").unwrap();

        let report = create_project(
            &store,
            &metadata,
            None,
            &ScaffoldTarget::NewDirectory(root.join("demo")),
        )
        .unwrap();
        assert_eq!(report.created.len(), 4);
    }

    #[test]
    fn test_create_project_from_starter_template() {
        let (_temp, root) = temp_root();
        let store = EmbeddedTemplateStore::new();
        let metadata = ProjectMetadata::new("demo", "LLM", "gpt2", "12.5", "3.10").unwrap();

        let report = create_project(
            &store,
            &metadata,
            Some("hello_world"),
            &ScaffoldTarget::NewDirectory(root.join("demo")),
        )
        .unwrap();

        let readme = std::fs::read_to_string(root.join("demo/README.md")).unwrap();
        assert!(readme.starts_with("# demo"));
        assert!(report.created.contains(&root.join("demo/src/handler.py")));
    }

    #[test]
    fn test_create_project_into_existing_directory_fails() {
        let (_temp, root) = temp_root();
        let store = MemoryTemplateStore::new();
        let metadata = ProjectMetadata::new("demo", "LLM", "gpt2", "12.5", "3.10").unwrap();

        let err = create_project(&store, &metadata, None, &ScaffoldTarget::NewDirectory(root))
            .unwrap_err();
        assert!(matches!(
            err.downcast_ref::<ProjectError>(),
            Some(ProjectError::DirectoryExists { .. })
        ));
    }
}
