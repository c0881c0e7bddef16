//! CLI argument parsing with clap

use camino::Utf8PathBuf;
use clap::{Args, Parser, Subcommand};
use clap_complete::Shell;

/// Airfoil is a CLI tool for managing RunPod projects
#[derive(Parser, Debug)]
#[command(name = "airfoil")]
#[command(author, version, about)]
#[command(
    long_about = "Airfoil is a command-line interface for developing and deploying projects on \
RunPod's infrastructure.\nIt provides a seamless workflow for creating, developing, and deploying \
AI and machine learning projects."
)]
#[command(propagate_version = true)]
pub struct Cli {
    /// Increase verbosity (-v, -vv)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    pub verbose: u8,

    /// Suppress log output
    #[arg(short, long, global = true)]
    pub quiet: bool,

    /// Config file (default is $HOME/.airfoil.yaml)
    #[arg(long, global = true, value_name = "PATH")]
    pub config: Option<Utf8PathBuf>,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Creates a new project
    #[command(visible_alias = "new")]
    #[command(long_about = "Creates a new RunPod project folder on your local machine.\n\
This command will guide you through the process of setting up a new project,\n\
including selecting a starter template, choosing CUDA and Python versions,\n\
and configuring other project settings.")]
    #[command(after_help = "Examples:\n  airfoil create --name my-project\n  \
airfoil create --name my-llm-project --type LLM --model gpt2")]
    Create(CreateArgs),

    /// Start a development session for the current project
    #[command(visible_alias = "start")]
    Dev(DevArgs),

    /// Deploys your project as an endpoint
    Deploy(DeployArgs),

    /// Build Dockerfile for current project
    Build(BuildArgs),

    /// Print the version number of Airfoil
    Version(VersionArgs),

    /// Generate shell completion scripts
    Completions(CompletionsArgs),
}

// Create command
#[derive(Args, Debug)]
pub struct CreateArgs {
    /// Project name; a directory with this name is created in the current path
    #[arg(short, long, default_value = "hello-world")]
    pub name: String,

    /// Model type for the project
    #[arg(short = 't', long = "type", value_name = "TYPE", default_value = "")]
    pub model_type: String,

    /// Hugging Face model name for the project
    #[arg(short, long = "model", value_name = "MODEL", default_value = "")]
    pub model_name: String,

    /// CUDA version for the project
    #[arg(short, long = "cuda", value_name = "VERSION", default_value = "12.5")]
    pub cuda_version: String,

    /// Python version for the project
    #[arg(short, long = "python", value_name = "VERSION", default_value = "3.10")]
    pub python_version: String,

    /// Initialize the project in the current directory instead of creating a new one
    #[arg(short, long)]
    pub init: bool,

    /// Start from a bundled starter template
    #[arg(long, value_name = "NAME", conflicts_with = "select_template")]
    pub template: Option<String>,

    /// Choose a starter template interactively
    #[arg(long)]
    pub select_template: bool,
}

// Dev command
#[derive(Args, Debug)]
pub struct DevArgs {
    /// Choose a new default network volume for the project
    #[arg(long)]
    pub select_volume: bool,

    /// Include the Pod ID as a prefix in log messages from the project Pod
    #[arg(
        long,
        default_value_t = true,
        action = clap::ArgAction::Set,
        num_args = 0..=1,
        default_missing_value = "true",
        value_name = "BOOL"
    )]
    pub prefix_pod_logs: bool,
}

// Deploy command
#[derive(Args, Debug)]
pub struct DeployArgs {}

// Build command
#[derive(Args, Debug)]
pub struct BuildArgs {
    /// Output path for the Dockerfile (default is ./Dockerfile)
    #[arg(short, long)]
    pub output: Option<Utf8PathBuf>,

    /// Suggest a tag for the Docker image
    #[arg(short, long)]
    pub tag: Option<String>,

    /// Incorporate environment variables from the project config into the Dockerfile
    #[arg(long)]
    pub include_env: bool,
}

// Version command
#[derive(Args, Debug)]
pub struct VersionArgs {
    /// Output as JSON
    #[arg(long)]
    pub json: bool,
}

// Completions command
#[derive(Args, Debug)]
pub struct CompletionsArgs {
    /// Shell to generate completions for
    #[arg(value_enum, required_unless_present = "out_dir")]
    pub shell: Option<Shell>,

    /// Write scripts for bash, zsh, fish and powershell into this directory
    #[arg(long, value_name = "DIR", conflicts_with = "shell")]
    pub out_dir: Option<Utf8PathBuf>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    fn parse(args: &[&str]) -> Cli {
        Cli::try_parse_from(args).unwrap()
    }

    #[test]
    fn test_cli_definition_is_valid() {
        Cli::command().debug_assert();
    }

    #[test]
    fn test_create_defaults() {
        let cli = parse(&["airfoil", "create"]);
        match cli.command {
            Commands::Create(args) => {
                assert_eq!(args.name, "hello-world");
                assert_eq!(args.model_type, "");
                assert_eq!(args.model_name, "");
                assert_eq!(args.cuda_version, "12.5");
                assert_eq!(args.python_version, "3.10");
                assert!(!args.init);
                assert!(args.template.is_none());
            }
            other => panic!("unexpected command: {:?}", other),
        }
    }

    #[test]
    fn test_create_short_flags_and_alias() {
        let cli = parse(&[
            "airfoil", "new", "-n", "demo", "-t", "LLM", "-m", "gpt2", "-c", "12.4", "-p", "3.11",
            "-i",
        ]);
        match cli.command {
            Commands::Create(args) => {
                assert_eq!(args.name, "demo");
                assert_eq!(args.model_type, "LLM");
                assert_eq!(args.model_name, "gpt2");
                assert_eq!(args.cuda_version, "12.4");
                assert_eq!(args.python_version, "3.11");
                assert!(args.init);
            }
            other => panic!("unexpected command: {:?}", other),
        }
    }

    #[test]
    fn test_template_flags_conflict() {
        let result = Cli::try_parse_from([
            "airfoil",
            "create",
            "--template",
            "hello_world",
            "--select-template",
        ]);
        assert!(result.is_err());
    }

    #[test]
    fn test_dev_alias_and_prefix_default() {
        let cli = parse(&["airfoil", "start"]);
        match cli.command {
            Commands::Dev(args) => {
                assert!(!args.select_volume);
                assert!(args.prefix_pod_logs);
            }
            other => panic!("unexpected command: {:?}", other),
        }
    }

    #[test]
    fn test_dev_prefix_pod_logs_can_be_disabled() {
        let cli = parse(&["airfoil", "dev", "--prefix-pod-logs=false", "--select-volume"]);
        match cli.command {
            Commands::Dev(args) => {
                assert!(args.select_volume);
                assert!(!args.prefix_pod_logs);
            }
            other => panic!("unexpected command: {:?}", other),
        }
    }

    #[test]
    fn test_build_flags() {
        let cli = parse(&[
            "airfoil",
            "build",
            "-o",
            "out/Dockerfile",
            "-t",
            "demo:1",
            "--include-env",
        ]);
        match cli.command {
            Commands::Build(args) => {
                assert_eq!(
                    args.output.as_deref().map(|p| p.as_str()),
                    Some("out/Dockerfile")
                );
                assert_eq!(args.tag.as_deref(), Some("demo:1"));
                assert!(args.include_env);
            }
            other => panic!("unexpected command: {:?}", other),
        }
    }

    #[test]
    fn test_global_flags_after_subcommand() {
        let cli = parse(&["airfoil", "deploy", "--config", "/tmp/a.yaml", "-vv"]);
        assert_eq!(cli.config.as_deref().map(|p| p.as_str()), Some("/tmp/a.yaml"));
        assert_eq!(cli.verbose, 2);
        assert!(matches!(cli.command, Commands::Deploy(_)));
    }

    #[test]
    fn test_completions_requires_shell_or_dir() {
        assert!(Cli::try_parse_from(["airfoil", "completions"]).is_err());

        let cli = parse(&["airfoil", "completions", "zsh"]);
        assert!(matches!(
            cli.command,
            Commands::Completions(CompletionsArgs { shell: Some(Shell::Zsh), .. })
        ));

        let cli = parse(&["airfoil", "completions", "--out-dir", "completions"]);
        assert!(matches!(
            cli.command,
            Commands::Completions(CompletionsArgs { shell: None, out_dir: Some(_) })
        ));
    }

    #[test]
    fn test_unknown_subcommand_fails() {
        assert!(Cli::try_parse_from(["airfoil", "destroy"]).is_err());
    }
}
