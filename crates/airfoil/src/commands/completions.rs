//! Shell completions generation

use crate::cli::{Cli, CompletionsArgs};
use anyhow::{Context, Result};
use camino::{Utf8Path, Utf8PathBuf};
use clap::CommandFactory;
use clap_complete::{generate, Shell};
use std::fs::{self, File};
use std::io;

const BIN_NAME: &str = "airfoil";

/// Shells written by `--out-dir`, with their file extensions
const SHELLS: [(Shell, &str); 4] = [
    (Shell::Bash, "bash"),
    (Shell::Zsh, "zsh"),
    (Shell::Fish, "fish"),
    (Shell::PowerShell, "powershell"),
];

pub fn run(args: CompletionsArgs) -> Result<()> {
    if let Some(dir) = &args.out_dir {
        for path in write_all(dir)? {
            crate::output::success(&format!("Wrote {}", path));
        }
        return Ok(());
    }

    if let Some(shell) = args.shell {
        let mut cmd = Cli::command();
        generate(shell, &mut cmd, BIN_NAME, &mut io::stdout());
    }
    Ok(())
}

/// Write `airfoil.<ext>` for every supported shell into `dir`
pub fn write_all(dir: &Utf8Path) -> Result<Vec<Utf8PathBuf>> {
    fs::create_dir_all(dir).with_context(|| format!("Failed to create directory: {}", dir))?;

    let mut written = Vec::with_capacity(SHELLS.len());
    for (shell, ext) in SHELLS {
        let path = dir.join(format!("{}.{}", BIN_NAME, ext));
        let mut file =
            File::create(&path).with_context(|| format!("Failed to create file: {}", path))?;
        let mut cmd = Cli::command();
        generate(shell, &mut cmd, BIN_NAME, &mut file);
        written.push(path);
    }
    Ok(written)
}
