//! Deploy command

use anyhow::Result;

use crate::cli::DeployArgs;

pub fn run(_args: DeployArgs) -> Result<()> {
    println!("Deploying project...");
    Ok(())
}
