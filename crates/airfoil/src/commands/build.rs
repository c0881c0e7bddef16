//! Build command

use anyhow::Result;
use tracing::debug;

use crate::cli::BuildArgs;

pub fn run(args: BuildArgs) -> Result<()> {
    println!("Building Dockerfile...");
    debug!(
        output = args.output.as_ref().map(|p| p.as_str()).unwrap_or("./Dockerfile"),
        tag = args.tag.as_deref().unwrap_or(""),
        include_env = args.include_env,
        "build options"
    );
    Ok(())
}
