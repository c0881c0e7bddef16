//! Dev command

use airfoil_api::QueryClient;
use airfoil_core::AirfoilConfig;
use anyhow::Result;
use tracing::debug;

use crate::cli::DevArgs;
use crate::{output, prompts, utils};

/// Run a dev session; `config` is the result of loading the config file
pub async fn run(args: DevArgs, config: Result<AirfoilConfig>) -> Result<()> {
    println!("Starting a development session...");
    debug!(prefix_pod_logs = args.prefix_pod_logs, "dev session options");

    if !args.select_volume {
        utils::warn_on_config_error(&config);
        return Ok(());
    }

    let config = config?;
    let client = QueryClient::new(utils::resolve_credentials(&config))?;

    let volume = prompts::select_network_volume(&client).await?;
    output::success(&format!("Selected network volume {}", volume.name));
    output::kv("ID", &volume.id);
    output::kv("Data center", &volume.data_center_id);

    Ok(())
}
