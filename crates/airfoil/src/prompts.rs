//! Interactive selection prompts

use airfoil_api::{NetworkVolume, QueryClient};
use airfoil_projects::{Error as ProjectError, TemplateStore};
use anyhow::{Context, Result};
use dialoguer::Select;
use tracing::debug;

use crate::output;

/// Ask the user to pick one of `labels`
///
/// An empty list or an aborted prompt is a cancellation.
pub fn select_option(prompt: &str, labels: &[String]) -> Result<usize> {
    if labels.is_empty() {
        debug!("Nothing to select for '{}'", prompt);
        return Err(ProjectError::Cancelled.into());
    }

    let selection = Select::new()
        .with_prompt(prompt)
        .items(labels)
        .default(0)
        .interact_opt()
        .context("Selection prompt failed")?;

    selection.ok_or_else(|| ProjectError::Cancelled.into())
}

/// Labels for starter templates, with underscores shown as spaces
pub fn template_labels(names: &[String]) -> Vec<String> {
    names.iter().map(|n| n.replace('_', " ")).collect()
}

/// Let the user choose a starter template
pub fn select_starter_template(store: &dyn TemplateStore) -> Result<String> {
    let names = store.list_templates();
    let index = select_option("Select a starter template", &template_labels(&names))?;
    Ok(names[index].clone())
}

/// Fetch the account's network volumes and let the user choose one
pub async fn select_network_volume(client: &QueryClient) -> Result<NetworkVolume> {
    let spinner = output::spinner("Fetching network volumes...");
    let volumes = client.get_network_volumes().await;
    spinner.finish_and_clear();

    let mut volumes = volumes.context("Failed to fetch network volumes")?;
    if volumes.is_empty() {
        output::warning("No network volumes found for this account");
    }

    let labels: Vec<String> = volumes.iter().map(NetworkVolume::label).collect();
    let index = select_option("Select a network volume", &labels)?;
    Ok(volumes.swap_remove(index))
}
