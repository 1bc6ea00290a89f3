use anyhow::{Context, Result};
use durable_viewer_client::ListingClient;
use durable_viewer_core::{Credentials, ViewerConfig};

pub(crate) async fn run_namespaces(config: &ViewerConfig, creds: &Credentials) -> Result<()> {
    let client = ListingClient::new(config)?;
    let namespaces = client
        .fetch_all_namespaces(creds)
        .await
        .context("Failed to fetch namespaces")?;
    println!("{}", serde_json::to_string_pretty(&namespaces)?);
    Ok(())
}

pub(crate) async fn run_objects(
    config: &ViewerConfig,
    creds: &Credentials,
    namespace_id: &str,
) -> Result<()> {
    let client = ListingClient::new(config)?;
    let objects = client
        .list_objects(creds, namespace_id)
        .await
        .with_context(|| format!("Failed to fetch objects for namespace {namespace_id}"))?;
    println!("{}", serde_json::to_string_pretty(&objects)?);
    Ok(())
}
