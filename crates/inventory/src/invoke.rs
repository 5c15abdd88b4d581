//! Direct invocation of a single handler.
//!
//! Reads one gateway envelope as JSON and prints the handler's response. This
//! is the only entry point where top-level envelope fields reach a handler.

use std::path::Path;

use anyhow::{Context, Result};
use tokio::io::AsyncReadExt;

use inventory_core::gateway::{GatewayRequest, GatewayResponse};
use inventory_core::storage::InventoryRepository;

use crate::handlers::{dispatch, HandlerName};
use crate::state::AppState;

/// Run `handler` against the envelope in `event`, or on stdin when absent.
pub async fn run(handler: HandlerName, event: Option<&Path>, state: &AppState) -> Result<()> {
    let raw = match event {
        Some(path) => tokio::fs::read_to_string(path)
            .await
            .with_context(|| format!("failed to read event file {}", path.display()))?,
        None => {
            let mut raw = String::new();
            tokio::io::stdin()
                .read_to_string(&mut raw)
                .await
                .context("failed to read event from stdin")?;
            raw
        }
    };

    let response = invoke(handler, state.repo.as_ref(), &raw).await?;
    println!("{}", serde_json::to_string(&response)?);

    Ok(())
}

/// Parse `raw` as an envelope and run `handler` against it.
pub async fn invoke(
    handler: HandlerName,
    repo: &dyn InventoryRepository,
    raw: &str,
) -> Result<GatewayResponse> {
    let request = parse_event(raw)?;
    Ok(dispatch(handler, repo, &request).await)
}

/// An empty input is an empty envelope.
fn parse_event(raw: &str) -> Result<GatewayRequest> {
    if raw.trim().is_empty() {
        return Ok(GatewayRequest::new());
    }
    serde_json::from_str(raw).context("event is not a valid gateway request")
}
