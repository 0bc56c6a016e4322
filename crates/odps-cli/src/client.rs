use std::sync::Arc;

use anyhow::{Context, Result};
use odps_ml::{OnlineModels, RestClient, RestTransport};

use crate::args::Args;
use crate::config::client_config;

pub fn connect(args: &Args) -> Result<OnlineModels> {
    let client = RestClient::new(client_config(args))
        .with_context(|| format!("failed to build rest client for {}", args.endpoint))?;
    let client: Arc<dyn RestTransport> = Arc::new(client);
    Ok(OnlineModels::new(client, args.project.clone()))
}
