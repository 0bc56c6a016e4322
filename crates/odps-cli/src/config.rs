use std::time::Duration;

use anyhow::{bail, Context, Result};
use odps_ml::{AbTestItem, ClientConfig};

use crate::args::Args;

pub fn client_config(args: &Args) -> ClientConfig {
    ClientConfig {
        endpoint: args.endpoint.clone(),
        token: args.token.clone().filter(|t| !t.is_empty()),
        timeout: Duration::from_secs(args.timeout_secs),
    }
}

/// Parse `project/model:pct`.
pub fn parse_ab_target(raw: &str) -> Result<AbTestItem> {
    let (target, pct) = raw
        .rsplit_once(':')
        .with_context(|| format!("missing ':pct' in A/B target '{raw}'"))?;
    let (project, model) = target
        .split_once('/')
        .with_context(|| format!("expected project/model in A/B target '{raw}'"))?;
    let pct: u8 = pct
        .parse()
        .with_context(|| format!("invalid percentage in A/B target '{raw}'"))?;
    if pct > 100 {
        bail!("percentage above 100 in A/B target '{raw}'");
    }
    if project.is_empty() || model.is_empty() {
        bail!("empty project or model in A/B target '{raw}'");
    }
    Ok(AbTestItem {
        project: project.to_string(),
        target_model: model.to_string(),
        pct,
    })
}
