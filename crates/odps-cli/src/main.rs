mod args;
mod client;
mod config;
mod output;

use anyhow::{Context, Result};
use clap::Parser;

use odps_ml::{ModelAbTestConf, ModelAbTestInfo};

use crate::args::{Args, Command, ModelCommand};
use crate::client::connect;
use crate::config::parse_ab_target;
use crate::output::print_model_detail;

fn main() -> Result<()> {
    odps_common::telemetry::init_tracing("odps-ml");

    let args = Args::parse();
    let models = connect(&args)?;

    match args.command {
        Command::Model { subcommand } => match subcommand {
            ModelCommand::Get { name } => {
                let mut model = models.get(&name);
                print_model_detail(&mut model)
                    .with_context(|| format!("failed to get model '{name}'"))?;
            }
            ModelCommand::Status { name } => {
                let mut model = models.get(&name);
                let status = model
                    .status()
                    .with_context(|| format!("failed to get status of '{name}'"))?;
                println!("{status}");
            }
            ModelCommand::Scale { name, instances } => {
                let mut model = models.load(&name)?;
                model
                    .update_instance_num(instances)
                    .with_context(|| format!("failed to scale model '{name}'"))?;
                println!("✓ Model '{}' scaled to {} instances", name, instances);
            }
            ModelCommand::Qos { name, qos } => {
                let mut model = models.load(&name)?;
                model
                    .update_qos(qos)
                    .with_context(|| format!("failed to update QOS of '{name}'"))?;
                println!("✓ Model '{}' QOS set to {}", name, qos);
            }
            ModelCommand::Publish {
                name,
                offline_project,
                offline_name,
            } => {
                let mut model = models.load(&name)?;
                model
                    .update_offline_model(&offline_project, &offline_name)
                    .with_context(|| format!("failed to publish '{name}'"))?;
                println!(
                    "✓ Model '{}' now serves {}/{}",
                    name, offline_project, offline_name
                );
            }
            ModelCommand::Abtest { name, targets } => {
                let items = targets
                    .iter()
                    .map(|t| parse_ab_target(t))
                    .collect::<Result<Vec<_>>>()?;
                let info = ModelAbTestInfo {
                    project: Some(models.project().to_string()),
                    model_name: Some(name.clone()),
                    ab_test: ModelAbTestConf { items },
                };
                let mut model = models.get(&name);
                model
                    .update_ab_test(&info)
                    .with_context(|| format!("failed to update A/B test of '{name}'"))?;
                tracing::info!(model = %name, targets = info.ab_test.items.len(), "A/B test updated");
                println!("✓ Model '{}' A/B test updated", name);
            }
        },
    }

    Ok(())
}
