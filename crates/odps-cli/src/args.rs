use clap::{Parser, Subcommand};

#[derive(Debug, Parser)]
#[command(name = "odps-ml")]
#[command(about = "Inspect and update ODPS online models", long_about = None)]
pub struct Args {
    /// Service endpoint
    #[arg(long, env = "ODPS_ENDPOINT", default_value = "http://127.0.0.1:8080/api")]
    pub endpoint: String,

    /// API token (Authorization: Bearer)
    #[arg(long, env = "ODPS_TOKEN")]
    pub token: Option<String>,

    /// Request timeout in seconds
    #[arg(long, env = "ODPS_TIMEOUT_SECS", default_value_t = 30)]
    pub timeout_secs: u64,

    /// Project owning the online models
    #[arg(long, short, env = "ODPS_PROJECT")]
    pub project: String,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Debug, Subcommand)]
pub enum Command {
    /// Online model management
    Model {
        #[command(subcommand)]
        subcommand: ModelCommand,
    },
}

#[derive(Debug, Subcommand)]
pub enum ModelCommand {
    /// Show every attribute of an online model
    Get {
        name: String,
    },
    /// Show the current status only
    Status {
        name: String,
    },
    /// Change the number of serving instances
    Scale {
        name: String,
        #[arg(long)]
        instances: i16,
    },
    /// Change the requested QOS
    Qos {
        name: String,
        #[arg(long)]
        qos: i16,
    },
    /// Republish from another offline model
    Publish {
        name: String,
        #[arg(long)]
        offline_project: String,
        #[arg(long)]
        offline_name: String,
    },
    /// Replace the A/B-test traffic split
    Abtest {
        name: String,
        /// Split as project/model:pct (repeatable)
        #[arg(long = "target", required = true)]
        targets: Vec<String>,
    },
}
