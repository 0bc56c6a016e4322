use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Operational state reported by the service for a deployed online model.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "UPPERCASE")]
pub enum OnlineStatus {
    Deploying,
    DeployFailed,
    Serving,
    Running,
    Updating,
    UpdateFailed,
    Deleting,
    DeleteFailed,
}

#[derive(Debug, Clone, Error, PartialEq, Eq)]
#[error("unknown online model status: {0}")]
pub struct UnknownStatus(pub String);

impl OnlineStatus {
    pub fn as_str(self) -> &'static str {
        match self {
            OnlineStatus::Deploying => "DEPLOYING",
            OnlineStatus::DeployFailed => "DEPLOYFAILED",
            OnlineStatus::Serving => "SERVING",
            OnlineStatus::Running => "RUNNING",
            OnlineStatus::Updating => "UPDATING",
            OnlineStatus::UpdateFailed => "UPDATEFAILED",
            OnlineStatus::Deleting => "DELETING",
            OnlineStatus::DeleteFailed => "DELETEFAILED",
        }
    }
}

impl FromStr for OnlineStatus {
    type Err = UnknownStatus;

    /// Case-insensitive; anything outside the closed set is an error, never a default.
    fn from_str(raw: &str) -> Result<Self, Self::Err> {
        match raw.to_ascii_uppercase().as_str() {
            "DEPLOYING" => Ok(OnlineStatus::Deploying),
            "DEPLOYFAILED" => Ok(OnlineStatus::DeployFailed),
            "SERVING" => Ok(OnlineStatus::Serving),
            "RUNNING" => Ok(OnlineStatus::Running),
            "UPDATING" => Ok(OnlineStatus::Updating),
            "UPDATEFAILED" => Ok(OnlineStatus::UpdateFailed),
            "DELETING" => Ok(OnlineStatus::Deleting),
            "DELETEFAILED" => Ok(OnlineStatus::DeleteFailed),
            _ => Err(UnknownStatus(raw.to_string())),
        }
    }
}

impl fmt::Display for OnlineStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
