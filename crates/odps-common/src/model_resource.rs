use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

/// Resource quantities of an online model, carried as a JSON string inside the
/// `ApplyRes` / `UsedRes` elements of the descriptor.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct ModelResource {
    /// CPU quota in hundredths of a core.
    #[serde(rename = "CPU", default, skip_serializing_if = "Option::is_none")]
    pub cpu: Option<i64>,

    /// Memory quota in MB.
    #[serde(rename = "Memory", default, skip_serializing_if = "Option::is_none")]
    pub memory: Option<i64>,

    #[serde(rename = "GPU", default, skip_serializing_if = "Option::is_none")]
    pub gpu: Option<i64>,

    /// Any other resource names the service reports, kept verbatim.
    #[serde(flatten)]
    pub other: BTreeMap<String, serde_json::Value>,
}

impl ModelResource {
    /// serde_json writes `<`, `>` and `&` literally, so values round-trip unescaped.
    pub fn from_json(raw: &str) -> serde_json::Result<Self> {
        serde_json::from_str(raw)
    }

    pub fn to_json(&self) -> serde_json::Result<String> {
        serde_json::to_string(self)
    }
}
