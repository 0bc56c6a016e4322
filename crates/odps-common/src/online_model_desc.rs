use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::timestamp::gmt_option;

/// Local snapshot of an online model's server-side attributes.
///
/// Returned by `GET /projects/{project}/onlinemodels/{name}` as an `<Onlinemodel>`
/// document. A listing or lookup only fills `project` and `model_name`; every
/// other field stays `None` until the first full fetch.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
#[serde(rename = "Onlinemodel")]
pub struct OnlineModelDesc {
    #[serde(rename = "Project", default, skip_serializing_if = "Option::is_none")]
    pub project: Option<String>,

    #[serde(rename = "Name", default, skip_serializing_if = "Option::is_none")]
    pub model_name: Option<String>,

    #[serde(rename = "Version", default, skip_serializing_if = "Option::is_none")]
    pub version: Option<String>,

    #[serde(rename = "Owner", default, skip_serializing_if = "Option::is_none")]
    pub owner: Option<String>,

    #[serde(
        rename = "CreateTime",
        default,
        with = "gmt_option",
        skip_serializing_if = "Option::is_none"
    )]
    pub create_time: Option<DateTime<Utc>>,

    #[serde(
        rename = "LastModifiedTime",
        default,
        with = "gmt_option",
        skip_serializing_if = "Option::is_none"
    )]
    pub last_modified_time: Option<DateTime<Utc>>,

    /// Project of the offline model this online model was published from.
    #[serde(rename = "OfflinemodelProject", default, skip_serializing_if = "Option::is_none")]
    pub offline_model_project: Option<String>,

    #[serde(rename = "OfflinemodelName", default, skip_serializing_if = "Option::is_none")]
    pub offline_model_name: Option<String>,

    #[serde(rename = "OfflinemodelId", default, skip_serializing_if = "Option::is_none")]
    pub offline_model_id: Option<String>,

    /// Requested resources, a JSON document (see `ModelResource`).
    #[serde(rename = "ApplyRes", default, skip_serializing_if = "Option::is_none")]
    pub apply_res: Option<String>,

    /// Resources currently in use, a JSON document (see `ModelResource`).
    #[serde(rename = "UsedRes", default, skip_serializing_if = "Option::is_none")]
    pub used_res: Option<String>,

    #[serde(rename = "QOS", default, skip_serializing_if = "Option::is_none")]
    pub apply_qos: Option<i16>,

    #[serde(rename = "InstanceNum", default, skip_serializing_if = "Option::is_none")]
    pub instance_num: Option<i16>,

    /// Raw status token; parse with `OnlineStatus::from_str`.
    #[serde(rename = "Status", default, skip_serializing_if = "Option::is_none")]
    pub status: Option<String>,

    #[serde(rename = "ServiceTag", default, skip_serializing_if = "Option::is_none")]
    pub service_tag: Option<String>,

    #[serde(rename = "ServiceName", default, skip_serializing_if = "Option::is_none")]
    pub service_name: Option<String>,

    #[serde(rename = "LastFailMsg", default, skip_serializing_if = "Option::is_none")]
    pub last_fail_msg: Option<String>,

    /// Prediction pipeline description.
    #[serde(rename = "PredictDesc", default, skip_serializing_if = "Option::is_none")]
    pub predict_desc: Option<String>,

    #[serde(rename = "ABTest", default, skip_serializing_if = "Option::is_none")]
    pub ab_test: Option<String>,

    /// Runtime status string.
    #[serde(rename = "Runtime", default, skip_serializing_if = "Option::is_none")]
    pub runtime: Option<String>,
}

impl OnlineModelDesc {
    /// Identity-only descriptor, as produced by a listing.
    pub fn stub(project: impl Into<String>, model_name: impl Into<String>) -> Self {
        Self {
            project: Some(project.into()),
            model_name: Some(model_name.into()),
            ..Default::default()
        }
    }
}
