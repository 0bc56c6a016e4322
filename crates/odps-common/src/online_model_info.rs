use serde::{Deserialize, Serialize};

/// Update body in the older request schema, carrying offline-model provenance.
///
/// `Project`/`Name` are optional because the target is already addressed by the
/// request path.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename = "Onlinemodel")]
pub struct OnlineModelInfo {
    #[serde(rename = "Project", default, skip_serializing_if = "Option::is_none")]
    pub project: Option<String>,

    #[serde(rename = "Name", default, skip_serializing_if = "Option::is_none")]
    pub model_name: Option<String>,

    #[serde(rename = "OfflinemodelProject", default, skip_serializing_if = "Option::is_none")]
    pub offline_project: Option<String>,

    #[serde(rename = "OfflinemodelName", default, skip_serializing_if = "Option::is_none")]
    pub offline_model_name: Option<String>,

    #[serde(rename = "OfflinemodelId", default, skip_serializing_if = "Option::is_none")]
    pub offline_model_id: Option<String>,

    #[serde(rename = "QOS", default, skip_serializing_if = "Option::is_none")]
    pub qos: Option<i16>,

    #[serde(rename = "InstanceNum", default, skip_serializing_if = "Option::is_none")]
    pub instance_num: Option<i16>,
}

/// Update body in the newer request schema: scaling only, no provenance.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename = "Onlinemodel")]
pub struct OnlineModelInfoNew {
    #[serde(rename = "Project", default, skip_serializing_if = "Option::is_none")]
    pub project: Option<String>,

    #[serde(rename = "Name", default, skip_serializing_if = "Option::is_none")]
    pub model_name: Option<String>,

    #[serde(rename = "QOS", default, skip_serializing_if = "Option::is_none")]
    pub qos: Option<i16>,

    #[serde(rename = "InstanceNum", default, skip_serializing_if = "Option::is_none")]
    pub instance_num: Option<i16>,
}

/// A structured update in either accepted schema.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum OnlineModelUpdate {
    Legacy(OnlineModelInfo),
    Current(OnlineModelInfoNew),
}

impl OnlineModelUpdate {
    pub fn qos(&self) -> Option<i16> {
        match self {
            OnlineModelUpdate::Legacy(info) => info.qos,
            OnlineModelUpdate::Current(info) => info.qos,
        }
    }

    pub fn instance_num(&self) -> Option<i16> {
        match self {
            OnlineModelUpdate::Legacy(info) => info.instance_num,
            OnlineModelUpdate::Current(info) => info.instance_num,
        }
    }

    /// Offline project and name, present only in the legacy schema.
    pub fn provenance(&self) -> Option<(Option<&str>, Option<&str>)> {
        match self {
            OnlineModelUpdate::Legacy(info) => Some((
                info.offline_project.as_deref(),
                info.offline_model_name.as_deref(),
            )),
            OnlineModelUpdate::Current(_) => None,
        }
    }
}

impl From<OnlineModelInfo> for OnlineModelUpdate {
    fn from(info: OnlineModelInfo) -> Self {
        OnlineModelUpdate::Legacy(info)
    }
}

impl From<OnlineModelInfoNew> for OnlineModelUpdate {
    fn from(info: OnlineModelInfoNew) -> Self {
        OnlineModelUpdate::Current(info)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_legacy_body() {
        let info = OnlineModelInfo {
            offline_project: Some("prj".into()),
            offline_model_name: Some("lr".into()),
            qos: Some(200),
            instance_num: Some(3),
            ..Default::default()
        };
        let xml = quick_xml::se::to_string(&info).unwrap();
        assert_eq!(
            xml,
            "<Onlinemodel><OfflinemodelProject>prj</OfflinemodelProject>\
             <OfflinemodelName>lr</OfflinemodelName><QOS>200</QOS>\
             <InstanceNum>3</InstanceNum></Onlinemodel>"
        );
    }

    #[test]
    fn test_current_body_has_no_provenance() {
        let info = OnlineModelInfoNew {
            qos: Some(50),
            instance_num: Some(1),
            ..Default::default()
        };
        let xml = quick_xml::se::to_string(&info).unwrap();
        assert!(!xml.contains("Offlinemodel"));
        assert!(xml.contains("<QOS>50</QOS>"));

        let update = OnlineModelUpdate::from(info);
        assert_eq!(update.provenance(), None);
        assert_eq!(update.qos(), Some(50));
    }
}
