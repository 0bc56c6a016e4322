use serde::{Deserialize, Serialize};

/// One traffic split: `pct` percent of requests go to `target_model` in `project`.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct AbTestItem {
    #[serde(rename = "Project")]
    pub project: String,

    #[serde(rename = "TargetModel")]
    pub target_model: String,

    #[serde(rename = "Pct")]
    pub pct: u8,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct ModelAbTestConf {
    #[serde(rename = "Item", default)]
    pub items: Vec<AbTestItem>,
}

/// A/B-test write payload. The service keeps this server side only.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename = "Onlinemodel")]
pub struct ModelAbTestInfo {
    #[serde(rename = "Project", default, skip_serializing_if = "Option::is_none")]
    pub project: Option<String>,

    #[serde(rename = "Name", default, skip_serializing_if = "Option::is_none")]
    pub model_name: Option<String>,

    #[serde(rename = "ABTest")]
    pub ab_test: ModelAbTestConf,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_items_serialize_as_repeated_elements() {
        let info = ModelAbTestInfo {
            project: Some("prj".into()),
            model_name: Some("m".into()),
            ab_test: ModelAbTestConf {
                items: vec![
                    AbTestItem {
                        project: "prj".into(),
                        target_model: "m_v2".into(),
                        pct: 20,
                    },
                    AbTestItem {
                        project: "prj".into(),
                        target_model: "m_v3".into(),
                        pct: 10,
                    },
                ],
            },
        };
        let xml = quick_xml::se::to_string(&info).unwrap();
        assert!(xml.starts_with("<Onlinemodel><Project>prj</Project><Name>m</Name><ABTest>"));
        assert_eq!(xml.matches("<Item>").count(), 2);
        assert!(xml.contains("<TargetModel>m_v2</TargetModel><Pct>20</Pct>"));
    }
}
