use serde::{de::DeserializeOwned, Serialize};

use odps_common::ModelResource;

use crate::error::Result;

pub fn marshal<T: Serialize>(value: &T) -> Result<String> {
    Ok(quick_xml::se::to_string(value)?)
}

pub fn unmarshal<T: DeserializeOwned>(xml: &str) -> Result<T> {
    Ok(quick_xml::de::from_str(xml)?)
}

/// Decode an `ApplyRes`/`UsedRes` JSON blob. `None` in, `None` out.
pub fn decode_resource(raw: Option<&str>) -> Result<Option<ModelResource>> {
    match raw {
        None => Ok(None),
        Some(text) if text.trim().is_empty() => Ok(None),
        Some(text) => Ok(Some(ModelResource::from_json(text)?)),
    }
}
