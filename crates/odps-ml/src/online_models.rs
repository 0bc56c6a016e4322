use std::sync::Arc;

use odps_common::online_model_resource;

use crate::error::{OdpsError, Result};
use crate::online_model::OnlineModel;
use crate::transport::RestTransport;

/// Online models of one project.
#[derive(Clone)]
pub struct OnlineModels {
    client: Arc<dyn RestTransport>,
    project: String,
}

impl OnlineModels {
    pub fn new(client: Arc<dyn RestTransport>, project: impl Into<String>) -> Self {
        Self {
            client,
            project: project.into(),
        }
    }

    pub fn project(&self) -> &str {
        &self.project
    }

    /// Handle to `name`. Nothing is fetched until a field is read.
    pub fn get(&self, name: &str) -> OnlineModel {
        OnlineModel::stub(self.project.clone(), name, Some(self.client.clone()))
    }

    /// Fetch `name` eagerly, failing if it does not exist.
    pub fn load(&self, name: &str) -> Result<OnlineModel> {
        let mut model = self.get(name);
        model.reload()?;
        Ok(model)
    }

    pub fn exists(&self, name: &str) -> Result<bool> {
        match self.client.get(&online_model_resource(&self.project, name)) {
            Ok(_) => Ok(true),
            Err(OdpsError::Remote { status: 404, .. }) => Ok(false),
            Err(e) => Err(e),
        }
    }
}
