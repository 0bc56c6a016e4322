//! Client-side access to ODPS online models.
//!
//! [`OnlineModel`] is a lazily loaded proxy over one remote online model;
//! [`OnlineModels`] looks models up by name inside a project.

pub mod codec;
pub mod error;
pub mod online_model;
pub mod online_models;
pub mod transport;

pub use error::{OdpsError, Result};
pub use online_model::{DescField, LoadPolicy, OnlineModel};
pub use online_models::OnlineModels;
pub use transport::{ClientConfig, Method, RestClient, RestTransport, CONTENT_TYPE};

pub use odps_common::{
    AbTestItem, ModelAbTestConf, ModelAbTestInfo, ModelResource, OnlineModelDesc,
    OnlineModelInfo, OnlineModelInfoNew, OnlineModelUpdate, OnlineStatus,
};
