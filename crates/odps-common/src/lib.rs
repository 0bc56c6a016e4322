pub mod ab_test;
pub mod model_resource;
pub mod online_model_desc;
pub mod online_model_info;
pub mod online_status;
pub mod resource;
pub mod timestamp;

pub use ab_test::{AbTestItem, ModelAbTestConf, ModelAbTestInfo};
pub use model_resource::ModelResource;
pub use online_model_desc::OnlineModelDesc;
pub use online_model_info::{OnlineModelInfo, OnlineModelInfoNew, OnlineModelUpdate};
pub use online_status::{OnlineStatus, UnknownStatus};
pub use resource::online_model_resource;

pub mod telemetry;
