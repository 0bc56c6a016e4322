use std::sync::Arc;

use chrono::{DateTime, Utc};
use serde::Serialize;

use odps_common::{
    online_model_resource, ModelAbTestInfo, ModelResource, OnlineModelDesc, OnlineModelInfo,
    OnlineModelUpdate, OnlineStatus,
};

use crate::codec;
use crate::error::{OdpsError, Result};
use crate::transport::{Method, RestTransport, CONTENT_TYPE};

const XML_CONTENT: &str = "application/xml";

/// How a descriptor field accessor decides whether to fetch from the service.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LoadPolicy {
    /// Always known locally; never loads.
    Identity,
    /// Reload only when the cached value is absent and a transport is attached.
    PresenceGated,
    /// Reload before every read. Fails when no transport is attached.
    AlwaysReload,
}

/// Every field of [`OnlineModelDesc`], keyed to its [`LoadPolicy`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum DescField {
    Project,
    ModelName,
    Version,
    Owner,
    CreateTime,
    LastModifiedTime,
    OfflineModelProject,
    OfflineModelName,
    OfflineModelId,
    ApplyRes,
    UsedRes,
    ApplyQos,
    InstanceNum,
    Status,
    ServiceTag,
    ServiceName,
    LastFailMsg,
    PredictDesc,
    AbTest,
    Runtime,
}

impl DescField {
    pub const ALL: [DescField; 20] = [
        DescField::Project,
        DescField::ModelName,
        DescField::Version,
        DescField::Owner,
        DescField::CreateTime,
        DescField::LastModifiedTime,
        DescField::OfflineModelProject,
        DescField::OfflineModelName,
        DescField::OfflineModelId,
        DescField::ApplyRes,
        DescField::UsedRes,
        DescField::ApplyQos,
        DescField::InstanceNum,
        DescField::Status,
        DescField::ServiceTag,
        DescField::ServiceName,
        DescField::LastFailMsg,
        DescField::PredictDesc,
        DescField::AbTest,
        DescField::Runtime,
    ];

    pub const fn policy(self) -> LoadPolicy {
        match self {
            DescField::Project | DescField::ModelName => LoadPolicy::Identity,

            // Set at creation and rarely touched afterwards.
            DescField::Owner
            | DescField::CreateTime
            | DescField::LastModifiedTime
            | DescField::Version
            | DescField::UsedRes
            | DescField::ApplyRes
            | DescField::LastFailMsg => LoadPolicy::PresenceGated,

            // Live deployment state.
            DescField::OfflineModelProject
            | DescField::OfflineModelName
            | DescField::OfflineModelId
            | DescField::InstanceNum
            | DescField::Status
            | DescField::ApplyQos
            | DescField::ServiceTag
            | DescField::ServiceName
            | DescField::AbTest
            | DescField::PredictDesc
            | DescField::Runtime => LoadPolicy::AlwaysReload,
        }
    }

    /// Whether `desc` holds a usable value for this field. Empty strings count as absent.
    pub fn is_present(self, desc: &OnlineModelDesc) -> bool {
        fn text(v: &Option<String>) -> bool {
            v.as_deref().is_some_and(|s| !s.is_empty())
        }

        match self {
            DescField::Project => text(&desc.project),
            DescField::ModelName => text(&desc.model_name),
            DescField::Version => text(&desc.version),
            DescField::Owner => text(&desc.owner),
            DescField::CreateTime => desc.create_time.is_some(),
            DescField::LastModifiedTime => desc.last_modified_time.is_some(),
            DescField::OfflineModelProject => text(&desc.offline_model_project),
            DescField::OfflineModelName => text(&desc.offline_model_name),
            DescField::OfflineModelId => text(&desc.offline_model_id),
            DescField::ApplyRes => text(&desc.apply_res),
            DescField::UsedRes => text(&desc.used_res),
            DescField::ApplyQos => desc.apply_qos.is_some(),
            DescField::InstanceNum => desc.instance_num.is_some(),
            DescField::Status => text(&desc.status),
            DescField::ServiceTag => text(&desc.service_tag),
            DescField::ServiceName => text(&desc.service_name),
            DescField::LastFailMsg => text(&desc.last_fail_msg),
            DescField::PredictDesc => text(&desc.predict_desc),
            DescField::AbTest => text(&desc.ab_test),
            DescField::Runtime => text(&desc.runtime),
        }
    }
}

/// A deployed online model, addressed by project and name.
///
/// Reads go through the [`DescField::policy`] table: some fields are served from
/// the cached descriptor once present, the live ones trigger a full reload on
/// every call. Updates issue exactly one PUT and then copy the values they sent
/// into the cached descriptor; the service is not re-read.
///
/// The type is blocking and holds no locks. Accessors that may reload take
/// `&mut self`; callers sharing one instance across threads must wrap it in
/// their own `Mutex`.
pub struct OnlineModel {
    project: String,
    name: String,
    desc: OnlineModelDesc,
    client: Option<Arc<dyn RestTransport>>,
}

impl std::fmt::Debug for OnlineModel {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("OnlineModel")
            .field("project", &self.project)
            .field("name", &self.name)
            .field("desc", &self.desc)
            .field("attached", &self.client.is_some())
            .finish()
    }
}

impl OnlineModel {
    /// Wrap a descriptor. Project and name must be set; they become the
    /// immutable address of the model.
    pub fn new(desc: OnlineModelDesc, client: Option<Arc<dyn RestTransport>>) -> Result<Self> {
        let project = desc
            .project
            .clone()
            .filter(|p| !p.is_empty())
            .ok_or(OdpsError::InvalidArgument("project"))?;
        let name = desc
            .model_name
            .clone()
            .filter(|n| !n.is_empty())
            .ok_or(OdpsError::InvalidArgument("model name"))?;
        Ok(Self {
            project,
            name,
            desc,
            client,
        })
    }

    /// Identity-only model; everything else loads on demand.
    pub fn stub(
        project: impl Into<String>,
        name: impl Into<String>,
        client: Option<Arc<dyn RestTransport>>,
    ) -> Self {
        let project = project.into();
        let name = name.into();
        Self {
            desc: OnlineModelDesc::stub(project.clone(), name.clone()),
            project,
            name,
            client,
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn project(&self) -> &str {
        &self.project
    }

    #[deprecated(note = "online models carry no comment")]
    pub fn comment(&self) -> Option<&str> {
        None
    }

    pub fn is_attached(&self) -> bool {
        self.client.is_some()
    }

    /// The cached descriptor as it stands, without any network access.
    pub fn cached(&self) -> &OnlineModelDesc {
        &self.desc
    }

    pub fn resource(&self) -> String {
        online_model_resource(&self.project, &self.name)
    }

    /// Replace the cached descriptor with a fresh GET of the model.
    pub fn reload(&mut self) -> Result<()> {
        let client = self.transport()?;
        let resource = self.resource();
        tracing::debug!(resource = %resource, "reloading online model");

        let body = client.get(&resource)?;
        let mut desc: OnlineModelDesc = codec::unmarshal(&body)?;
        desc.project = Some(self.project.clone());
        desc.model_name = Some(self.name.clone());
        self.desc = desc;
        Ok(())
    }

    fn ensure(&mut self, field: DescField) -> Result<()> {
        match field.policy() {
            LoadPolicy::Identity => Ok(()),
            LoadPolicy::PresenceGated => {
                if !field.is_present(&self.desc) && self.client.is_some() {
                    self.reload()?;
                }
                Ok(())
            }
            LoadPolicy::AlwaysReload => self.reload(),
        }
    }

    fn transport(&self) -> Result<Arc<dyn RestTransport>> {
        self.client
            .clone()
            .ok_or_else(|| OdpsError::NotConnected(format!("{}.{}", self.project, self.name)))
    }

    // ── presence-gated ──────────────────────────────────────────────

    pub fn owner(&mut self) -> Result<Option<&str>> {
        self.ensure(DescField::Owner)?;
        Ok(self.desc.owner.as_deref())
    }

    pub fn created_time(&mut self) -> Result<Option<DateTime<Utc>>> {
        self.ensure(DescField::CreateTime)?;
        Ok(self.desc.create_time)
    }

    pub fn last_modified_time(&mut self) -> Result<Option<DateTime<Utc>>> {
        self.ensure(DescField::LastModifiedTime)?;
        Ok(self.desc.last_modified_time)
    }

    pub fn version(&mut self) -> Result<Option<&str>> {
        self.ensure(DescField::Version)?;
        Ok(self.desc.version.as_deref())
    }

    pub fn used_resource(&mut self) -> Result<Option<ModelResource>> {
        self.ensure(DescField::UsedRes)?;
        codec::decode_resource(self.desc.used_res.as_deref())
    }

    pub fn apply_resource(&mut self) -> Result<Option<ModelResource>> {
        self.ensure(DescField::ApplyRes)?;
        codec::decode_resource(self.desc.apply_res.as_deref())
    }

    pub fn last_fail_msg(&mut self) -> Result<Option<&str>> {
        self.ensure(DescField::LastFailMsg)?;
        Ok(self.desc.last_fail_msg.as_deref())
    }

    // ── always reloaded ─────────────────────────────────────────────

    pub fn offline_model_project(&mut self) -> Result<Option<&str>> {
        self.ensure(DescField::OfflineModelProject)?;
        Ok(self.desc.offline_model_project.as_deref())
    }

    pub fn offline_model_name(&mut self) -> Result<Option<&str>> {
        self.ensure(DescField::OfflineModelName)?;
        Ok(self.desc.offline_model_name.as_deref())
    }

    pub fn offline_model_id(&mut self) -> Result<Option<&str>> {
        self.ensure(DescField::OfflineModelId)?;
        Ok(self.desc.offline_model_id.as_deref())
    }

    pub fn instance_num(&mut self) -> Result<Option<i16>> {
        self.ensure(DescField::InstanceNum)?;
        Ok(self.desc.instance_num)
    }

    /// Current status. A missing or unrecognized token is an error.
    pub fn status(&mut self) -> Result<OnlineStatus> {
        self.ensure(DescField::Status)?;
        let raw = self.desc.status.as_deref().unwrap_or_default();
        Ok(raw.parse::<OnlineStatus>()?)
    }

    pub fn apply_qos(&mut self) -> Result<Option<i16>> {
        self.ensure(DescField::ApplyQos)?;
        Ok(self.desc.apply_qos)
    }

    #[deprecated(note = "use apply_qos")]
    pub fn apply_qps(&mut self) -> Result<Option<i16>> {
        self.apply_qos()
    }

    pub fn service_tag(&mut self) -> Result<Option<&str>> {
        self.ensure(DescField::ServiceTag)?;
        Ok(self.desc.service_tag.as_deref())
    }

    pub fn service_name(&mut self) -> Result<Option<&str>> {
        self.ensure(DescField::ServiceName)?;
        Ok(self.desc.service_name.as_deref())
    }

    pub fn ab_test(&mut self) -> Result<Option<&str>> {
        self.ensure(DescField::AbTest)?;
        Ok(self.desc.ab_test.as_deref())
    }

    /// Prediction pipeline description.
    pub fn predict_desc(&mut self) -> Result<Option<&str>> {
        self.ensure(DescField::PredictDesc)?;
        Ok(self.desc.predict_desc.as_deref())
    }

    pub fn runtime(&mut self) -> Result<Option<&str>> {
        self.ensure(DescField::Runtime)?;
        Ok(self.desc.runtime.as_deref())
    }

    // ── updates ─────────────────────────────────────────────────────

    /// Change QOS, keeping the cached provenance and instance count.
    pub fn update_qos(&mut self, qos: i16) -> Result<()> {
        let info = provenance_update(
            self.desc.offline_model_project.as_deref(),
            self.desc.offline_model_name.as_deref(),
            Some(qos),
            self.desc.instance_num,
        )?;
        self.write_update(OnlineModelUpdate::Legacy(info))
    }

    /// Change the instance count, keeping the cached provenance and QOS.
    pub fn update_instance_num(&mut self, instance_num: i16) -> Result<()> {
        let info = provenance_update(
            self.desc.offline_model_project.as_deref(),
            self.desc.offline_model_name.as_deref(),
            self.desc.apply_qos,
            Some(instance_num),
        )?;
        self.write_update(OnlineModelUpdate::Legacy(info))
    }

    /// Republish from another offline model, keeping the cached QOS and instance count.
    pub fn update_offline_model(&mut self, offline_project: &str, offline_name: &str) -> Result<()> {
        let info = provenance_update(
            Some(offline_project),
            Some(offline_name),
            self.desc.apply_qos,
            self.desc.instance_num,
        )?;
        self.write_update(OnlineModelUpdate::Legacy(info))
    }

    pub fn update_with(
        &mut self,
        offline_project: &str,
        offline_name: &str,
        qos: i16,
        instance_num: i16,
    ) -> Result<()> {
        let info = provenance_update(
            Some(offline_project),
            Some(offline_name),
            Some(qos),
            Some(instance_num),
        )?;
        self.write_update(OnlineModelUpdate::Legacy(info))
    }

    /// Send a caller-built request as is, in either schema.
    pub fn update(&mut self, update: impl Into<OnlineModelUpdate>) -> Result<()> {
        self.write_update(update.into())
    }

    /// Replace the A/B-test configuration. Nothing is cached locally;
    /// [`OnlineModel::ab_test`] always reads it back from the service.
    pub fn update_ab_test(&mut self, info: &ModelAbTestInfo) -> Result<()> {
        self.put(info)
    }

    /// PUT the request, then reflect the fields it carried into the cache.
    /// Fields the request leaves unset keep their cached value.
    fn write_update(&mut self, update: OnlineModelUpdate) -> Result<()> {
        match &update {
            OnlineModelUpdate::Legacy(info) => self.put(info)?,
            OnlineModelUpdate::Current(info) => self.put(info)?,
        }

        if let Some((project, name)) = update.provenance() {
            if let Some(project) = project {
                self.desc.offline_model_project = Some(project.to_string());
            }
            if let Some(name) = name {
                self.desc.offline_model_name = Some(name.to_string());
            }
        }
        if let Some(qos) = update.qos() {
            self.desc.apply_qos = Some(qos);
        }
        if let Some(n) = update.instance_num() {
            self.desc.instance_num = Some(n);
        }
        Ok(())
    }

    /// Marshal `payload` and PUT it. Nothing is sent if marshalling fails.
    fn put<T: Serialize>(&self, payload: &T) -> Result<()> {
        let body = codec::marshal(payload)?;
        let client = self.transport()?;
        let resource = self.resource();
        tracing::debug!(resource = %resource, bytes = body.len(), "updating online model");
        client.request(&resource, Method::Put, &[(CONTENT_TYPE, XML_CONTENT)], body)
    }
}

fn provenance_update(
    offline_project: Option<&str>,
    offline_name: Option<&str>,
    qos: Option<i16>,
    instance_num: Option<i16>,
) -> Result<OnlineModelInfo> {
    let offline_project = offline_project
        .filter(|p| !p.is_empty())
        .ok_or(OdpsError::InvalidArgument("offline model project"))?;
    let offline_name = offline_name
        .filter(|n| !n.is_empty())
        .ok_or(OdpsError::InvalidArgument("offline model name"))?;

    Ok(OnlineModelInfo {
        offline_project: Some(offline_project.to_string()),
        offline_model_name: Some(offline_name.to_string()),
        qos,
        instance_num,
        ..Default::default()
    })
}
