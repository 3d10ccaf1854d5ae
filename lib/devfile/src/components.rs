use serde::{Deserialize, Serialize};

#[derive(Clone, Debug, Deserialize, PartialEq, Serialize)]
pub struct Component {
    pub name: String,

    #[serde(flatten)]
    pub kind: ComponentKind,
}

/// Serialized as a single key next to `name`, i.e. `container: {...}` or `volume: {...}`.
#[derive(Clone, Debug, Deserialize, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub enum ComponentKind {
    Container(ContainerComponent),
    Volume(VolumeComponent),
}

impl Component {
    pub fn as_container(&self) -> Option<&ContainerComponent> {
        match &self.kind {
            ComponentKind::Container(container) => Some(container),
            ComponentKind::Volume(_) => None,
        }
    }

    pub fn as_volume(&self) -> Option<&VolumeComponent> {
        match &self.kind {
            ComponentKind::Volume(volume) => Some(volume),
            ComponentKind::Container(_) => None,
        }
    }
}

#[derive(Clone, Debug, Deserialize, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ContainerComponent {
    pub image: String,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub mount_sources: Option<bool>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub source_mapping: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub memory_limit: Option<String>,

    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub env: Vec<EnvVar>,

    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub volume_mounts: Vec<VolumeMount>,

    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub endpoints: Vec<Endpoint>,
}

#[derive(Clone, Debug, Default, Deserialize, PartialEq, Serialize)]
pub struct VolumeComponent {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub size: Option<String>,
}

#[derive(Clone, Debug, Deserialize, PartialEq, Serialize)]
pub struct EnvVar {
    pub name: String,
    pub value: String,
}

impl EnvVar {
    pub fn new(name: impl Into<String>, value: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            value: value.into(),
        }
    }
}

#[derive(Clone, Debug, Deserialize, PartialEq, Serialize)]
pub struct VolumeMount {
    pub name: String,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub path: Option<String>,
}

#[derive(Clone, Debug, Deserialize, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Endpoint {
    pub name: String,

    pub target_port: u16,

    #[serde(default)]
    pub secure: bool,
}
