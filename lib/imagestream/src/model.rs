use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

#[derive(Clone, Debug, Default, Deserialize, PartialEq, Serialize)]
pub struct ObjectMeta {
    pub name: String,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub namespace: Option<String>,
}

#[derive(Clone, Debug, Deserialize, PartialEq, Serialize)]
pub struct ImageStream {
    pub metadata: ObjectMeta,

    #[serde(default)]
    pub spec: ImageStreamSpec,

    #[serde(default)]
    pub status: ImageStreamStatus,
}

#[derive(Clone, Debug, Default, Deserialize, PartialEq, Serialize)]
pub struct ImageStreamSpec {
    #[serde(default)]
    pub tags: Vec<TagReference>,
}

#[derive(Clone, Debug, Deserialize, PartialEq, Serialize)]
pub struct TagReference {
    pub name: String,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub from: Option<ObjectReference>,
}

#[derive(Clone, Debug, Deserialize, PartialEq, Serialize)]
pub struct ObjectReference {
    #[serde(default)]
    pub kind: String,

    pub name: String,
}

#[derive(Clone, Debug, Default, Deserialize, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ImageStreamStatus {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub docker_image_repository: Option<String>,

    #[serde(default)]
    pub tags: Vec<NamedTagEventList>,
}

/// History of images a tag pointed at, newest first.
#[derive(Clone, Debug, Deserialize, PartialEq, Serialize)]
pub struct NamedTagEventList {
    pub tag: String,

    #[serde(default)]
    pub items: Vec<TagEvent>,
}

#[derive(Clone, Debug, Deserialize, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct TagEvent {
    #[serde(default)]
    pub docker_image_reference: String,

    /// Digest of the image, e.g. `sha256:...`
    pub image: String,
}

impl ImageStream {
    pub fn namespace(&self) -> &str {
        self.metadata.namespace.as_deref().unwrap_or_default()
    }

    pub fn has_tag(&self, tag: &str) -> bool {
        self.spec.tags.iter().any(|t| t.name == tag) || self.status.tags.iter().any(|t| t.tag == tag)
    }

    /// Most recent image event recorded for `tag`.
    pub fn latest_image(&self, tag: &str) -> Option<&TagEvent> {
        self.status
            .tags
            .iter()
            .find(|t| t.tag == tag)
            .and_then(|t| t.items.first())
    }
}

#[derive(Clone, Debug, Deserialize, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Image {
    /// The name of an image is its digest.
    pub metadata: ObjectMeta,

    #[serde(default)]
    pub docker_image_reference: String,

    #[serde(default)]
    pub docker_image_metadata: DockerImageMetadata,
}

#[derive(Clone, Debug, Default, Deserialize, PartialEq, Serialize)]
pub struct DockerImageMetadata {
    #[serde(rename = "Config", default, skip_serializing_if = "Option::is_none")]
    pub config: Option<DockerConfig>,
}

#[derive(Clone, Debug, Default, Deserialize, PartialEq, Serialize)]
#[serde(rename_all = "PascalCase")]
pub struct DockerConfig {
    #[serde(default)]
    pub labels: BTreeMap<String, String>,

    /// `NAME=value` entries as baked into the image.
    #[serde(default)]
    pub env: Vec<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub working_dir: Option<String>,
}

impl DockerConfig {
    pub fn label(&self, name: &str) -> Option<&str> {
        self.labels
            .get(name)
            .map(String::as_str)
            .filter(|v| !v.is_empty())
    }

    pub fn env_value(&self, name: &str) -> Option<&str> {
        self.env.iter().find_map(|entry| {
            entry
                .split_once('=')
                .filter(|(k, _)| *k == name)
                .map(|(_, v)| v)
        })
    }
}

/// An image as seen through an image stream, named `<stream>@<digest>`.
#[derive(Clone, Debug, Deserialize, PartialEq, Serialize)]
pub struct ImageStreamImage {
    pub metadata: ObjectMeta,

    pub image: Image,
}

impl ImageStreamImage {
    pub fn docker_config(&self) -> Option<&DockerConfig> {
        self.image.docker_image_metadata.config.as_ref()
    }
}

#[cfg(test)]
mod tests {
    use crate::model::DockerConfig;

    #[test]
    fn should_read_env_and_labels_from_docker_config() {
        let config = DockerConfig {
            labels: [
                ("io.openshift.s2i.destination".to_string(), "/tmp".to_string()),
                ("empty".to_string(), String::new()),
            ]
            .into_iter()
            .collect(),
            env: vec![
                "PATH=/usr/bin:/bin".to_string(),
                "STI_SCRIPTS_URL=image:///usr/libexec/s2i".to_string(),
            ],
            working_dir: None,
        };

        assert_eq!(Some("/tmp"), config.label("io.openshift.s2i.destination"));
        assert_eq!(None, config.label("empty"));
        assert_eq!(
            Some("image:///usr/libexec/s2i"),
            config.env_value("STI_SCRIPTS_URL")
        );
        assert_eq!(Some("/usr/bin:/bin"), config.env_value("PATH"));
        assert_eq!(None, config.env_value("HOME"));
    }
}
