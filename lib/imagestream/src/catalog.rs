use std::fs;
use std::path::Path;

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::{
    Image, ImageRegistry, ImageStream, ImageStreamError, ImageStreamImage, ImageStreamResult,
    ObjectMeta,
};

/// Registry backed by a YAML document listing image streams and the images their tags resolve
/// to, e.g. an export of a cluster's `openshift` namespace.
#[derive(Clone, Debug, Default, Deserialize, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CatalogRegistry {
    #[serde(default)]
    pub image_streams: Vec<ImageStream>,

    #[serde(default)]
    pub images: Vec<Image>,
}

impl CatalogRegistry {
    pub fn from_path(path: &Path) -> ImageStreamResult<Self> {
        let contents = fs::read_to_string(path)?;
        let catalog: CatalogRegistry = serde_yaml::from_str(&contents)?;

        if let Some(stream) = catalog
            .image_streams
            .iter()
            .find(|s| s.metadata.namespace.is_none())
        {
            return Err(ImageStreamError::InvalidCatalog {
                path: path.to_string_lossy().to_string(),
                reason: format!("image stream {} has no namespace", stream.metadata.name),
            });
        }

        debug!(
            "loaded {} image streams and {} images from {}",
            catalog.image_streams.len(),
            catalog.images.len(),
            path.to_string_lossy()
        );

        Ok(catalog)
    }
}

impl ImageRegistry for CatalogRegistry {
    fn image_stream(
        &self,
        namespace: &str,
        name: &str,
        tag: &str,
    ) -> ImageStreamResult<Option<ImageStream>> {
        let stream = self
            .image_streams
            .iter()
            .find(|s| s.namespace() == namespace && s.metadata.name == name);

        Ok(match stream {
            Some(s) if s.has_tag(tag) => Some(s.clone()),
            Some(_) => {
                debug!("image stream {namespace}/{name} has no tag {tag}");
                None
            }
            None => None,
        })
    }

    fn image_stream_image(
        &self,
        stream: &ImageStream,
        tag: &str,
    ) -> ImageStreamResult<Option<ImageStreamImage>> {
        let Some(event) = stream.latest_image(tag) else {
            debug!(
                "image stream {} has not imported tag {tag}",
                stream.metadata.name
            );
            return Ok(None);
        };

        Ok(self
            .images
            .iter()
            .find(|i| i.metadata.name == event.image)
            .map(|image| ImageStreamImage {
                metadata: ObjectMeta {
                    name: format!("{}@{}", stream.metadata.name, event.image),
                    namespace: stream.metadata.namespace.clone(),
                },
                image: image.clone(),
            }))
    }
}

#[cfg(test)]
mod tests {
    use std::fs;

    use tempfile::TempDir;

    use crate::{CatalogRegistry, ImageRegistry, ImageStreamError};

    const CATALOG: &str = r#"
imageStreams:
  - metadata:
      name: nodejs
      namespace: openshift
    spec:
      tags:
        - name: "12"
          from:
            kind: DockerImage
            name: registry.access.redhat.com/ubi8/nodejs-12:latest
    status:
      tags:
        - tag: "12"
          items:
            - image: sha256:1234
              dockerImageReference: registry.access.redhat.com/ubi8/nodejs-12@sha256:1234
images:
  - metadata:
      name: sha256:1234
    dockerImageReference: registry.access.redhat.com/ubi8/nodejs-12@sha256:1234
    dockerImageMetadata:
      Config:
        WorkingDir: /opt/app-root/src
        Labels:
          io.openshift.s2i.scripts-url: image:///usr/libexec/s2i
"#;

    fn catalog() -> CatalogRegistry {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("catalog.yaml");
        fs::write(&path, CATALOG).unwrap();
        CatalogRegistry::from_path(&path).unwrap()
    }

    #[test]
    fn should_find_image_stream_by_namespace_name_and_tag() {
        let catalog = catalog();

        let stream = catalog.image_stream("openshift", "nodejs", "12").unwrap();
        assert_eq!("nodejs", stream.unwrap().metadata.name);

        assert!(catalog
            .image_stream("openshift", "nodejs", "14")
            .unwrap()
            .is_none());
        assert!(catalog
            .image_stream("myproject", "nodejs", "12")
            .unwrap()
            .is_none());
    }

    #[test]
    fn should_resolve_image_stream_image_through_status_digest() {
        let catalog = catalog();
        let stream = catalog
            .image_stream("openshift", "nodejs", "12")
            .unwrap()
            .unwrap();

        let image = catalog.image_stream_image(&stream, "12").unwrap().unwrap();

        assert_eq!("nodejs@sha256:1234", image.metadata.name);
        assert_eq!(
            Some("/opt/app-root/src"),
            image.docker_config().unwrap().working_dir.as_deref()
        );
    }

    #[test]
    fn missing_image_is_not_an_error() {
        let mut catalog = catalog();
        catalog.images.clear();
        let stream = catalog.image_streams[0].clone();

        assert!(catalog.image_stream_image(&stream, "12").unwrap().is_none());
    }

    #[test]
    fn should_reject_stream_without_namespace() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("catalog.yaml");
        fs::write(&path, "imageStreams:\n  - metadata:\n      name: nodejs\n").unwrap();

        let err = CatalogRegistry::from_path(&path).unwrap_err();
        assert!(matches!(err, ImageStreamError::InvalidCatalog { .. }));
    }
}
