use imagestream::{ImageReference, ImageRegistry, ImageStreamError, ImageStreamImage};
use tracing::{debug, instrument};

use crate::{ConvertError, ConvertResult};

/// Builder image of a component: where to pull it from and the metadata the registry holds
/// for the tagged image.
#[derive(Clone, Debug, PartialEq)]
pub struct ResolvedImage {
    pub reference: ImageReference,
    pub pull_spec: String,
    pub image: ImageStreamImage,
}

/// Resolves a `<namespace>:<name>:<tag>` component type through `registry`.
///
/// The pull specification is taken from the first tag of the image stream. A stream without
/// tags, or whose first tag does not point anywhere, is treated as corrupt rather than falling
/// back to another tag.
#[instrument(level = "debug", skip(registry))]
pub fn resolve(registry: &dyn ImageRegistry, component_type: &str) -> ConvertResult<ResolvedImage> {
    debug!("Getting container image details");

    let reference = ImageReference::parse(component_type).map_err(|e| match e {
        ImageStreamError::MalformedReference { reference, reason } => {
            ConvertError::MalformedReference { reference, reason }
        }
        source => ConvertError::Registry {
            reference: component_type.to_string(),
            source,
        },
    })?;

    let stream = registry
        .image_stream(&reference.namespace, &reference.name, &reference.tag)
        .map_err(|source| ConvertError::Registry {
            reference: reference.to_string(),
            source,
        })?
        .ok_or_else(|| ConvertError::ImageStreamNotFound {
            reference: reference.to_string(),
        })?;

    let image = registry
        .image_stream_image(&stream, &reference.tag)
        .map_err(|source| ConvertError::Registry {
            reference: reference.to_string(),
            source,
        })?
        .ok_or_else(|| ConvertError::ImageNotFound {
            reference: reference.to_string(),
        })?;

    let pull_spec = stream
        .spec
        .tags
        .first()
        .and_then(|t| t.from.as_ref())
        .map(|from| from.name.clone())
        .filter(|name| !name.is_empty())
        .ok_or_else(|| ConvertError::CorruptImageStream {
            stream: format!("{}/{}", stream.namespace(), stream.metadata.name),
        })?;

    debug!("resolved {reference} to {pull_spec}");
    Ok(ResolvedImage {
        reference,
        pull_spec,
        image,
    })
}

#[cfg(test)]
mod tests {
    use imagestream::{ImageRegistry, ObjectReference, TagReference};
    use testing::fixtures::NODEJS_PULL_SPEC;

    use crate::test_support::{catalog, UnreachableRegistry};
    use crate::{resolve, ConvertError};

    #[test]
    fn should_resolve_pull_spec_and_image() {
        let resolved = resolve(&catalog(), "openshift:nodejs:12").unwrap();

        assert_eq!(NODEJS_PULL_SPEC, resolved.pull_spec);
        assert_eq!("nodejs@sha256:5f8a", resolved.image.metadata.name);
        assert_eq!("12", resolved.reference.tag);
    }

    #[test]
    fn should_use_first_tag_for_pull_spec() {
        let mut catalog = catalog();
        catalog.image_streams[0].spec.tags.insert(
            0,
            TagReference {
                name: "latest".to_string(),
                from: Some(ObjectReference {
                    kind: "DockerImage".to_string(),
                    name: "quay.io/example/nodejs:latest".to_string(),
                }),
            },
        );

        let resolved = resolve(&catalog, "openshift:nodejs:12").unwrap();
        assert_eq!("quay.io/example/nodejs:latest", resolved.pull_spec);
    }

    #[test]
    fn malformed_reference_never_reaches_registry() {
        let err = resolve(&UnreachableRegistry, "openshift/nodejs:12").unwrap_err();

        insta::assert_snapshot!(
            err.to_string(),
            @"invalid image reference openshift/nodejs:12: expected <namespace>:<name>:<tag>"
        );
    }

    #[test]
    fn missing_stream_is_image_stream_not_found() {
        let err = resolve(&catalog(), "openshift:python:3.8").unwrap_err();

        assert!(matches!(
            err,
            ConvertError::ImageStreamNotFound { ref reference } if reference == "openshift:python:3.8"
        ));
    }

    #[test]
    fn missing_image_is_image_not_found() {
        let mut catalog = catalog();
        catalog.images.clear();

        let err = resolve(&catalog, "openshift:nodejs:12").unwrap_err();
        assert!(matches!(err, ConvertError::ImageNotFound { .. }));
    }

    #[test]
    fn empty_tag_list_is_corrupt() {
        let mut catalog = catalog();
        catalog.image_streams[0].spec.tags.clear();

        let err = resolve(&catalog, "openshift:nodejs:12").unwrap_err();
        insta::assert_snapshot!(
            err.to_string(),
            @"image stream openshift/nodejs has no tag with a pull specification"
        );
    }

    #[test]
    fn first_tag_without_source_is_corrupt() {
        let mut catalog = catalog();
        catalog.image_streams[0].spec.tags[0].from = None;

        let err = resolve(&catalog, "openshift:nodejs:12").unwrap_err();
        assert!(matches!(err, ConvertError::CorruptImageStream { .. }));
    }

    #[test]
    fn registry_failure_is_propagated() {
        let registry: &dyn ImageRegistry = &UnreachableRegistry;

        let err = resolve(registry, "openshift:nodejs:12").unwrap_err();
        assert_eq!(
            "registry lookup for openshift:nodejs:12 failed: registry lookup failed: connection refused",
            err.to_string()
        );
    }
}
