use crate::{ImageStream, ImageStreamImage, ImageStreamResult};

/// Read-only registry lookups the conversion depends on. `Ok(None)` means the registry answered
/// and the object does not exist; `Err` is reserved for failures talking to the registry.
pub trait ImageRegistry {
    fn image_stream(
        &self,
        namespace: &str,
        name: &str,
        tag: &str,
    ) -> ImageStreamResult<Option<ImageStream>>;

    fn image_stream_image(
        &self,
        stream: &ImageStream,
        tag: &str,
    ) -> ImageStreamResult<Option<ImageStreamImage>>;
}
