use std::fmt::{Display, Formatter};
use std::str::FromStr;

use crate::ImageStreamError;

/// Builder image identifier in the compact `<namespace>:<name>:<tag>` form.
#[derive(Clone, Debug, Eq, Hash, PartialEq)]
pub struct ImageReference {
    pub namespace: String,
    pub name: String,
    pub tag: String,
}

impl ImageReference {
    pub fn parse(reference: &str) -> Result<Self, ImageStreamError> {
        let malformed = |reason: &str| ImageStreamError::MalformedReference {
            reference: reference.to_string(),
            reason: reason.to_string(),
        };

        let segments: Vec<&str> = reference.split(':').collect();
        let [namespace, name, tag] = segments.as_slice() else {
            return Err(malformed("expected <namespace>:<name>:<tag>"));
        };

        for (field, value) in [("namespace", namespace), ("name", name), ("tag", tag)] {
            if value.is_empty() {
                return Err(malformed(&format!("{field} is empty")));
            }

            if value.chars().any(char::is_whitespace) {
                return Err(malformed(&format!("{field} contains whitespace")));
            }
        }

        Ok(Self {
            namespace: namespace.to_string(),
            name: name.to_string(),
            tag: tag.to_string(),
        })
    }
}

impl FromStr for ImageReference {
    type Err = ImageStreamError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

impl Display for ImageReference {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}:{}:{}", self.namespace, self.name, self.tag)
    }
}
