// src/config/tag.rs
use std::fmt;

use crate::error::{ShortlistError, ShortlistResult};

/// Affiliate tracking tag. Only constructed through validation, so holding one
/// means the pre-flight check already passed.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct TrackingTag(String);

impl TrackingTag {
    pub fn new(raw: impl AsRef<str>) -> ShortlistResult<Self> {
        let trimmed = raw.as_ref().trim();
        if trimmed.is_empty() {
            return Err(ShortlistError::MissingTrackingTag);
        }
        Ok(Self(s!(trimmed)))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for TrackingTag {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}
