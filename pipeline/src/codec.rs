//! Descriptor encoding and decoding.
//!
//! Source descriptors are authored in RON; compiled resources are bincode.
//! Both directions go through serde, so the same schema struct describes a
//! resource on both sides of the pipeline.

use serde::de::DeserializeOwned;
use serde::Serialize;

use crate::error::{PipelineError, PipelineResult};

/// Decode a text-encoded descriptor.
pub fn decode_text<T: DeserializeOwned>(bytes: &[u8]) -> PipelineResult<T> {
    let text = std::str::from_utf8(bytes).map_err(|e| PipelineError::Parse(e.to_string()))?;
    ron::from_str(text).map_err(|e| PipelineError::Parse(e.to_string()))
}

/// Encode a descriptor to its compiled binary form.
pub fn encode_binary<T: Serialize>(value: &T) -> PipelineResult<Vec<u8>> {
    bincode::serialize(value).map_err(|e| PipelineError::Encode(e.to_string()))
}
