//! Wire types for the Tinify shrink endpoint.
//!
//! The service answers every shrink upload with a JSON envelope that is
//! either a success (`{"output": {...}}`) or an error
//! (`{"error": "...", "message": "..."}`). The two shapes are decoded as an
//! explicit discriminated union; the `error` field is authoritative, so the
//! failure variant is tried first.

use serde::{Deserialize, Serialize};

/// Request body for uploading a remote image by URL.
#[derive(Debug, Clone, Serialize)]
pub struct SourceBody {
    pub source: Source,
}

#[derive(Debug, Clone, Serialize)]
pub struct Source {
    pub url: String,
}

impl SourceBody {
    pub fn new(url: impl Into<String>) -> Self {
        Self {
            source: Source { url: url.into() },
        }
    }
}

/// A server-side resize request. Omitted dimensions are left out of the
/// JSON body entirely; the service decides whether the combination is valid
/// for the chosen method.
#[derive(Debug, Clone, Serialize)]
pub struct ResizeSpec {
    pub method: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub width: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub height: Option<u32>,
}

#[derive(Debug, Clone, Serialize)]
pub struct ResizeBody {
    pub resize: ResizeSpec,
}

impl ResizeBody {
    pub fn new(method: impl Into<String>, width: Option<u32>, height: Option<u32>) -> Self {
        Self {
            resize: ResizeSpec {
                method: method.into(),
                width,
                height,
            },
        }
    }
}

/// Request body asking the service to keep selected metadata (for example
/// "copyright" or "creation") in the compressed output.
#[derive(Debug, Clone, Serialize)]
pub struct PreserveBody {
    pub preserve: Vec<String>,
}

impl PreserveBody {
    pub fn new(entries: &[&str]) -> Self {
        Self {
            preserve: entries.iter().map(|e| e.to_string()).collect(),
        }
    }
}

/// The compressed resource described by a success envelope.
#[derive(Debug, Clone, Deserialize)]
pub struct CompressedOutput {
    pub url: String,
    pub size: Option<u64>,
    #[serde(rename = "type")]
    pub content_type: Option<String>,
    pub width: Option<u32>,
    pub height: Option<u32>,
    pub ratio: Option<f64>,
}

/// Response envelope for a shrink upload.
///
/// `Failure` must stay the first variant: `#[serde(untagged)]` tries
/// variants in order, and a body carrying both `error` and `output` must
/// decode as a failure.
#[derive(Debug, Deserialize)]
#[serde(untagged)]
pub enum ShrinkEnvelope {
    Failure { error: String, message: String },
    Success { output: CompressedOutput },
}
