//! JSON envelopes spoken by the generator service

use serde::{Deserialize, Serialize};

use specter_core::{GenerateOutcome, GeneratedArtifacts, SpecDocument};

/// Reply to `GET /file`.
///
/// `path` is the empty string when the generator was started without a
/// backing file; the conversion below maps that sentinel to `None`.
#[derive(Debug, Clone, Deserialize)]
pub struct SpecFileReply {
    #[serde(default)]
    pub text: String,

    #[serde(default)]
    pub path: String,
}

impl SpecFileReply {
    pub fn into_document(self) -> SpecDocument {
        let path = if self.path.is_empty() {
            None
        } else {
            Some(self.path)
        };
        SpecDocument::new(self.text, path)
    }
}

/// Body of `POST /generate`.
#[derive(Debug, Serialize)]
pub struct GenerateRequest<'a> {
    pub text: &'a str,
}

/// Body of `POST /save`.
#[derive(Debug, Serialize)]
pub struct SaveRequest<'a> {
    pub text: &'a str,
}

/// Reply to `POST /generate`.
///
/// The generator always emits all four fields; an empty `error` string
/// signals success. Defaults guard against older servers omitting fields.
#[derive(Debug, Clone, Deserialize)]
pub struct GenerateReply {
    #[serde(default)]
    pub error: String,

    #[serde(default)]
    pub openapi: String,

    #[serde(default)]
    pub youtrack: String,

    #[serde(default)]
    pub swagger_id: String,
}

impl GenerateReply {
    pub fn into_outcome(self) -> GenerateOutcome {
        if self.error.is_empty() {
            GenerateOutcome::Success(GeneratedArtifacts {
                openapi: self.openapi,
                youtrack: self.youtrack,
                swagger_id: self.swagger_id,
            })
        } else {
            GenerateOutcome::Failure {
                message: self.error,
            }
        }
    }
}
