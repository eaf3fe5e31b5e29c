//! Generation attempt outcomes

/// Artifact bundle produced by a successful generation pass.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GeneratedArtifacts {
    /// The OpenAPI document, verbatim
    pub openapi: String,

    /// The YouTrack-flavored Markdown export, verbatim
    pub youtrack: String,

    /// Identifier of the rendered documentation page on the generator
    /// (`/swagger/{swagger_id}/`)
    pub swagger_id: String,
}

/// Outcome of one generation attempt.
///
/// A `Failure` covers both in-band generator errors (the reply's error
/// field) and transport-level failures; the two are unified because the
/// UI displays them identically.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum GenerateOutcome {
    Success(GeneratedArtifacts),
    Failure { message: String },
}

impl GenerateOutcome {
    pub fn failure(message: impl Into<String>) -> Self {
        Self::Failure {
            message: message.into(),
        }
    }

    pub fn is_success(&self) -> bool {
        matches!(self, Self::Success(_))
    }
}
