//! Blocking HTTP client for the generator service

use std::time::Duration;

use tracing::debug;
use url::Url;

use specter_core::{Error, GenerateOutcome, Result, SpecDocument};

use crate::wire::{GenerateReply, GenerateRequest, SaveRequest, SpecFileReply};

/// Default per-request timeout when the configuration does not override it.
pub const DEFAULT_TIMEOUT_SECS: u64 = 30;

/// Client for the generator service.
///
/// Cheap to clone; clones share the underlying connection pool. All
/// methods block, so async callers run them inside `spawn_blocking`.
#[derive(Debug, Clone)]
pub struct BackendClient {
    agent: ureq::Agent,
    base_url: String,
}

impl BackendClient {
    /// Create a client for the generator at `server_url`.
    ///
    /// The URL must be absolute with an http/https scheme; a trailing
    /// slash is tolerated and stripped. Non-2xx replies are returned as
    /// responses, not transport errors, because the generator puts the
    /// human-readable failure message in the body.
    pub fn new(server_url: &str, timeout: Duration) -> Result<Self> {
        let parsed = Url::parse(server_url)
            .map_err(|e| Error::invalid_server_url(server_url, e.to_string()))?;
        if parsed.scheme() != "http" && parsed.scheme() != "https" {
            return Err(Error::invalid_server_url(
                server_url,
                "scheme must be http or https",
            ));
        }

        let config = ureq::Agent::config_builder()
            .timeout_global(Some(timeout))
            .http_status_as_error(false)
            .build();

        Ok(Self {
            agent: config.into(),
            base_url: server_url.trim_end_matches('/').to_string(),
        })
    }

    /// The normalized base URL this client talks to.
    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Fetch the current document and its server-side path.
    ///
    /// `GET /file`
    pub fn fetch_file(&self) -> Result<SpecDocument> {
        let url = format!("{}/file", self.base_url);
        debug!("fetching document from {}", url);

        let response = self
            .agent
            .get(&url)
            .call()
            .map_err(|e| Error::backend(e.to_string()))?;

        let status = response.status();
        if !status.is_success() {
            let body = response.into_body().read_to_string().unwrap_or_default();
            return Err(Error::backend_status(status.as_u16(), body.trim_end()));
        }

        let reply: SpecFileReply = response
            .into_body()
            .read_json()
            .map_err(|e| Error::backend(format!("malformed file reply: {e}")))?;
        Ok(reply.into_document())
    }

    /// Run the generator over `text`.
    ///
    /// `POST /generate`
    ///
    /// Both failure shapes collapse into [`GenerateOutcome::Failure`]: an
    /// in-band error field on a 2xx reply, and a non-2xx reply whose body
    /// text is the error message. `Err` is reserved for transport-level
    /// problems (unreachable server, malformed success reply).
    pub fn generate(&self, text: &str) -> Result<GenerateOutcome> {
        let url = format!("{}/generate", self.base_url);
        debug!("requesting generation, {} bytes of input", text.len());

        let response = self
            .agent
            .post(&url)
            .header("content-type", "application/json")
            .send_json(&GenerateRequest { text })
            .map_err(|e| Error::backend(e.to_string()))?;

        let status = response.status();
        if !status.is_success() {
            let body = response.into_body().read_to_string().unwrap_or_default();
            debug!("generation failed with HTTP {}", status.as_u16());
            return Ok(GenerateOutcome::failure(body.trim_end()));
        }

        let reply: GenerateReply = response
            .into_body()
            .read_json()
            .map_err(|e| Error::backend(format!("malformed generate reply: {e}")))?;
        Ok(reply.into_outcome())
    }

    /// Overwrite the server-side file with `text`.
    ///
    /// `POST /save`
    pub fn save(&self, text: &str) -> Result<()> {
        let url = format!("{}/save", self.base_url);
        debug!("saving document, {} bytes", text.len());

        let response = self
            .agent
            .post(&url)
            .header("content-type", "application/json")
            .send_json(&SaveRequest { text })
            .map_err(|e| Error::backend(e.to_string()))?;

        let status = response.status();
        if !status.is_success() {
            let body = response.into_body().read_to_string().unwrap_or_default();
            return Err(Error::backend_status(status.as_u16(), body.trim_end()));
        }
        Ok(())
    }

    /// URL of the rendered documentation page for a generated spec.
    pub fn swagger_url(&self, swagger_id: &str) -> String {
        swagger_url(&self.base_url, swagger_id)
    }
}

/// Build the rendered-docs URL for a swagger id.
///
/// The trailing slash matters: the generator serves the page only at the
/// slash-terminated path.
pub fn swagger_url(base_url: &str, swagger_id: &str) -> String {
    format!(
        "{}/swagger/{}/",
        base_url.trim_end_matches('/'),
        swagger_id
    )
}
