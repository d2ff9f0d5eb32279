use async_trait::async_trait;
use reqwest::{Client, Url};
use serde::{Deserialize, Serialize};

use super::error::RequestError;
use super::prompt::TRANSLATION_PREAMBLE;

/// Gemini REST API root.
pub const DEFAULT_BASE_URL: &str = "https://generativelanguage.googleapis.com/v1beta";

/// Sends source lines for translation and returns the raw translated text.
#[async_trait]
pub trait Translator: Send + Sync {
    async fn translate(
        &self,
        model: &str,
        api_key: &str,
        lines: &[String],
    ) -> Result<String, RequestError>;
}

#[derive(Debug, Serialize)]
struct GenerateContentRequest<'a> {
    contents: Vec<RequestContent<'a>>,
}

#[derive(Debug, Serialize)]
struct RequestContent<'a> {
    parts: Vec<RequestPart<'a>>,
}

#[derive(Debug, Serialize)]
struct RequestPart<'a> {
    text: &'a str,
}

#[derive(Debug, Deserialize)]
struct GenerateContentResponse {
    #[serde(default)]
    candidates: Vec<Candidate>,
}

#[derive(Debug, Deserialize)]
struct Candidate {
    content: Option<CandidateContent>,
}

#[derive(Debug, Deserialize)]
struct CandidateContent {
    #[serde(default)]
    parts: Vec<CandidatePart>,
}

#[derive(Debug, Deserialize)]
struct CandidatePart {
    text: Option<String>,
}

/// [`Translator`] backed by Gemini `generateContent`.
///
/// One POST per call. No timeout and no retry.
pub struct GeminiClient {
    client: Client,
    base_url: String,
}

impl GeminiClient {
    pub fn new() -> Self {
        Self::with_base_url(DEFAULT_BASE_URL)
    }

    /// Points the client at another API root (a proxy or a test server).
    pub fn with_base_url(base_url: impl Into<String>) -> Self {
        Self {
            client: Client::new(),
            base_url: base_url.into(),
        }
    }

    fn endpoint(&self, model: &str, api_key: &str) -> Result<Url, RequestError> {
        let raw = format!(
            "{}/models/{model}:generateContent",
            self.base_url.trim_end_matches('/')
        );
        let mut url = Url::parse(&raw).map_err(|e| RequestError::InvalidUrl(e.to_string()))?;
        url.query_pairs_mut().append_pair("key", api_key);
        Ok(url)
    }
}

impl Default for GeminiClient {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl Translator for GeminiClient {
    async fn translate(
        &self,
        model: &str,
        api_key: &str,
        lines: &[String],
    ) -> Result<String, RequestError> {
        let url = self.endpoint(model, api_key)?;

        let request = GenerateContentRequest {
            contents: vec![RequestContent {
                parts: build_parts(lines),
            }],
        };

        tracing::debug!(
            model,
            lines = lines.len(),
            base_url = %self.base_url,
            "sending translation request"
        );

        // The URL carries the API key; keep it out of error messages.
        let response = self
            .client
            .post(url)
            .json(&request)
            .send()
            .await
            .map_err(reqwest::Error::without_url)?;

        let status = response.status();
        let body = response.text().await.map_err(reqwest::Error::without_url)?;

        if !status.is_success() {
            tracing::debug!(%status, "translation request rejected");
            return Err(RequestError::Status { status, body });
        }

        extract_text(&body)
    }
}

fn build_parts(lines: &[String]) -> Vec<RequestPart<'_>> {
    std::iter::once(TRANSLATION_PREAMBLE)
        .chain(lines.iter().map(String::as_str))
        .map(|text| RequestPart { text })
        .collect()
}

/// Pulls `candidates[0].content.parts[0].text` out of a response body.
///
/// A first part without text yields an empty string; a body without a
/// first candidate part is malformed.
fn extract_text(body: &str) -> Result<String, RequestError> {
    let response: GenerateContentResponse = serde_json::from_str(body)
        .map_err(|e| RequestError::MalformedResponse(e.to_string()))?;

    let part = response
        .candidates
        .into_iter()
        .next()
        .and_then(|c| c.content)
        .and_then(|c| c.parts.into_iter().next())
        .ok_or_else(|| RequestError::MalformedResponse("no candidate content".to_string()))?;

    Ok(part.text.unwrap_or_default())
}
