//! HTTP client for the Gemini / Imagen generation endpoints.
//!
//! Two operations, one request each: a text completion for event
//! descriptions and a single 16:9 JPEG for event banners. No retries, no
//! caching; the user re-triggers from the form.

use crate::config::GenerationConfig;
use crate::error::{ConfigError, GenerationError, GenerationKind};
use crate::models::{ImageRef, JPEG_MIME};
use base64::engine::general_purpose::STANDARD;
use base64::Engine;
use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};
use std::sync::Arc;

const API_KEY_HEADER: &str = "x-goog-api-key";
const BANNER_ASPECT_RATIO: &str = "16:9";
const MAX_LOGGED_BODY_CHARS: usize = 512;

/// The two remote operations the create-event form depends on.
#[allow(async_fn_in_trait)]
pub trait Generator {
    /// Multi-paragraph description for an event title, already trimmed.
    async fn generate_description(&self, title: &str) -> Result<String, GenerationError>;

    /// Exactly one banner image for a free-text prompt.
    async fn generate_image(&self, prompt: &str) -> Result<GeneratedImage, GenerationError>;
}

/// Decoded image payload returned by the image model.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct GeneratedImage {
    pub bytes: Vec<u8>,
}

impl GeneratedImage {
    pub fn into_image_ref(self) -> ImageRef {
        ImageRef::inline_jpeg(&self.bytes)
    }
}

pub fn description_prompt(title: &str) -> String {
    format!(
        "Generate a compelling and exciting event description for an event titled \"{}\". \
         The description should be around 2-3 paragraphs long and suitable for a public event listing. \
         Make it sound professional yet engaging.",
        title
    )
}

pub fn image_prompt(prompt: &str) -> String {
    format!("A vibrant, high-quality, cinematic event banner for: {}.", prompt)
}

// --- wire types: generateContent ---

#[derive(Serialize)]
struct GenerateContentRequest<'a> {
    contents: Vec<ContentRequest<'a>>,
}

#[derive(Serialize)]
struct ContentRequest<'a> {
    parts: Vec<TextPart<'a>>,
}

#[derive(Serialize)]
struct TextPart<'a> {
    text: &'a str,
}

#[derive(Deserialize)]
struct GenerateContentResponse {
    #[serde(default)]
    candidates: Vec<Candidate>,
}

#[derive(Deserialize)]
struct Candidate {
    #[serde(default)]
    content: Option<CandidateContent>,
}

#[derive(Deserialize)]
struct CandidateContent {
    #[serde(default)]
    parts: Vec<ResponsePart>,
}

#[derive(Deserialize)]
struct ResponsePart {
    #[serde(default)]
    text: Option<String>,
}

// --- wire types: predict ---

#[derive(Serialize)]
struct PredictRequest<'a> {
    instances: Vec<PromptInstance<'a>>,
    parameters: ImageParameters,
}

#[derive(Serialize)]
struct PromptInstance<'a> {
    prompt: &'a str,
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct ImageParameters {
    sample_count: u32,
    aspect_ratio: &'static str,
    output_options: OutputOptions,
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct OutputOptions {
    mime_type: &'static str,
}

#[derive(Deserialize)]
struct PredictResponse {
    #[serde(default)]
    predictions: Vec<Prediction>,
}

#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
struct Prediction {
    #[serde(default)]
    bytes_base64_encoded: Option<String>,
}

/// Text of the first candidate, parts concatenated and trimmed. `None` when blank.
fn first_candidate_text(resp: GenerateContentResponse) -> Option<String> {
    let content = resp.candidates.into_iter().next()?.content?;
    let text: String = content.parts.into_iter().filter_map(|p| p.text).collect();
    let trimmed = text.trim();
    if trimmed.is_empty() {
        None
    } else {
        Some(trimmed.to_string())
    }
}

fn first_prediction_bytes(resp: PredictResponse) -> Result<Vec<u8>, GenerationError> {
    let encoded = resp
        .predictions
        .into_iter()
        .find_map(|p| p.bytes_base64_encoded.filter(|b| !b.is_empty()))
        .ok_or(GenerationError::Empty { kind: GenerationKind::Image })?;
    STANDARD.decode(encoded.as_bytes()).map_err(|e| GenerationError::Decode {
        kind: GenerationKind::Image,
        reason: e.to_string(),
    })
}

fn truncate_body(mut body: String) -> String {
    if let Some((idx, _)) = body.char_indices().nth(MAX_LOGGED_BODY_CHARS) {
        body.truncate(idx);
        body.push('…');
    }
    body
}

/// Reqwest-backed [`Generator`]. Cheap to clone; clones share the connection pool.
#[derive(Clone)]
pub struct GenerationClient {
    http: reqwest::Client,
    config: Arc<GenerationConfig>,
}

impl GenerationClient {
    pub fn new(config: GenerationConfig) -> Self {
        Self {
            http: reqwest::Client::new(),
            config: Arc::new(config),
        }
    }

    /// Fails when the credential is missing; the app must not start without it.
    pub fn from_env() -> Result<Self, ConfigError> {
        let config = GenerationConfig::from_env()?;
        tracing::info!(
            base_url = %config.base_url,
            text_model = %config.text_model,
            image_model = %config.image_model,
            "generation client configured"
        );
        Ok(Self::new(config))
    }

    pub fn config(&self) -> &GenerationConfig {
        &self.config
    }

    fn model_url(&self, model: &str, method: &str) -> String {
        format!("{}/models/{}:{}", self.config.base_url, model, method)
    }

    async fn post_json<B, R>(&self, kind: GenerationKind, url: &str, body: &B) -> Result<R, GenerationError>
    where
        B: Serialize + ?Sized,
        R: DeserializeOwned,
    {
        tracing::debug!(?kind, %url, "generation request");
        let transport = |source| GenerationError::Transport { kind, source };
        let resp = self
            .http
            .post(url)
            .header(API_KEY_HEADER, self.config.api_key.as_str())
            .json(body)
            .send()
            .await
            .map_err(transport)?;
        let status = resp.status();
        let text = resp.text().await.map_err(transport)?;
        if !status.is_success() {
            return Err(GenerationError::Status {
                kind,
                status: status.as_u16(),
                body: truncate_body(text),
            });
        }
        serde_json::from_str(&text).map_err(|e| GenerationError::Decode {
            kind,
            reason: e.to_string(),
        })
    }

    async fn request_description(&self, title: &str) -> Result<String, GenerationError> {
        let prompt = description_prompt(title);
        let body = GenerateContentRequest {
            contents: vec![ContentRequest {
                parts: vec![TextPart { text: &prompt }],
            }],
        };
        let url = self.model_url(&self.config.text_model, "generateContent");
        let resp: GenerateContentResponse = self.post_json(GenerationKind::Description, &url, &body).await?;
        first_candidate_text(resp).ok_or(GenerationError::Empty {
            kind: GenerationKind::Description,
        })
    }

    async fn request_image(&self, prompt: &str) -> Result<GeneratedImage, GenerationError> {
        let prompt = image_prompt(prompt);
        let body = PredictRequest {
            instances: vec![PromptInstance { prompt: &prompt }],
            parameters: ImageParameters {
                sample_count: 1,
                aspect_ratio: BANNER_ASPECT_RATIO,
                output_options: OutputOptions { mime_type: JPEG_MIME },
            },
        };
        let url = self.model_url(&self.config.image_model, "predict");
        let resp: PredictResponse = self.post_json(GenerationKind::Image, &url, &body).await?;
        let bytes = first_prediction_bytes(resp)?;
        Ok(GeneratedImage { bytes })
    }
}

/// Two handles are equal when they share one configuration (component props need this).
impl PartialEq for GenerationClient {
    fn eq(&self, other: &Self) -> bool {
        Arc::ptr_eq(&self.config, &other.config)
    }
}

impl Generator for GenerationClient {
    async fn generate_description(&self, title: &str) -> Result<String, GenerationError> {
        self.request_description(title).await.inspect_err(|e| {
            tracing::error!(error = %e, "error generating event description");
        })
    }

    async fn generate_image(&self, prompt: &str) -> Result<GeneratedImage, GenerationError> {
        self.request_image(prompt).await.inspect_err(|e| {
            tracing::error!(error = %e, "error generating event image");
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn content_response(json: serde_json::Value) -> GenerateContentResponse {
        serde_json::from_value(json).unwrap()
    }

    #[test]
    fn candidate_parts_are_joined_and_trimmed() {
        let resp = content_response(serde_json::json!({
            "candidates": [{ "content": { "parts": [{ "text": "\n First.\n\n" }, { "text": "Second. " }] } }]
        }));
        assert_eq!(first_candidate_text(resp).as_deref(), Some("First.\n\nSecond."));
    }

    #[test]
    fn blank_or_missing_candidates_yield_none() {
        assert!(first_candidate_text(content_response(serde_json::json!({}))).is_none());
        let blank = content_response(serde_json::json!({
            "candidates": [{ "content": { "parts": [{ "text": "   " }] } }]
        }));
        assert!(first_candidate_text(blank).is_none());
    }

    #[test]
    fn zero_predictions_is_empty_error() {
        let resp: PredictResponse = serde_json::from_value(serde_json::json!({ "predictions": [] })).unwrap();
        assert!(matches!(
            first_prediction_bytes(resp),
            Err(GenerationError::Empty { kind: GenerationKind::Image })
        ));
    }

    #[test]
    fn invalid_base64_is_decode_error() {
        let resp: PredictResponse =
            serde_json::from_value(serde_json::json!({ "predictions": [{ "bytesBase64Encoded": "***" }] })).unwrap();
        assert!(matches!(first_prediction_bytes(resp), Err(GenerationError::Decode { .. })));
    }

    #[test]
    fn image_request_body_matches_wire_format() {
        let body = PredictRequest {
            instances: vec![PromptInstance { prompt: "p" }],
            parameters: ImageParameters {
                sample_count: 1,
                aspect_ratio: BANNER_ASPECT_RATIO,
                output_options: OutputOptions { mime_type: JPEG_MIME },
            },
        };
        assert_eq!(
            serde_json::to_value(&body).unwrap(),
            serde_json::json!({
                "instances": [{ "prompt": "p" }],
                "parameters": {
                    "sampleCount": 1,
                    "aspectRatio": "16:9",
                    "outputOptions": { "mimeType": "image/jpeg" }
                }
            })
        );
    }

    #[test]
    fn prompts_embed_input() {
        assert!(description_prompt("Demo Talk").contains("titled \"Demo Talk\""));
        assert_eq!(
            image_prompt("neon skyline"),
            "A vibrant, high-quality, cinematic event banner for: neon skyline."
        );
    }

    #[test]
    fn long_bodies_are_truncated() {
        let body = truncate_body("x".repeat(MAX_LOGGED_BODY_CHARS + 10));
        assert_eq!(body.chars().count(), MAX_LOGGED_BODY_CHARS + 1);
    }
}
