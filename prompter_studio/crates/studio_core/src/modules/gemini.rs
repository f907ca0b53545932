use crate::modules::protocol::{LyricsOutput, LyricsRequest, MusicPromptOutput, MusicPromptRequest};
use crate::modules::system_prompt::{lyrics_prompt, music_prompt_prompt};
use reqwest::StatusCode;
use serde::Deserialize;
use serde_json::{json, Value};
use std::future::Future;
use std::process::Command;
use std::time::Duration;
use thiserror::Error;
use tracing::{debug, info, warn};

pub const DEFAULT_MODEL: &str = "gemini-2.0-flash";
pub const DEFAULT_VERTEX_LOCATION: &str = "us-central1";

#[derive(Debug, Error)]
pub enum GeminiError {
    #[error("http error: {0}")]
    Http(#[from] reqwest::Error),
    #[error("gemini request failed: status={status} body={body}")]
    BadStatus { status: StatusCode, body: String },
    #[error("gemini auth error: {0}")]
    Auth(String),
    #[error("gemini response parse failed: {0}")]
    Parse(String),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GeminiBackend {
    AiStudioApiKey,
    GoogleAiOauth,
    VertexAi,
}

/// Maps a backend name to a fixed backend; `auto` (or anything unrecognized) yields `None`.
pub fn parse_backend(name: &str) -> Option<GeminiBackend> {
    match name.trim().to_ascii_lowercase().as_str() {
        "vertex" | "vertexai" | "vertex_ai" => Some(GeminiBackend::VertexAi),
        "oauth" | "google-oauth" | "google_oauth" | "googleai-oauth" => {
            Some(GeminiBackend::GoogleAiOauth)
        }
        "ai" | "aistudio" | "ai-studio" | "api_key" | "apikey" => {
            Some(GeminiBackend::AiStudioApiKey)
        }
        "auto" | "" => None,
        other => {
            warn!("unknown gemini backend {other:?}, falling back to auto");
            None
        }
    }
}

/// Everything needed to reach the hosted model.
#[derive(Debug, Clone, Default)]
pub struct GeminiConfig {
    pub model: String,
    /// `None` picks a backend from the credentials present.
    pub backend: Option<GeminiBackend>,
    pub api_key: Option<String>,
    pub access_token: Option<String>,
    pub vertex_project: Option<String>,
    pub vertex_location: Option<String>,
    pub timeout_secs: Option<u64>,
}

fn env_nonempty(key: &str) -> Option<String> {
    std::env::var(key)
        .ok()
        .map(|v| v.trim().to_string())
        .filter(|v| !v.is_empty())
}

impl GeminiConfig {
    pub fn from_env() -> Self {
        Self {
            model: env_nonempty("GEMINI_MODEL").unwrap_or_else(|| DEFAULT_MODEL.to_string()),
            backend: env_nonempty("GEMINI_BACKEND").and_then(|b| parse_backend(&b)),
            api_key: env_nonempty("GEMINI_API_KEY"),
            access_token: env_nonempty("GEMINI_ACCESS_TOKEN")
                .or_else(|| env_nonempty("GOOGLE_OAUTH_ACCESS_TOKEN")),
            vertex_project: env_nonempty("VERTEX_PROJECT")
                .or_else(|| env_nonempty("GOOGLE_CLOUD_PROJECT"))
                .or_else(|| env_nonempty("GCLOUD_PROJECT")),
            vertex_location: env_nonempty("VERTEX_LOCATION")
                .or_else(|| env_nonempty("GOOGLE_CLOUD_LOCATION")),
            timeout_secs: env_nonempty("GEMINI_HTTP_TIMEOUT_SECS").and_then(|s| s.parse().ok()),
        }
    }

    pub fn resolved_backend(&self) -> GeminiBackend {
        if let Some(b) = self.backend {
            return b;
        }
        if self.api_key.is_some() {
            GeminiBackend::AiStudioApiKey
        } else if self.vertex_project.is_some() {
            GeminiBackend::VertexAi
        } else {
            GeminiBackend::GoogleAiOauth
        }
    }

    /// Pro models get a longer default; any value is clamped to 15..=300 seconds.
    pub fn http_timeout(&self) -> Duration {
        let default_secs = if self.model.to_ascii_lowercase().contains("pro") {
            120
        } else {
            60
        };
        Duration::from_secs(self.timeout_secs.unwrap_or(default_secs).clamp(15, 300))
    }

    fn location(&self) -> &str {
        self.vertex_location
            .as_deref()
            .unwrap_or(DEFAULT_VERTEX_LOCATION)
    }
}

/// The two prompt flows the presentation layer depends on.
pub trait PromptClient {
    fn generate_lyrics(
        &self,
        req: &LyricsRequest,
    ) -> impl Future<Output = Result<LyricsOutput, GeminiError>> + Send;

    fn generate_music_prompt(
        &self,
        req: &MusicPromptRequest,
    ) -> impl Future<Output = Result<MusicPromptOutput, GeminiError>> + Send;
}

pub struct GeminiClient {
    http: reqwest::Client,
    config: GeminiConfig,
}

impl GeminiClient {
    pub fn new(config: GeminiConfig) -> Result<Self, GeminiError> {
        let http = reqwest::Client::builder()
            .timeout(config.http_timeout())
            .build()?;
        Ok(Self { http, config })
    }

    pub fn config(&self) -> &GeminiConfig {
        &self.config
    }

    async fn generate_content(&self, prompt: &str, schema: Value) -> Result<String, GeminiError> {
        let model = self.config.model.trim();
        let backend = self.config.resolved_backend();
        let payload = json!({
            "contents": [
                { "role": "user", "parts": [ { "text": prompt } ] }
            ],
            "generationConfig": {
                "responseMimeType": "application/json",
                "responseSchema": schema
            }
        });

        let request = match backend {
            GeminiBackend::AiStudioApiKey => {
                let api_key = self
                    .config
                    .api_key
                    .as_deref()
                    .ok_or_else(|| GeminiError::Auth("missing GEMINI_API_KEY".to_string()))?;
                let url = format!(
                    "https://generativelanguage.googleapis.com/v1beta/models/{model}:generateContent"
                );
                self.http.post(url).query(&[("key", api_key)])
            }
            GeminiBackend::GoogleAiOauth => {
                let url = format!(
                    "https://generativelanguage.googleapis.com/v1beta/models/{model}:generateContent"
                );
                self.http.post(url).bearer_auth(self.access_token()?)
            }
            GeminiBackend::VertexAi => {
                let project = self.config.vertex_project.as_deref().ok_or_else(|| {
                    GeminiError::Auth(
                        "missing VERTEX_PROJECT/GOOGLE_CLOUD_PROJECT (required for Vertex AI)"
                            .to_string(),
                    )
                })?;
                let url = format!(
                    "https://{loc}-aiplatform.googleapis.com/v1/projects/{project}/locations/{loc}/publishers/google/models/{model}:generateContent",
                    loc = self.config.location(),
                );
                self.http.post(url).bearer_auth(self.access_token()?)
            }
        };

        info!(?backend, model, "gemini request");
        let resp = request.json(&payload).send().await?;
        let status = resp.status();
        let body = resp.text().await?;
        if !status.is_success() {
            warn!(%status, "gemini request failed");
            return Err(GeminiError::BadStatus { status, body });
        }

        let text = extract_candidate_text(&body).map_err(GeminiError::Parse)?;
        debug!(chars = text.chars().count(), "gemini response");
        Ok(text)
    }

    fn access_token(&self) -> Result<String, GeminiError> {
        match self.config.access_token.as_deref() {
            Some(t) if !t.trim().is_empty() => Ok(t.trim().to_string()),
            _ => gcloud_print_access_token(),
        }
    }
}

impl PromptClient for GeminiClient {
    async fn generate_lyrics(&self, req: &LyricsRequest) -> Result<LyricsOutput, GeminiError> {
        let prompt = lyrics_prompt(req.mode, &req.specifications);
        let schema = json!({
            "type": "OBJECT",
            "properties": {
                "lyrics": { "type": "STRING" }
            },
            "required": ["lyrics"]
        });
        let text = self.generate_content(&prompt, schema).await?;
        parse_lyrics_text(&text).map_err(GeminiError::Parse)
    }

    async fn generate_music_prompt(
        &self,
        req: &MusicPromptRequest,
    ) -> Result<MusicPromptOutput, GeminiError> {
        let prompt = music_prompt_prompt(&req.genres, &req.moods);
        let schema = json!({
            "type": "OBJECT",
            "properties": {
                "musicPrompt": { "type": "STRING" }
            }
        });
        let text = self.generate_content(&prompt, schema).await?;
        parse_music_prompt_text(&text).map_err(GeminiError::Parse)
    }
}

/// Asks the local gcloud CLI for a token, trying application-default credentials
/// before the user login.
fn gcloud_print_access_token() -> Result<String, GeminiError> {
    const ATTEMPTS: [&[&str]; 2] = [
        &["auth", "application-default", "print-access-token"],
        &["auth", "print-access-token"],
    ];

    let mut failures = Vec::with_capacity(ATTEMPTS.len());
    for args in ATTEMPTS {
        match gcloud(args) {
            Ok(token) => return Ok(token),
            Err(reason) => {
                debug!(%reason, "gcloud token attempt failed");
                failures.push(reason);
            }
        }
    }
    Err(GeminiError::Auth(failures.join("; ")))
}

fn gcloud(args: &[&str]) -> Result<String, String> {
    let mut cmd = if cfg!(windows) {
        let mut c = Command::new("cmd");
        c.args(["/C", "gcloud"]);
        c
    } else {
        Command::new("gcloud")
    };
    let output = cmd
        .args(args)
        .output()
        .map_err(|e| format!("could not run gcloud: {e}"))?;

    let invocation = format!("gcloud {}", args.join(" "));
    if !output.status.success() {
        let stderr = String::from_utf8_lossy(&output.stderr);
        return Err(match stderr.trim() {
            "" => format!("{invocation} exited with {}", output.status),
            msg => format!("{invocation}: {msg}"),
        });
    }
    let token = String::from_utf8_lossy(&output.stdout).trim().to_string();
    if token.is_empty() {
        return Err(format!("{invocation} printed no token"));
    }
    Ok(token)
}

#[derive(Deserialize)]
struct GenerateContentResponse {
    #[serde(default)]
    candidates: Vec<ResponseCandidate>,
}

#[derive(Deserialize)]
struct ResponseCandidate {
    content: Option<ResponseContent>,
}

#[derive(Deserialize)]
struct ResponseContent {
    #[serde(default)]
    parts: Vec<ResponsePart>,
}

#[derive(Deserialize)]
struct ResponsePart {
    text: Option<String>,
}

/// Concatenates the text parts of the first candidate.
fn extract_candidate_text(body: &str) -> Result<String, String> {
    let resp: GenerateContentResponse =
        serde_json::from_str(body).map_err(|e| format!("{e}: {body}"))?;
    let parts = resp
        .candidates
        .into_iter()
        .next()
        .and_then(|c| c.content)
        .map(|c| c.parts)
        .unwrap_or_default();

    let texts: Vec<String> = parts.into_iter().filter_map(|p| p.text).collect();
    if texts.is_empty() {
        return Err(format!("response has no candidate text: {body}"));
    }
    Ok(texts.concat())
}

/// Drops a surrounding Markdown code fence, with or without a `json` tag.
fn strip_code_fence(text: &str) -> &str {
    let Some(inner) = text.strip_prefix("```") else {
        return text;
    };
    let inner = inner.strip_suffix("```").unwrap_or(inner);
    let inner = inner.trim_start();
    inner.strip_prefix("json").unwrap_or(inner).trim()
}

/// The outermost `{...}` span of a model reply.
fn json_object(text: &str) -> Option<&str> {
    let body = strip_code_fence(text.trim());
    let open = body.find('{')?;
    let close = body.rfind('}')?;
    (close > open).then(|| &body[open..=close])
}

/// Structured output starts with `{` or a code fence; anything else is plain text.
fn looks_structured(text: &str) -> bool {
    let t = text.trim_start();
    t.starts_with('{') || t.starts_with("```")
}

fn parse_lyrics_text(text: &str) -> Result<LyricsOutput, String> {
    if !looks_structured(text) {
        return Ok(LyricsOutput {
            lyrics: text.trim().to_string(),
            ..LyricsOutput::default()
        });
    }
    let extracted = json_object(text).ok_or_else(|| format!("no JSON object: {text}"))?;
    serde_json::from_str::<LyricsOutput>(extracted).map_err(|e| format!("{e}: {extracted}"))
}

fn parse_music_prompt_text(text: &str) -> Result<MusicPromptOutput, String> {
    if !looks_structured(text) {
        let t = text.trim();
        return Ok(MusicPromptOutput {
            music_prompt: (!t.is_empty()).then(|| t.to_string()),
        });
    }
    let extracted = json_object(text).ok_or_else(|| format!("no JSON object: {text}"))?;
    serde_json::from_str::<MusicPromptOutput>(extracted).map_err(|e| format!("{e}: {extracted}"))
}
