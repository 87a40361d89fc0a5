//! Translation service client.

use crate::error::HandlerError;
use async_trait::async_trait;

/// Translation service boundary.
#[async_trait]
pub trait Translate: Send + Sync {
    /// Translate `text` into language `to`, guessing the origin when
    /// `origin` is `"auto"`.
    async fn translate(&self, text: &str, to: &str, origin: &str)
        -> Result<String, HandlerError>;
}

/// Reqwest-backed translation client.
///
/// Speaks the `translate_a/single` wire shape: a GET whose response is a
/// nested JSON array where element `[0][n][0]` carries the n-th translated
/// segment.
pub struct TranslateClient {
    http: reqwest::Client,
    url: String,
}

impl TranslateClient {
    /// Create a client against the given endpoint.
    pub fn new(http: reqwest::Client, url: String) -> Self {
        Self { http, url }
    }
}

#[async_trait]
impl Translate for TranslateClient {
    async fn translate(
        &self,
        text: &str,
        to: &str,
        origin: &str,
    ) -> Result<String, HandlerError> {
        let resp = self
            .http
            .get(&self.url)
            .query(&[
                ("client", "gtx"),
                ("dt", "t"),
                ("sl", origin),
                ("tl", to),
                ("q", text),
            ])
            .send()
            .await?;

        if resp.status() == reqwest::StatusCode::BAD_REQUEST {
            // The endpoint answers 400 for language codes it doesn't know.
            return Err(HandlerError::Validation(format!("Unknown language {to}")));
        }
        let body: serde_json::Value = resp.error_for_status()?.json().await?;

        let segments = body
            .get(0)
            .and_then(|v| v.as_array())
            .ok_or_else(|| HandlerError::Decode("missing segment array".to_string()))?;

        let mut out = String::new();
        for segment in segments {
            if let Some(piece) = segment.get(0).and_then(|v| v.as_str()) {
                out.push_str(piece);
            }
        }

        if out.is_empty() {
            return Err(HandlerError::Validation(
                "No translation result".to_string(),
            ));
        }
        Ok(out)
    }
}
