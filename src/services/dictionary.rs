//! Dictionary service client.

use crate::error::HandlerError;
use async_trait::async_trait;
use serde::Deserialize;

/// One definition entry.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Definition {
    /// Part of speech ("noun", "verb", ...). May be empty.
    pub part_of_speech: String,
    /// The definition text.
    pub definition: String,
    /// Parenthetical usage info preceding the definition, if any.
    pub info: String,
}

/// Dictionary service boundary.
#[async_trait]
pub trait Dictionary: Send + Sync {
    /// Look up a word. An empty vector means the word is unknown.
    async fn define(&self, word: &str, lang: &str) -> Result<Vec<Definition>, HandlerError>;
}

#[derive(Deserialize)]
struct ApiEntry {
    #[serde(default)]
    meanings: Vec<ApiMeaning>,
}

#[derive(Deserialize)]
struct ApiMeaning {
    #[serde(rename = "partOfSpeech", default)]
    part_of_speech: String,
    #[serde(default)]
    definitions: Vec<ApiDefinition>,
}

#[derive(Deserialize)]
struct ApiDefinition {
    #[serde(default)]
    definition: String,
}

/// Reqwest-backed dictionary client.
///
/// The endpoint template substitutes `{lang}` and `{word}`; the response
/// is an array of entries with `meanings[].definitions[]`.
pub struct DictionaryClient {
    http: reqwest::Client,
    url_template: String,
}

impl DictionaryClient {
    /// Create a client against the given endpoint template.
    pub fn new(http: reqwest::Client, url_template: String) -> Self {
        Self { http, url_template }
    }
}

/// Split a leading `(...)` group off a definition, mirroring how usage
/// info is presented upstream.
fn split_info(text: &str) -> (String, String) {
    if let Some(rest) = text.strip_prefix('(') {
        if let Some(end) = rest.find(") ") {
            let info = format!("({})", &rest[..end]);
            let body = rest[end + 2..].to_string();
            return (info, body);
        }
    }
    (String::new(), text.to_string())
}

#[async_trait]
impl Dictionary for DictionaryClient {
    async fn define(&self, word: &str, lang: &str) -> Result<Vec<Definition>, HandlerError> {
        let url = self
            .url_template
            .replace("{lang}", lang)
            .replace("{word}", word);

        let resp = self.http.get(&url).send().await?;
        if resp.status() == reqwest::StatusCode::NOT_FOUND {
            return Ok(Vec::new());
        }
        let entries: Vec<ApiEntry> = resp.error_for_status()?.json().await?;

        let mut definitions = Vec::new();
        for entry in entries {
            for meaning in entry.meanings {
                for def in meaning.definitions {
                    let text = def.definition.trim();
                    if text.is_empty() {
                        continue;
                    }
                    let (info, body) = split_info(text);
                    definitions.push(Definition {
                        part_of_speech: meaning.part_of_speech.clone(),
                        definition: body,
                        info,
                    });
                }
            }
        }

        Ok(definitions)
    }
}
