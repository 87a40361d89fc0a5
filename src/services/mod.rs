//! Upstream service clients.
//!
//! Thin glue to the translation, dictionary, and summary services: these
//! clients shape strings in and strings out, nothing more. Each service is
//! a trait so tests can substitute in-memory fakes for the reqwest-backed
//! implementations.

pub mod dictionary;
pub mod summary;
pub mod translate;

pub use dictionary::{Definition, Dictionary, DictionaryClient};
pub use summary::{Abstract, RelatedTopic, Summary, SummaryClient};
pub use translate::{Translate, TranslateClient};

use crate::config::ServicesConfig;
use std::sync::Arc;
use std::time::Duration;

/// Bundle of shared service clients handed to handlers through the
/// dispatch context.
#[derive(Clone)]
pub struct ServiceClients {
    /// Translation service.
    pub translate: Arc<dyn Translate>,
    /// Dictionary service.
    pub dictionary: Arc<dyn Dictionary>,
    /// Summary service.
    pub summary: Arc<dyn Summary>,
}

impl ServiceClients {
    /// Build the reqwest-backed client set from configuration.
    pub fn from_config(config: &ServicesConfig) -> Result<Self, reqwest::Error> {
        let http = reqwest::Client::builder()
            .timeout(Duration::from_secs(30))
            .user_agent(concat!("quipd/", env!("CARGO_PKG_VERSION")))
            .build()?;

        Ok(Self {
            translate: Arc::new(TranslateClient::new(
                http.clone(),
                config.translate_url.clone(),
            )),
            dictionary: Arc::new(DictionaryClient::new(
                http.clone(),
                config.dictionary_url.clone(),
            )),
            summary: Arc::new(SummaryClient::new(http, config.summary_url.clone())),
        })
    }
}
