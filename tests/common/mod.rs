//! Integration test common infrastructure.
//!
//! Builds a full dispatcher over in-memory service fakes and drives it
//! with synthetic message events, capturing outbound messages.

// Not every test binary uses every helper.
#![allow(dead_code)]

use async_trait::async_trait;
use quip_cmd::Trigger;
use quipd::dispatch::{Dispatcher, MessageEvent, Outbound};
use quipd::error::HandlerError;
use quipd::handlers::build_registry;
use quipd::services::{
    Abstract, Definition, Dictionary, RelatedTopic, ServiceClients, Summary, Translate,
};
use std::sync::Arc;
use tokio::sync::mpsc;

/// The bot's own user id in tests.
pub const SELF_ID: u64 = 42;

/// Default author id for test messages.
pub const AUTHOR_ID: u64 = 7;

/// Translate fake: echoes `<to>|<origin>|<text>` so tests can assert on
/// flag plumbing.
pub struct EchoTranslate;

#[async_trait]
impl Translate for EchoTranslate {
    async fn translate(&self, text: &str, to: &str, origin: &str) -> Result<String, HandlerError> {
        Ok(format!("{to}|{origin}|{text}"))
    }
}

/// Translate fake that always fails with an upstream error.
pub struct FailingTranslate;

#[async_trait]
impl Translate for FailingTranslate {
    async fn translate(
        &self,
        _text: &str,
        _to: &str,
        _origin: &str,
    ) -> Result<String, HandlerError> {
        Err(HandlerError::Decode("upstream exploded".to_string()))
    }
}

/// Dictionary fake: knows one word.
pub struct OneWordDictionary;

#[async_trait]
impl Dictionary for OneWordDictionary {
    async fn define(&self, word: &str, lang: &str) -> Result<Vec<Definition>, HandlerError> {
        if word == "hello" && lang == "en" {
            Ok(vec![
                Definition {
                    part_of_speech: "interjection".to_string(),
                    definition: "a greeting".to_string(),
                    info: "(informal)".to_string(),
                },
                Definition {
                    part_of_speech: "noun".to_string(),
                    definition: "an utterance of hello".to_string(),
                    info: String::new(),
                },
            ])
        } else {
            Ok(Vec::new())
        }
    }
}

/// Summary fake: one term with an abstract, one with related topics only.
pub struct CannedSummary;

#[async_trait]
impl Summary for CannedSummary {
    async fn summarize(&self, term: &str) -> Result<Option<Abstract>, HandlerError> {
        match term {
            "rust" => Ok(Some(Abstract {
                source: "Wikipedia".to_string(),
                text: "A systems programming language.\n\nhttps://example.org/Rust".to_string(),
                related: Vec::new(),
            })),
            "ambiguous" => Ok(Some(Abstract {
                source: "Wikipedia".to_string(),
                text: String::new(),
                related: vec![RelatedTopic {
                    item: "Rust language".to_string(),
                    link: "https://example.org/Rust_language".to_string(),
                    text: "A systems programming language.".to_string(),
                }],
            })),
            _ => Ok(None),
        }
    }
}

/// The fake service set used by most tests.
pub fn fake_services() -> ServiceClients {
    ServiceClients {
        translate: Arc::new(EchoTranslate),
        dictionary: Arc::new(OneWordDictionary),
        summary: Arc::new(CannedSummary),
    }
}

/// A dispatcher plus a capture channel for its output.
pub struct TestBot {
    pub dispatcher: Dispatcher,
    tx: mpsc::Sender<Outbound>,
    rx: mpsc::Receiver<Outbound>,
}

impl TestBot {
    /// Build a bot with the standard registry and fake services.
    pub fn new() -> Self {
        Self::with_services(fake_services())
    }

    /// Build a bot with a custom service set.
    pub fn with_services(services: ServiceClients) -> Self {
        let trigger = Trigger::new("!", format!("<@{SELF_ID}>"));
        let dispatcher = Dispatcher::new(SELF_ID, trigger, build_registry(), services);
        let (tx, rx) = mpsc::channel(64);
        Self { dispatcher, tx, rx }
    }

    /// Dispatch a plain text message from the default author and collect
    /// all output it produced.
    pub async fn say(&mut self, content: &str) -> Vec<Outbound> {
        let event = MessageEvent::text(AUTHOR_ID, "alice", content);
        self.send_event(event).await
    }

    /// Dispatch a message from a specific author.
    #[allow(dead_code)]
    pub async fn say_from(&mut self, author_id: u64, content: &str) -> Vec<Outbound> {
        let event = MessageEvent::text(author_id, "alice", content);
        self.send_event(event).await
    }

    /// Dispatch an arbitrary event and collect all output it produced.
    pub async fn send_event(&mut self, event: MessageEvent) -> Vec<Outbound> {
        self.dispatcher.dispatch(&event, &self.tx).await;

        let mut out = Vec::new();
        while let Ok(msg) = self.rx.try_recv() {
            out.push(msg);
        }
        out
    }
}

impl Default for TestBot {
    fn default() -> Self {
        Self::new()
    }
}
