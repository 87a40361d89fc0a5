//! Integration tests for the dispatch path: triggers, silence rules,
//! flag plumbing, and the handler error boundary.

mod common;

use common::{FailingTranslate, TestBot, SELF_ID};
use quipd::dispatch::MessageEvent;
use quipd::services::ServiceClients;
use std::sync::Arc;

#[tokio::test]
async fn test_ping_round_trip() {
    let mut bot = TestBot::new();
    let out = bot.say("!ping").await;
    assert_eq!(out.len(), 1);
    assert!(out[0].text.starts_with("pong "));
    assert!(out[0].text.ends_with("ms"));
    assert!(out[0].reply);
}

#[tokio::test]
async fn test_ordinary_chatter_is_ignored() {
    let mut bot = TestBot::new();
    assert!(bot.say("hello there").await.is_empty());
    assert!(bot.say("").await.is_empty());
    assert!(bot.say("!!").await.is_empty());
}

#[tokio::test]
async fn test_unknown_command_is_ignored() {
    let mut bot = TestBot::new();
    assert!(bot.say("!frobnicate").await.is_empty());
}

#[tokio::test]
async fn test_own_messages_are_never_parsed() {
    let mut bot = TestBot::new();
    assert!(bot.say_from(SELF_ID, "!ping").await.is_empty());
}

#[tokio::test]
async fn test_bare_mention_fires_help() {
    let mut bot = TestBot::new();
    let out = bot.say(&format!("<@{SELF_ID}>")).await;
    assert_eq!(out.len(), 1);
    assert!(out[0].text.starts_with("Commands are prefixed"));
}

#[tokio::test]
async fn test_mention_trigger_runs_command() {
    let mut bot = TestBot::new();
    let out = bot.say(&format!("<@{SELF_ID}> ping")).await;
    assert_eq!(out.len(), 1);
    assert!(out[0].text.starts_with("pong "));
}

#[tokio::test]
async fn test_flags_reach_the_handler() {
    let mut bot = TestBot::new();
    let out = bot.say("!translate --to=es --origin=en hola mundo").await;
    assert_eq!(out.len(), 1);
    assert_eq!(out[0].text, "es|en|hola mundo");
}

#[tokio::test]
async fn test_flag_scan_stops_at_first_positional_token() {
    // --origin is declared, but by the time it appears the flag scan has
    // already ended, so it stays in the positional text.
    let mut bot = TestBot::new();
    let out = bot.say("!translate --to=es hola --origin=en").await;
    assert_eq!(out[0].text, "es|auto|hola --origin=en");
}

#[tokio::test]
async fn test_duplicate_flag_last_wins() {
    let mut bot = TestBot::new();
    let out = bot.say("!translate --to=fr --to=es hola").await;
    assert_eq!(out[0].text, "es|auto|hola");
}

#[tokio::test]
async fn test_embed_text_folds_into_arguments() {
    let mut bot = TestBot::new();
    let mut event = MessageEvent::text(common::AUTHOR_ID, "alice", "!translate");
    event.embeds_text = vec!["embedded words".to_string()];
    let out = bot.send_event(event).await;
    assert_eq!(out[0].text, "en|auto|embedded words");
}

#[tokio::test]
async fn test_handler_failure_is_reported_once_and_contained() {
    let services = ServiceClients {
        translate: Arc::new(FailingTranslate),
        ..common::fake_services()
    };
    let mut bot = TestBot::with_services(services);

    let out = bot.say("!translate hola").await;
    assert_eq!(out.len(), 1);
    assert_eq!(out[0].text, "Command failed");

    // The dispatcher survives and keeps serving
    let out = bot.say("!ping").await;
    assert_eq!(out.len(), 1);
    assert!(out[0].text.starts_with("pong "));
}
