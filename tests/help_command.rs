//! Integration tests for help rendering.

mod common;

use common::TestBot;

#[tokio::test]
async fn test_help_for_one_command() {
    let mut bot = TestBot::new();
    let out = bot.say("!help translate").await;
    assert_eq!(out.len(), 1);
    assert!(out[0]
        .text
        .starts_with("!translate | t [--to=<lang>] [--origin=<lang>] [text]"));
    assert!(out[0].text.contains("Translate text"));
}

#[tokio::test]
async fn test_help_resolves_aliases() {
    let mut bot = TestBot::new();
    let direct = bot.say("!help translate").await;
    let via_alias = bot.say("!help t").await;
    assert_eq!(direct[0].text, via_alias[0].text);
}

#[tokio::test]
async fn test_help_unknown_topic_is_a_plain_reply() {
    let mut bot = TestBot::new();
    let out = bot.say("!help frobnicate").await;
    assert_eq!(out.len(), 1);
    assert_eq!(out[0].text, "No command frobnicate");
}

#[tokio::test]
async fn test_help_listing_covers_every_command() {
    let mut bot = TestBot::new();
    let out = bot.say("!help").await;
    assert_eq!(out.len(), 1);
    let text = &out[0].text;

    for name in ["ping", "help", "convert", "translate", "define", "summarize", "poll"] {
        assert!(text.contains(name), "help listing missing {name}");
    }
    assert!(text.contains("convert | c <number> <unit> to <unit>"));
}
