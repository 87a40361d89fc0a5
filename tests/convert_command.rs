//! Integration tests for the convert command surface.

mod common;

use common::TestBot;

#[tokio::test]
async fn test_convert_linear() {
    let mut bot = TestBot::new();
    let out = bot.say("!convert 1 m to cm").await;
    assert_eq!(out.len(), 1);
    assert_eq!(out[0].text, "1 m = 100 cm");
}

#[tokio::test]
async fn test_convert_alias() {
    let mut bot = TestBot::new();
    let out = bot.say("!c 2 km to m").await;
    assert_eq!(out[0].text, "2 km = 2000 m");
}

#[tokio::test]
async fn test_convert_temperature() {
    let mut bot = TestBot::new();
    let out = bot.say("!convert 0 c to f").await;
    assert_eq!(out[0].text, "0 c = 32 f");

    let out = bot.say("!convert 100 c to k").await;
    assert_eq!(out[0].text, "100 c = 373.15 k");
}

#[tokio::test]
async fn test_convert_trims_zero_fraction_only() {
    let mut bot = TestBot::new();
    let out = bot.say("!convert 5.25 m to m").await;
    assert_eq!(out[0].text, "5.25 m = 5.25 m");
}

#[tokio::test]
async fn test_convert_to_keyword_is_case_insensitive() {
    let mut bot = TestBot::new();
    let out = bot.say("!convert 1 km TO m").await;
    assert_eq!(out[0].text, "1 km = 1000 m");
}

#[tokio::test]
async fn test_convert_incompatible_units() {
    let mut bot = TestBot::new();
    let out = bot.say("!convert 1 m to kg").await;
    assert_eq!(out.len(), 1);
    assert_eq!(out[0].text, "Unknown or incompatible units m and kg");
}

#[tokio::test]
async fn test_convert_unknown_unit() {
    let mut bot = TestBot::new();
    let out = bot.say("!convert 1 m to parsec").await;
    assert_eq!(out[0].text, "Unknown or incompatible units m and parsec");
}

#[tokio::test]
async fn test_convert_non_numeric_magnitude() {
    let mut bot = TestBot::new();
    let out = bot.say("!convert x m to cm").await;
    assert_eq!(out[0].text, "Invalid number x");
}

#[tokio::test]
async fn test_convert_wrong_arity() {
    let mut bot = TestBot::new();
    let out = bot.say("!convert 1 m cm").await;
    assert_eq!(out[0].text, "Usage: <number> <unit> to <unit>");

    let out = bot.say("!convert 1 m into cm").await;
    assert_eq!(out[0].text, "Usage: <number> <unit> to <unit>");

    let out = bot.say("!convert").await;
    assert_eq!(out[0].text, "Usage: <number> <unit> to <unit>");
}
