//! Translation handler.

use crate::dispatch::{Context, Handler};
use crate::error::{HandlerError, HandlerResult};
use async_trait::async_trait;
use lazy_static::lazy_static;
use regex::Regex;
use std::collections::HashMap;

lazy_static! {
    /// User-mention tokens; scrubbed so they don't reach the translation
    /// service as gibberish.
    static ref MENTION: Regex = Regex::new(r"<@[!#$%^&*]?[0-9]+>").unwrap();
}

/// Translates the positional text, falling back to the replied-to
/// message.
pub struct TranslateHandler;

#[async_trait]
impl Handler for TranslateHandler {
    async fn handle(
        &self,
        ctx: &mut Context<'_>,
        positional: &str,
        flags: &HashMap<String, String>,
    ) -> HandlerResult {
        let mut text = positional.to_string();
        if text.is_empty() {
            text = ctx.event.referenced_text.clone().unwrap_or_default();
        }

        let text = MENTION.replace_all(&text, "@-");
        let text = text.trim();
        if text.is_empty() {
            return Err(HandlerError::NoContent);
        }

        let to = flags.get("to").map(String::as_str).unwrap_or("en");
        let origin = flags.get("origin").map(String::as_str).unwrap_or("auto");

        let translated = ctx.services.translate.translate(text, to, origin).await?;
        ctx.reply(translated).await
    }
}
