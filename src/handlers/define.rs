//! Definition lookup handler.

use crate::dispatch::{Context, Handler};
use crate::error::{HandlerError, HandlerResult};
use async_trait::async_trait;
use std::collections::HashMap;

/// Looks up a word or phrase in the dictionary service.
pub struct DefineHandler;

#[async_trait]
impl Handler for DefineHandler {
    async fn handle(
        &self,
        ctx: &mut Context<'_>,
        positional: &str,
        flags: &HashMap<String, String>,
    ) -> HandlerResult {
        let word = positional.trim();
        if word.is_empty() {
            return Err(HandlerError::Validation("Nothing to define".to_string()));
        }

        let lang = flags.get("lang").map(String::as_str).unwrap_or("en");
        let definitions = ctx.services.dictionary.define(word, lang).await?;

        if definitions.is_empty() {
            return Err(HandlerError::Validation(
                "Could not get definition".to_string(),
            ));
        }

        let mut text = word.to_string();
        for (i, def) in definitions.iter().enumerate() {
            let mut heading = format!("{}. {}", i + 1, def.part_of_speech);
            if !def.info.is_empty() {
                heading.push(' ');
                heading.push_str(&def.info);
            }
            text.push_str(&format!("\n{heading}: {}", def.definition));
        }

        ctx.reply(text).await
    }
}
