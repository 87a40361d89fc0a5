//! Poll handler.

use crate::dispatch::{Context, Handler};
use crate::error::{HandlerError, HandlerResult};
use async_trait::async_trait;
use std::collections::HashMap;

/// Most options a poll can carry (one reaction letter each).
const MAX_OPTIONS: usize = 20;

/// Builds a lettered poll from a comma-separated title and option list.
pub struct PollHandler;

#[async_trait]
impl Handler for PollHandler {
    async fn handle(
        &self,
        ctx: &mut Context<'_>,
        positional: &str,
        _flags: &HashMap<String, String>,
    ) -> HandlerResult {
        let mut parts = positional.split(',');
        let title = parts.next().unwrap_or("").trim();

        if title.is_empty() {
            return Err(HandlerError::Validation("No poll arguments".to_string()));
        }

        let options: Vec<&str> = parts.map(str::trim).filter(|s| !s.is_empty()).collect();
        if options.is_empty() {
            return Err(HandlerError::Validation(
                "Not enough poll arguments".to_string(),
            ));
        }
        if options.len() > MAX_OPTIONS {
            return Err(HandlerError::Validation(
                "Too many poll arguments".to_string(),
            ));
        }

        let mut text = title.to_string();
        for (i, option) in options.iter().enumerate() {
            let letter = (b'a' + i as u8) as char;
            text.push_str(&format!("\n:regional_indicator_{letter}:: {option}"));
        }
        text.push_str(&format!("\n\nPoll by {}", ctx.event.author_name));

        // Polls address the room, not the asker.
        ctx.send(text).await
    }
}
