//! Summary lookup handler.

use crate::dispatch::{Context, Handler};
use crate::error::{HandlerError, HandlerResult};
use async_trait::async_trait;
use std::collections::HashMap;

/// Summarizes a term through the instant-answer service, or lists related
/// topics when no abstract exists.
pub struct SummarizeHandler;

#[async_trait]
impl Handler for SummarizeHandler {
    async fn handle(
        &self,
        ctx: &mut Context<'_>,
        positional: &str,
        _flags: &HashMap<String, String>,
    ) -> HandlerResult {
        let term = positional.trim();
        if term.is_empty() {
            return Err(HandlerError::Validation(
                "Nothing to summarize".to_string(),
            ));
        }

        let Some(answer) = ctx.services.summary.summarize(term).await? else {
            return Err(HandlerError::Validation(
                "Could not get summary".to_string(),
            ));
        };

        if !answer.text.is_empty() {
            return ctx
                .reply(format!("Summary from {}\n{}", answer.source, answer.text))
                .await;
        }

        let mut text = "Related topics".to_string();
        for topic in &answer.related {
            text.push_str(&format!("\n{}: {}\n{}", topic.item, topic.text, topic.link));
        }
        ctx.reply(text).await
    }
}
