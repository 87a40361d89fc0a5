//! Help handler.

use crate::dispatch::{Context, Handler};
use crate::error::HandlerResult;
use async_trait::async_trait;
use std::collections::HashMap;

/// Shows help for one command, or lists all commands.
pub struct HelpHandler;

#[async_trait]
impl Handler for HelpHandler {
    async fn handle(
        &self,
        ctx: &mut Context<'_>,
        positional: &str,
        _flags: &HashMap<String, String>,
    ) -> HandlerResult {
        let topic = positional.trim();

        if !topic.is_empty() {
            // Resolve aliases so `help t` finds translate. An unknown
            // topic gets a plain reply, not an error.
            let Some(command) = ctx.registry.resolve(topic) else {
                return ctx.reply(format!("No command {topic}")).await;
            };
            let line = ctx
                .registry
                .describe(&command.name)
                .unwrap_or_else(|| command.name.clone());
            return ctx
                .reply(format!(
                    "{}{}\n\n{}",
                    ctx.trigger.prefix, line, command.description
                ))
                .await;
        }

        let mut text = format!(
            "Commands are prefixed with `{prefix}` but they can also be run by \
             mentioning the bot first and then writing the command. E.g. \
             `{prefix}translate Hola mundo` or `{mention} translate Hola mundo`\n",
            prefix = ctx.trigger.prefix,
            mention = ctx.trigger.mention,
        );

        for command in ctx.registry.iter() {
            let line = ctx
                .registry
                .describe(&command.name)
                .unwrap_or_else(|| command.name.clone());
            text.push_str(&format!("\n{} - {}", line, command.description));
        }

        ctx.reply(text).await
    }
}
