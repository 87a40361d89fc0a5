//! Ping handler.

use crate::dispatch::{Context, Handler};
use crate::error::HandlerResult;
use async_trait::async_trait;
use chrono::Utc;
use std::collections::HashMap;

/// Replies with the observed message latency.
pub struct PingHandler;

#[async_trait]
impl Handler for PingHandler {
    async fn handle(
        &self,
        ctx: &mut Context<'_>,
        _positional: &str,
        _flags: &HashMap<String, String>,
    ) -> HandlerResult {
        let latency = Utc::now() - ctx.event.timestamp;
        let ms = latency.num_microseconds().unwrap_or(0) as f64 / 1000.0;
        ctx.reply(format!("pong {ms:.1}ms")).await
    }
}
