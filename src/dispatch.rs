//! Message dispatch.
//!
//! The [`Dispatcher`] owns the command registry and is the single boundary
//! between incoming chat events and handler execution: it rejects the
//! bot's own messages, runs the invocation parser, bumps usage counters,
//! invokes the resolved handler, and converts handler failures into
//! user-visible output exactly once.

use crate::error::HandlerResult;
use crate::services::ServiceClients;
use async_trait::async_trait;
use chrono::{DateTime, Utc};
use quip_cmd::{parse, Registry, Trigger};
use std::collections::HashMap;
use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::Arc;
use tokio::sync::mpsc;
use tracing::{error, info};

/// One incoming chat message, as supplied by the hosting gateway.
#[derive(Debug, Clone)]
pub struct MessageEvent {
    /// Author's user id.
    pub author_id: u64,
    /// Author's display name (used in logs and poll footers).
    pub author_name: String,
    /// Raw message text.
    pub content: String,
    /// Rendered text of any structured content attached to the message,
    /// in original order. Folded onto the argument tail by the parser.
    pub embeds_text: Vec<String>,
    /// Text of the message this one replies to, if any.
    pub referenced_text: Option<String>,
    /// When the message was created.
    pub timestamp: DateTime<Utc>,
}

/// One outgoing message.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Outbound {
    /// Message text.
    pub text: String,
    /// Whether to render as a reply to the triggering message.
    pub reply: bool,
}

/// Handler context passed to each command handler.
pub struct Context<'a> {
    /// The triggering event.
    pub event: &'a MessageEvent,
    /// Sender for outgoing messages.
    pub sender: &'a mpsc::Sender<Outbound>,
    /// Upstream service clients.
    pub services: &'a ServiceClients,
    /// Command registry (for help rendering).
    pub registry: &'a Registry<Box<dyn Handler>>,
    /// Trigger configuration (for help rendering).
    pub trigger: &'a Trigger,
}

impl Context<'_> {
    /// Send a reply to the triggering message.
    pub async fn reply(&self, text: impl Into<String>) -> HandlerResult {
        self.sender
            .send(Outbound {
                text: text.into(),
                reply: true,
            })
            .await?;
        Ok(())
    }

    /// Send a plain (non-reply) message.
    pub async fn send(&self, text: impl Into<String>) -> HandlerResult {
        self.sender
            .send(Outbound {
                text: text.into(),
                reply: false,
            })
            .await?;
        Ok(())
    }
}

/// Trait implemented by all command handlers.
///
/// Handlers receive the positional text and the recognized flag map; they
/// own all further I/O through the context and either produce user-visible
/// output or return an error for the dispatcher to report.
#[async_trait]
pub trait Handler: Send + Sync {
    /// Handle one invocation.
    async fn handle(
        &self,
        ctx: &mut Context<'_>,
        positional: &str,
        flags: &HashMap<String, String>,
    ) -> HandlerResult;
}

/// Dispatches incoming events to command handlers.
pub struct Dispatcher {
    self_id: u64,
    trigger: Trigger,
    registry: Registry<Box<dyn Handler>>,
    services: ServiceClients,
    /// Command usage counters, keyed by canonical name.
    command_counts: HashMap<String, Arc<AtomicU64>>,
}

impl Dispatcher {
    /// Create a dispatcher over a fully built registry.
    pub fn new(
        self_id: u64,
        trigger: Trigger,
        registry: Registry<Box<dyn Handler>>,
        services: ServiceClients,
    ) -> Self {
        let mut command_counts = HashMap::new();
        for cmd in registry.iter() {
            command_counts.insert(cmd.name.clone(), Arc::new(AtomicU64::new(0)));
        }

        Self {
            self_id,
            trigger,
            registry,
            services,
            command_counts,
        }
    }

    /// Get command usage statistics, sorted by usage count (descending).
    pub fn command_stats(&self) -> Vec<(String, u64)> {
        let mut stats: Vec<_> = self
            .command_counts
            .iter()
            .map(|(cmd, count)| (cmd.clone(), count.load(Ordering::Relaxed)))
            .filter(|(_, count)| *count > 0)
            .collect();

        stats.sort_by(|a, b| b.1.cmp(&a.1));
        stats
    }

    /// Dispatch one event.
    ///
    /// Non-invocations (ordinary chatter, unknown commands, the bot's own
    /// output) are silently ignored. Handler failures are reported to the
    /// user here and logged; they never propagate.
    pub async fn dispatch(&self, event: &MessageEvent, sender: &mpsc::Sender<Outbound>) {
        // Never treat our own prior output as a new invocation.
        if event.author_id == self.self_id {
            return;
        }

        let Some(invocation) = parse(&self.trigger, &self.registry, &event.content, &event.embeds_text)
        else {
            return;
        };

        let name = invocation.command.name.as_str();
        if let Some(counter) = self.command_counts.get(name) {
            counter.fetch_add(1, Ordering::Relaxed);
        }

        info!(command = %name, author = %event.author_name, "Dispatching command");

        let mut ctx = Context {
            event,
            sender,
            services: &self.services,
            registry: &self.registry,
            trigger: &self.trigger,
        };

        if let Err(e) = invocation
            .command
            .handler
            .handle(&mut ctx, &invocation.positional, &invocation.flags)
            .await
        {
            match e.user_message() {
                Some(text) => {
                    let _ = sender.send(Outbound { text, reply: true }).await;
                }
                None => {
                    let _ = sender
                        .send(Outbound {
                            text: "Command failed".to_string(),
                            reply: true,
                        })
                        .await;
                    error!(
                        command = %name,
                        code = e.error_code(),
                        error = %e,
                        "Command handler failed"
                    );
                }
            }
        }
    }

    /// The command registry.
    pub fn registry(&self) -> &Registry<Box<dyn Handler>> {
        &self.registry
    }

    /// The trigger configuration.
    pub fn trigger(&self) -> &Trigger {
        &self.trigger
    }
}

impl MessageEvent {
    /// Convenience constructor for a plain text event happening now.
    pub fn text(author_id: u64, author_name: impl Into<String>, content: impl Into<String>) -> Self {
        Self {
            author_id,
            author_name: author_name.into(),
            content: content.into(),
            embeds_text: Vec::new(),
            referenced_text: None,
            timestamp: Utc::now(),
        }
    }
}
